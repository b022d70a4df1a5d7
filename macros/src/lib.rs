//! Procedural macros for the tola-proto protocol system
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `protocol![]` | - | Build a `ProtocolDefinition` from a fixed name list |
//! | `#[derive(Seed)]` | struct | Turn plain data into an extension source |
//!
//! ## Example
//!
//! ```ignore
//! // 1. A protocol checked for duplicates and reserved names at compile time
//! let media = protocol![getMediaType, guessMediaType];
//!
//! // 2. Plain data that can be copied onto an object
//! #[derive(Clone, Seed)]
//! struct Unit2Data {
//!     prop2: i32,
//! }
//!
//! let seed = Unit2Data { prop2: 200 }.seed(&realm);
//! add_extensions(&realm, target, &[unit2.prototype(), seed]);
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Build a `ProtocolDefinition` from identifiers or string literals.
///
/// Duplicates, `constructor` and `__`-prefixed names are compile errors.
///
/// # Usage
/// ```ignore
/// let def = protocol![fn1, fn2, "fn-3"];
/// ```
#[proc_macro]
pub fn protocol(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::protocol::ProtocolInput);
    user::protocol::expand_protocol(input).into()
}

/// Implement `tola_proto::Seed` for a struct with named fields.
///
/// Field options: `#[seed(rename = "name")]`, `#[seed(skip)]`.
#[proc_macro_derive(Seed, attributes(seed))]
pub fn derive_seed(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::seed::expand_derive_seed(input).into()
}
