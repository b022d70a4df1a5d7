//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `protocol!` | function macro | Build a protocol definition |
//! | `#[derive(Seed)]` | on struct | Data-only extension source |

pub mod protocol;
pub mod seed;
