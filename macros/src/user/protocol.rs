//! Compile-time protocol definitions
//!
//! `protocol![getMediaType, "guessMediaType"]` expands to a
//! `ProtocolDefinition` built from a static name list.

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Ident, LitStr,
};

use crate::common::parse_comma_separated;

// =============================================================================
// protocol! Input Parser
// =============================================================================

/// One capability name: a bare identifier or a string literal.
pub struct CapabilityName {
    pub value: String,
    pub span: Span,
}

impl Parse for CapabilityName {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            Ok(CapabilityName {
                value: lit.value(),
                span: lit.span(),
            })
        } else {
            let ident: Ident = input.parse()?;
            Ok(CapabilityName {
                value: ident.to_string(),
                span: ident.span(),
            })
        }
    }
}

pub struct ProtocolInput {
    pub names: Vec<CapabilityName>,
}

impl Parse for ProtocolInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(ProtocolInput {
            names: parse_comma_separated(input)?,
        })
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Reject names a runtime-built definition could never contain.
pub fn check_names(names: &[CapabilityName]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for name in names {
        if name.value.is_empty() {
            return Err(syn::Error::new(name.span, "capability name cannot be empty"));
        }
        if name.value == "constructor" || name.value.starts_with("__") {
            return Err(syn::Error::new(
                name.span,
                format!(
                    "`{}` is reserved\n\
                     \n\
                     `constructor` and `__`-prefixed names never appear in a protocol definition.",
                    name.value
                ),
            ));
        }
        if !seen.insert(name.value.as_str()) {
            return Err(syn::Error::new(
                name.span,
                format!(
                    "duplicate capability `{}`\n\
                     \n\
                     Each capability should appear only once in a protocol.",
                    name.value
                ),
            ));
        }
    }
    Ok(())
}

pub fn expand_protocol(input: ProtocolInput) -> TokenStream2 {
    if let Err(err) = check_names(&input.names) {
        return err.to_compile_error();
    }
    let names = input.names.iter().map(|n| &n.value);
    quote! {
        ::tola_proto::ProtocolDefinition::from_static(&[#(#names),*])
    }
}
