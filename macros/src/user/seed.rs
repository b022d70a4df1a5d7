//! `#[derive(Seed)]`
//!
//! Turns a struct with named fields into a data-only extension source.
//!
//! ```ignore
//! #[derive(Clone, Seed)]
//! struct Unit2Data {
//!     #[seed(rename = "prop2")]
//!     value: i32,
//!     #[seed(skip)]
//!     scratch: Vec<u8>,
//! }
//! ```
//!
//! Every kept field type must be `Clone + Into<tola_proto::Value>`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr};

/// Per-field options from `#[seed(...)]`.
#[derive(Default)]
struct SeedField {
    rename: Option<String>,
    skip: bool,
}

fn parse_field_attrs(field: &syn::Field) -> syn::Result<SeedField> {
    let mut options = SeedField::default();
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("seed")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                options.rename = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("expected `rename = \"...\"` or `skip`"))
            }
        })?;
    }
    Ok(options)
}

pub fn expand_derive_seed(input: DeriveInput) -> TokenStream2 {
    match try_expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unit => {
                return Ok(quote! {
                    impl #impl_generics ::tola_proto::Seed for #ident #ty_generics #where_clause {
                        fn seed_members(&self) -> ::tola_proto::__private::Vec<(::tola_proto::__private::String, ::tola_proto::Value)> {
                            ::tola_proto::__private::Vec::new()
                        }
                    }
                });
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "#[derive(Seed)] needs named fields to name the members",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "#[derive(Seed)] only supports structs",
            ));
        }
    };

    let mut pushes = Vec::new();
    for field in fields {
        let options = parse_field_attrs(field)?;
        if options.skip {
            continue;
        }
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let name = options
            .rename
            .unwrap_or_else(|| field_ident.to_string().trim_start_matches("r#").to_string());
        pushes.push(quote! {
            members.push((
                ::tola_proto::__private::String::from(#name),
                ::tola_proto::Value::from(::core::clone::Clone::clone(&self.#field_ident)),
            ));
        });
    }

    Ok(quote! {
        impl #impl_generics ::tola_proto::Seed for #ident #ty_generics #where_clause {
            fn seed_members(&self) -> ::tola_proto::__private::Vec<(::tola_proto::__private::String, ::tola_proto::Value)> {
                #[allow(unused_mut)]
                let mut members = ::tola_proto::__private::Vec::new();
                #(#pushes)*
                members
            }
        }
    })
}
