//! Implementation of the `#[derive(Overlay)]` macro.
//!
//! This module contains the procedural macro implementation that generates
//! `slicekit::Overlay` for structs, one statement per field.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Field, Fields, GenericArgument, Generics,
    Ident, Index, Member, PathArguments, Type, WherePredicate,
};

/// How a single field takes part in the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// Replaced unless the source value is the default.
    Field,
    /// A `Vec` replaced wholesale.
    Replace,
    /// A `Vec` merged position by position.
    Each,
    /// Never touched.
    Skip,
}

/// Main implementation of the Overlay derive macro.
pub fn derive_overlay_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_overlay(name, generics, &data_struct.fields)
            .unwrap_or_else(syn::Error::into_compile_error),
        Data::Enum(_) => {
            syn::Error::new_spanned(&input.ident, "Overlay can only be derived for structs, not enums.")
                .to_compile_error()
        }
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Overlay cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates the `Overlay` impl for a struct's fields.
fn generate_struct_overlay(
    name: &Ident,
    generics: &Generics,
    fields: &Fields,
) -> syn::Result<TokenStream2> {
    let fields: Vec<(Member, &Field)> = match fields {
        Fields::Named(named_fields) => named_fields
            .named
            .iter()
            .filter_map(|field| field.ident.clone().map(|ident| (Member::Named(ident), field)))
            .collect(),
        Fields::Unnamed(unnamed_fields) => unnamed_fields
            .unnamed
            .iter()
            .enumerate()
            .map(|(index, field)| (Member::Unnamed(Index::from(index)), field))
            .collect(),
        Fields::Unit => {
            return Err(syn::Error::new_spanned(
                name,
                "Overlay cannot be derived for unit structs (structs with no fields).",
            ));
        }
    };

    let mut statements: Vec<TokenStream2> = Vec::with_capacity(fields.len());
    let mut bounds: Vec<WherePredicate> = Vec::with_capacity(fields.len());

    for (member, field) in fields {
        let field_type = &field.ty;
        match field_strategy(field)? {
            Strategy::Skip => {}
            Strategy::Field => {
                statements.push(quote! {
                    ::slicekit::overlay::overlay_field(&mut self.#member, &source.#member);
                });
                bounds.push(syn::parse_quote! {
                    #field_type: ::core::clone::Clone
                        + ::core::default::Default
                        + ::core::cmp::PartialEq
                });
            }
            Strategy::Replace => {
                statements.push(quote! {
                    ::core::clone::Clone::clone_from(&mut self.#member, &source.#member);
                });
                bounds.push(syn::parse_quote! { #field_type: ::core::clone::Clone });
            }
            Strategy::Each => {
                let element_type = vec_element_type(field_type).ok_or_else(|| {
                    syn::Error::new_spanned(field_type, "#[overlay(each)] requires a `Vec<T>` field.")
                })?;
                statements.push(quote! {
                    ::slicekit::overlay::overlay_each(&mut self.#member, &source.#member);
                });
                bounds.push(syn::parse_quote! {
                    #element_type: ::slicekit::overlay::Overlay + ::core::clone::Clone
                });
            }
        }
    }

    let mut generics = generics.clone();
    generics.make_where_clause().predicates.extend(bounds);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::slicekit::overlay::Overlay for #name #type_generics #where_clause {
            fn overlay(&mut self, source: &Self) {
                #(#statements)*
            }
        }
    })
}

/// Reads the `#[overlay(...)]` attribute of a field.
fn field_strategy(field: &Field) -> syn::Result<Strategy> {
    let mut strategy = None;
    for attribute in overlay_attributes(&field.attrs) {
        attribute.parse_nested_meta(|meta| {
            let parsed = if meta.path.is_ident("each") {
                Strategy::Each
            } else if meta.path.is_ident("skip") {
                Strategy::Skip
            } else {
                return Err(meta.error("expected `each` or `skip`"));
            };
            if strategy.replace(parsed).is_some() {
                return Err(meta.error("only one overlay strategy may be given per field"));
            }
            Ok(())
        })?;
    }

    Ok(strategy.unwrap_or_else(|| {
        if vec_element_type(&field.ty).is_some() {
            Strategy::Replace
        } else {
            Strategy::Field
        }
    }))
}

fn overlay_attributes(attributes: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attributes
        .iter()
        .filter(|attribute| attribute.path().is_ident("overlay"))
}

/// Returns `T` when `ty` is spelled `Vec<T>` (with any path prefix).
fn vec_element_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Vec" {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    match arguments.args.first()? {
        GenericArgument::Type(element) => Some(element),
        _ => None,
    }
}
