//!
//! Macros for the main crate.
//!

mod type_traversal;

use proc_macro::TokenStream as Tokens;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_macro_input;
use type_traversal::{field_member, is_named_type, self_field, variant_path};

///
/// ## Spanned
///
/// Implements `crate::common::Spanned` for a struct or an enum.
///
/// * Structs either carry a field of type `Span` (returned as-is),
///   or wrap exactly one other [Spanned] field (delegated to).
/// * Enums must only have single-field tuple variants,
///   each of which is delegated to.
///
/// ### Example
///
/// ```ignore
/// #[derive(Debug, Spanned)]
/// pub struct WhiteSpace {
///     span: Span,
/// }
///
/// #[derive(Debug, Spanned)]
/// pub enum Comment {
///     Single(SingleLineComment),
///     Multi(MultiLineComment),
/// }
/// ```
///
#[proc_macro_derive(Spanned)]
pub fn spanned(target: Tokens) -> Tokens {
    let target: syn::Item = parse_macro_input!(target);

    let expanded = match &target {
        syn::Item::Struct(st) => spanned_struct(st),
        syn::Item::Enum(en) => spanned_enum(en),
        _ => Err(syn::Error::new_spanned(
            &target,
            "`Spanned` can only be derived for structs and enums.",
        )),
    };

    expanded.unwrap_or_else(syn::Error::into_compile_error).into()
}

fn spanned_impl(ident: &syn::Ident, generics: &syn::Generics, body: TokenStream) -> TokenStream {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics crate::common::Spanned for #ident #ty_generics #where_clause {
            fn span(&self) -> crate::common::Span {
                #body
            }
        }
    }
}

fn spanned_struct(st: &syn::ItemStruct) -> syn::Result<TokenStream> {
    let fields: Vec<_> = st.fields.iter().enumerate().collect();

    // A direct `Span` field wins over delegation.
    if let Some((i, field)) = fields.iter().find(|(_, f)| is_named_type(&f.ty, "Span")) {
        let access = self_field(field_member(field, *i));
        return Ok(spanned_impl(&st.ident, &st.generics, quote! { #access }));
    }

    match &fields[..] {
        [(i, field)] => {
            let access = self_field(field_member(field, *i));
            Ok(spanned_impl(
                &st.ident,
                &st.generics,
                quote! { crate::common::Spanned::span(&#access) },
            ))
        }
        _ => Err(syn::Error::new_spanned(
            &st.ident,
            "Expected a `Span` field, or exactly one field implementing `Spanned`.",
        )),
    }
}

fn spanned_enum(en: &syn::ItemEnum) -> syn::Result<TokenStream> {
    let arms = en
        .variants
        .iter()
        .map(|variant| match &variant.fields {
            syn::Fields::Unnamed(syn::FieldsUnnamed { unnamed, .. }) if unnamed.len() == 1 => {
                let path = variant_path(&variant.ident);
                Ok(quote! {
                    #path(inner) => crate::common::Spanned::span(inner)
                })
            }
            _ => Err(syn::Error::new_spanned(
                variant,
                "Each variant must wrap exactly one field implementing `Spanned`.",
            )),
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(spanned_impl(
        &en.ident,
        &en.generics,
        quote! {
            match self {
                #(#arms),*
            }
        },
    ))
}
