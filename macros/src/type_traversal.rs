//!
//! Utilities that allow use to traverse `struct`s and `enum`s.
//!

use proc_macro2::Span;
use syn::punctuated::Punctuated;

///
/// Checks to see if an identifier is in a path.
///
pub fn in_path<'a>(path: &'a syn::Path, ident: &str) -> Option<&'a syn::PathSegment> {
    path.segments
        .iter()
        .find(|syn::PathSegment { ident: id, .. }| id == ident)
}

///
/// Checks if a type has the ident inside its name.
///
/// Only the path itself is searched, so `Option<Span>` is *not* a `Span`.
///
pub fn is_named_type(ty: &syn::Type, ident: &str) -> bool {
    match ty {
        syn::Type::Path(syn::TypePath { path, .. }) => in_path(path, ident).is_some(),
        _ => false,
    }
}

///
/// How to refer to a field: by name, or by tuple index.
///
pub fn field_member(field: &syn::Field, i: usize) -> syn::Member {
    match &field.ident {
        Some(ident) => syn::Member::Named(ident.clone()),
        None => syn::Member::Unnamed(syn::Index {
            index: i as u32,
            span: Span::call_site(),
        }),
    }
}

///
/// Equivalent to `self.#member`.
///
pub fn self_field(member: syn::Member) -> syn::Expr {
    let base = syn::Expr::Path(syn::ExprPath {
        attrs: Default::default(),
        qself: Default::default(),
        path: syn::Ident::new("self", Span::call_site()).into(),
    });

    syn::Expr::Field(syn::ExprField {
        attrs: Default::default(),
        base: Box::new(base),
        dot_token: Default::default(),
        member,
    })
}

///
/// Equivalent to `Self::#var`.
///
pub fn variant_path(var: &syn::Ident) -> syn::Path {
    syn::Path {
        leading_colon: Default::default(),
        segments: Punctuated::from_iter(
            [syn::Ident::new("Self", Span::call_site()), var.clone()]
                .into_iter()
                .map(|ident| syn::PathSegment {
                    ident,
                    arguments: syn::PathArguments::None,
                }),
        ),
    }
}
