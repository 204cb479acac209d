//! Parsing of `#[shape(...)]` attributes.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, DeriveInput, Expr, LitInt, LitStr};

/// Which side of an operation a shape sits on.
#[derive(Clone, Copy)]
pub enum ShapeKind {
    Request,
    Result,
    Structure,
}

impl ShapeKind {
    pub fn tokens(self) -> TokenStream2 {
        match self {
            Self::Request => quote! { ::locus_shape::ShapeKind::Request },
            Self::Result => quote! { ::locus_shape::ShapeKind::Result },
            Self::Structure => quote! { ::locus_shape::ShapeKind::Structure },
        }
    }
}

/// Parse the struct-level `#[shape(request | result | structure)]` attribute.
pub fn parse_shape_kind(input: &DeriveInput) -> syn::Result<ShapeKind> {
    let mut kind = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("shape") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let parsed = if meta.path.is_ident("request") {
                ShapeKind::Request
            } else if meta.path.is_ident("result") {
                ShapeKind::Result
            } else if meta.path.is_ident("structure") {
                ShapeKind::Structure
            } else {
                return Err(meta.error("expected `request`, `result` or `structure`"));
            };
            if kind.is_some() {
                return Err(meta.error("shape kind given more than once"));
            }
            kind = Some(parsed);
            Ok(())
        })?;
    }
    Ok(kind.unwrap_or(ShapeKind::Structure))
}

/// Options collected from the `#[shape(...)]` attributes of one field.
#[derive(Default)]
pub struct FieldOptions {
    pub required: bool,
    pub wire: Option<String>,
    pub length: Option<(Option<u64>, Option<u64>)>,
    pub range: Option<(Option<Expr>, Option<Expr>)>,
    pub pattern: Option<LitStr>,
}

impl FieldOptions {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut opts = Self::default();
        for attr in attrs {
            if !attr.path().is_ident("shape") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("required") {
                    opts.required = true;
                    return Ok(());
                }
                if meta.path.is_ident("wire") {
                    let lit: LitStr = meta.value()?.parse()?;
                    opts.wire = Some(lit.value());
                    return Ok(());
                }
                if meta.path.is_ident("pattern") {
                    opts.pattern = Some(meta.value()?.parse()?);
                    return Ok(());
                }
                if meta.path.is_ident("length") {
                    let (mut min, mut max) = (None, None);
                    meta.parse_nested_meta(|bound| {
                        let lit: LitInt = bound.value()?.parse()?;
                        let value = lit.base10_parse::<u64>()?;
                        if bound.path.is_ident("min") {
                            min = Some(value);
                        } else if bound.path.is_ident("max") {
                            max = Some(value);
                        } else {
                            return Err(bound.error("expected `min` or `max`"));
                        }
                        Ok(())
                    })?;
                    opts.length = Some((min, max));
                    return Ok(());
                }
                if meta.path.is_ident("range") {
                    let (mut min, mut max) = (None, None);
                    meta.parse_nested_meta(|bound| {
                        let expr: Expr = bound.value()?.parse()?;
                        if bound.path.is_ident("min") {
                            min = Some(expr);
                        } else if bound.path.is_ident("max") {
                            max = Some(expr);
                        } else {
                            return Err(bound.error("expected `min` or `max`"));
                        }
                        Ok(())
                    })?;
                    opts.range = Some((min, max));
                    return Ok(());
                }
                Err(meta.error("unknown shape attribute"))
            })?;
        }
        Ok(opts)
    }

    /// Tokens for the `&[Constraint]` slice of this field's schema entry.
    pub fn constraint_tokens(&self) -> TokenStream2 {
        let mut items = Vec::new();
        if let Some((min, max)) = &self.length {
            let min = option_tokens(min.map(|v| quote! { #v }));
            let max = option_tokens(max.map(|v| quote! { #v }));
            items.push(quote! {
                ::locus_shape::Constraint::Length { min: #min, max: #max }
            });
        }
        if let Some((min, max)) = &self.range {
            let min = option_tokens(min.as_ref().map(|e| quote! { (#e) as f64 }));
            let max = option_tokens(max.as_ref().map(|e| quote! { (#e) as f64 }));
            items.push(quote! {
                ::locus_shape::Constraint::Range { min: #min, max: #max }
            });
        }
        if let Some(pattern) = &self.pattern {
            items.push(quote! { ::locus_shape::Constraint::Pattern(#pattern) });
        }
        quote! { &[#(#items),*] }
    }
}

fn option_tokens(value: Option<TokenStream2>) -> TokenStream2 {
    match value {
        Some(v) => quote! { ::core::option::Option::Some(#v) },
        None => quote! { ::core::option::Option::None },
    }
}

/// The `#[doc]` attributes of a field, carried over to its getter.
pub fn doc_attrs(attrs: &[Attribute]) -> Vec<&Attribute> {
    attrs.iter().filter(|a| a.path().is_ident("doc")).collect()
}

/// `legs` -> `Legs`, `route_b_box` -> `RouteBBox`.
pub fn pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
