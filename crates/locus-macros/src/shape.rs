//! `Shape` derive implementation.
//!
//! Generated code refers to the runtime through `::locus_shape`, so the
//! derive is usable from any crate depending on `locus-shape`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Ident};

use crate::attrs::{doc_attrs, parse_shape_kind, pascal_case, FieldOptions};
use crate::field::{option_inner, type_label, FieldType};

/// Main entry point for the Shape derive macro.
pub fn derive_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_shape_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// One parsed member of the struct.
struct Member<'a> {
    ident: &'a Ident,
    /// Identifier without a raw `r#` prefix, used to build method names.
    base: String,
    wire: String,
    ty: FieldType<'a>,
    inner: &'a syn::Type,
    opts: FieldOptions,
    field: &'a Field,
}

fn derive_shape_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_str = name.to_string();
    let kind = parse_shape_kind(input)?.tokens();

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Shape derive does not support generic structs",
        ));
    }

    let members = collect_members(input)?;

    let accessors = members.iter().map(|m| generate_accessors(&name_str, m));
    let field_schemas = members.iter().map(generate_field_schema);
    let field_views = generate_field_views(&members);

    let render_fields = members.iter().map(|m| {
        let ident = m.ident;
        let wire = &m.wire;
        quote! { out.field(#wire, &self.#ident)?; }
    });
    let hash_fields = members.iter().map(|m| {
        let ident = m.ident;
        quote! { hasher.field(&self.#ident); }
    });
    let eq_fields = members.iter().map(|m| {
        let ident = m.ident;
        quote! { && ::locus_shape::ShapeEq::shape_eq(&self.#ident, &other.#ident) }
    });

    Ok(quote! {
        impl #name {
            /// Creates an instance with every field absent.
            pub fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }

            #(#accessors)*
        }

        impl ::locus_shape::Shape for #name {
            const NAME: &'static str = #name_str;
            const KIND: ::locus_shape::ShapeKind = #kind;

            fn schema() -> &'static ::locus_shape::ShapeSchema {
                static SCHEMA: ::locus_shape::ShapeSchema = ::locus_shape::ShapeSchema {
                    name: #name_str,
                    kind: #kind,
                    fields: &[#(#field_schemas),*],
                };
                &SCHEMA
            }
        }

        impl ::locus_shape::Inspect for #name {
            fn shape_name(&self) -> &'static str {
                #name_str
            }

            fn field_views(&self) -> ::std::vec::Vec<::locus_shape::FieldEntry<'_>> {
                #field_views
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #[allow(unused_mut)]
                let mut out = ::locus_shape::ShapeFormatter::new(f)?;
                #(#render_fields)*
                out.finish()
            }
        }

        impl ::locus_shape::Render for #name {
            fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, f)
            }
        }

        impl ::locus_shape::ShapeHash for #name {
            fn shape_hash(&self) -> i32 {
                #[allow(unused_mut)]
                let mut hasher = ::locus_shape::FieldHasher::new();
                #(#hash_fields)*
                hasher.finish()
            }
        }

        impl ::locus_shape::ShapeEq for #name {
            #[allow(unused_variables)]
            fn shape_eq(&self, other: &Self) -> bool {
                true #(#eq_fields)*
            }
        }

        impl ::core::cmp::PartialEq for #name {
            fn eq(&self, other: &Self) -> bool {
                ::locus_shape::ShapeEq::shape_eq(self, other)
            }
        }

        impl ::core::cmp::Eq for #name {}

        impl ::locus_shape::FieldValue for #name {
            fn view(&self) -> ::locus_shape::FieldView<'_> {
                ::locus_shape::FieldView::Nested(self)
            }
        }

        impl ::core::hash::Hash for #name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_i32(::locus_shape::ShapeHash::shape_hash(self));
            }
        }
    })
}

fn collect_members(input: &DeriveInput) -> syn::Result<Vec<Member<'_>>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => return Ok(Vec::new()),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Shape derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Shape derive only supports structs",
            ))
        }
    };

    let mut members = Vec::with_capacity(fields.len());
    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;
        let inner = option_inner(&field.ty).ok_or_else(|| {
            syn::Error::new_spanned(&field.ty, "shape fields must be `Option<T>`")
        })?;
        let opts = FieldOptions::parse(&field.attrs)?;
        let base = ident.to_string().trim_start_matches("r#").to_string();
        let wire = opts.wire.clone().unwrap_or_else(|| pascal_case(&base));
        members.push(Member {
            ident,
            base,
            wire,
            ty: FieldType::classify(inner),
            inner,
            opts,
            field,
        });
    }
    Ok(members)
}

fn generate_field_schema(m: &Member<'_>) -> TokenStream2 {
    let name = &m.base;
    let wire = &m.wire;
    let required = m.opts.required;
    let kind = format_ident!("{}", m.ty.kind_name());
    let type_name = type_label(m.inner);
    let constraints = m.opts.constraint_tokens();
    quote! {
        ::locus_shape::FieldSchema {
            name: #name,
            wire_name: #wire,
            type_name: #type_name,
            kind: ::locus_shape::FieldKind::#kind,
            required: #required,
            constraints: #constraints,
        }
    }
}

fn generate_field_views(members: &[Member<'_>]) -> TokenStream2 {
    if members.is_empty() {
        return quote! { ::std::vec::Vec::new() };
    }
    let entries = members.iter().enumerate().map(|(index, m)| {
        let ident = m.ident;
        quote! {
            (&fields[#index], self.#ident.as_ref().map(::locus_shape::FieldValue::view))
        }
    });
    quote! {
        let fields = <Self as ::locus_shape::Shape>::schema().fields;
        ::std::vec![#(#entries),*]
    }
}

fn generate_accessors(shape_name: &str, m: &Member<'_>) -> TokenStream2 {
    let ident = m.ident;
    let wire = &m.wire;
    let inner = m.inner;
    let docs = doc_attrs(&m.field.attrs);
    let setter = format_ident!("set_{}", m.base);
    let with = format_ident!("with_{}", m.base);
    let set_doc = format!("Replaces `{wire}`; `None` marks it absent.");
    let with_doc = format!("Replaces `{wire}` and returns `self` for chaining.");

    let getter = match &m.ty {
        FieldType::Text => quote! {
            #(#docs)*
            pub fn #ident(&self) -> ::core::option::Option<&str> {
                self.#ident.as_deref()
            }
        },
        FieldType::Copy(ty) => quote! {
            #(#docs)*
            pub fn #ident(&self) -> ::core::option::Option<#ty> {
                self.#ident
            }
        },
        FieldType::Owned(_) | FieldType::Map(..) => quote! {
            #(#docs)*
            pub fn #ident(&self) -> ::core::option::Option<&#inner> {
                self.#ident.as_ref()
            }
        },
        FieldType::List(elem) => quote! {
            #(#docs)*
            pub fn #ident(&self) -> ::core::option::Option<&[#elem]> {
                self.#ident.as_deref()
            }
        },
    };

    let set = quote! {
        #[doc = #set_doc]
        pub fn #setter(&mut self, value: ::core::option::Option<#inner>) -> &mut Self {
            self.#ident = value;
            self
        }
    };

    let extra = match &m.ty {
        FieldType::Text | FieldType::Copy(_) | FieldType::Owned(_) => quote! {
            #[doc = #with_doc]
            pub fn #with(mut self, value: impl ::core::convert::Into<#inner>) -> Self {
                self.#ident = ::core::option::Option::Some(value.into());
                self
            }
        },
        FieldType::List(elem) => {
            let extend = format_ident!("extend_{}", m.base);
            let extend_doc = format!(
                "Appends to `{wire}`, starting a new sequence when it is absent."
            );
            quote! {
                #[doc = #with_doc]
                pub fn #with(
                    mut self,
                    items: impl ::core::iter::IntoIterator<Item = #elem>,
                ) -> Self {
                    self.#ident = ::core::option::Option::Some(items.into_iter().collect());
                    self
                }

                #[doc = #extend_doc]
                pub fn #extend(
                    mut self,
                    items: impl ::core::iter::IntoIterator<Item = #elem>,
                ) -> Self {
                    self.#ident
                        .get_or_insert_with(::std::vec::Vec::new)
                        .extend(items);
                    self
                }
            }
        }
        FieldType::Map(key, value) => {
            let add = format_ident!("add_{}_entry", m.base);
            let clear = format_ident!("clear_{}_entries", m.base);
            let add_doc = format!(
                "Inserts one entry into `{wire}`; fails if the key is already present."
            );
            let clear_doc = format!("Resets `{wire}` to absent.");
            quote! {
                #[doc = #with_doc]
                pub fn #with(
                    mut self,
                    entries: impl ::core::iter::IntoIterator<Item = (#key, #value)>,
                ) -> Self {
                    self.#ident = ::core::option::Option::Some(entries.into_iter().collect());
                    self
                }

                #[doc = #add_doc]
                pub fn #add(
                    &mut self,
                    key: impl ::core::convert::Into<#key>,
                    value: impl ::core::convert::Into<#value>,
                ) -> ::locus_shape::ShapeResult<&mut Self> {
                    let key = key.into();
                    let entries = self.#ident.get_or_insert_with(::core::default::Default::default);
                    if entries.contains_key(&key) {
                        ::locus_shape::__private::tracing::trace!(
                            shape = #shape_name,
                            field = #wire,
                            "duplicate map key rejected"
                        );
                        return ::core::result::Result::Err(::locus_shape::ShapeError::DuplicateKey {
                            field: #wire,
                            key: ::std::string::ToString::to_string(&key),
                        });
                    }
                    entries.insert(key, value.into());
                    ::core::result::Result::Ok(self)
                }

                #[doc = #clear_doc]
                pub fn #clear(&mut self) -> &mut Self {
                    self.#ident = ::core::option::Option::None;
                    self
                }
            }
        }
    };

    quote! {
        #getter
        #set
        #extra
    }
}
