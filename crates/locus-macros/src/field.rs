//! Classification of shape field types.

use syn::{GenericArgument, PathArguments, Type};

/// How a field's inner type (the `T` of `Option<T>`) is stored and exposed.
pub enum FieldType<'a> {
    /// `String`: read back as `Option<&str>`.
    Text,
    /// Primitive `Copy` scalars: read back by value.
    Copy(&'a Type),
    /// Nested shapes, timestamps, blobs: read back by reference.
    Owned(&'a Type),
    /// `Vec<E>`: read back as `Option<&[E]>`.
    List(&'a Type),
    /// `BTreeMap<K, V>` or `HashMap<K, V>`.
    Map(&'a Type, &'a Type),
}

impl<'a> FieldType<'a> {
    pub fn classify(ty: &'a Type) -> Self {
        if let Some(args) = generic_args(ty, "Vec") {
            if let [elem] = args.as_slice() {
                return Self::List(elem);
            }
        }
        for map in ["BTreeMap", "HashMap"] {
            if let Some(args) = generic_args(ty, map) {
                if let [key, value] = args.as_slice() {
                    return Self::Map(key, value);
                }
            }
        }
        match last_ident(ty).as_deref() {
            Some("String") => Self::Text,
            Some(
                "bool" | "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "u64" | "f32"
                | "f64",
            ) => Self::Copy(ty),
            _ => Self::Owned(ty),
        }
    }

    /// Path of the `FieldKind` variant recorded in the schema.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::List(_) => "List",
            Self::Map(..) => "Map",
            _ => "Scalar",
        }
    }
}

/// The `T` of an `Option<T>` field.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    match generic_args(ty, "Option")?.as_slice() {
        [inner] => Some(inner),
        _ => None,
    }
}

fn generic_args<'a>(ty: &'a Type, name: &str) -> Option<Vec<&'a Type>> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != name {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    Some(
        args.args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
    )
}

fn last_ident(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) => path.path.segments.last().map(|s| s.ident.to_string()),
        _ => None,
    }
}

/// Compact rendering of a type for the schema, e.g. `Vec<Vec<f64>>`.
pub fn type_label(ty: &Type) -> String {
    quote::quote!(#ty).to_string().replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(src: &str) -> Type {
        syn::parse_str(src).unwrap()
    }

    #[test]
    fn classify_containers() {
        assert!(matches!(FieldType::classify(&ty("Vec<Leg>")), FieldType::List(_)));
        assert!(matches!(FieldType::classify(&ty("Vec<Vec<f64>>")), FieldType::List(_)));
        assert!(matches!(
            FieldType::classify(&ty("BTreeMap<String, String>")),
            FieldType::Map(..)
        ));
        assert!(matches!(
            FieldType::classify(&ty("std::collections::HashMap<String, String>")),
            FieldType::Map(..)
        ));
    }

    #[test]
    fn classify_scalars() {
        assert!(matches!(FieldType::classify(&ty("String")), FieldType::Text));
        assert!(matches!(FieldType::classify(&ty("f64")), FieldType::Copy(_)));
        assert!(matches!(FieldType::classify(&ty("bool")), FieldType::Copy(_)));
        assert!(matches!(FieldType::classify(&ty("Timestamp")), FieldType::Owned(_)));
        assert!(matches!(FieldType::classify(&ty("Summary")), FieldType::Owned(_)));
    }

    #[test]
    fn option_inner_unwraps() {
        let outer = ty("Option<Vec<f64>>");
        assert_eq!(type_label(option_inner(&outer).unwrap()), "Vec<f64>");
        assert!(option_inner(&ty("Vec<f64>")).is_none());
    }
}
