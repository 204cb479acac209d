//! Runtime view of field values.
//!
//! Validation walks shapes without knowing their concrete types: each present
//! field is exposed as a [`FieldView`], and nested shapes as `&dyn Inspect`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::blob::Blob;
use crate::schema::FieldSchema;
use crate::Timestamp;

/// A field's schema entry paired with its value, `None` when absent.
pub type FieldEntry<'a> = (&'static FieldSchema, Option<FieldView<'a>>);

/// Object-safe access to a shape's fields.
pub trait Inspect {
    fn shape_name(&self) -> &'static str;

    /// Every field in declaration order.
    fn field_views(&self) -> Vec<FieldEntry<'_>>;
}

impl fmt::Debug for dyn Inspect + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inspect({})", self.shape_name())
    }
}

/// Borrowed view of a present field value.
#[derive(Debug)]
pub enum FieldView<'a> {
    Text(&'a str),
    Number(f64),
    Flag(bool),
    Instant(&'a Timestamp),
    Bytes(&'a [u8]),
    List(Vec<FieldView<'a>>),
    Map(Vec<(&'a str, FieldView<'a>)>),
    Nested(&'a dyn Inspect),
}

impl FieldView<'_> {
    /// Size the `Length` constraint applies to, if any.
    pub fn length(&self) -> Option<u64> {
        match self {
            Self::Text(s) => Some(s.chars().count() as u64),
            Self::Bytes(b) => Some(b.len() as u64),
            Self::List(items) => Some(items.len() as u64),
            Self::Map(entries) => Some(entries.len() as u64),
            _ => None,
        }
    }
}

/// Conversion of a stored field value into a [`FieldView`].
pub trait FieldValue {
    fn view(&self) -> FieldView<'_>;
}

impl FieldValue for String {
    fn view(&self) -> FieldView<'_> {
        FieldView::Text(self)
    }
}

impl FieldValue for bool {
    fn view(&self) -> FieldView<'_> {
        FieldView::Flag(*self)
    }
}

macro_rules! number_value {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                fn view(&self) -> FieldView<'_> {
                    FieldView::Number(*self as f64)
                }
            }
        )*
    };
}

number_value!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl FieldValue for Timestamp {
    fn view(&self) -> FieldView<'_> {
        FieldView::Instant(self)
    }
}

impl FieldValue for Blob {
    fn view(&self) -> FieldView<'_> {
        FieldView::Bytes(self.as_bytes())
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn view(&self) -> FieldView<'_> {
        FieldView::List(self.iter().map(FieldValue::view).collect())
    }
}

impl<V: FieldValue> FieldValue for BTreeMap<String, V> {
    fn view(&self) -> FieldView<'_> {
        FieldView::Map(self.iter().map(|(k, v)| (k.as_str(), v.view())).collect())
    }
}

impl<V: FieldValue> FieldValue for HashMap<String, V> {
    fn view(&self) -> FieldView<'_> {
        let mut entries: Vec<_> = self.iter().map(|(k, v)| (k.as_str(), v.view())).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        FieldView::Map(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_each_view() {
        assert_eq!("héllo".to_string().view().length(), Some(5));
        assert_eq!(vec![1.0f64, 2.0].view().length(), Some(2));
        assert_eq!(Blob::from(vec![0u8; 3]).view().length(), Some(3));
        let map: BTreeMap<String, String> = [("a".to_string(), "b".to_string())].into();
        assert_eq!(map.view().length(), Some(1));
        assert_eq!(12i32.view().length(), None);
    }

    #[test]
    fn numbers_widen_to_f64() {
        match (-44i32).view() {
            FieldView::Number(n) => assert_eq!(n, -44.0),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn hash_map_entries_are_sorted() {
        let mut map = HashMap::new();
        map.insert("z".to_string(), "1".to_string());
        map.insert("a".to_string(), "2".to_string());
        let FieldView::Map(entries) = map.view() else {
            panic!("expected map view");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["a", "z"]);
    }
}
