//! Total structural equality.
//!
//! Floats compare by canonical bits, so every NaN equals every other NaN and
//! `-0.0` equals `0.0`. That keeps equality reflexive for any field value and
//! in step with [`ShapeHash`](crate::ShapeHash), which lets shapes be `Eq`.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::blob::Blob;
use crate::hash::{canonical_f32_bits, canonical_f64_bits};
use crate::Timestamp;

/// Field-wise equality used by the derived `PartialEq` of every shape.
pub trait ShapeEq {
    fn shape_eq(&self, other: &Self) -> bool;
}

macro_rules! eq_by_value {
    ($($ty:ty),*) => {
        $(
            impl ShapeEq for $ty {
                fn shape_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

eq_by_value!(String, str, bool, i8, i16, i32, i64, u8, u16, u32, u64, Timestamp, Blob);

impl ShapeEq for f64 {
    fn shape_eq(&self, other: &Self) -> bool {
        canonical_f64_bits(*self) == canonical_f64_bits(*other)
    }
}

impl ShapeEq for f32 {
    fn shape_eq(&self, other: &Self) -> bool {
        canonical_f32_bits(*self) == canonical_f32_bits(*other)
    }
}

impl<T: ShapeEq> ShapeEq for Option<T> {
    fn shape_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.shape_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ShapeEq> ShapeEq for Vec<T> {
    fn shape_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.shape_eq(b))
    }
}

impl<K: Ord, V: ShapeEq> ShapeEq for BTreeMap<K, V> {
    fn shape_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| v.shape_eq(o)))
    }
}

impl<K: Eq + Hash, V: ShapeEq, S: BuildHasher> ShapeEq for HashMap<K, V, S> {
    fn shape_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| v.shape_eq(o)))
    }
}
