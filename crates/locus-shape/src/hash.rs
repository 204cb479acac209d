//! Stable structural hash.
//!
//! The hash is a 32-bit value computed with wrapping arithmetic and a fixed
//! multiplier of 31, so it is identical across processes and platforms (the
//! std `Hash` machinery is randomly seeded). Shapes hash as
//! `h = 1; h = 31 * h + hash(field)` in declaration order, absent fields
//! contributing 0. Equal values always hash equally.

use std::collections::{BTreeMap, HashMap};

use crate::Timestamp;

const PRIME: i32 = 31;

/// Stable hash consistent with [`ShapeEq`](crate::ShapeEq).
pub trait ShapeHash {
    fn shape_hash(&self) -> i32;
}

impl ShapeHash for String {
    fn shape_hash(&self) -> i32 {
        self.as_str().shape_hash()
    }
}

// Polynomial over UTF-16 code units.
impl ShapeHash for str {
    fn shape_hash(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(PRIME).wrapping_add(unit as i32))
    }
}

impl ShapeHash for bool {
    fn shape_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

macro_rules! hash_small_int {
    ($($ty:ty),*) => {
        $(
            impl ShapeHash for $ty {
                fn shape_hash(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

hash_small_int!(i8, i16, i32, u8, u16);

fn fold_u64(bits: u64) -> i32 {
    (bits ^ (bits >> 32)) as i32
}

impl ShapeHash for i64 {
    fn shape_hash(&self) -> i32 {
        fold_u64(*self as u64)
    }
}

impl ShapeHash for u32 {
    fn shape_hash(&self) -> i32 {
        fold_u64(u64::from(*self))
    }
}

impl ShapeHash for u64 {
    fn shape_hash(&self) -> i32 {
        fold_u64(*self)
    }
}

/// Bits of `value` with every NaN collapsed to one pattern and `-0.0`
/// folded into `0.0`. Equality and hashing of floats both go through here.
pub(crate) fn canonical_f64_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

pub(crate) fn canonical_f32_bits(value: f32) -> u32 {
    if value.is_nan() {
        f32::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl ShapeHash for f64 {
    fn shape_hash(&self) -> i32 {
        fold_u64(canonical_f64_bits(*self))
    }
}

impl ShapeHash for f32 {
    fn shape_hash(&self) -> i32 {
        canonical_f32_bits(*self) as i32
    }
}

impl ShapeHash for Timestamp {
    fn shape_hash(&self) -> i32 {
        self.timestamp_millis()
            .shape_hash()
            .wrapping_mul(PRIME)
            .wrapping_add(self.timestamp_subsec_nanos() as i32)
    }
}

impl<T: ShapeHash> ShapeHash for Option<T> {
    fn shape_hash(&self) -> i32 {
        self.as_ref().map_or(0, ShapeHash::shape_hash)
    }
}

impl<T: ShapeHash> ShapeHash for Vec<T> {
    fn shape_hash(&self) -> i32 {
        self.iter().fold(1i32, |h, item| {
            h.wrapping_mul(PRIME).wrapping_add(item.shape_hash())
        })
    }
}

// Mappings are unordered: sum of per-entry hashes.
impl<K: ShapeHash, V: ShapeHash> ShapeHash for BTreeMap<K, V> {
    fn shape_hash(&self) -> i32 {
        self.iter()
            .fold(0i32, |h, (k, v)| h.wrapping_add(k.shape_hash() ^ v.shape_hash()))
    }
}

impl<K: ShapeHash, V: ShapeHash, S> ShapeHash for HashMap<K, V, S> {
    fn shape_hash(&self) -> i32 {
        self.iter()
            .fold(0i32, |h, (k, v)| h.wrapping_add(k.shape_hash() ^ v.shape_hash()))
    }
}

/// Accumulates field hashes for a shape.
#[derive(Debug, Clone, Copy)]
pub struct FieldHasher {
    state: i32,
}

impl FieldHasher {
    pub fn new() -> Self {
        Self { state: 1 }
    }

    pub fn field<T: ShapeHash>(&mut self, value: &Option<T>) {
        self.state = self
            .state
            .wrapping_mul(PRIME)
            .wrapping_add(value.shape_hash());
    }

    pub fn finish(self) -> i32 {
        self.state
    }
}

impl Default for FieldHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn string_hash_matches_polynomial() {
        assert_eq!("".shape_hash(), 0);
        assert_eq!("a".shape_hash(), 97);
        assert_eq!("ab".shape_hash(), 97 * 31 + 98);
    }

    #[test]
    fn absent_hashes_as_zero() {
        assert_eq!(None::<String>.shape_hash(), 0);
        let mut hasher = FieldHasher::new();
        hasher.field(&None::<i32>);
        assert_eq!(hasher.finish(), 31);
    }

    #[test]
    fn empty_and_absent_differ() {
        let empty: Option<Vec<i32>> = Some(Vec::new());
        assert_eq!(empty.shape_hash(), 1);
        assert_ne!(empty.shape_hash(), None::<Vec<i32>>.shape_hash());
    }

    #[test]
    fn signed_zero_hashes_alike() {
        assert_eq!(0.0f64.shape_hash(), (-0.0f64).shape_hash());
    }

    #[test]
    fn every_nan_hashes_alike() {
        let quiet = f64::NAN;
        let payload = f64::from_bits(0x7ff0_0000_0000_0001);
        assert!(payload.is_nan());
        assert_eq!(quiet.shape_hash(), payload.shape_hash());
        assert_eq!((-quiet).shape_hash(), quiet.shape_hash());
        assert_eq!(f32::NAN.shape_hash(), (-f32::NAN).shape_hash());
    }

    #[test]
    fn sequence_hash_is_order_sensitive() {
        assert_ne!(vec![1i32, 2].shape_hash(), vec![2i32, 1].shape_hash());
    }

    proptest! {
        #[test]
        fn map_hash_ignores_insertion_order(entries in prop::collection::vec(("[a-z]{1,4}", "[a-z]{0,4}"), 0..8)) {
            let forward: HashMap<String, String> = entries.iter().cloned().collect();
            let backward: HashMap<String, String> = entries.iter().rev().cloned().collect();
            // Later duplicates win in each map, so compare only when both saw the same entries.
            prop_assume!(forward == backward);
            prop_assert_eq!(forward.shape_hash(), backward.shape_hash());
            let tree: BTreeMap<String, String> = forward.clone().into_iter().collect();
            prop_assert_eq!(tree.shape_hash(), forward.shape_hash());
        }
    }
}
