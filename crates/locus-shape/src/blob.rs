use std::fmt;
use std::ops::Deref;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::ShapeHash;
use crate::render::Render;

/// Owned binary payload (map tiles, glyphs, style descriptors, geobuf).
///
/// Raw bytes in memory, Base64 on the wire and in renderings.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(Vec<u8>);

impl Blob {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        STANDARD.decode(encoded).map(Self)
    }
}

impl Deref for Blob {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.0.len())
    }
}

impl Render for Blob {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl ShapeHash for Blob {
    fn shape_hash(&self) -> i32 {
        self.0
            .iter()
            .fold(1i32, |h, b| h.wrapping_mul(31).wrapping_add(i32::from(*b as i8)))
    }
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_base64(&encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_roundtrip() {
        let blob = Blob::new(b"tile".to_vec());
        assert_eq!(blob.to_base64(), "dGlsZQ==");
        assert_eq!(Blob::from_base64("dGlsZQ==").unwrap(), blob);
    }

    #[test]
    fn serde_uses_base64_string() {
        let blob = Blob::from(&b"\x00\xff"[..]);
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, "\"AP8=\"");
        let parsed: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_bytes(), &[0x00, 0xff]);
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(serde_json::from_str::<Blob>("\"not base64!\"").is_err());
    }

    #[test]
    fn debug_hides_contents() {
        assert_eq!(format!("{:?}", Blob::new(vec![1, 2, 3])), "Blob(3 bytes)");
    }
}
