use thiserror::Error;

/// Errors produced by shape operations.
///
/// Setting, reading, rendering and comparing shapes never fails; the only
/// local failure is inserting a key a mapping field already holds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("duplicate key `{key}` in {field}")]
    DuplicateKey { field: &'static str, key: String },
}

pub type ShapeResult<T> = Result<T, ShapeError>;
