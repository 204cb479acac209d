use thiserror::Error;

/// Errors produced by the model catalogue.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("unknown shape: {0}")]
    UnknownShape(String),

    #[error("invalid {shape} document: {source}")]
    Document {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type ModelResult<T> = Result<T, ModelError>;
