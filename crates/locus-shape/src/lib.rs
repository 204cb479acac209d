//! Shape contract for Locus.
//!
//! A *shape* is a named bundle of optional fields mirroring one message of a
//! remote HTTP/JSON API: the input of an operation (a request), its output (a
//! result), or a structure nested inside either. Every shape follows the same
//! rules regardless of its field list:
//!
//! - every field starts absent; an empty sequence or mapping is a present
//!   value distinct from absent
//! - containers are owned by the shape and never alias caller storage
//! - equality is structural and total (a NaN field equals itself), and
//!   [`ShapeHash`] agrees with it
//! - the rendering lists present fields only, as `{Name: value,Name: value}`
//! - documented constraints live in a static [`ShapeSchema`] and are checked
//!   only when [`Shape::validate`] is called
//!
//! The contract is derived with `#[derive(Shape)]`, re-exported here next to
//! the trait of the same name.
//!
//! # Key Types
//!
//! - [`Shape`]: compile-time identity and schema of a shape
//! - [`ShapeSchema`] / [`FieldSchema`] / [`Constraint`]: documented wire contract
//! - [`Render`] / [`ShapeFormatter`]: value rendering
//! - [`ShapeEq`]: field equality behind the derived `PartialEq`/`Eq`
//! - [`ShapeHash`] / [`FieldHasher`]: stable structural hash
//! - [`FieldView`]: runtime view of a field used by validation
//! - [`Violation`]: one failed constraint
//! - [`Blob`]: binary payload, Base64 on the wire

extern crate self as locus_shape;

pub mod blob;
pub mod eq;
pub mod error;
pub mod hash;
pub mod render;
pub mod schema;
pub mod shape;
pub mod validate;
pub mod value;

pub use blob::Blob;
pub use eq::ShapeEq;
pub use error::{ShapeError, ShapeResult};
pub use hash::{FieldHasher, ShapeHash};
pub use render::{Render, ShapeFormatter};
pub use schema::{Constraint, FieldKind, FieldSchema, ShapeKind, ShapeSchema};
pub use shape::Shape;
pub use validate::{ValidationConfig, Violation, ViolationReason};
pub use value::{FieldEntry, FieldValue, FieldView, Inspect};

pub use locus_macros::Shape;

/// Instant in UTC. Rendered as ISO-8601 with millisecond precision.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
