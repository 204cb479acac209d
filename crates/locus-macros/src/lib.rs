//! Procedural macros for Locus shapes.
//!
//! The `Shape` derive turns a plain struct of `Option<T>` fields into a full
//! shape: accessors, fluent `with_*` setters, the `{Name: value,...}`
//! rendering, total `PartialEq`/`Eq`, the stable 31-multiplier hash, and a
//! static schema carrying the wire names and documented constraints of every
//! member. Do not derive `PartialEq` alongside it.
//!
//! ```text
//! #[derive(Clone, Debug, Default, Shape)]
//! #[shape(result)]
//! pub struct CalculateRouteResult {
//!     /// Details about each path between a pair of positions.
//!     #[shape(required)]
//!     legs: Option<Vec<Leg>>,
//!     #[shape(required)]
//!     summary: Option<CalculateRouteSummary>,
//! }
//! ```
//!
//! # Attributes
//!
//! ## Struct-level
//! - `#[shape(request)]`, `#[shape(result)]` or `#[shape(structure)]`.
//!   Structures are nested members owned by a request or result; this is the
//!   default when no kind is given.
//!
//! ## Field-level
//! - `#[shape(required)]` - documented as required by the service.
//! - `#[shape(wire = "Name")]` - wire member name; defaults to the field name
//!   in PascalCase.
//! - `#[shape(length(min = 1, max = 100))]` - length bounds, either optional.
//! - `#[shape(range(min = -180, max = 180))]` - numeric bounds, either optional.
//! - `#[shape(pattern = "^[-._\\w]+$")]` - regular expression the service
//!   applies to the value.
//!
//! None of these are enforced when a field is set. They only feed the schema
//! returned by `Shape::schema()` and the opt-in validator.

mod attrs;
mod field;
mod shape;

use proc_macro::TokenStream;

/// Derive the shape contract for a struct whose fields are all `Option<T>`.
#[proc_macro_derive(Shape, attributes(shape))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    shape::derive_shape(input)
}
