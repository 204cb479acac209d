//! Static description of a shape's wire contract.
//!
//! Schemas are built at compile time by `#[derive(Shape)]`. They record what
//! the remote service documents (member names, required members, length
//! bounds, numeric ranges, patterns). Nothing here is enforced on set.

use std::fmt;

use serde::Serialize;

/// Which side of an operation a shape belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    /// Input of an operation.
    Request,
    /// Output of an operation.
    Result,
    /// Nested member owned by a request or result.
    Structure,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Result => "result",
            Self::Structure => "structure",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage class of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    Scalar,
    List,
    Map,
}

/// A documented constraint on a field value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Constraint {
    /// Character count of text, element count of sequences, entry count of
    /// mappings, byte count of blobs.
    Length { min: Option<u64>, max: Option<u64> },
    /// Inclusive numeric bounds.
    Range { min: Option<f64>, max: Option<f64> },
    /// Regular expression matched against text values (or each text element
    /// of a sequence).
    Pattern(&'static str),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { min, max } => {
                write!(f, "Length: ")?;
                write_bounds(f, min.map(|v| v.to_string()), max.map(|v| v.to_string()))
            }
            Self::Range { min, max } => {
                write!(f, "Range: ")?;
                write_bounds(f, min.map(|v| v.to_string()), max.map(|v| v.to_string()))
            }
            Self::Pattern(pattern) => write!(f, "Pattern: {pattern}"),
        }
    }
}

fn write_bounds(
    f: &mut fmt::Formatter<'_>,
    min: Option<String>,
    max: Option<String>,
) -> fmt::Result {
    match (min, max) {
        (Some(min), Some(max)) => write!(f, "{min} - {max}"),
        (Some(min), None) => write!(f, "{min} - "),
        (None, Some(max)) => write!(f, " - {max}"),
        (None, None) => Ok(()),
    }
}

/// Schema entry for one field, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FieldSchema {
    /// Rust field name.
    pub name: &'static str,
    /// Wire member name.
    pub wire_name: &'static str,
    /// Rust type of the value, e.g. `Vec<Vec<f64>>`.
    pub type_name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub constraints: &'static [Constraint],
}

impl FieldSchema {
    /// Constraints joined as `Length: 1 - 100; Pattern: ^[-._\w]+$`.
    pub fn describe_constraints(&self) -> String {
        self.constraints
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Schema of a whole shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShapeSchema {
    pub name: &'static str,
    pub kind: ShapeKind,
    pub fields: &'static [FieldSchema],
}

impl ShapeSchema {
    /// Look a field up by Rust name or wire name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSchema> {
        self.fields
            .iter()
            .find(|f| f.name == name || f.wire_name == name)
    }

    /// Fields documented as required.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSchema> {
        self.fields.iter().filter(|f| f.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIELDS: &[FieldSchema] = &[
        FieldSchema {
            name: "calculator_name",
            wire_name: "CalculatorName",
            type_name: "String",
            kind: FieldKind::Scalar,
            required: true,
            constraints: &[
                Constraint::Length { min: Some(1), max: Some(100) },
                Constraint::Pattern(r"^[-._\w]+$"),
            ],
        },
        FieldSchema {
            name: "waypoint_positions",
            wire_name: "WaypointPositions",
            type_name: "Vec<Vec<f64>>",
            kind: FieldKind::List,
            required: false,
            constraints: &[Constraint::Length { min: Some(0), max: Some(23) }],
        },
    ];

    static SCHEMA: ShapeSchema = ShapeSchema {
        name: "CalculateRouteRequest",
        kind: ShapeKind::Request,
        fields: FIELDS,
    };

    #[test]
    fn constraint_display() {
        assert_eq!(
            FIELDS[0].describe_constraints(),
            r"Length: 1 - 100; Pattern: ^[-._\w]+$"
        );
        let range = Constraint::Range { min: Some(0.0), max: None };
        assert_eq!(range.to_string(), "Range: 0 - ");
    }

    #[test]
    fn field_lookup_by_either_name() {
        assert_eq!(SCHEMA.field("calculator_name").unwrap().wire_name, "CalculatorName");
        assert_eq!(SCHEMA.field("WaypointPositions").unwrap().name, "waypoint_positions");
        assert!(SCHEMA.field("Legs").is_none());
    }

    #[test]
    fn required_fields_filter() {
        let required: Vec<_> = SCHEMA.required_fields().map(|f| f.wire_name).collect();
        assert_eq!(required, vec!["CalculatorName"]);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ShapeKind::Request.to_string(), "request");
        assert_eq!(ShapeKind::Structure.as_str(), "structure");
    }
}
