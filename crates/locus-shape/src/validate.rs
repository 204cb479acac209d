//! Opt-in checking of documented constraints.
//!
//! Setters never validate; the service is the authority. Validation is a
//! separate walk over [`Inspect`] views that reports every violation it finds
//! instead of stopping at the first.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::schema::{Constraint, FieldSchema};
use crate::value::{FieldView, Inspect};

/// Which checks a validation pass runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Report required members that are absent.
    pub check_required: bool,
    /// Check length and range bounds.
    pub check_constraints: bool,
    /// Match text against documented patterns.
    pub check_patterns: bool,
    /// Descend into nested shapes, sequences and mappings.
    pub recurse: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_required: true,
            check_constraints: true,
            check_patterns: true,
            recurse: true,
        }
    }
}

/// Why a field failed validation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationReason {
    Missing,
    Length {
        min: Option<u64>,
        max: Option<u64>,
        actual: u64,
    },
    Range {
        min: Option<f64>,
        max: Option<f64>,
        actual: f64,
    },
    Pattern {
        pattern: &'static str,
    },
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("required member is absent"),
            Self::Length { min, max, actual } => {
                write!(f, "length {actual} outside {}", bounds(min, max))
            }
            Self::Range { min, max, actual } => {
                write!(f, "value {actual} outside {}", bounds(min, max))
            }
            Self::Pattern { pattern } => write!(f, "does not match {pattern}"),
        }
    }
}

fn bounds<T: fmt::Display>(min: &Option<T>, max: &Option<T>) -> String {
    let show = |v: &Option<T>| v.as_ref().map(|v| v.to_string()).unwrap_or_default();
    format!("[{}, {}]", show(min), show(max))
}

/// One failed check, located by wire path (`Legs[0].Steps[2].StartPosition`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Violation {
    pub path: String,
    pub reason: ViolationReason,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Validates any shape through its [`Inspect`] view.
pub fn validate(shape: &dyn Inspect, config: &ValidationConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    walk(shape, "", config, &mut violations);
    debug!(
        shape = shape.shape_name(),
        violations = violations.len(),
        "validated shape"
    );
    violations
}

fn walk(shape: &dyn Inspect, prefix: &str, config: &ValidationConfig, out: &mut Vec<Violation>) {
    for (schema, value) in shape.field_views() {
        let path = if prefix.is_empty() {
            schema.wire_name.to_string()
        } else {
            format!("{prefix}.{}", schema.wire_name)
        };
        match value {
            None => {
                if config.check_required && schema.required {
                    out.push(Violation {
                        path,
                        reason: ViolationReason::Missing,
                    });
                }
            }
            Some(view) => {
                check_field(schema, &view, &path, config, out);
                if config.recurse {
                    descend(&view, &path, config, out);
                }
            }
        }
    }
}

fn descend(view: &FieldView<'_>, path: &str, config: &ValidationConfig, out: &mut Vec<Violation>) {
    match view {
        FieldView::Nested(inner) => walk(*inner, path, config, out),
        FieldView::List(items) => {
            for (i, item) in items.iter().enumerate() {
                descend(item, &format!("{path}[{i}]"), config, out);
            }
        }
        FieldView::Map(entries) => {
            for (key, value) in entries {
                descend(value, &format!("{path}.{key}"), config, out);
            }
        }
        _ => {}
    }
}

fn check_field(
    schema: &FieldSchema,
    view: &FieldView<'_>,
    path: &str,
    config: &ValidationConfig,
    out: &mut Vec<Violation>,
) {
    for constraint in schema.constraints {
        match *constraint {
            Constraint::Length { min, max } if config.check_constraints => {
                let Some(actual) = view.length() else { continue };
                if out_of_bounds(actual, min, max) {
                    out.push(Violation {
                        path: path.to_string(),
                        reason: ViolationReason::Length { min, max, actual },
                    });
                }
            }
            Constraint::Range { min, max } if config.check_constraints => {
                let FieldView::Number(actual) = *view else { continue };
                if out_of_bounds(actual, min, max) {
                    out.push(Violation {
                        path: path.to_string(),
                        reason: ViolationReason::Range { min, max, actual },
                    });
                }
            }
            Constraint::Pattern(pattern) if config.check_patterns => match view {
                FieldView::Text(text) => check_pattern(pattern, text, path, out),
                FieldView::List(items) => {
                    for (i, item) in items.iter().enumerate() {
                        if let FieldView::Text(text) = item {
                            check_pattern(pattern, text, &format!("{path}[{i}]"), out);
                        }
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }
}

fn out_of_bounds<T: PartialOrd>(actual: T, min: Option<T>, max: Option<T>) -> bool {
    min.is_some_and(|min| actual < min) || max.is_some_and(|max| actual > max)
}

fn check_pattern(pattern: &'static str, text: &str, path: &str, out: &mut Vec<Violation>) {
    if pattern_matches(pattern, text) == Some(false) {
        out.push(Violation {
            path: path.to_string(),
            reason: ViolationReason::Pattern { pattern },
        });
    }
}

// Compiled once per pattern; `None` records a pattern the regex engine rejects.
static PATTERNS: Lazy<RwLock<HashMap<&'static str, Option<Regex>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// `None` when the pattern itself does not compile.
fn pattern_matches(pattern: &'static str, text: &str) -> Option<bool> {
    if let Some(compiled) = PATTERNS.read().get(pattern) {
        return compiled.as_ref().map(|re| re.is_match(text));
    }
    let compiled = match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(pattern, error = %e, "unsupported pattern; skipping check");
            None
        }
    };
    let result = compiled.as_ref().map(|re| re.is_match(text));
    PATTERNS.write().insert(pattern, compiled);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;
    use std::collections::BTreeMap;

    #[derive(Clone, Debug, Default, Shape)]
    struct Leg {
        #[shape(required, length(min = 2, max = 2))]
        start_position: Option<Vec<f64>>,
        #[shape(range(min = 0))]
        distance: Option<f64>,
    }

    #[derive(Clone, Debug, Default, Shape)]
    #[shape(request)]
    struct SampleRoute {
        #[shape(required, length(min = 1, max = 100), pattern = r"^[-._\w]+$")]
        calculator_name: Option<String>,
        legs: Option<Vec<Leg>>,
        #[shape(range(min = 1, max = 100))]
        max_results: Option<i32>,
        #[shape(length(max = 2))]
        tags: Option<BTreeMap<String, String>>,
        #[shape(pattern = r"^[a-z]+$")]
        aliases: Option<Vec<String>>,
        #[shape(pattern = r"(?=lookahead)")]
        odd: Option<String>,
    }

    fn valid_route() -> SampleRoute {
        SampleRoute::new().with_calculator_name("ExampleCalculator")
    }

    #[test]
    fn valid_shape_has_no_violations() {
        assert!(valid_route().validate().is_empty());
    }

    #[test]
    fn missing_required_member() {
        let violations = SampleRoute::new().validate();
        assert_eq!(
            violations,
            vec![Violation {
                path: "CalculatorName".into(),
                reason: ViolationReason::Missing,
            }]
        );
    }

    #[test]
    fn reports_every_violation() {
        let route = SampleRoute::new()
            .with_calculator_name("bad name")
            .with_max_results(0)
            .with_tags([
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
                ("c".to_string(), "3".to_string()),
            ]);
        let paths: Vec<_> = route.validate().into_iter().map(|v| v.path).collect();
        assert_eq!(paths, vec!["CalculatorName", "MaxResults", "Tags"]);
    }

    #[test]
    fn length_counts_characters() {
        let name: String = "é".repeat(100);
        assert!(valid_route().with_calculator_name(name).validate().is_empty());
        let empty = valid_route().with_calculator_name("").validate();
        assert!(matches!(
            empty[0].reason,
            ViolationReason::Length { actual: 0, .. }
        ));
    }

    #[test]
    fn nested_paths_use_wire_names() {
        let route = valid_route().with_legs([
            Leg::new().with_start_position([1.0, 2.0]),
            Leg::new().with_start_position([1.0]).with_distance(-1.0),
            Leg::new(),
        ]);
        let rendered: Vec<_> = route.validate().iter().map(|v| v.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "Legs[1].StartPosition: length 1 outside [2, 2]",
                "Legs[1].Distance: value -1 outside [0, ]",
                "Legs[2].StartPosition: required member is absent",
            ]
        );
    }

    #[test]
    fn pattern_applies_to_each_list_element() {
        let route = valid_route().with_aliases(["ok".to_string(), "Not OK".to_string()]);
        let violations = route.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "Aliases[1]");
    }

    #[test]
    fn unsupported_pattern_is_skipped() {
        let route = valid_route().with_odd("anything");
        assert!(route.validate().is_empty());
    }

    #[test]
    fn config_switches_off_checks() {
        let route = SampleRoute::new().with_max_results(500).with_legs([Leg::new()]);
        let config = ValidationConfig {
            check_required: false,
            check_constraints: false,
            check_patterns: false,
            recurse: true,
        };
        assert!(route.validate_with(&config).is_empty());

        let shallow = ValidationConfig {
            recurse: false,
            ..ValidationConfig::default()
        };
        let paths: Vec<_> = route.validate_with(&shallow).into_iter().map(|v| v.path).collect();
        assert_eq!(paths, vec!["CalculatorName", "MaxResults"]);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: ValidationConfig = serde_json::from_str(r#"{"check_patterns": false}"#).unwrap();
        assert!(config.check_required);
        assert!(!config.check_patterns);
    }

    #[test]
    fn violation_serializes_with_tagged_reason() {
        let violation = Violation {
            path: "Tags".into(),
            reason: ViolationReason::Length { min: None, max: Some(50), actual: 51 },
        };
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["reason"]["kind"], "length");
        assert_eq!(json["reason"]["actual"], 51);
    }
}
