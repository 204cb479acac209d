use std::fmt;

use crate::eq::ShapeEq;
use crate::hash::ShapeHash;
use crate::render::Render;
use crate::schema::{ShapeKind, ShapeSchema};
use crate::validate::{self, ValidationConfig, Violation};
use crate::value::Inspect;

/// A request, result or nested structure of the remote API.
///
/// Implemented by `#[derive(Shape)]`; see the crate docs for the rules every
/// shape follows.
pub trait Shape:
    Inspect
    + ShapeEq
    + ShapeHash
    + Render
    + fmt::Display
    + fmt::Debug
    + Clone
    + Eq
    + Default
    + 'static
{
    /// Service name of the shape, e.g. `CalculateRouteRequest`.
    const NAME: &'static str;
    const KIND: ShapeKind;

    fn schema() -> &'static ShapeSchema;

    /// Checks every documented constraint, recursing into nested shapes.
    fn validate(&self) -> Vec<Violation> {
        self.validate_with(&ValidationConfig::default())
    }

    fn validate_with(&self, config: &ValidationConfig) -> Vec<Violation> {
        validate::validate(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Blob, FieldKind, Shape, ShapeError, Timestamp};
    use chrono::TimeZone;
    use std::collections::{BTreeMap, HashMap, HashSet};

    #[derive(Clone, Debug, Default, Shape)]
    struct Step {
        start_position: Option<Vec<f64>>,
        distance: Option<f64>,
    }

    #[derive(Clone, Debug, Default, Shape)]
    #[shape(result)]
    struct Summary {
        #[shape(required)]
        distance_unit: Option<String>,
        steps: Option<Vec<Step>>,
        depart_now: Option<bool>,
        tags: Option<HashMap<String, String>>,
        #[shape(wire = "FilterBBox")]
        filter_bbox: Option<Vec<f64>>,
        departure_time: Option<Timestamp>,
        blob: Option<Blob>,
        r#type: Option<String>,
        ordered: Option<BTreeMap<String, i32>>,
    }

    #[test]
    fn schema_reflects_declaration() {
        let schema = Summary::schema();
        assert_eq!(Summary::NAME, "Summary");
        assert_eq!(Summary::KIND, ShapeKind::Result);
        let wires: Vec<_> = schema.fields.iter().map(|f| f.wire_name).collect();
        assert_eq!(
            wires,
            vec![
                "DistanceUnit",
                "Steps",
                "DepartNow",
                "Tags",
                "FilterBBox",
                "DepartureTime",
                "Blob",
                "Type",
                "Ordered"
            ]
        );
        assert_eq!(schema.field("type").unwrap().wire_name, "Type");
        assert_eq!(schema.field("Steps").unwrap().kind, FieldKind::List);
        assert_eq!(schema.field("Tags").unwrap().type_name, "HashMap<String,String>");
        assert!(schema.field("DistanceUnit").unwrap().required);
        assert_eq!(Step::KIND, ShapeKind::Structure);
    }

    #[test]
    fn fields_start_absent() {
        let summary = Summary::new();
        assert_eq!(summary.distance_unit(), None);
        assert_eq!(summary.steps(), None);
        assert_eq!(summary.depart_now(), None);
        assert_eq!(summary.tags(), None);
        assert_eq!(summary.to_string(), "{}");
    }

    #[test]
    fn sequences_are_copied_on_set() {
        let mut source = vec![-123.1, 49.2];
        let step = Step::new().with_start_position(source.iter().copied());
        source[0] = 0.0;
        source.push(7.0);
        assert_eq!(step.start_position(), Some(&[-123.1, 49.2][..]));
    }

    #[test]
    fn empty_is_distinct_from_absent() {
        let empty = Summary::new().with_steps(Vec::new());
        assert_eq!(empty.steps(), Some(&[][..]));
        assert_ne!(empty, Summary::new());
        assert_ne!(empty.shape_hash(), Summary::new().shape_hash());
        assert_eq!(empty.to_string(), "{Steps: []}");
    }

    #[test]
    fn setter_clears_with_none() {
        let mut summary = Summary::new().with_depart_now(true);
        summary.set_depart_now(None).set_distance_unit(Some("Miles".into()));
        assert_eq!(summary.depart_now(), None);
        assert_eq!(summary.distance_unit(), Some("Miles"));
    }

    #[test]
    fn equal_shapes_hash_equally() {
        let build = || {
            Summary::new()
                .with_distance_unit("Kilometers")
                .with_steps([Step::new().with_distance(0.5)])
                .with_tags([("k".to_string(), "v".to_string())])
        };
        assert_eq!(build(), build());
        assert_eq!(build().shape_hash(), build().shape_hash());

        let other = build().with_distance_unit("Miles");
        assert_ne!(build(), other);
    }

    #[test]
    fn nan_fields_equal_themselves() {
        let step = Step::new().with_distance(f64::NAN).with_start_position([f64::NAN, 0.0]);
        assert_eq!(step, step.clone());
        assert_eq!(step.shape_hash(), step.clone().shape_hash());
        assert_ne!(step, Step::new().with_distance(1.0).with_start_position([f64::NAN, 0.0]));

        let summary = Summary::new().with_steps([step.clone()]);
        assert_eq!(summary, summary.clone());
    }

    #[test]
    fn signed_zero_fields_are_equal() {
        let positive = Step::new().with_distance(0.0);
        let negative = Step::new().with_distance(-0.0);
        assert_eq!(positive, negative);
        assert_eq!(positive.shape_hash(), negative.shape_hash());
    }

    #[test]
    fn shapes_work_as_set_keys() {
        let set: HashSet<Step> = [
            Step::new().with_distance(f64::NAN),
            Step::new().with_distance(f64::NAN),
            Step::new().with_distance(0.0),
            Step::new().with_distance(-0.0),
            Step::new(),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Step::new().with_distance(f64::NAN)));
    }

    #[test]
    fn rendering_lists_present_fields_in_order() {
        let ts = chrono::Utc.with_ymd_and_hms(2020, 7, 2, 12, 15, 20).unwrap();
        let summary = Summary::new()
            .with_ordered([("b".to_string(), 2), ("a".to_string(), 1)])
            .with_distance_unit("Kilometers")
            .with_departure_time(ts)
            .with_blob(Blob::new(b"hi".to_vec()))
            .with_type("Car");
        assert_eq!(
            summary.to_string(),
            "{DistanceUnit: Kilometers,DepartureTime: 2020-07-02T12:15:20.000Z,\
             Blob: aGk=,Type: Car,Ordered: {a=1, b=2}}"
        );
    }

    #[test]
    fn nested_shapes_render_inline() {
        let summary = Summary::new()
            .with_steps([
                Step::new().with_start_position([-123.1, 49.2]).with_distance(1.0),
                Step::new(),
            ])
            .with_filter_bbox([0.0, 0.0, 1.0, 1.0]);
        assert_eq!(
            summary.to_string(),
            "{Steps: [{StartPosition: [-123.1, 49.2],Distance: 1.0}, {}],\
             FilterBBox: [0.0, 0.0, 1.0, 1.0]}"
        );
    }

    #[test]
    fn duplicate_map_key_is_rejected() {
        let mut summary = Summary::new();
        summary.add_tags_entry("env", "prod").unwrap();
        let err = summary.add_tags_entry("env", "dev").unwrap_err();
        assert_eq!(
            err,
            ShapeError::DuplicateKey {
                field: "Tags",
                key: "env".into()
            }
        );
        assert_eq!(summary.tags().unwrap()["env"], "prod");

        summary.clear_tags_entries();
        assert_eq!(summary.tags(), None);
    }

    #[test]
    fn extend_starts_and_appends() {
        let step = Step::new()
            .extend_start_position([1.0])
            .extend_start_position([2.0]);
        assert_eq!(step.start_position(), Some(&[1.0, 2.0][..]));
    }

    #[test]
    fn clone_is_deep() {
        let original = Summary::new().with_steps([Step::new().with_distance(3.0)]);
        let mut copy = original.clone();
        copy.set_steps(Some(vec![]));
        assert_eq!(original.steps().map(<[Step]>::len), Some(1));
    }
}
