//! Human-readable rendering of shapes and field values.
//!
//! A shape renders as `{Name: value,Name: value}`: present fields only, in
//! declaration order, comma-separated, without a trailing separator.
//! Sequences render as `[a, b]` and mappings as `{k=v, k2=v2}` in key order.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::Timestamp;

/// Rendering of a single field value.
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Render for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Render for str {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! render_display {
    ($($ty:ty),*) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

render_display!(bool, i8, i16, i32, i64, u8, u16, u32, u64);

// Floats keep a fractional part (`1.0`, not `1`).
impl Render for f64 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Render for f32 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Render for Timestamp {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_entries(f, self.iter())
    }
}

impl<K: Render + Ord, V: Render> Render for HashMap<K, V> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        render_entries(f, entries.into_iter())
    }
}

fn render_entries<'a, K: Render + 'a, V: Render + 'a>(
    f: &mut fmt::Formatter<'_>,
    entries: impl Iterator<Item = (&'a K, &'a V)>,
) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        key.render(f)?;
        f.write_str("=")?;
        value.render(f)?;
    }
    f.write_str("}")
}

/// Writes the `{Name: value,...}` form of a shape, skipping absent fields.
pub struct ShapeFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    wrote_field: bool,
}

impl<'a, 'b> ShapeFormatter<'a, 'b> {
    /// Opens the brace.
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self {
            f,
            wrote_field: false,
        })
    }

    /// Writes `Name: value` when the field is present.
    pub fn field<T: Render>(&mut self, name: &str, value: &Option<T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if self.wrote_field {
            self.f.write_str(",")?;
        }
        self.wrote_field = true;
        write!(self.f, "{name}: ")?;
        value.render(self.f)
    }

    /// Closes the brace.
    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Rendered<'a, T: ?Sized>(&'a T);

    impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.render(f)
        }
    }

    struct Pair {
        first: Option<String>,
        second: Option<Vec<f64>>,
    }

    impl fmt::Display for Pair {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut out = ShapeFormatter::new(f)?;
            out.field("First", &self.first)?;
            out.field("Second", &self.second)?;
            out.finish()
        }
    }

    #[test]
    fn absent_fields_are_skipped() {
        let pair = Pair { first: None, second: None };
        assert_eq!(pair.to_string(), "{}");

        let pair = Pair { first: Some("a".into()), second: None };
        assert_eq!(pair.to_string(), "{First: a}");

        let pair = Pair { first: None, second: Some(vec![1.0, -2.5]) };
        assert_eq!(pair.to_string(), "{Second: [1.0, -2.5]}");
    }

    #[test]
    fn no_trailing_separator() {
        let pair = Pair { first: Some("a".into()), second: Some(vec![]) };
        assert_eq!(pair.to_string(), "{First: a,Second: []}");
    }

    #[test]
    fn maps_render_in_key_order() {
        let mut map = HashMap::new();
        map.insert("b".to_string(), "2".to_string());
        map.insert("a".to_string(), "1".to_string());
        assert_eq!(Rendered(&map).to_string(), "{a=1, b=2}");

        let tree: BTreeMap<String, String> = map.into_iter().collect();
        assert_eq!(Rendered(&tree).to_string(), "{a=1, b=2}");
    }

    #[test]
    fn timestamps_use_millisecond_iso8601() {
        let ts = chrono::Utc.with_ymd_and_hms(2020, 7, 2, 12, 15, 20).unwrap();
        assert_eq!(Rendered(&ts).to_string(), "2020-07-02T12:15:20.000Z");
    }

    #[test]
    fn nested_sequences() {
        let ring = vec![vec![0.0, 0.0], vec![1.0, 0.0]];
        assert_eq!(Rendered(&ring).to_string(), "[[0.0, 0.0], [1.0, 0.0]]");
    }
}
