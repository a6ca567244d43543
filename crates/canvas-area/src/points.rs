//! The traced point collection of a session.
//!
//! Insertion order is kept until `order_angular` reorders it; exports always
//! reflect the current internal order.

use serde_json::{json, Value};

use crate::coord;
use crate::error::MeasureError;
use crate::geom::{self, Point};

/// Ordered, growable collection of traced points. No validation or dedup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    pts: Vec<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, x: f64, y: f64) {
        self.pts.push(Point::new(x, y));
    }

    /// Remove the most recent point; `None` on an empty set.
    pub fn undo_last(&mut self) -> Option<Point> {
        self.pts.pop()
    }

    pub fn reset(&mut self) {
        self.pts.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.pts
    }

    /// Apply the angular ordering in place (see `geom::order_angular`).
    pub fn order_angular(&mut self) {
        geom::order_angular(&mut self.pts);
    }

    pub fn export_all(&self) -> Vec<(f64, f64)> {
        self.pts.iter().map(|p| (p.x, p.y)).collect()
    }

    /// Replace the contents with `entries`, in order.
    ///
    /// Each entry must hold exactly two coordinates; others are skipped and
    /// returned as `MalformedImport` (index = position in `entries`).
    pub fn import_all<I, E>(&mut self, entries: I) -> Vec<MeasureError>
    where
        I: IntoIterator<Item = E>,
        E: AsRef<[f64]>,
    {
        self.reset();
        let mut skipped = Vec::new();
        for (index, entry) in entries.into_iter().enumerate() {
            match *entry.as_ref() {
                [x, y] => self.add(x, y),
                ref other => skipped.push(MeasureError::malformed(
                    index,
                    format!("expected 2 coordinates, got {}", other.len()),
                )),
            }
        }
        tracing::debug!(imported = self.len(), skipped = skipped.len(), "points imported");
        skipped
    }

    /// JSON form: `[[x1, y1], [x2, y2], ...]`. Non-finite coordinates are
    /// written as `"NaN"`, `"inf"` or `"-inf"`.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.pts
                .iter()
                .map(|p| json!([coord::to_json(p.x), coord::to_json(p.y)]))
                .collect(),
        )
    }

    /// Import from a JSON list of `[x, y]` number pairs (the form written by
    /// `to_json`).
    ///
    /// Entries that are not two-number arrays are skipped and reported. A
    /// non-array document imports nothing and reports a single entry 0.
    pub fn import_json(&mut self, doc: &Value) -> Vec<MeasureError> {
        self.reset();
        let Some(items) = doc.as_array() else {
            return vec![MeasureError::malformed(0, "document is not a list of points")];
        };
        let mut skipped = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match json_pair(item) {
                Ok([x, y]) => self.add(x, y),
                Err(reason) => skipped.push(MeasureError::malformed(index, reason)),
            }
        }
        tracing::debug!(imported = self.len(), skipped = skipped.len(), "points imported");
        skipped
    }
}

fn json_pair(item: &Value) -> Result<[f64; 2], String> {
    let arr = item
        .as_array()
        .ok_or_else(|| format!("expected [x, y], got {item}"))?;
    match arr.as_slice() {
        [x, y] => match (coord::from_json(x), coord::from_json(y)) {
            (Some(x), Some(y)) => Ok([x, y]),
            _ => Err(format!("coordinates must be numbers, got {item}")),
        },
        other => Err(format!("expected 2 coordinates, got {}", other.len())),
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            pts: iter.into_iter().collect(),
        }
    }
}
