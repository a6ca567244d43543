//! Reference segments and per-axis scale factors.
//!
//! Purpose
//! - Turn two pixel-space reference lines with known real-world lengths into
//!   independent horizontal and vertical scale factors.
//! - Hold both axes in one enum-indexed pair, each with a pending slot (what
//!   the user is dragging) and a committed slot (what calibration uses).
//!
//! Conventions
//! - `scale = real_length / pixel_length`. A missing segment or one with
//!   coincident endpoints has scale 0.
//! - Calibrated area needs both axes committed; otherwise it is 0.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geom::{distance, Point};

/// Which reference line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Scales x distances; drawn in red by the canvas host.
    Horizontal,
    /// Scales y distances; drawn in blue by the canvas host.
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    #[inline]
    fn slot(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = String;

    /// Accepts the axis names, their initials, and the line colors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" | "red" => Ok(Axis::Horizontal),
            "vertical" | "v" | "blue" => Ok(Axis::Vertical),
            other => Err(format!(
                "unknown axis {other:?} (expected horizontal|vertical)"
            )),
        }
    }
}

/// A pixel-space line with a known real-world length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceSegment {
    pub start: Point,
    pub end: Point,
    pub real_length: f64,
}

impl ReferenceSegment {
    #[inline]
    pub fn new(start: Point, end: Point, real_length: f64) -> Self {
        Self {
            start,
            end,
            real_length,
        }
    }

    pub fn from_coords(sx: f64, sy: f64, ex: f64, ey: f64, real_length: f64) -> Self {
        Self::new(Point::new(sx, sy), Point::new(ex, ey), real_length)
    }

    #[inline]
    pub fn pixel_length(&self) -> f64 {
        distance(self.start, self.end)
    }
}

/// Real units per pixel along `segment`; 0 when unset or zero length.
pub fn scale_factor(segment: Option<&ReferenceSegment>) -> f64 {
    let Some(seg) = segment else {
        return 0.0;
    };
    let d = seg.pixel_length();
    if d == 0.0 {
        0.0
    } else {
        seg.real_length / d
    }
}

/// `raw * scale(h) * scale(v)`, or 0 unless both segments are present.
pub fn calibrated_area(
    raw: f64,
    horizontal: Option<&ReferenceSegment>,
    vertical: Option<&ReferenceSegment>,
) -> f64 {
    match (horizontal, vertical) {
        (Some(h), Some(v)) => raw * scale_factor(Some(h)) * scale_factor(Some(v)),
        _ => 0.0,
    }
}

/// Both reference lines of a session, indexed by `Axis`.
///
/// `set` writes the pending slot; `commit` copies pending into committed.
/// Only committed segments take part in calibration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferencePair {
    pending: [Option<ReferenceSegment>; 2],
    committed: [Option<ReferenceSegment>; 2],
}

impl ReferencePair {
    pub fn set(&mut self, axis: Axis, segment: ReferenceSegment) {
        self.pending[axis.slot()] = Some(segment);
    }

    /// Finalize the pending segment of `axis`. Returns `false` (and changes
    /// nothing) if nothing was set for that axis.
    pub fn commit(&mut self, axis: Axis) -> bool {
        match self.pending[axis.slot()] {
            Some(seg) => {
                self.committed[axis.slot()] = Some(seg);
                true
            }
            None => false,
        }
    }

    /// Restore a committed segment directly (snapshots).
    pub(crate) fn set_committed(&mut self, axis: Axis, segment: Option<ReferenceSegment>) {
        self.committed[axis.slot()] = segment;
    }

    pub(crate) fn set_pending(&mut self, axis: Axis, segment: Option<ReferenceSegment>) {
        self.pending[axis.slot()] = segment;
    }

    pub fn pending(&self, axis: Axis) -> Option<&ReferenceSegment> {
        self.pending[axis.slot()].as_ref()
    }

    pub fn committed(&self, axis: Axis) -> Option<&ReferenceSegment> {
        self.committed[axis.slot()].as_ref()
    }

    /// Overwrite the real-world lengths of both axes, pending and committed.
    /// Endpoints are untouched; axes with nothing set stay unset.
    pub fn set_real_lengths(&mut self, horizontal: f64, vertical: f64) {
        for (axis, len) in [(Axis::Horizontal, horizontal), (Axis::Vertical, vertical)] {
            let i = axis.slot();
            for seg in [&mut self.pending[i], &mut self.committed[i]]
                .into_iter()
                .flatten()
            {
                seg.real_length = len;
            }
        }
    }

    /// Committed scale factor for `axis`.
    pub fn scale(&self, axis: Axis) -> f64 {
        scale_factor(self.committed(axis))
    }

    /// Axes without a committed segment.
    pub fn missing(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|a| self.committed(*a).is_none())
            .collect()
    }

    /// Calibrate `raw` with the committed segments.
    pub fn calibrate(&self, raw: f64) -> f64 {
        calibrated_area(
            raw,
            self.committed(Axis::Horizontal),
            self.committed(Axis::Vertical),
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
