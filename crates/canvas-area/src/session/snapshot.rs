//! Serializable session state (points plus both reference lines).
//!
//! Coordinates and lengths go through `crate::coord`, so NaN and infinities
//! survive a JSON round trip.

use serde::{Deserialize, Serialize};

use crate::calib::{Axis, ReferencePair, ReferenceSegment};
use crate::geom::Point;
use crate::points::PointSet;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    #[serde(with = "crate::coord::pair")]
    pub start: (f64, f64),
    #[serde(with = "crate::coord::pair")]
    pub end: (f64, f64),
    #[serde(with = "crate::coord::scalar")]
    pub real_length: f64,
}

impl From<&ReferenceSegment> for SegmentRecord {
    fn from(seg: &ReferenceSegment) -> Self {
        Self {
            start: (seg.start.x, seg.start.y),
            end: (seg.end.x, seg.end.y),
            real_length: seg.real_length,
        }
    }
}

impl From<SegmentRecord> for ReferenceSegment {
    fn from(rec: SegmentRecord) -> Self {
        ReferenceSegment::new(
            Point::new(rec.start.0, rec.start.1),
            Point::new(rec.end.0, rec.end.1),
            rec.real_length,
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<SegmentRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committed: Option<SegmentRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default, with = "crate::coord::pairs")]
    pub points: Vec<(f64, f64)>,
    #[serde(default)]
    pub horizontal: AxisRecord,
    #[serde(default)]
    pub vertical: AxisRecord,
}

impl SessionSnapshot {
    pub(crate) fn capture(points: &PointSet, refs: &ReferencePair) -> Self {
        let record = |axis: Axis| AxisRecord {
            pending: refs.pending(axis).map(SegmentRecord::from),
            committed: refs.committed(axis).map(SegmentRecord::from),
        };
        Self {
            points: points.export_all(),
            horizontal: record(Axis::Horizontal),
            vertical: record(Axis::Vertical),
        }
    }

    pub(crate) fn restore(&self) -> (PointSet, ReferencePair) {
        let points: PointSet = self
            .points
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();
        let mut refs = ReferencePair::default();
        for (axis, rec) in [(Axis::Horizontal, self.horizontal), (Axis::Vertical, self.vertical)] {
            refs.set_pending(axis, rec.pending.map(ReferenceSegment::from));
            refs.set_committed(axis, rec.committed.map(ReferenceSegment::from));
        }
        (points, refs)
    }
}
