//! Measurement session: the one object an embedding host talks to.
//!
//! Purpose
//! - Own the traced `PointSet`, both reference segments, the configuration,
//!   and an `ErrorSink`; expose every host-facing operation.
//!
//! Contract
//! - Operations never fail. Degenerate inputs return 0 or `false`; faults are
//!   sent to the sink and also return 0.
//! - `compute_calibrated_area` (and `measure`) reorder the points angularly
//!   before the shoelace sum. The new order is kept: later exports,
//!   perimeters, and containment queries see it.
//! - Containment and perimeter never reorder.
//! - Single caller. Wrap the session in a mutex to share it across threads.
//!
//! Code cross-refs: `geom::{order_angular, raw_area, perimeter, is_inside}`,
//! `calib::ReferencePair`, `error::ErrorSink`.

mod snapshot;

pub use snapshot::{AxisRecord, SegmentRecord, SessionSnapshot};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calib::{Axis, ReferencePair, ReferenceSegment};
use crate::cfg::MeasureCfg;
use crate::error::{ErrorSink, MeasureError, Severity, TracingSink};
use crate::geom::{self, Point};
use crate::points::PointSet;

/// Everything a host shows after a measurement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasureReport {
    pub points: usize,
    /// Shoelace area in pixel² over the ordered points.
    pub raw_area: f64,
    pub calibrated_area: f64,
    pub perimeter: f64,
    pub horizontal_scale: f64,
    pub vertical_scale: f64,
}

/// One measurement session.
#[derive(Debug)]
pub struct MeasureSession<S: ErrorSink = TracingSink> {
    points: PointSet,
    refs: ReferencePair,
    cfg: MeasureCfg,
    sink: S,
}

impl Default for MeasureSession<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasureSession<TracingSink> {
    pub fn new() -> Self {
        Self::with_cfg(MeasureCfg::default())
    }

    pub fn with_cfg(cfg: MeasureCfg) -> Self {
        Self::with_sink(cfg, TracingSink)
    }
}

impl<S: ErrorSink> MeasureSession<S> {
    pub fn with_sink(cfg: MeasureCfg, sink: S) -> Self {
        Self {
            points: PointSet::new(),
            refs: ReferencePair::default(),
            cfg,
            sink,
        }
    }

    pub fn cfg(&self) -> &MeasureCfg {
        &self.cfg
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn points(&self) -> &[Point] {
        self.points.as_slice()
    }

    pub fn references(&self) -> &ReferencePair {
        &self.refs
    }

    // ----- points -----

    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.add(x, y);
    }

    /// No-op on an empty session.
    pub fn undo_last_point(&mut self) {
        self.points.undo_last();
    }

    pub fn reset_points(&mut self) {
        self.points.reset();
    }

    /// Clear points and both reference lines.
    pub fn reset_all(&mut self) {
        self.points.reset();
        self.refs.clear();
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Replace all points; malformed entries are skipped and reported.
    pub fn import_points<I, E>(&mut self, entries: I)
    where
        I: IntoIterator<Item = E>,
        E: AsRef<[f64]>,
    {
        let skipped = self.points.import_all(entries);
        self.report_all(skipped);
    }

    /// `import_points` for a JSON `[[x, y], ...]` document.
    pub fn import_points_json(&mut self, doc: &Value) {
        let skipped = self.points.import_json(doc);
        self.report_all(skipped);
    }

    pub fn export_points(&self) -> Vec<(f64, f64)> {
        self.points.export_all()
    }

    pub fn export_points_json(&self) -> Value {
        self.points.to_json()
    }

    // ----- reference lines -----

    /// Set (preview) the reference line of `axis`. Takes effect on commit.
    pub fn set_reference_segment(
        &mut self,
        axis: Axis,
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
        real_length: f64,
    ) {
        let seg = ReferenceSegment::from_coords(start_x, start_y, end_x, end_y, real_length);
        self.refs.set(axis, seg);
    }

    /// Finalize the last `set_reference_segment` for `axis`.
    pub fn commit_reference_segment(&mut self, axis: Axis) {
        if !self.refs.commit(axis) {
            tracing::debug!(%axis, "commit without a pending reference segment");
        }
    }

    pub fn set_actual_lengths(&mut self, horizontal: f64, vertical: f64) {
        self.refs.set_real_lengths(horizontal, vertical);
    }

    pub fn pending_segment(&self, axis: Axis) -> Option<&ReferenceSegment> {
        self.refs.pending(axis)
    }

    pub fn committed_segment(&self, axis: Axis) -> Option<&ReferenceSegment> {
        self.refs.committed(axis)
    }

    /// Committed `(horizontal, vertical)` scale factors.
    pub fn scale_factors(&self) -> (f64, f64) {
        (
            self.refs.scale(Axis::Horizontal),
            self.refs.scale(Axis::Vertical),
        )
    }

    // ----- measurements -----

    /// Real-world area of the traced polygon; 0 when it cannot be computed.
    pub fn compute_calibrated_area(&mut self) -> f64 {
        match self.try_calibrated_area() {
            Ok(area) => area,
            Err(err) => {
                self.report(err);
                0.0
            }
        }
    }

    /// Typed variant of `compute_calibrated_area`. Nothing is sent to the
    /// sink; the points are still reordered once 3 or more are present.
    pub fn try_calibrated_area(&mut self) -> Result<f64, MeasureError> {
        let n = self.points.len();
        let required = self.cfg.polygon_min();
        if n < required {
            return Err(MeasureError::DegenerateInput {
                points: n,
                required,
            });
        }
        self.points.order_angular();
        let raw = geom::try_raw_area(self.points.as_slice())?;
        let missing = self.refs.missing();
        if !missing.is_empty() {
            return Err(MeasureError::UncommittedCalibration { missing });
        }
        let area = self.refs.calibrate(raw);
        if !area.is_finite() {
            return Err(MeasureError::fault(format!(
                "calibrated area is {area} (raw {raw}, scales {:?})",
                self.scale_factors()
            )));
        }
        tracing::debug!(points = n, raw, area, "calibrated area");
        Ok(area)
    }

    /// Perimeter over the current order (no reordering).
    pub fn compute_perimeter(&self) -> f64 {
        geom::perimeter(self.points.as_slice())
    }

    /// Ray-casting test over the current order (no reordering).
    pub fn is_point_inside(&self, x: f64, y: f64) -> bool {
        geom::is_inside(Point::new(x, y), self.points.as_slice())
    }

    /// Area, perimeter, and scales in one pass, with the same reordering as
    /// `compute_calibrated_area`.
    pub fn measure(&mut self) -> MeasureReport {
        let calibrated_area = self.compute_calibrated_area();
        let pts = self.points.as_slice();
        let raw_area = if pts.len() < self.cfg.polygon_min() {
            0.0
        } else {
            geom::raw_area(pts)
        };
        let (horizontal_scale, vertical_scale) = self.scale_factors();
        MeasureReport {
            points: pts.len(),
            raw_area,
            calibrated_area,
            perimeter: geom::perimeter(pts),
            horizontal_scale,
            vertical_scale,
        }
    }

    // ----- persistence -----

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.points, &self.refs)
    }

    /// Rebuild a session from `snap`.
    pub fn from_snapshot(snap: &SessionSnapshot, cfg: MeasureCfg, sink: S) -> Self {
        let mut session = Self::with_sink(cfg, sink);
        let (points, refs) = snap.restore();
        session.points = points;
        session.refs = refs;
        session
    }

    fn report_all(&mut self, errs: Vec<MeasureError>) {
        for err in errs {
            self.report(err);
        }
    }

    fn report(&mut self, err: MeasureError) {
        match (&err, err.severity()) {
            (_, Severity::Silent) => {}
            (MeasureError::UncommittedCalibration { .. }, _) if !self.cfg.report_uncommitted => {}
            _ => self.sink.report(&err),
        }
    }
}
