//! Curated surface for front-ends (CLI, Python bindings).
//!
//! Prefer these re-exports over reaching into modules; the module layout is
//! free to change.

// Session and its reports
pub use crate::session::{AxisRecord, MeasureReport, MeasureSession, SegmentRecord, SessionSnapshot};
// Reference lines
pub use crate::calib::{calibrated_area, scale_factor, Axis, ReferencePair, ReferenceSegment};
// Errors and sinks
pub use crate::error::{CollectingSink, ErrorSink, MeasureError, Severity, TracingSink};
// Geometry over plain point slices
pub use crate::geom::{distance, is_inside, order_angular, perimeter, pivot_index, raw_area, Point};
pub use crate::points::PointSet;
pub use crate::{distance_between, MeasureCfg};
