//! Polygon area measurement on a traced canvas, calibrated by two reference lines.
//!
//! Purpose
//! - Keep the traced points of one measurement session, order them into a
//!   polygon, and report its area and perimeter in real-world units.
//! - Calibrate pixel space with two independent reference segments
//!   (horizontal and vertical), each carrying a known real-world length.
//!
//! Layout
//! - `geom`: point type, distances, shoelace area, perimeter, ray casting,
//!   and the angular ordering around the lowest point.
//! - `points`: the mutable `PointSet` (append, undo, import/export).
//! - `calib`: reference segments, per-axis scale factors.
//! - `session`: `MeasureSession`, the single object a host talks to.
//! - `error`: error taxonomy and the `ErrorSink` hook for event-driven hosts.
//!
//! API Policy
//! - `MeasureSession` and the `api` re-exports are what front-ends use (CLI,
//!   Python bindings). Module internals may change without notice.

pub mod api;
pub mod calib;
pub mod cfg;
mod coord;
pub mod error;
pub mod geom;
pub mod points;
pub mod rand;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::MeasureCfg;
pub use geom::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::calib::{Axis, ReferencePair, ReferenceSegment};
    pub use crate::error::{CollectingSink, ErrorSink, MeasureError, Severity, TracingSink};
    pub use crate::geom::{distance, is_inside, order_angular, perimeter, raw_area, Point};
    pub use crate::points::PointSet;
    pub use crate::session::{MeasureReport, MeasureSession, SessionSnapshot};
    pub use crate::MeasureCfg;
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn distance_between(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    geom::distance(Point::new(x1, y1), Point::new(x2, y2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_pythagorean_triple() {
        assert_eq!(distance_between(1.0, 1.0, 4.0, 5.0), 5.0);
        assert_eq!(distance_between(2.0, -3.0, 2.0, -3.0), 0.0);
    }
}
