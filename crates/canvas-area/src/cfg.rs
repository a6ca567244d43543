//! Session configuration.

/// Smallest vertex count that can enclose an area.
pub const POLYGON_MIN_POINTS: usize = 3;

/// Measurement session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasureCfg {
    /// Send `UncommittedCalibration` notices to the error sink when an area is
    /// requested before both reference segments are committed.
    pub report_uncommitted: bool,
    /// Minimum number of traced points before an area is computed. Values
    /// below 3 are treated as 3.
    pub min_polygon_points: usize,
}

impl Default for MeasureCfg {
    fn default() -> Self {
        Self {
            report_uncommitted: true,
            min_polygon_points: POLYGON_MIN_POINTS,
        }
    }
}

impl MeasureCfg {
    /// Effective minimum point count (never below 3).
    #[inline]
    pub fn polygon_min(&self) -> usize {
        self.min_polygon_points.max(POLYGON_MIN_POINTS)
    }
}
