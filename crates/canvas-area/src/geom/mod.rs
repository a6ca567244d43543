//! Planar polygon measurements over traced pixel coordinates.
//!
//! Purpose
//! - Shoelace area, cyclic perimeter, and ray-casting containment over a
//!   point slice taken in its current order.
//! - Angular ordering around the lowest point (`order`), applied before area.
//!
//! Conventions
//! - Polygons are implicit: the last point connects back to the first.
//! - No tolerances. Sums run in index order `0..n`, so results are
//!   reproducible bit for bit for a given ordering.
//! - Fewer than 3 points is a degenerate polygon: area 0, contains nothing.

mod order;

pub use order::{order_angular, pivot_index};

use nalgebra::Vector2;

use crate::error::MeasureError;

/// A traced point in pixel space.
pub type Point = Vector2<f64>;

/// Euclidean distance.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (q - p).norm()
}

/// Absolute shoelace area of the cyclic sequence `points` (pixel² units).
pub fn raw_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    (acc / 2.0).abs()
}

/// `raw_area` that rejects non-finite results.
pub fn try_raw_area(points: &[Point]) -> Result<f64, MeasureError> {
    let area = raw_area(points);
    if area.is_finite() {
        Ok(area)
    } else {
        Err(MeasureError::fault(format!(
            "shoelace sum over {} points is {area}",
            points.len()
        )))
    }
}

/// Sum of edge lengths, closing the last point back to the first.
///
/// Two points count their segment twice; zero or one point gives 0.
pub fn perimeter(points: &[Point]) -> f64 {
    let n = points.len();
    let mut total = 0.0;
    for i in 0..n {
        total += distance(points[i], points[(i + 1) % n]);
    }
    total
}

/// Even-odd ray casting: does the horizontal ray from `p` cross the boundary
/// an odd number of times?
///
/// Uses the points in their current order; no reordering happens here.
pub fn is_inside(p: Point, points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = points[i];
        let b = points[j];
        // (a.y > y) != (b.y > y) guarantees b.y != a.y, so the division is safe.
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests;
