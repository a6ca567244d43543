//! Angular ordering of traced points around the lowest point.
//!
//! This is a canonicalization, not a convex hull: every point is kept and
//! sorted by `atan2` around the pivot. Star-shaped traces (as seen from the
//! pivot) come out as simple polygons; concave traces that are not
//! star-shaped from the pivot may still self-intersect, and their area then
//! differs from the drawn shape. Measured values depend on this exact policy.

use std::cmp::Ordering;

use super::Point;

/// Index of the point with the smallest `y`, ties broken by smallest `x`.
/// The first such point wins among exact duplicates.
pub fn pivot_index(points: &[Point]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                let q = points[b];
                if p.y < q.y || (p.y == q.y && p.x < q.x) {
                    best = Some(i);
                }
            }
        }
    }
    best
}

/// Reorder `points` in place by ascending `atan2(dy, dx)` from the pivot.
///
/// No-op below 3 points. Stable: equal angles keep their relative order.
/// Angles compare with `f64::total_cmp`, so NaN coordinates sort last
/// instead of poisoning the sort.
pub fn order_angular(points: &mut [Point]) {
    if points.len() < 3 {
        return;
    }
    let Some(pivot) = pivot_index(points).map(|i| points[i]) else {
        return;
    };
    let mut keyed: Vec<(f64, Point)> = points
        .iter()
        .map(|p| {
            let d = p - pivot;
            (d.y.atan2(d.x), *p)
        })
        .collect();
    keyed.sort_by(|a, b| cmp_angle(a.0, b.0));
    for (slot, (_, p)) in points.iter_mut().zip(keyed) {
        *slot = p;
    }
    tracing::debug!(n = points.len(), pivot_x = pivot.x, pivot_y = pivot.y, "angular order");
}

#[inline]
fn cmp_angle(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}
