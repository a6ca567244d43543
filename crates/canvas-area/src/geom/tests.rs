use super::*;
use proptest::prelude::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn rect_4x3() -> Vec<Point> {
    pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)])
}

#[test]
fn rectangle_area_and_perimeter() {
    let r = rect_4x3();
    assert_eq!(raw_area(&r), 12.0);
    assert_eq!(perimeter(&r), 14.0);
}

#[test]
fn degenerate_sizes() {
    assert_eq!(raw_area(&[]), 0.0);
    assert_eq!(raw_area(&pts(&[(1.0, 1.0), (3.0, 1.0)])), 0.0);
    assert_eq!(perimeter(&[]), 0.0);
    assert_eq!(perimeter(&pts(&[(5.0, 5.0)])), 0.0);
    // two points: the segment is walked there and back
    assert_eq!(perimeter(&pts(&[(0.0, 0.0), (3.0, 4.0)])), 10.0);
    assert!(!is_inside(Point::new(0.5, 0.0), &pts(&[(0.0, -1.0), (1.0, 1.0)])));
}

#[test]
fn clockwise_area_is_positive() {
    let mut r = rect_4x3();
    r.reverse();
    assert_eq!(raw_area(&r), 12.0);
}

#[test]
fn containment_in_rectangle() {
    let r = rect_4x3();
    assert!(is_inside(Point::new(2.0, 1.5), &r));
    assert!(!is_inside(Point::new(5.0, 5.0), &r));
    assert!(!is_inside(Point::new(-0.1, 1.5), &r));
    assert!(!is_inside(Point::new(2.0, 3.5), &r));
}

#[test]
fn containment_follows_literal_order() {
    // Bow-tie order of the same four corners: the left lobe is inside, the
    // region under the crossing is not.
    let bowtie = pts(&[(0.0, 0.0), (4.0, 3.0), (4.0, 0.0), (0.0, 3.0)]);
    assert!(is_inside(Point::new(0.5, 1.5), &bowtie));
    assert!(!is_inside(Point::new(2.0, 0.5), &bowtie));
}

#[test]
fn try_raw_area_flags_non_finite() {
    let bad = pts(&[(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0)]);
    assert!(matches!(
        try_raw_area(&bad),
        Err(MeasureError::ComputationFault { .. })
    ));
    let huge = pts(&[(0.0, 0.0), (f64::MAX, 0.0), (f64::MAX, f64::MAX)]);
    assert!(try_raw_area(&huge).is_err());
    assert_eq!(try_raw_area(&rect_4x3()).unwrap(), 12.0);
}

#[test]
fn pivot_is_lowest_then_leftmost() {
    let p = pts(&[(3.0, 1.0), (2.0, 0.0), (1.0, 0.0), (0.0, 2.0)]);
    assert_eq!(pivot_index(&p), Some(2));
    assert_eq!(pivot_index(&[]), None);
    // exact duplicates: the earlier one wins
    let d = pts(&[(1.0, 0.0), (1.0, 0.0)]);
    assert_eq!(pivot_index(&d), Some(0));
}

#[test]
fn angular_order_recovers_rectangle() {
    let mut p = pts(&[(4.0, 3.0), (0.0, 0.0), (0.0, 3.0), (4.0, 0.0)]);
    order_angular(&mut p);
    assert_eq!(p, rect_4x3());
    assert_eq!(raw_area(&p), 12.0);
}

#[test]
fn angular_order_is_stable_on_ties() {
    // (2,0), (1,0) and the pivot (0,0) itself all have angle 0; input order
    // is kept, so the pivot need not come first.
    let mut p = pts(&[(2.0, 0.0), (0.0, 2.0), (1.0, 0.0), (0.0, 0.0)]);
    order_angular(&mut p);
    assert_eq!(p, pts(&[(2.0, 0.0), (1.0, 0.0), (0.0, 0.0), (0.0, 2.0)]));
}

#[test]
fn angular_order_noop_below_three() {
    let mut p = pts(&[(5.0, 5.0), (0.0, 0.0)]);
    order_angular(&mut p);
    assert_eq!(p, pts(&[(5.0, 5.0), (0.0, 0.0)]));
}

#[test]
fn angular_order_is_idempotent() {
    let mut p = pts(&[(3.0, 4.0), (-1.0, 2.0), (0.0, 0.0), (5.0, 1.0), (2.0, 6.0)]);
    order_angular(&mut p);
    let once = p.clone();
    order_angular(&mut p);
    assert_eq!(p, once);
}

#[test]
fn concave_traces_keep_angular_policy() {
    // An L traced from the pivot is already in angular order: (2,1), (1,1)
    // and (1,2) sit at increasing angles, so the notch survives.
    let l_shape = pts(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (0.0, 2.0),
    ]);
    let mut ordered = l_shape.clone();
    order_angular(&mut ordered);
    assert_eq!(ordered, l_shape);
    assert_eq!(raw_area(&ordered), 3.0);

    // A hook whose notch vertex (3,1) is seen before (4,4) from the pivot:
    // the drawn polygon has area 10, the reordered one 14, the hull 16.
    let hook = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (3.0, 1.0), (0.0, 4.0)]);
    assert_eq!(raw_area(&hook), 10.0);
    let mut ordered = hook.clone();
    order_angular(&mut ordered);
    assert_eq!(
        ordered,
        pts(&[(0.0, 0.0), (4.0, 0.0), (3.0, 1.0), (4.0, 4.0), (0.0, 4.0)])
    );
    assert_eq!(raw_area(&ordered), 14.0);
}

fn polygon_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1.0e3..1.0e3f64, -1.0e3..1.0e3f64), 3..24)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

/// Scale of the shoelace terms, for a rounding-aware tolerance.
fn term_scale(p: &[Point]) -> f64 {
    let n = p.len();
    (0..n)
        .map(|i| {
            let q = p[(i + 1) % n];
            (p[i].x * q.y).abs() + (q.x * p[i].y).abs()
        })
        .sum::<f64>()
        + 1.0
}

fn close(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= 1e-12 * scale
}

proptest! {
    #[test]
    fn area_invariant_under_rotation(p in polygon_strategy(), k in 0usize..24) {
        let mut rotated = p.clone();
        let len = rotated.len();
        rotated.rotate_left(k % len);
        prop_assert!(close(raw_area(&p), raw_area(&rotated), term_scale(&p)));
        prop_assert!(close(perimeter(&p), perimeter(&rotated), perimeter(&p) + 1.0));
    }

    #[test]
    fn area_invariant_under_reversal(p in polygon_strategy()) {
        let mut reversed = p.clone();
        reversed.reverse();
        prop_assert!(close(raw_area(&p), raw_area(&reversed), term_scale(&p)));
        prop_assert!(raw_area(&p) >= 0.0);
    }

    #[test]
    fn ordering_is_a_permutation_starting_on_lowest_row(p in polygon_strategy()) {
        let mut ordered = p.clone();
        order_angular(&mut ordered);
        let key = |v: &Point| (v.x.to_bits(), v.y.to_bits());
        let mut a: Vec<_> = p.iter().map(key).collect();
        let mut b: Vec<_> = ordered.iter().map(key).collect();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
        let min_y = p.iter().map(|v| v.y).fold(f64::INFINITY, f64::min);
        prop_assert_eq!(ordered[0].y, min_y);
    }
}

/// Records `(level, target)` of every event emitted while it is the default.
#[derive(Clone, Default)]
struct EventLog(std::sync::Arc<std::sync::Mutex<Vec<(tracing::Level, String)>>>);

impl tracing::Subscriber for EventLog {
    fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
        true
    }
    fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        tracing::span::Id::from_u64(1)
    }
    fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}
    fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}
    fn event(&self, event: &tracing::Event<'_>) {
        let meta = event.metadata();
        self.0
            .lock()
            .unwrap()
            .push((*meta.level(), meta.target().to_owned()));
    }
    fn enter(&self, _: &tracing::span::Id) {}
    fn exit(&self, _: &tracing::span::Id) {}
}

#[test]
fn reorder_is_logged_at_debug() {
    let log = EventLog::default();
    let mut p = pts(&[(4.0, 3.0), (0.0, 0.0), (0.0, 3.0), (4.0, 0.0)]);
    tracing::subscriber::with_default(log.clone(), || order_angular(&mut p));
    let events = log.0.lock().unwrap();
    assert!(
        events
            .iter()
            .any(|(level, target)| *level == tracing::Level::DEBUG && target.ends_with("geom::order")),
        "{events:?}"
    );
}
