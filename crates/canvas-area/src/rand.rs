//! Random traced polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for user-like traces: a star-shaped polygon around
//!   a center, optionally shuffled to mimic out-of-order tracing. Used by the
//!   seeded tests and the benchmarks.
//!
//! Model
//! - `n` equally spaced angles on [0, 2π), bounded angular and radial jitter,
//!   then a translation to `center`. The vertices come out in counterclockwise
//!   order unless `shuffle` is set.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    /// Inclusive `(lo, hi)` range, never below a triangle.
    fn bounds(self) -> (usize, usize) {
        match self {
            VertexCount::Fixed(n) => (n.max(3), n.max(3)),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                (lo, max.max(lo))
            }
        }
    }
}

/// Trace sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TraceCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Pixel-space center of the trace.
    pub center: (f64, f64),
    /// Return the vertices in random order.
    pub shuffle: bool,
}

impl Default for TraceCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 100.0,
            center: (400.0, 300.0),
            shuffle: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

// SplitMix64 finalizer.
fn splitmix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

/// Draw one trace, star-shaped around `cfg.center`.
pub fn draw_trace(cfg: TraceCfg, tok: ReplayToken) -> Vec<Point> {
    let key = splitmix(tok.seed ^ splitmix(tok.index.wrapping_add(0x9e3779b97f4a7c15)));
    let mut rng = StdRng::seed_from_u64(key);
    let n = match cfg.vertex_count.bounds() {
        (lo, hi) if lo == hi => lo,
        (lo, hi) => rng.gen_range(lo..=hi),
    };
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let mut pts: Vec<Point> = (0..n)
        .map(|k| {
            let th = (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            Point::new(cfg.center.0 + th.cos() * r, cfg.center.1 + th.sin() * r)
        })
        .collect();
    if cfg.shuffle {
        pts.shuffle(&mut rng);
    }
    pts
}
