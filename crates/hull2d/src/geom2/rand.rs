//! Random planar point sets (uniform box / uniform disk + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for hull inputs used by the CLI,
//!   the demo and the benchmarks. Draws are reproducible from `(seed, index)`.
//!
//! Model
//! - Box: independent uniform coordinates on `[min, max)` per axis. The default
//!   bounds are the unit square.
//! - Disk: uniform area density via `r = R·sqrt(u)`.
//!
//! References
//! - Code cross-refs: `hull::convex_hull`, `benches/hull_bench.rs`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Axis-aligned sampling box `[min.x, max.x) × [min.y, max.y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min: Vector2::new(0.0, 0.0),
            max: Vector2::new(1.0, 1.0),
        }
    }
}

impl Bounds2 {
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// The token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `n` points uniformly from `bounds`.
///
/// Degenerate bounds (`max <= min` on an axis) collapse that axis to `min`.
pub fn draw_points_uniform(n: usize, bounds: Bounds2, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let span = Vector2::new(
        (bounds.max.x - bounds.min.x).max(0.0),
        (bounds.max.y - bounds.min.y).max(0.0),
    );
    (0..n)
        .map(|_| {
            let u: f64 = rng.gen();
            let v: f64 = rng.gen();
            Vector2::new(bounds.min.x + u * span.x, bounds.min.y + v * span.y)
        })
        .collect()
}

/// Draw `n` points uniformly (by area) from the disk of `radius` around the origin.
pub fn draw_points_disk(n: usize, radius: f64, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let r0 = radius.abs();
    (0..n)
        .map(|_| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = r0 * rng.gen::<f64>().sqrt();
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}
