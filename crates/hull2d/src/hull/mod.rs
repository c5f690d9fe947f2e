//! Convex hulls of finite planar point sets.
//!
//! Purpose
//! - Two independent constructions of the same hull, side by side:
//!   `brute` (edge enumeration, O(N³)) and `split` (divide and conquer over the
//!   line through the x-extremes, O(N log N)), the latter built on the
//!   monotone half chain in `half`.
//! - Both return the same `Hull` shape so callers and tests can compare them.
//!
//! Conventions
//! - Rings are counter-clockwise and start at the lowest-leftmost input point.
//! - Collinear boundary points that are not corners are excluded.
//! - Exact duplicates collapse onto their first occurrence before either
//!   algorithm runs; everything downstream is keyed by input index.
//!
//! References
//! - Code cross-refs: `geom2::{orient, turn, HullCfg}`, `HullError`

mod brute;
mod error;
mod half;
mod split;

pub use brute::{brute_force_hull, brute_force_hull_with};
pub use error::HullError;
pub use half::half_hull;
pub use split::{divide_and_conquer_hull, divide_and_conquer_hull_with, Side, SplitLine};

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::geom2::{cross, distance, lex_cmp, turn, HullCfg, Turn};

/// Ordered, implicitly closed hull ring.
///
/// Invariants:
/// - `indices[k]` is the input index of `vertices[k]`.
/// - Counter-clockwise, no repeated vertex, first vertex is the
///   lowest-leftmost input point.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    indices: Vec<usize>,
    vertices: Vec<Vector2<f64>>,
}

impl Hull {
    pub(crate) fn from_indices(points: &[Vector2<f64>], indices: Vec<usize>) -> Self {
        let vertices = indices.iter().map(|&k| points[k]).collect();
        Self { indices, vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Input indices of the hull vertices, in ring order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Vector2<f64>> {
        self.vertices
    }

    /// Ring edges including the closing edge `last → first`.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |k| (self.vertices[k], self.vertices[(k + 1) % n]))
    }

    /// Shoelace area; positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        0.5 * self.edges().map(|(p, q)| cross(p, q)).sum::<f64>()
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(p, q)| distance(p, q)).sum()
    }

    /// On-or-inside test: `p` is nowhere strictly right of an edge (beyond `eps`).
    /// Exact for `eps == 0.0`.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        !self.is_empty() && self.edges().all(|(a, b)| turn(a, b, p, eps) != Turn::Right)
    }

    /// Every corner is a strict left turn.
    pub fn is_strictly_convex(&self, eps: f64) -> bool {
        let n = self.vertices.len();
        n >= 3
            && (0..n).all(|k| {
                let a = self.vertices[k];
                let b = self.vertices[(k + 1) % n];
                let c = self.vertices[(k + 2) % n];
                turn(a, b, c, eps) == Turn::Left
            })
    }

    /// Same vertex cycle (same winding), up to the choice of start vertex.
    pub fn same_ring(&self, other: &Hull) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        (0..n).any(|shift| (0..n).all(|k| self.vertices[k] == other.vertices[(k + shift) % n]))
    }
}

/// Hull construction selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BruteForce,
    DivideAndConquer,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::BruteForce, Algorithm::DivideAndConquer];

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute",
            Algorithm::DivideAndConquer => "split",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized algorithm name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown hull algorithm `{0}` (expected `brute` or `split`)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brute" | "brute-force" | "slow" => Ok(Algorithm::BruteForce),
            "split" | "divide-and-conquer" | "dc" => Ok(Algorithm::DivideAndConquer),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Compute the hull of `points` with the selected algorithm.
pub fn convex_hull(
    points: &[Vector2<f64>],
    algo: Algorithm,
    cfg: HullCfg,
) -> Result<Hull, HullError> {
    let res = match algo {
        Algorithm::BruteForce => brute_force_hull_with(points, cfg),
        Algorithm::DivideAndConquer => divide_and_conquer_hull_with(points, cfg),
    };
    match &res {
        Ok(h) => tracing::debug!(algo = algo.name(), n = points.len(), vertices = h.len(), "hull"),
        Err(e) => tracing::debug!(algo = algo.name(), n = points.len(), error = %e, "hull_failed"),
    }
    res
}

/// Validate input and collapse exact duplicates.
///
/// Returns the surviving input indices in input order; each duplicate group is
/// represented by its first occurrence.
pub(crate) fn prepare(points: &[Vector2<f64>]) -> Result<Vec<usize>, HullError> {
    if points.len() < 3 {
        return Err(HullError::InsufficientPoints { got: points.len() });
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| lex_cmp(&points[i], &points[j]).then(i.cmp(&j)));
    let mut keep = vec![false; points.len()];
    let mut run_head: Option<usize> = None;
    for &i in &order {
        match run_head {
            Some(h) if points[h] == points[i] => {}
            _ => {
                keep[i] = true;
                run_head = Some(i);
            }
        }
    }
    Ok((0..points.len()).filter(|&i| keep[i]).collect())
}

/// Lowest-leftmost and highest-rightmost of the given indices.
pub(crate) fn extremes(points: &[Vector2<f64>], idx: &[usize]) -> (usize, usize) {
    let mut lo = idx[0];
    let mut hi = idx[0];
    for &k in &idx[1..] {
        if lex_cmp(&points[k], &points[lo]).is_lt() {
            lo = k;
        }
        if lex_cmp(&points[k], &points[hi]).is_gt() {
            hi = k;
        }
    }
    (lo, hi)
}

/// Reject point sets without a single strict turn against the extreme pair.
pub(crate) fn ensure_not_collinear(
    points: &[Vector2<f64>],
    idx: &[usize],
    lo: usize,
    hi: usize,
    eps: f64,
) -> Result<(), HullError> {
    let (a, b) = (points[lo], points[hi]);
    if idx.len() < 3 || idx.iter().all(|&k| turn(a, b, points[k], eps) == Turn::Collinear) {
        return Err(HullError::DegenerateCollinear);
    }
    Ok(())
}
