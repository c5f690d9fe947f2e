//! Brute-force hull: enumerate boundary edges, then stitch them into a ring.
//!
//! A directed edge `p → q` is on the boundary iff no other point lies strictly
//! right of it. Along a support line holding several input points every
//! forward sub-edge passes that test; stitching keeps only the longest
//! outgoing edge per origin, which skips the non-corner points.

use nalgebra::Vector2;

use super::{ensure_not_collinear, extremes, prepare, Hull, HullError};
use crate::geom2::{distance, turn, Edge, HullCfg, Turn};

/// Brute-force hull with exact predicates.
pub fn brute_force_hull(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    brute_force_hull_with(points, HullCfg::default())
}

/// Brute-force hull, O(N³) edge tests.
pub fn brute_force_hull_with(points: &[Vector2<f64>], cfg: HullCfg) -> Result<Hull, HullError> {
    let idx = prepare(points)?;
    let (lo, hi) = extremes(points, &idx);
    ensure_not_collinear(points, &idx, lo, hi, cfg.eps_orient)?;
    let edges = boundary_edges(points, &idx, cfg.eps_orient);
    let ring = stitch(points, &edges, lo)?;
    Ok(Hull::from_indices(points, ring))
}

/// All directed edges between the given points with every other point on or
/// left of them.
///
/// Pairs are visited as `(i, i + j mod n)` for `j = 1..n`, so the recorded order
/// is deterministic in the input order.
pub(crate) fn boundary_edges(points: &[Vector2<f64>], idx: &[usize], eps: f64) -> Vec<Edge> {
    let n = idx.len();
    let mut edges = Vec::new();
    for i in 0..n {
        let p = points[idx[i]];
        for j in 1..n {
            let k = (i + j) % n;
            let q = points[idx[k]];
            let on_boundary = (0..n)
                .filter(|&r| r != i && r != k)
                .all(|r| turn(p, q, points[idx[r]], eps) != Turn::Right);
            if on_boundary {
                edges.push(Edge::new(idx[i], idx[k]));
            }
        }
    }
    edges
}

/// Walk longest outgoing edges from `start` until the ring closes.
///
/// The walk takes at most `edges.len()` steps; a dead end or a cycle that
/// misses `start` is reported as `OpenBoundary`.
pub(crate) fn stitch(
    points: &[Vector2<f64>],
    edges: &[Edge],
    start: usize,
) -> Result<Vec<usize>, HullError> {
    // longest outgoing edge per origin; ties keep the first recorded
    let mut best: Vec<Option<(usize, f64)>> = vec![None; points.len()];
    for e in edges {
        let len = distance(points[e.from], points[e.to]);
        match best[e.from] {
            Some((_, l)) if l >= len => {}
            _ => best[e.from] = Some((e.to, len)),
        }
    }
    let mut ring = vec![start];
    let mut cur = start;
    for _ in 0..edges.len() {
        let (next, _) = best[cur].ok_or(HullError::OpenBoundary { at: cur })?;
        tracing::trace!(from = cur, to = next, "stitch");
        if next == start {
            return Ok(ring);
        }
        ring.push(next);
        cur = next;
    }
    Err(HullError::OpenBoundary { at: cur })
}
