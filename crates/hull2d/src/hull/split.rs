//! Divide-and-conquer hull over the line through the x-extremes.
//!
//! Model
//! - `left` is the lowest-leftmost point, `right` the highest-rightmost one.
//!   With these tie-breaks no upper point shares `right.x` and no lower point
//!   shares `left.x`, so both sorted half sequences approach their end
//!   sentinel monotonically.
//! - Points strictly above the split line go to the upper half, points strictly
//!   below to the lower half. Points on the line lie on the segment
//!   `left–right` and are dropped: they are never strict corners.
//! - Upper chain `left → right` by increasing x, lower chain `right → left` by
//!   decreasing x. Both are clockwise; the joined ring is flipped to
//!   counter-clockwise keeping `left` as its start.
//!
//! References
//! - Code cross-refs: `half::half_hull`, `SplitLine`

use std::iter::once;

use nalgebra::Vector2;

use super::half::half_hull;
use super::{ensure_not_collinear, extremes, prepare, Hull, HullError};
use crate::geom2::{lex_cmp, turn, HullCfg, Turn};

/// Non-vertical line `y = slope·x + intercept` through `left` and `right`.
///
/// Sides are classified with the same orientation predicate the half chains
/// use (`turn(left, right, p)`), not with the slope form: with `left.x <
/// right.x`, a left turn is above the line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitLine {
    pub left: Vector2<f64>,
    pub right: Vector2<f64>,
    pub slope: f64,
    pub intercept: f64,
}

/// Position of a point relative to a `SplitLine`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
    On,
}

impl SplitLine {
    /// Line through `left` and `right`; `VerticalSplit` if they share x.
    pub fn through(left: Vector2<f64>, right: Vector2<f64>) -> Result<Self, HullError> {
        if left.x == right.x {
            return Err(HullError::VerticalSplit);
        }
        let slope = (left.y - right.y) / (left.x - right.x);
        let intercept = left.y - slope * left.x;
        Ok(Self {
            left,
            right,
            slope,
            intercept,
        })
    }

    /// Height of the line at `x`.
    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Side of `p`; `eps` is the orientation band of `HullCfg`.
    #[inline]
    pub fn side(&self, p: Vector2<f64>, eps: f64) -> Side {
        let (lo, hi) = if self.left.x < self.right.x {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        };
        match turn(lo, hi, p, eps) {
            Turn::Left => Side::Above,
            Turn::Right => Side::Below,
            Turn::Collinear => Side::On,
        }
    }
}

/// Divide-and-conquer hull with exact predicates.
pub fn divide_and_conquer_hull(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    divide_and_conquer_hull_with(points, HullCfg::default())
}

/// Divide-and-conquer hull, O(N log N).
pub fn divide_and_conquer_hull_with(
    points: &[Vector2<f64>],
    cfg: HullCfg,
) -> Result<Hull, HullError> {
    let idx = prepare(points)?;
    let (left, right) = extremes(points, &idx);
    let line = SplitLine::through(points[left], points[right])?;
    ensure_not_collinear(points, &idx, left, right, cfg.eps_orient)?;

    let mut top = Vec::new();
    let mut bottom = Vec::new();
    for &k in &idx {
        if k == left || k == right {
            continue;
        }
        match line.side(points[k], cfg.eps_orient) {
            Side::Above => top.push(k),
            Side::Below => bottom.push(k),
            Side::On => {}
        }
    }
    top.sort_by(|&i, &j| lex_cmp(&points[i], &points[j]));
    bottom.sort_by(|&i, &j| lex_cmp(&points[j], &points[i]));
    tracing::trace!(
        slope = line.slope,
        intercept = line.intercept,
        top = top.len(),
        bottom = bottom.len(),
        "split"
    );

    let upper = chain(points, left, &top, right, cfg);
    let lower = chain(points, right, &bottom, left, cfg);
    let mut ring: Vec<usize> = upper[..upper.len() - 1]
        .iter()
        .chain(&lower[..lower.len() - 1])
        .copied()
        .collect();
    if ring.len() < 3 {
        return Err(HullError::DegenerateCollinear);
    }
    ring[1..].reverse();
    Ok(Hull::from_indices(points, ring))
}

/// Half chain `first → middle… → last`, mapped back to input indices.
fn chain(
    points: &[Vector2<f64>],
    first: usize,
    middle: &[usize],
    last: usize,
    cfg: HullCfg,
) -> Vec<usize> {
    let ext: Vec<usize> = once(first)
        .chain(middle.iter().copied())
        .chain(once(last))
        .collect();
    let seq: Vec<Vector2<f64>> = ext.iter().map(|&k| points[k]).collect();
    half_hull(&seq, cfg)
        .into_iter()
        .map(|pos| ext[pos])
        .collect()
}
