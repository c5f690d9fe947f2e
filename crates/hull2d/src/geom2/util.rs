use std::cmp::Ordering;

use nalgebra::Vector2;
use robust::Coord;

use super::types::Turn;

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Orientation of the triple `a → b → c`: `cross(b - a, c - a)`.
/// Positive is a left turn at `b`.
#[inline]
pub fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    cross(b - a, c - a)
}

/// Orientation determinant with an exact sign (Shewchuk's adaptive predicate).
///
/// The magnitude approximates `orient(a, b, c)`; the sign is exact for all
/// finite inputs, including the zero case.
#[inline]
pub fn orient_exact(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    robust::orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

/// Classify the triple `a → b → c` with a symmetric collinear band of width `eps`.
/// With `eps == 0.0` the classification is exact.
#[inline]
pub fn turn(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> Turn {
    let o = orient_exact(a, b, c);
    if o > eps {
        Turn::Left
    } else if o < -eps {
        Turn::Right
    } else {
        Turn::Collinear
    }
}

/// Euclidean distance.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Lexicographic order: x first, then y, via `partial_cmp`. Signed zeros
/// compare equal (duplicate collapse relies on it); NaN compares equal to
/// everything (inputs are validated finite upstream).
#[inline]
pub fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}
