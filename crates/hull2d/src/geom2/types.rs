//! Basic 2D types and tolerances shared by both hull algorithms.
//!
//! - `HullCfg`: centralizes the orientation epsilon.
//! - `Turn`: classified sign of an orientation test.
//! - `Edge`: directed boundary candidate keyed by point indices.
//!
//! References
//! - Code cross-refs: `util::{orient, turn}`, `hull::brute`, `hull::half`

/// Hull configuration (tolerances).
///
/// `eps_orient` is the band `|orient| <= eps_orient` treated as collinear, in
/// units of the orientation determinant (twice a triangle area). The default
/// `0.0` gives exact sign predicates on the `f64` inputs (`orient_exact`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    pub eps_orient: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self { eps_orient: 0.0 }
    }
}

impl HullCfg {
    #[inline]
    pub fn with_eps(eps_orient: f64) -> Self {
        Self {
            eps_orient: eps_orient.abs(),
        }
    }
}

/// Direction of travel at the middle point of a triple `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Counter-clockwise (positive orientation).
    Left,
    /// Clockwise (negative orientation).
    Right,
    Collinear,
}

/// Directed edge `from → to` between two input points, stored by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    #[inline]
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}
