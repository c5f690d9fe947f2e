use nalgebra::Vector2;

use crate::geom2::{turn, HullCfg, Turn};

/// Monotone half chain through a sentinel-extended, direction-sorted sequence.
///
/// `seq[0]` and `seq[len - 1]` are the sentinels; the points between them must
/// be sorted along the traversal direction. Returns positions into `seq`, from
/// the first sentinel to the last. Every interior chain vertex is a strict
/// right turn, so the chain runs clockwise around the points it encloses.
///
/// Scan: keep a stack-like chain and a cursor into the remaining points. While
/// the last triple is not a right turn, drop its middle point; otherwise
/// consume the next point. A chain that shrinks to two points immediately takes
/// the next point. Sequences of length <= 2 are returned unchanged.
pub fn half_hull(seq: &[Vector2<f64>], cfg: HullCfg) -> Vec<usize> {
    let n = seq.len();
    if n <= 2 {
        return (0..n).collect();
    }
    let mut chain: Vec<usize> = Vec::with_capacity(n);
    chain.extend([0, 1, 2]);
    let mut cursor = 3;
    loop {
        if chain.len() == 2 {
            if cursor == n {
                // only the bare segment between the sentinels survives
                break;
            }
            chain.push(cursor);
            cursor += 1;
        }
        let m = chain.len();
        let (a, b, c) = (seq[chain[m - 3]], seq[chain[m - 2]], seq[chain[m - 1]]);
        if turn(a, b, c, cfg.eps_orient) == Turn::Right {
            if cursor == n {
                break;
            }
            chain.push(cursor);
            cursor += 1;
        } else {
            chain.swap_remove(m - 2);
        }
    }
    chain
}
