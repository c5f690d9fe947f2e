//! Run both hull constructions on one random point set and print the rings.
//!
//! Usage:
//!   cargo run -p hull2d --example compare_algorithms -- [n] [seed]
//!
//! Mirrors the "draw N uniform points, hull them twice" demo: the output is the
//! vertex list a plotting tool would overlay on the input cloud.

use std::time::Instant;

use hull2d::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(8);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let points = draw_points_uniform(n, Bounds2::default(), ReplayToken::new(seed, 0));

    for algo in Algorithm::ALL {
        let start = Instant::now();
        let res = convex_hull(&points, algo, HullCfg::default());
        let ms = start.elapsed().as_secs_f64() * 1e3;
        match res {
            Ok(h) => {
                println!(
                    "algo={algo} n={n} vertices={} area={:.6} time_ms={ms:.3}",
                    h.len(),
                    h.signed_area()
                );
                for v in h.vertices() {
                    println!("  ({:.6}, {:.6})", v.x, v.y);
                }
            }
            Err(e) => println!("algo={algo} n={n} error={e}"),
        }
    }
}
