//! Planar primitives for hull construction.
//!
//! Purpose
//! - One orientation convention for the whole crate: `cross(a, b) > 0` iff `b`
//!   is counter-clockwise from `a`, and `orient(a, b, c) > 0` iff the path
//!   `a → b → c` turns left at `b`.
//! - Keep the predicates tiny and explicit about tolerance (`HullCfg`).
//!
//! References
//! - Code cross-refs: `Turn`, `Edge`, `HullCfg`, `hull::{brute, half, split}`

pub mod rand;
mod types;
mod util;

pub use types::{Edge, HullCfg, Turn};
pub use util::{cross, distance, lex_cmp, orient, orient_exact, turn};
