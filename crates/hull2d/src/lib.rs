//! Planar convex hulls, computed two independent ways.
//!
//! - `hull::brute_force_hull`: boundary-edge enumeration plus stitching, O(N³).
//! - `hull::divide_and_conquer_hull`: split by the line through the x-extremes,
//!   two monotone half chains, O(N log N).
//!
//! Both return a counter-clockwise `Hull` starting at the lowest-leftmost point,
//! or a `HullError` for inputs that do not span a polygon.
//!
//! ```
//! use hull2d::prelude::*;
//!
//! let pts = [
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(4.0, 0.0),
//!     Vec2::new(4.0, 4.0),
//!     Vec2::new(0.0, 4.0),
//!     Vec2::new(2.0, 2.0),
//! ];
//! let slow = brute_force_hull(&pts).unwrap();
//! let fast = divide_and_conquer_hull(&pts).unwrap();
//! assert_eq!(slow.indices(), &[0, 1, 2, 3]);
//! assert_eq!(slow, fast);
//! ```

pub mod geom2;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Edge, HullCfg, Turn};
pub use hull::{convex_hull, Algorithm, Hull, HullError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_points_disk, draw_points_uniform, Bounds2, ReplayToken};
    pub use crate::geom2::{cross, distance, orient, turn, HullCfg, Turn};
    pub use crate::hull::{
        brute_force_hull, convex_hull, divide_and_conquer_hull, Algorithm, Hull, HullError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
