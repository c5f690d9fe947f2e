/// Errors reported by the hull algorithms.
///
/// Points lying exactly on the divide-and-conquer split line are not an error:
/// they are dropped from both partitions and can never be strict hull corners.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than three points were supplied.
    #[error("at least 3 points are required, got {got}")]
    InsufficientPoints { got: usize },
    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    /// All distinct points lie on one line (or fewer than three are distinct).
    #[error("all points are collinear")]
    DegenerateCollinear,
    /// All points share one x-coordinate, so the split line has no slope.
    #[error("all points share one x-coordinate; the split line is vertical")]
    VerticalSplit,
    /// Recorded boundary edges did not close into a ring.
    #[error("boundary edges do not close into a polygon (stuck at point {at})")]
    OpenBoundary { at: usize },
}
