use std::fmt;

/// Errors produced while tessellating into a vertex batch.
///
/// All variants are raised before any vertex of the offending primitive is
/// written, so the batch is left as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum TessellationError {
    /// Stroke width must be finite and greater than zero.
    InvalidWidth(f32),
    /// Curve subdivision count must be greater than zero.
    InvalidSegments(u32),
    /// A cubic spline needs `1 + 3k` control points with `k >= 1`.
    InvalidControlPointCount(usize),
    /// The batch cannot hold the primitive.
    CapacityExceeded { required: usize, capacity: usize },
}

impl fmt::Display for TessellationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TessellationError::InvalidWidth(w) => {
                write!(f, "stroke width {w} must be finite and > 0")
            }
            TessellationError::InvalidSegments(n) => {
                write!(f, "curve segment count {n} must be > 0")
            }
            TessellationError::InvalidControlPointCount(n) => {
                write!(f, "cubic spline needs 1 + 3k control points (k >= 1), got {n}")
            }
            TessellationError::CapacityExceeded { required, capacity } => {
                write!(f, "vertex batch overflow: {required} vertices required, capacity is {capacity}")
            }
        }
    }
}

impl std::error::Error for TessellationError {}
