use std::fmt;

/// Axis of a projection volume.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ProjectionAxis {
    X,
    Y,
    Z,
}

impl fmt::Display for ProjectionAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProjectionAxis::X => "x (left/right)",
            ProjectionAxis::Y => "y (bottom/top)",
            ProjectionAxis::Z => "z (near/far)",
        };
        f.write_str(name)
    }
}

/// Errors produced by the projection factories on [`Matrix4`](super::Matrix4).
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// The view box has zero extent along `axis`.
    InvalidBounds { axis: ProjectionAxis },
    /// Vertical field of view outside `(0, π)`.
    InvalidFieldOfView(f32),
    /// Aspect ratio not positive and finite.
    InvalidAspectRatio(f32),
    /// Depth range must satisfy `0 < near < far`.
    InvalidDepthRange { near: f32, far: f32 },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::InvalidBounds { axis } => {
                write!(f, "invalid projection bounds: zero extent on {axis}")
            }
            ProjectionError::InvalidFieldOfView(fov) => {
                write!(f, "field of view {fov} rad is outside (0, π)")
            }
            ProjectionError::InvalidAspectRatio(aspect) => {
                write!(f, "aspect ratio {aspect} must be positive and finite")
            }
            ProjectionError::InvalidDepthRange { near, far } => {
                write!(f, "invalid depth range near={near} far={far}; expected 0 < near < far")
            }
        }
    }
}

impl std::error::Error for ProjectionError {}
