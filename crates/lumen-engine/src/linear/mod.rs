//! Linear algebra for transforms and stroke geometry.
//!
//! Conventions:
//! - `Matrix4` is row-major, translation in row 3
//! - `Matrix4::transform` dots each column against the vector
//! - angles are radians, right-handed, counter-clockwise looking down the axis
//!   toward the origin

mod error;
mod matrix4;
mod vec2;
mod vec3;
mod vec4;

pub use error::{ProjectionAxis, ProjectionError};
pub use matrix4::{det2, det3, Matrix4};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
