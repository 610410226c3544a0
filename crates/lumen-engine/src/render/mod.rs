//! CPU-side geometry batching.
//!
//! Renderers tessellate into a fixed-capacity [`VertexBatch`] between
//! `begin()` and `end()`. `end()` hands the written vertices to a
//! [`VertexSink`], the seam to the GPU layer (upload + one triangle-list draw).
//!
//! Convention:
//! - every vertex is 8 floats: position.xy, texcoord.uv, color.rgba
//! - topology is a plain triangle list, six vertices per quad
//! - overflow is reported as [`TessellationError::CapacityExceeded`] and the
//!   offending primitive is not written

mod batch;
mod curve;
mod error;
mod sprite;
mod style;
mod vector;
mod vertex;

pub use batch::{VertexBatch, MAX_VERTEX_DATA_LENGTH, MAX_VERTICES};
pub use curve::{cubic_bezier, flatten_cubic_spline};
pub use error::TessellationError;
pub use sprite::SpriteBatch;
pub use style::{LineCap, StrokeStyle, DEFAULT_CURVE_SEGMENTS, DEFAULT_MITER_THRESHOLD};
pub use vector::{strip_vertex_count, VectorRenderer};
pub use vertex::{StrokeVertex, VertexAttribute, VertexCapture, VertexSink, FLOATS_PER_VERTEX};
