//! Lumen engine crate.
//!
//! CPU-side core of a small real-time renderer: transform math, stroke and
//! sprite tessellation into interleaved vertex batches, and fixed-step frame
//! scheduling. GPU upload and drawing sit behind [`render::VertexSink`].
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`linear`] | `Vec2`, `Vec3`, `Vec4`, `Matrix4`, projections |
//! | [`coords`] | `ColorRgba`, `Rect` |
//! | [`render`] | `VectorRenderer`, `SpriteBatch`, `VertexBatch`, `StrokeStyle` |
//! | [`time`] | `FrameClock`, `FixedStep`, `Scene` |
//! | [`logging`] | `init_logging` |

pub mod coords;
pub mod linear;
pub mod logging;
pub mod render;
pub mod time;
