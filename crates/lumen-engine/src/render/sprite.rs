use crate::coords::{ColorRgba, Rect};
use crate::linear::Vec2;

use super::batch::VertexBatch;
use super::error::TessellationError;
use super::vertex::{StrokeVertex, VertexSink};

/// Batches axis-aligned textured quads in the stroke vertex format.
///
/// UVs span the full texture with `(0, 1)` at the rectangle's origin corner.
/// A negative width or height places the far corner before the origin, which
/// mirrors the texture along that axis.
#[derive(Debug, Default)]
pub struct SpriteBatch {
    batch: VertexBatch,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            batch: VertexBatch::with_capacity(max_vertices),
        }
    }

    pub fn begin(&mut self) -> &mut Self {
        self.batch.begin();
        self
    }

    pub fn end<S: VertexSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        self.batch.flush(sink)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.batch.len()
    }

    #[inline]
    pub fn vertices(&self) -> &[StrokeVertex] {
        self.batch.vertices()
    }

    /// Emits one quad from `rect.origin` to `rect.max()`, extents taken as
    /// given.
    pub fn draw_rectangle(
        &mut self,
        rect: Rect,
        color: ColorRgba,
    ) -> Result<&mut Self, TessellationError> {
        let Vec2 { x: x0, y: y0 } = rect.min();
        let Vec2 { x: x1, y: y1 } = rect.max();

        self.batch.write(&[
            StrokeVertex::new(Vec2::new(x0, y0), [0.0, 1.0], color),
            StrokeVertex::new(Vec2::new(x1, y1), [1.0, 0.0], color),
            StrokeVertex::new(Vec2::new(x1, y0), [1.0, 1.0], color),
            StrokeVertex::new(Vec2::new(x0, y0), [0.0, 1.0], color),
            StrokeVertex::new(Vec2::new(x0, y1), [0.0, 0.0], color),
            StrokeVertex::new(Vec2::new(x1, y1), [1.0, 0.0], color),
        ])?;
        Ok(self)
    }
}
