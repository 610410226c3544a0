//! Interleaved vertex format and the sink that consumes finished batches.

use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgba, Rect};
use crate::linear::Vec2;

/// Number of `f32`s in one [`StrokeVertex`].
pub const FLOATS_PER_VERTEX: usize = 8;

/// One vertex of a stroke or sprite quad: `x, y, u, v, r, g, b, a`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct StrokeVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

/// Description of one interleaved attribute, for the GPU layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: u32,
    /// Byte offset from the start of the vertex.
    pub offset: u64,
}

impl StrokeVertex {
    pub const ATTRIBUTES: [VertexAttribute; 3] = [
        VertexAttribute { location: 0, components: 2, offset: 0 },  // pos
        VertexAttribute { location: 1, components: 2, offset: 8 },  // uv
        VertexAttribute { location: 2, components: 4, offset: 16 }, // color
    ];

    /// Byte stride between consecutive vertices.
    pub const STRIDE: u64 = std::mem::size_of::<StrokeVertex>() as u64;

    #[inline]
    pub fn new(pos: Vec2, uv: [f32; 2], color: ColorRgba) -> Self {
        Self {
            pos: pos.to_array(),
            uv,
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::from(self.pos)
    }
}

/// Consumer of a finished triangle-list batch.
///
/// This is the seam to the GPU layer: an implementation uploads the
/// vertices and issues one draw call. Implementations must not retain the
/// slice; it is reused by the next batch.
pub trait VertexSink {
    fn submit(&mut self, vertices: &[StrokeVertex]);
}

impl<S: VertexSink + ?Sized> VertexSink for &mut S {
    #[inline]
    fn submit(&mut self, vertices: &[StrokeVertex]) {
        (**self).submit(vertices);
    }
}

/// In-memory sink recording each submitted batch as one draw call.
#[derive(Debug, Default, Clone)]
pub struct VertexCapture {
    draws: Vec<Vec<StrokeVertex>>,
}

impl VertexCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Batches in submission order.
    pub fn draws(&self) -> &[Vec<StrokeVertex>] {
        &self.draws
    }

    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.draws.iter().map(Vec::len).sum()
    }

    /// Flat float stream of every captured vertex.
    pub fn floats(&self) -> Vec<f32> {
        self.draws
            .iter()
            .flat_map(|d| bytemuck::cast_slice::<StrokeVertex, f32>(d).iter().copied())
            .collect()
    }

    /// Bounding rectangle of all captured positions.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.draws.iter().flatten().map(StrokeVertex::position))
    }

    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl VertexSink for VertexCapture {
    fn submit(&mut self, vertices: &[StrokeVertex]) {
        self.draws.push(vertices.to_vec());
    }
}
