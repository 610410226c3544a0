use super::error::TessellationError;
use super::vertex::{StrokeVertex, VertexSink, FLOATS_PER_VERTEX};

/// Size of the float buffer backing one batch.
pub const MAX_VERTEX_DATA_LENGTH: usize = 65535;

/// Vertices that fit in one batch (`65535 / 8`).
pub const MAX_VERTICES: usize = MAX_VERTEX_DATA_LENGTH / FLOATS_PER_VERTEX;

/// Fixed-capacity vertex buffer with a write cursor.
///
/// Lifecycle per frame: [`begin`](Self::begin) resets the cursor,
/// [`write`](Self::write) appends a primitive's vertices (or fails without
/// writing any), and [`flush`](Self::flush) hands the written range to a
/// [`VertexSink`]. The length never exceeds the capacity.
///
/// Allocation happens once, at construction; the buffer is reused afterwards.
#[derive(Debug)]
pub struct VertexBatch {
    vertices: Vec<StrokeVertex>,
    capacity: usize,
}

impl Default for VertexBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::with_capacity(MAX_VERTICES)
    }

    /// Creates a batch holding at most `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.vertices.len())
    }

    /// Written vertices, in emission order.
    #[inline]
    pub fn vertices(&self) -> &[StrokeVertex] {
        &self.vertices
    }

    /// Resets the cursor. Keeps the allocation.
    #[inline]
    pub fn begin(&mut self) {
        self.vertices.clear();
    }

    /// Appends `vertices` as one unit: all of them, or none when they do not
    /// fit.
    pub fn write(&mut self, vertices: &[StrokeVertex]) -> Result<(), TessellationError> {
        self.reserve(vertices.len())?;
        self.vertices.extend_from_slice(vertices);
        Ok(())
    }

    /// Checks that `count` more vertices fit.
    pub(crate) fn reserve(&mut self, count: usize) -> Result<(), TessellationError> {
        let required = self.vertices.len().saturating_add(count);
        if required > self.capacity {
            log::warn!(
                "vertex batch overflow: {} + {} > {}",
                self.vertices.len(),
                count,
                self.capacity
            );
            return Err(TessellationError::CapacityExceeded {
                required,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Appends vertices already accounted for by [`reserve`](Self::reserve).
    ///
    /// Panics if they were not.
    #[inline]
    pub(crate) fn push(&mut self, vertices: &[StrokeVertex]) {
        assert!(
            self.vertices.len() + vertices.len() <= self.capacity,
            "VertexBatch::push without a matching reserve"
        );
        self.vertices.extend_from_slice(vertices);
    }

    /// Submits the written range to `sink` and returns its vertex count.
    ///
    /// Does nothing (and returns 0) when no vertices were written.
    pub fn flush<S: VertexSink + ?Sized>(&self, sink: &mut S) -> usize {
        if self.vertices.is_empty() {
            return 0;
        }
        log::trace!("flushing {} vertices", self.vertices.len());
        sink.submit(&self.vertices);
        self.vertices.len()
    }
}
