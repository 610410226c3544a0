use crate::coords::ColorRgba;
use crate::linear::Vec2;

use super::batch::VertexBatch;
use super::curve::{flatten_cubic_spline, spline_sample_count};
use super::error::TessellationError;
use super::style::{LineCap, StrokeStyle, DEFAULT_MITER_THRESHOLD};
use super::vertex::{StrokeVertex, VertexSink};

const QUAD_VERTICES: usize = 6;
const JOIN_VERTICES: usize = 6;

/// Tessellates thick lines, line strips and cubic splines into a triangle list.
///
/// Geometry is a ribbon of constant width: one quad (two triangles) per
/// segment, plus a bevel join (two triangles) at every interior corner when
/// `linecap` is [`LineCap::Bevel`].
///
/// Usage per frame:
///
/// ```
/// use lumen_engine::linear::Vec2;
/// use lumen_engine::render::{StrokeStyle, VectorRenderer, VertexCapture};
///
/// let mut vector = VectorRenderer::new();
/// let mut gpu = VertexCapture::new();
///
/// let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
/// vector.begin();
/// vector.draw_line_strip(&points, &StrokeStyle::new(2.0)).unwrap();
/// assert_eq!(vector.end(&mut gpu), 18);
/// ```
///
/// Consecutive duplicate points have no direction; they produce non-finite
/// vertices and must be filtered by the caller.
#[derive(Debug, Default)]
pub struct VectorRenderer {
    batch: VertexBatch,
    /// Reused sample buffer for spline flattening.
    scratch: Vec<Vec2>,
    warned_miter: bool,
}

impl VectorRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer whose batch holds at most `max_vertices`.
    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            batch: VertexBatch::with_capacity(max_vertices),
            ..Self::default()
        }
    }

    /// Starts a new batch, discarding anything not yet flushed.
    pub fn begin(&mut self) -> &mut Self {
        self.batch.begin();
        self
    }

    /// Submits the batch to `sink`. Returns the number of vertices submitted;
    /// an empty batch submits nothing.
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

    #[inline]
    pub fn capacity(&self) -> usize {
        self.batch.capacity()
    }

    /// A single segment from `start` to `end`. Joins and `looped` do not apply.
    pub fn draw_line(
        &mut self,
        start: Vec2,
        end: Vec2,
        style: &StrokeStyle,
    ) -> Result<&mut Self, TessellationError> {
        style.validate_width()?;
        self.batch.reserve(QUAD_VERTICES)?;

        let perp = offset(start, end, style.half_width());
        self.batch.push(&quad(start, end, perp, style.color));
        Ok(self)
    }

    /// An open or closed polyline through `points`.
    ///
    /// Fewer than two points draws nothing. A loop needs at least three
    /// points; with two it is drawn open.
    pub fn draw_line_strip(
        &mut self,
        points: &[Vec2],
        style: &StrokeStyle,
    ) -> Result<&mut Self, TessellationError> {
        if points.len() < 2 {
            return Ok(self);
        }
        style.validate_width()?;
        self.batch.reserve(strip_vertex_count(points.len(), style))?;
        self.note_miter_threshold(style);

        let n = points.len();
        let half_width = style.half_width();
        let bevel = style.linecap == LineCap::Bevel;
        let color = style.color;

        for i in 0..n - 1 {
            let start = points[i];
            let end = points[i + 1];
            let perp = offset(start, end, half_width);

            self.batch.push(&quad(start, end, perp, color));

            if bevel && i + 2 < n {
                let next = offset(end, points[i + 2], half_width);
                self.batch.push(&join(end, perp, next, color));
            }
        }

        if style.looped && n > 2 {
            let first = points[0];
            let last = points[n - 1];
            let wrap = offset(last, first, half_width);

            self.batch.push(&quad(last, first, wrap, color));

            if bevel {
                let prev = offset(points[n - 2], last, half_width);
                self.batch.push(&join(last, prev, wrap, color));

                let next = offset(first, points[1], half_width);
                self.batch.push(&join(first, wrap, next, color));
            }
        }

        Ok(self)
    }

    /// A chained cubic Bezier spline through `control_points` (`1 + 3k`
    /// points), flattened with `style.segments` subdivisions per cubic and
    /// stroked as a line strip.
    ///
    /// Capacity is checked from the sample count before any point is
    /// evaluated.
    pub fn draw_bezier_spline(
        &mut self,
        control_points: &[Vec2],
        style: &StrokeStyle,
    ) -> Result<&mut Self, TessellationError> {
        style.validate_width()?;
        let sample_count = spline_sample_count(control_points.len(), style.segments)?;
        self.batch.reserve(strip_vertex_count(sample_count, style))?;

        let mut samples = std::mem::take(&mut self.scratch);
        let result = flatten_cubic_spline(control_points, style.segments, &mut samples)
            .and_then(|()| self.draw_line_strip(&samples, style).map(|_| ()));
        self.scratch = samples;

        result.map(|()| self)
    }

    fn note_miter_threshold(&mut self, style: &StrokeStyle) {
        if !self.warned_miter && style.miter_threshold != DEFAULT_MITER_THRESHOLD {
            log::debug!("VectorRenderer: miter_threshold is not used by bevel/none joins; ignored");
            self.warned_miter = true;
        }
    }
}

/// Vertices a line strip of `points` emits under `style`.
pub fn strip_vertex_count(points: usize, style: &StrokeStyle) -> usize {
    if points < 2 {
        return 0;
    }
    let bevel = style.linecap == LineCap::Bevel;
    let looped = style.looped && points > 2;

    let mut quads = points - 1;
    let mut joins = if bevel { points - 2 } else { 0 };
    if looped {
        quads += 1;
        if bevel {
            joins += 2;
        }
    }
    quads
        .saturating_mul(QUAD_VERTICES)
        .saturating_add(joins.saturating_mul(JOIN_VERTICES))
}

/// Left-hand half-width offset of the segment `start -> end`.
#[inline]
fn offset(start: Vec2, end: Vec2, half_width: f32) -> Vec2 {
    (end - start).normalize().perpendicular_left() * half_width
}

#[inline]
fn quad(start: Vec2, end: Vec2, perp: Vec2, color: ColorRgba) -> [StrokeVertex; QUAD_VERTICES] {
    [
        StrokeVertex::new(start - perp, [0.0, 1.0], color),
        StrokeVertex::new(end + perp, [1.0, 0.0], color),
        StrokeVertex::new(end - perp, [1.0, 1.0], color),
        StrokeVertex::new(start - perp, [0.0, 1.0], color),
        StrokeVertex::new(start + perp, [0.0, 0.0], color),
        StrokeVertex::new(end + perp, [1.0, 0.0], color),
    ]
}

/// Bevel filler at `corner` between the incoming offset `prev` and the
/// outgoing offset `next`, one triangle per side.
#[inline]
fn join(corner: Vec2, prev: Vec2, next: Vec2, color: ColorRgba) -> [StrokeVertex; JOIN_VERTICES] {
    [
        StrokeVertex::new(corner, [1.0, 0.0], color),
        StrokeVertex::new(corner - next, [1.0, 1.0], color),
        StrokeVertex::new(corner - prev, [0.0, 1.0], color),
        StrokeVertex::new(corner, [0.0, 1.0], color),
        StrokeVertex::new(corner + prev, [0.0, 0.0], color),
        StrokeVertex::new(corner + next, [1.0, 0.0], color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{VertexCapture, MAX_VERTICES};

    const EPS: f32 = 1e-5;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    fn square() -> [Vec2; 4] {
        [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)]
    }

    fn strip(points: &[Vec2], style: StrokeStyle) -> Vec<StrokeVertex> {
        let mut r = VectorRenderer::new();
        r.begin().draw_line_strip(points, &style).unwrap();
        r.vertices().to_vec()
    }

    // ── single segment ────────────────────────────────────────────────────

    #[test]
    fn line_emits_one_quad_of_stroke_width() {
        let mut r = VectorRenderer::new();
        let mut sink = VertexCapture::new();
        r.begin().draw_line(v(0.0, 0.0), v(10.0, 0.0), &StrokeStyle::new(4.0)).unwrap();
        assert_eq!(r.end(&mut sink), 6);

        let b = sink.bounds().unwrap();
        assert_eq!(b.size, v(10.0, 4.0));
        assert_eq!(b.origin, v(0.0, -2.0));
    }

    #[test]
    fn diagonal_segment_width_is_perpendicular() {
        let (p0, p1) = (v(1.0, 1.0), v(4.0, 5.0));
        let width = 3.0;
        let verts = strip(&[p0, p1], StrokeStyle::new(width));
        assert_eq!(verts.len(), 6);

        let normal = (p1 - p0).normalize().perpendicular_left();
        let dist: Vec<f32> = verts.iter().map(|vx| (vx.position() - p0).dot(normal)).collect();
        let lo = dist.iter().copied().fold(f32::INFINITY, f32::min);
        let hi = dist.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!((hi - lo - width).abs() < EPS);
        assert!((hi + lo).abs() < EPS);
    }

    #[test]
    fn quad_layout_and_color() {
        let red = ColorRgba::new(1.0, 0.0, 0.0, 0.5);
        let verts = strip(&[v(0.0, 0.0), v(2.0, 0.0)], StrokeStyle::new(2.0).with_color(red));

        // perp = (0, 1)
        let expected = [
            ([0.0, -1.0], [0.0, 1.0]),
            ([2.0, 1.0], [1.0, 0.0]),
            ([2.0, -1.0], [1.0, 1.0]),
            ([0.0, -1.0], [0.0, 1.0]),
            ([0.0, 1.0], [0.0, 0.0]),
            ([2.0, 1.0], [1.0, 0.0]),
        ];
        for (vx, (pos, uv)) in verts.iter().zip(expected) {
            assert_eq!(vx.pos, pos);
            assert_eq!(vx.uv, uv);
            assert_eq!(vx.color, [1.0, 0.0, 0.0, 0.5]);
        }
    }

    // ── strips and joins ──────────────────────────────────────────────────

    #[test]
    fn open_strip_vertex_counts() {
        let pts = [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0)];
        assert_eq!(strip(&pts, StrokeStyle::default()).len(), 18);
        assert_eq!(strip(&pts, StrokeStyle::default().with_linecap(LineCap::None)).len(), 12);
    }

    #[test]
    fn looped_strip_adds_wrap_segment_and_seam_joins() {
        let pts = square();
        let open_bevel = strip(&pts, StrokeStyle::default()).len();
        let loop_bevel = strip(&pts, StrokeStyle::default().with_loop(true)).len();
        assert_eq!(open_bevel, 3 * 6 + 2 * 6);
        assert_eq!(loop_bevel, open_bevel + 6 + 2 * 6);

        let none = StrokeStyle::default().with_linecap(LineCap::None);
        assert_eq!(strip(&pts, none.with_loop(true)).len(), strip(&pts, none).len() + 6);
    }

    #[test]
    fn loop_with_two_points_is_open() {
        let pts = [v(0.0, 0.0), v(1.0, 0.0)];
        assert_eq!(strip(&pts, StrokeStyle::default().with_loop(true)).len(), 6);
    }

    #[test]
    fn strip_count_matches_emission() {
        for n in 2..7 {
            let pts: Vec<Vec2> = (0..n).map(|i| v(i as f32, (i * i) as f32)).collect();
            for style in [
                StrokeStyle::default(),
                StrokeStyle::default().with_loop(true),
                StrokeStyle::default().with_linecap(LineCap::None),
                StrokeStyle::default().with_linecap(LineCap::None).with_loop(true),
            ] {
                assert_eq!(strip(&pts, style).len(), strip_vertex_count(n, &style));
            }
        }
    }

    #[test]
    fn bevel_join_spans_both_offsets() {
        // Right-angle turn at (10, 0): incoming perp (0, 1), outgoing perp (-1, 0).
        let verts = strip(&[v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0)], StrokeStyle::new(2.0));
        let join: Vec<[f32; 2]> = verts[6..12].iter().map(|vx| vx.pos).collect();
        assert_eq!(
            join,
            vec![[10.0, 0.0], [11.0, 0.0], [10.0, -1.0], [10.0, 0.0], [10.0, 1.0], [9.0, 0.0]]
        );
    }

    #[test]
    fn seam_joins_sit_on_last_and_first_points() {
        let pts = square();
        let verts = strip(&pts, StrokeStyle::new(2.0).with_loop(true));
        // 3 quads + 2 joins interleaved, then wrap quad, then two seam joins.
        let seam_last = &verts[verts.len() - 12];
        let seam_first = &verts[verts.len() - 6];
        assert_eq!(seam_last.position(), pts[3]);
        assert_eq!(seam_first.position(), pts[0]);
    }

    #[test]
    fn fewer_than_two_points_draws_nothing() {
        let mut r = VectorRenderer::new();
        let mut sink = VertexCapture::new();
        r.begin().draw_line_strip(&[v(1.0, 1.0)], &StrokeStyle::default()).unwrap();
        r.draw_line_strip(&[], &StrokeStyle::default()).unwrap();
        assert_eq!(r.end(&mut sink), 0);
        assert_eq!(sink.draw_count(), 0);
    }

    #[test]
    fn duplicate_points_are_not_finite() {
        let verts = strip(&[v(1.0, 1.0), v(1.0, 1.0)], StrokeStyle::default());
        assert!(verts.iter().any(|vx| !vx.position().is_finite()));
    }

    // ── curves ────────────────────────────────────────────────────────────

    #[test]
    fn bezier_spline_strokes_flattened_samples() {
        let ctrl = [v(0.0, 0.0), v(0.0, 10.0), v(10.0, 10.0), v(10.0, 0.0)];
        let style = StrokeStyle::new(1.0).with_segments(8);
        let mut r = VectorRenderer::new();
        r.begin().draw_bezier_spline(&ctrl, &style).unwrap();

        assert_eq!(r.vertex_count(), strip_vertex_count(9, &style));
        // The first quad starts at the first control point.
        let first = r.vertices()[0].position();
        assert!(((first - ctrl[0]).length() - 0.5).abs() < EPS);
    }

    #[test]
    fn bezier_spline_rejects_invalid_input() {
        let mut r = VectorRenderer::new();
        r.begin();
        let ctrl = [v(0.0, 0.0), v(1.0, 1.0), v(2.0, 0.0)];
        assert_eq!(
            r.draw_bezier_spline(&ctrl, &StrokeStyle::default()).err(),
            Some(TessellationError::InvalidControlPointCount(3))
        );

        let ctrl = [v(0.0, 0.0), v(1.0, 1.0), v(2.0, 1.0), v(3.0, 0.0)];
        assert_eq!(
            r.draw_bezier_spline(&ctrl, &StrokeStyle::default().with_segments(0)).err(),
            Some(TessellationError::InvalidSegments(0))
        );
        assert_eq!(r.vertex_count(), 0);
    }

    #[test]
    fn oversized_spline_fails_before_sampling() {
        let ctrl = [v(0.0, 0.0), v(0.0, 10.0), v(10.0, 10.0), v(10.0, 0.0)];
        let style = StrokeStyle::default().with_segments(20_000_000);
        let mut r = VectorRenderer::new();
        let err = r.begin().draw_bezier_spline(&ctrl, &style).err();

        assert_eq!(
            err,
            Some(TessellationError::CapacityExceeded { required: 239_999_994, capacity: MAX_VERTICES })
        );
        assert_eq!(r.vertex_count(), 0);
        assert_eq!(r.scratch.capacity(), 0);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn invalid_width_fails_fast() {
        let mut r = VectorRenderer::new();
        let err = r.begin().draw_line(v(0.0, 0.0), v(1.0, 0.0), &StrokeStyle::new(0.0)).err();
        assert_eq!(err, Some(TessellationError::InvalidWidth(0.0)));
        assert_eq!(r.vertex_count(), 0);
    }

    #[test]
    fn capacity_is_checked_per_stroke() {
        let mut r = VectorRenderer::with_capacity(12);
        let pts = [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0)];
        let err = r.begin().draw_line_strip(&pts, &StrokeStyle::default()).err();
        assert_eq!(err, Some(TessellationError::CapacityExceeded { required: 18, capacity: 12 }));
        assert_eq!(r.vertex_count(), 0);

        // The same strip without joins fits exactly.
        let none = StrokeStyle::default().with_linecap(LineCap::None);
        r.draw_line_strip(&pts, &none).unwrap();
        assert_eq!(r.vertex_count(), 12);
    }

    #[test]
    fn default_batch_fills_then_overflows() {
        let mut r = VectorRenderer::new();
        let style = StrokeStyle::default();
        r.begin();
        for _ in 0..MAX_VERTICES / 6 {
            r.draw_line(v(0.0, 0.0), v(1.0, 0.0), &style).unwrap();
        }
        assert!(matches!(
            r.draw_line(v(0.0, 0.0), v(1.0, 0.0), &style),
            Err(TessellationError::CapacityExceeded { .. })
        ));
        assert_eq!(r.vertex_count(), (MAX_VERTICES / 6) * 6);
    }

    // ── batching ──────────────────────────────────────────────────────────

    #[test]
    fn begin_discards_unflushed_batch() {
        let mut r = VectorRenderer::new();
        let mut sink = VertexCapture::new();
        r.begin().draw_line(v(0.0, 0.0), v(1.0, 0.0), &StrokeStyle::default()).unwrap();
        r.begin().draw_line(v(0.0, 0.0), v(0.0, 1.0), &StrokeStyle::default()).unwrap();
        assert_eq!(r.end(&mut sink), 6);
        assert_eq!(sink.draw_count(), 1);
    }
}
