//! Cubic Bezier splines flattened to polylines.

use crate::linear::Vec2;

use super::error::TessellationError;

/// Evaluates one cubic Bezier segment at `t` with the Bernstein basis.
#[inline]
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Number of samples [`flatten_cubic_spline`] writes for `control_points`
/// points at `segments` subdivisions per cubic.
pub fn spline_sample_count(control_points: usize, segments: u32) -> Result<usize, TessellationError> {
    if segments == 0 {
        return Err(TessellationError::InvalidSegments(segments));
    }
    let n = control_points;
    if n < 4 || (n - 1) % 3 != 0 {
        return Err(TessellationError::InvalidControlPointCount(n));
    }
    Ok(((n - 1) / 3).saturating_mul(segments as usize).saturating_add(1))
}

/// Flattens a chained cubic spline into `out`.
///
/// `control_points` holds `1 + 3k` points: segment `n` uses points
/// `3n ..= 3n + 3`, so neighbouring segments share an endpoint. Each segment
/// is sampled at `segments + 1` uniform parameters; the shared endpoint is
/// written once. `out` is cleared first.
pub fn flatten_cubic_spline(
    control_points: &[Vec2],
    segments: u32,
    out: &mut Vec<Vec2>,
) -> Result<(), TessellationError> {
    let samples = spline_sample_count(control_points.len(), segments)?;

    out.clear();
    out.reserve(samples);
    out.push(control_points[0]);

    for cubic in control_points.windows(4).step_by(3) {
        let [p0, p1, p2, p3] = [cubic[0], cubic[1], cubic[2], cubic[3]];
        for i in 1..=segments {
            let t = i as f32 / segments as f32;
            out.push(cubic_bezier(p0, p1, p2, p3, t));
        }
    }

    Ok(())
}
