use crate::coords::ColorRgba;

use super::error::TessellationError;

/// `cos(11°)`.
pub const DEFAULT_MITER_THRESHOLD: f32 = 0.981_627_2;

/// Default subdivision count per cubic spline segment.
pub const DEFAULT_CURVE_SEGMENTS: u32 = 16;

/// Geometry emitted where two stroke segments meet.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LineCap {
    /// No filler; sharp turns show a notch or overlap.
    None,
    /// Two triangles closing the gap on both sides of the corner.
    #[default]
    Bevel,
}

/// Stroke configuration.
///
/// `miter_threshold` (cosine of a corner angle) is carried for a future
/// miter join mode and does not affect bevel output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: ColorRgba,
    /// Close the path with a segment from the last point back to the first.
    pub looped: bool,
    pub linecap: LineCap,
    pub miter_threshold: f32,
    /// Subdivisions per cubic segment; curves only.
    pub segments: u32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: ColorRgba::white(),
            looped: false,
            linecap: LineCap::Bevel,
            miter_threshold: DEFAULT_MITER_THRESHOLD,
            segments: DEFAULT_CURVE_SEGMENTS,
        }
    }
}

impl StrokeStyle {
    pub fn new(width: f32) -> Self {
        Self { width, ..Self::default() }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_color(mut self, color: ColorRgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_loop(mut self, looped: bool) -> Self {
        self.looped = looped;
        self
    }

    pub fn with_linecap(mut self, linecap: LineCap) -> Self {
        self.linecap = linecap;
        self
    }

    pub fn with_miter_threshold(mut self, cos_angle: f32) -> Self {
        self.miter_threshold = cos_angle;
        self
    }

    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub(crate) fn validate_width(&self) -> Result<(), TessellationError> {
        if self.width > 0.0 && self.width.is_finite() {
            Ok(())
        } else {
            Err(TessellationError::InvalidWidth(self.width))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = StrokeStyle::default();
        assert_eq!(s.width, 1.0);
        assert_eq!(s.color, ColorRgba::white());
        assert!(!s.looped);
        assert_eq!(s.linecap, LineCap::Bevel);
        assert!((s.miter_threshold - 11f32.to_radians().cos()).abs() < 1e-6);
    }

    #[test]
    fn builder_overrides_fields() {
        let s = StrokeStyle::new(4.0)
            .with_loop(true)
            .with_linecap(LineCap::None)
            .with_segments(8);
        assert_eq!(s.width, 4.0);
        assert_eq!(s.half_width(), 2.0);
        assert!(s.looped);
        assert_eq!(s.linecap, LineCap::None);
        assert_eq!(s.segments, 8);
    }

    #[test]
    fn width_validation() {
        assert!(StrokeStyle::new(0.5).validate_width().is_ok());
        assert_eq!(StrokeStyle::new(0.0).validate_width(), Err(TessellationError::InvalidWidth(0.0)));
        assert!(StrokeStyle::new(-1.0).validate_width().is_err());
        assert!(StrokeStyle::new(f32::NAN).validate_width().is_err());
    }
}
