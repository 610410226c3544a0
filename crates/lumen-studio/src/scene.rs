//! Demo scene: a rotating wireframe cube seen through a perspective camera,
//! stroked in screen space, plus a spline "horizon" and a sprite HUD bar.

use anyhow::{Context, Result};
use lumen_engine::coords::{ColorRgba, Rect};
use lumen_engine::linear::{Matrix4, Vec2, Vec3, Vec4};
use lumen_engine::render::{
    LineCap, SpriteBatch, StrokeStyle, StrokeVertex, TessellationError, VectorRenderer, VertexSink,
};
use lumen_engine::time::Scene;

const CUBE_CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Rotation speed of the cube, radians per second of simulated time.
const SPIN_RATE: f32 = 0.8;

/// Sink that only tallies what the GPU layer would receive.
#[derive(Debug, Default)]
pub struct FrameStats {
    pub draw_calls: u64,
    pub vertices: u64,
    pub non_finite: u64,
}

impl VertexSink for FrameStats {
    fn submit(&mut self, vertices: &[StrokeVertex]) {
        self.draw_calls += 1;
        self.vertices += vertices.len() as u64;
        self.non_finite += vertices
            .iter()
            .filter(|v| !v.position().is_finite())
            .count() as u64;
    }
}

pub struct DemoScene {
    viewport: Vec2,
    projection: Matrix4,
    angle: f32,
    vector: VectorRenderer,
    sprites: SpriteBatch,
    pub stats: FrameStats,
    pub errors: Vec<TessellationError>,
}

impl DemoScene {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let projection = Matrix4::perspective_field_of_view(
            60f32.to_radians(),
            width / height,
            0.1,
            100.0,
        )
        .context("building camera projection")?;

        Ok(Self {
            viewport: Vec2::new(width, height),
            projection,
            angle: 0.0,
            vector: VectorRenderer::new(),
            sprites: SpriteBatch::new(),
            stats: FrameStats::default(),
            errors: Vec::new(),
        })
    }

    /// Model-view-projection for the current cube angle.
    fn mvp(&self) -> Matrix4 {
        let model = Matrix4::rotation_y(self.angle) * Matrix4::rotation_x(self.angle * 0.5);
        let eye = Vec3::new(0.0, 1.5, 6.0);
        let view = Matrix4::look_at(eye, Vec3::zero(), Vec3::unit_y());
        model * view * self.projection
    }

    /// Clip space to pixels, +Y down.
    fn to_screen(&self, clip: Vec4) -> Vec2 {
        let ndc = clip.perspective_divide();
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        )
    }

    fn draw_cube(&mut self) -> Result<(), TessellationError> {
        let mvp = self.mvp();
        let screen: Vec<Vec2> = CUBE_CORNERS
            .iter()
            .map(|&c| self.to_screen(mvp.transform(Vec4::point(Vec3::from(c)))))
            .collect();

        let face = StrokeStyle::new(3.0)
            .with_color(ColorRgba::from_u8(0x00, 0xe5, 0xa0, 0xff))
            .with_loop(true);
        let back = [screen[0], screen[1], screen[2], screen[3]];
        let front = [screen[4], screen[5], screen[6], screen[7]];
        self.vector.draw_line_strip(&back, &face)?;
        self.vector.draw_line_strip(&front, &face)?;

        let edge = StrokeStyle::new(2.0).with_color(ColorRgba::from_u8(0x00, 0xaa, 0xff, 0xff));
        for i in 0..4 {
            self.vector.draw_line(screen[i], screen[i + 4], &edge)?;
        }
        Ok(())
    }

    fn draw_horizon(&mut self) -> Result<(), TessellationError> {
        let (w, h) = (self.viewport.x, self.viewport.y);
        let sway = (self.angle * 2.0).sin() * 40.0;
        let ctrl = [
            Vec2::new(0.0, h * 0.8),
            Vec2::new(w * 0.15, h * 0.8 - 60.0 - sway),
            Vec2::new(w * 0.35, h * 0.8 + 60.0 + sway),
            Vec2::new(w * 0.5, h * 0.8),
            Vec2::new(w * 0.65, h * 0.8 - 60.0 + sway),
            Vec2::new(w * 0.85, h * 0.8 + 60.0 - sway),
            Vec2::new(w, h * 0.8),
        ];
        let style = StrokeStyle::new(4.0)
            .with_color(ColorRgba::new(1.0, 0.6, 0.1, 1.0))
            .with_linecap(LineCap::Bevel)
            .with_segments(24);
        self.vector.draw_bezier_spline(&ctrl, &style)?;
        Ok(())
    }

    fn draw_hud(&mut self) -> Result<(), TessellationError> {
        let track = self.viewport.x - 32.0;
        let progress = (self.angle / std::f32::consts::TAU).fract();
        self.sprites
            .draw_rectangle(Rect::new(16.0, 16.0, track, 8.0), ColorRgba::new(0.1, 0.1, 0.15, 1.0))?
            .draw_rectangle(Rect::new(16.0, 16.0, track * progress, 8.0), ColorRgba::white())?;
        Ok(())
    }
}

impl Scene for DemoScene {
    fn fixed_update(&mut self, dt: f32) {
        self.angle += SPIN_RATE * dt;
    }

    fn draw(&mut self, _dt: f32) {
        self.vector.begin();
        let strokes = self.draw_cube().and_then(|()| self.draw_horizon());
        if let Err(e) = strokes {
            log::warn!("stroke batch: {e}");
            self.errors.push(e);
        }
        self.vector.end(&mut self.stats);

        self.sprites.begin();
        if let Err(e) = self.draw_hud() {
            log::warn!("sprite batch: {e}");
            self.errors.push(e);
        }
        self.sprites.end(&mut self.stats);
    }
}
