mod scene;

use std::time::Duration;

use anyhow::{Context, Result};
use lumen_engine::logging::{init_logging, LoggingConfig};
use lumen_engine::time::{FixedStep, FrameClock};

use scene::DemoScene;

const DEFAULT_FRAMES: u32 = 120;
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let frames = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("frame count must be a positive integer, got {arg:?}"))?,
        None => DEFAULT_FRAMES,
    };

    let mut scene = DemoScene::new(800.0, 600.0)?;
    let mut clock = FrameClock::new();
    let mut step = FixedStep::default();

    log::info!("running {frames} headless frames at {:?} per frame", FRAME_INTERVAL);

    for _ in 0..frames {
        let frame = clock.tick_with(FRAME_INTERVAL);
        let ticks = step.advance(frame.dt, &mut scene);
        log::trace!("frame {} dt={:.4}s fixed ticks={ticks}", frame.frame_index, frame.dt);
    }

    let stats = &scene.stats;
    log::info!(
        "{} fixed ticks, {} draw calls, {} vertices ({} floats)",
        step.total_ticks(),
        stats.draw_calls,
        stats.vertices,
        stats.vertices * lumen_engine::render::FLOATS_PER_VERTEX as u64,
    );

    anyhow::ensure!(
        scene.errors.is_empty(),
        "{} tessellation errors, first: {}",
        scene.errors.len(),
        scene.errors[0]
    );
    if stats.non_finite > 0 {
        log::warn!("{} vertices had non-finite positions", stats.non_finite);
    }

    Ok(())
}
