//! Time subsystem.
//!
//! Provides frame timing and fixed-step scheduling without coupling to a
//! window or event loop:
//! - one `FrameClock` per loop; `tick()` once per presented frame
//! - one `FixedStep` per simulation; `advance(frame.dt, scene)` once per frame

mod fixed_step;
mod frame_clock;

pub use fixed_step::{FixedStep, Scene, DEFAULT_FIXED_TIMESTEP};
pub use frame_clock::{FrameClock, FrameTime};
