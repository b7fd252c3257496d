//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Monotonic time (fire cooldown)
//! - Frame pacing (fixed-step driver, frame scheduling)

pub mod clock;
pub mod frame_loop;
pub mod timestep;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use frame_loop::FrameLoop;
pub use timestep::FixedStep;
