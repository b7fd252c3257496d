//! Rendering
//!
//! The simulation hands each frame a [`Snapshot`]; a [`RenderSink`] turns it
//! into pixels (canvas 2D in the browser) or log lines (headless).

pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::Snapshot;

/// Consumer of one snapshot per frame
pub trait RenderSink {
    fn draw(&mut self, snapshot: &Snapshot);
}

/// Headless sink that logs a line whenever level, health or phase changes
#[derive(Debug, Default)]
pub struct LogSink {
    last: Option<(u32, u8, bool)>,
    pub frames: u64,
}

impl RenderSink for LogSink {
    fn draw(&mut self, snapshot: &Snapshot) {
        self.frames += 1;
        let key = (snapshot.level, snapshot.health, snapshot.game_over);
        if self.last != Some(key) {
            log::info!(
                "frame {}: level {} health {}/{} asteroids {} projectiles {}{}",
                self.frames,
                snapshot.level,
                snapshot.health,
                snapshot.max_health,
                snapshot.asteroids.len(),
                snapshot.projectiles.len(),
                if snapshot.game_over { " GAME OVER" } else { "" }
            );
            self.last = Some(key);
        }
    }
}
