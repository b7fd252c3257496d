//! Canvas 2D render sink
//!
//! Vector-style white-on-black drawing straight from the snapshot.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::RenderSink;
use super::shapes::{PROJECTILE_RADIUS, asteroid_outline, health_pips, ship_triangle};
use crate::sim::Snapshot;

const BACKGROUND: &str = "#000";
const FOREGROUND: &str = "#fff";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Returns `None` if the canvas has no 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    fn trace_polygon(&self, points: &[glam::Vec2]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
    }

    fn draw_hud(&self, snapshot: &Snapshot) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(FOREGROUND);
        ctx.set_font("16px monospace");
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&format!("LEVEL {}", snapshot.level), 12.0, 22.0);

        for pip in health_pips(snapshot.health, glam::Vec2::new(18.0, 40.0), 16.0) {
            ctx.begin_path();
            let _ = ctx.arc(pip.x as f64, pip.y as f64, 5.0, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }

        if snapshot.game_over {
            let cx = self.canvas.width() as f64 / 2.0;
            let cy = self.canvas.height() as f64 / 2.0;
            ctx.set_font("32px monospace");
            ctx.set_text_align("center");
            let _ = ctx.fill_text("GAME OVER", cx, cy);
            ctx.set_font("16px monospace");
            let _ = ctx.fill_text("press R or tap restart", cx, cy + 28.0);
        }
    }
}

impl RenderSink for CanvasRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        let ctx = &self.ctx;
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;

        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_stroke_style_str(FOREGROUND);
        ctx.set_fill_style_str(FOREGROUND);
        ctx.set_line_width(2.0);

        // Ship
        self.trace_polygon(&ship_triangle(&snapshot.ship));
        ctx.fill();

        // Asteroids
        for asteroid in &snapshot.asteroids {
            self.trace_polygon(&asteroid_outline(asteroid));
            ctx.stroke();
        }

        // Projectiles
        for p in &snapshot.projectiles {
            ctx.begin_path();
            let _ = ctx.arc(
                p.x as f64,
                p.y as f64,
                PROJECTILE_RADIUS as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.stroke();
        }

        self.draw_hud(snapshot);
    }
}
