//! Player ship
//!
//! Movement is fully input-driven: there is no momentum, so the ship stops
//! the tick thrust is released.

use glam::Vec2;

use super::state::Arena;
use super::tick::TickInput;
use crate::consts::*;
use crate::{display_angle, heading};

#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
    /// Radians, unbounded
    pub rotation: f32,
    /// Current speed, either 0 or the thrust constant
    pub speed: f32,
    /// Collision diameter
    pub size: f32,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            rotation: 0.0,
            speed: 0.0,
            size: SHIP_SIZE,
        }
    }
}

impl Ship {
    /// Ship at rest in the middle of the arena
    pub fn centered(arena: Arena, size: f32) -> Self {
        Self {
            pos: arena.center(),
            size,
            ..Default::default()
        }
    }

    /// Apply one tick of latched input, then wrap into the arena
    pub fn update(&mut self, input: &TickInput, rotation_speed: f32, thrust: f32, arena: Arena) {
        if input.rotate_left {
            self.rotation -= rotation_speed;
        }
        if input.rotate_right {
            self.rotation += rotation_speed;
        }

        self.speed = if input.thrust { thrust } else { 0.0 };
        self.pos += heading(self.rotation) * self.speed;
        self.pos = arena.wrap(self.pos);
    }

    /// Rotation normalized to [0, 2π)
    pub fn display_rotation(&self) -> f32 {
        display_angle(self.rotation)
    }
}
