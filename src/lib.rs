//! Asteroid Field - A wrap-around arena arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, level/health state machine)
//! - `input`: Latched controls shared by keyboard and touch producers
//! - `renderer`: Render sink consuming simulation snapshots
//! - `platform`: Monotonic clock and fixed-step driver
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use input::{Action, Controls, FireGate, InputLatch, TouchButton};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Ship defaults
    pub const SHIP_SIZE: f32 = 30.0;
    /// Radians per tick while a rotate latch is held
    pub const SHIP_ROTATION_SPEED: f32 = 0.05;
    /// Units per tick while thrust is held (no inertia)
    pub const SHIP_THRUST: f32 = 3.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 5.0;
    pub const PROJECTILE_LIFETIME: i32 = 120; // ~2 seconds at 60 Hz
    /// Minimum wall-clock time between shots
    pub const FIRE_COOLDOWN_MS: f64 = 300.0;

    /// Asteroid defaults
    pub const ASTEROID_SPEED: f32 = 1.0;
    pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
    pub const ASTEROID_MAX_RADIUS: f32 = 50.0;
    pub const ASTEROID_MIN_POINTS: usize = 5;
    pub const ASTEROID_MAX_POINTS: usize = 10;
    /// Radial scale range of polygon points (fraction of size)
    pub const ASTEROID_RADIAL_MIN: f32 = 0.8;
    pub const ASTEROID_RADIAL_MAX: f32 = 1.2;
    /// Total angular jitter applied to each polygon point (radians)
    pub const ASTEROID_ANGLE_JITTER: f32 = 0.4;

    /// Asteroids never spawn closer than this to the ship
    pub const SAFE_SPAWN_DISTANCE: f32 = 100.0;
    /// Resample budget per asteroid before accepting an unsafe position
    pub const MAX_SPAWN_ATTEMPTS: u32 = 64;

    pub const MAX_HEALTH: u8 = 3;

    /// Upper limits applied to tuning overrides
    pub const MAX_ASTEROID_RADIUS_LIMIT: f32 = 1000.0;
    pub const MAX_LEVEL_ASTEROIDS: usize = 500;

    /// Asteroid count per level (1-based), clamped to the last entry
    pub const LEVEL_ASTEROID_COUNTS: [usize; 10] = [5, 7, 10, 15, 20, 25, 30, 35, 40, 45];
}

/// Normalize an angle to [0, 2π) for display
#[inline]
pub fn display_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Unit vector pointing along `angle`
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Wrap a single coordinate into [0, extent)
///
/// A non-positive extent leaves the value untouched.
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !extent.is_finite() {
        return value;
    }
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Toroidal wrap of a position, each axis independently
#[inline]
pub fn wrap_position(pos: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(wrap_coord(pos.x, size.x), wrap_coord(pos.y, size.y))
}
