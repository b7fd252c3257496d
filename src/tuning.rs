//! Data-driven game balance
//!
//! Every gameplay constant lives here so a level designer can override any
//! subset from JSON. Missing keys fall back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    /// Collision diameter of the ship
    pub ship_size: f32,
    /// Radians per tick while rotating
    pub ship_rotation_speed: f32,
    /// Units per tick while thrusting
    pub ship_thrust: f32,

    // === Projectiles ===
    pub projectile_speed: f32,
    /// Lifetime in ticks
    pub projectile_lifetime: i32,
    /// Minimum wall-clock gap between shots (milliseconds)
    pub fire_cooldown_ms: f64,

    // === Asteroids ===
    pub asteroid_speed: f32,
    pub asteroid_min_radius: f32,
    /// Exclusive upper bound of the spawn radius
    pub asteroid_max_radius: f32,
    /// Spawn exclusion radius around the ship
    pub safe_spawn_distance: f32,

    // === Progression ===
    pub max_health: u8,
    /// Asteroids per level, indexed by level - 1
    pub level_asteroid_counts: Vec<usize>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_size: SHIP_SIZE,
            ship_rotation_speed: SHIP_ROTATION_SPEED,
            ship_thrust: SHIP_THRUST,

            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime: PROJECTILE_LIFETIME,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,

            asteroid_speed: ASTEROID_SPEED,
            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_max_radius: ASTEROID_MAX_RADIUS,
            safe_spawn_distance: SAFE_SPAWN_DISTANCE,

            max_health: MAX_HEALTH,
            level_asteroid_counts: LEVEL_ASTEROID_COUNTS.to_vec(),
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON and clamp them into range
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Load overrides from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Clamp every field into a playable range
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.ship_size > 0.0 && self.ship_size.is_finite()) {
            log::warn!("ship_size {} out of range, using {}", self.ship_size, defaults.ship_size);
            self.ship_size = defaults.ship_size;
        }
        if !self.ship_rotation_speed.is_finite() {
            self.ship_rotation_speed = defaults.ship_rotation_speed;
        }
        if !(self.ship_thrust >= 0.0 && self.ship_thrust.is_finite()) {
            log::warn!("ship_thrust {} out of range, using {}", self.ship_thrust, defaults.ship_thrust);
            self.ship_thrust = defaults.ship_thrust;
        }
        if !(self.projectile_speed >= 0.0 && self.projectile_speed.is_finite()) {
            self.projectile_speed = defaults.projectile_speed;
        }
        if self.projectile_lifetime < 1 {
            log::warn!("projectile_lifetime {} clamped to 1", self.projectile_lifetime);
            self.projectile_lifetime = 1;
        }
        if self.fire_cooldown_ms.is_nan() || self.fire_cooldown_ms < 0.0 {
            log::warn!("fire_cooldown_ms {} clamped to 0", self.fire_cooldown_ms);
            self.fire_cooldown_ms = 0.0;
        } else if !self.fire_cooldown_ms.is_finite() {
            log::warn!("fire_cooldown_ms {} out of range, using {}", self.fire_cooldown_ms, defaults.fire_cooldown_ms);
            self.fire_cooldown_ms = defaults.fire_cooldown_ms;
        }
        if !(self.asteroid_speed >= 0.0 && self.asteroid_speed.is_finite()) {
            self.asteroid_speed = defaults.asteroid_speed;
        }

        // Radius range must be finite, positive and non-empty
        if !self.asteroid_min_radius.is_finite() {
            log::warn!("asteroid_min_radius {} not finite, using default", self.asteroid_min_radius);
            self.asteroid_min_radius = defaults.asteroid_min_radius;
        }
        if !self.asteroid_max_radius.is_finite() {
            log::warn!("asteroid_max_radius {} not finite, using default", self.asteroid_max_radius);
            self.asteroid_max_radius = defaults.asteroid_max_radius;
        }
        if self.asteroid_max_radius < self.asteroid_min_radius {
            log::warn!(
                "asteroid radius range [{}, {}) inverted, swapping",
                self.asteroid_min_radius,
                self.asteroid_max_radius
            );
            std::mem::swap(&mut self.asteroid_min_radius, &mut self.asteroid_max_radius);
        }
        let min_radius = self.asteroid_min_radius.clamp(1.0, MAX_ASTEROID_RADIUS_LIMIT - 1.0);
        let max_radius = self.asteroid_max_radius.min(MAX_ASTEROID_RADIUS_LIMIT);
        if min_radius != self.asteroid_min_radius || max_radius != self.asteroid_max_radius {
            log::warn!(
                "asteroid radius range [{}, {}) clamped to [{}, {})",
                self.asteroid_min_radius,
                self.asteroid_max_radius,
                min_radius,
                max_radius
            );
        }
        self.asteroid_min_radius = min_radius;
        self.asteroid_max_radius = if max_radius > min_radius { max_radius } else { min_radius + 1.0 };

        if !(self.safe_spawn_distance >= 0.0) {
            self.safe_spawn_distance = 0.0;
        } else if !self.safe_spawn_distance.is_finite() {
            log::warn!("safe_spawn_distance is infinite, using {}", defaults.safe_spawn_distance);
            self.safe_spawn_distance = defaults.safe_spawn_distance;
        }
        if self.max_health == 0 {
            log::warn!("max_health 0 clamped to 1");
            self.max_health = 1;
        }

        // A zero-count level would clear itself every tick
        if self.level_asteroid_counts.is_empty() {
            log::warn!("empty level table, using defaults");
            self.level_asteroid_counts = defaults.level_asteroid_counts;
        }
        for count in &mut self.level_asteroid_counts {
            let clamped = (*count).clamp(1, MAX_LEVEL_ASTEROIDS);
            if clamped != *count {
                log::warn!("level asteroid count {} clamped to {}", count, clamped);
                *count = clamped;
            }
        }

        self
    }
}
