//! Game state and core simulation types
//!
//! The simulation owns every entity collection. Nothing outside `sim` mutates
//! them; renderers read a [`Snapshot`](super::Snapshot).

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::level::spawn_level;
use super::projectile::Projectile;
use super::ship::Ship;
use crate::tuning::Tuning;
use crate::wrap_position;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Field cleared; the next tick spawns the next level
    LevelTransition,
    /// Run ended (terminal until restart)
    GameOver,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired { projectile_id: u32 },
    AsteroidDestroyed { asteroid_id: u32, projectile_id: u32 },
    ShipHit { asteroid_id: u32, health: u8 },
    LevelCleared { level: u32 },
    LevelStarted { level: u32, asteroids: usize },
    GameOver { level: u32 },
}

/// Arena bounds, re-read from the viewport every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension cannot support wrap math
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite())
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Toroidal wrap into [0, width) x [0, height)
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        wrap_position(pos, self.size())
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current level (1-based)
    pub level: u32,
    /// Remaining health, in [0, max_health]
    pub health: u8,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Ship,
    /// Active asteroids (spawn order)
    pub asteroids: Vec<Asteroid>,
    /// Active projectiles (spawn order)
    pub projectiles: Vec<Projectile>,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game with default tuning and spawn level 1
    pub fn new(seed: u64, arena: Arena) -> Self {
        Self::with_tuning(seed, Tuning::default(), arena)
    }

    /// Create a new game with custom tuning and spawn level 1
    pub fn with_tuning(seed: u64, tuning: Tuning, arena: Arena) -> Self {
        let tuning = tuning.sanitized();
        let mut state = Self {
            seed,
            level: 1,
            health: tuning.max_health,
            phase: GamePhase::Playing,
            time_ticks: 0,
            ship: Ship::centered(arena, tuning.ship_size),
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            events: Vec::new(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };

        spawn_level(&mut state, arena);
        log::info!("New game (seed {}) level 1 with {} asteroids", seed, state.asteroids.len());
        state
    }

    /// Reinitialize for a fresh run in the same arena
    ///
    /// The RNG keeps its stream so consecutive runs differ.
    pub fn restart(&mut self, arena: Arena) {
        self.level = 1;
        self.health = self.tuning.max_health;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.ship = Ship::centered(arena, self.tuning.ship_size);
        self.asteroids.clear();
        self.projectiles.clear();
        self.events.clear();
        spawn_level(self, arena);
        log::info!("Game restarted (seed {}) with {} asteroids", self.seed, self.asteroids.len());
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Spawn a projectile from the ship's nose direction
    pub fn spawn_projectile(&mut self) -> u32 {
        let id = self.next_entity_id();
        let projectile = Projectile::new(
            id,
            self.ship.pos,
            self.ship.rotation,
            self.tuning.projectile_speed,
            self.tuning.projectile_lifetime,
        );
        self.projectiles.push(projectile);
        id
    }
}
