//! Simulation module
//!
//! All gameplay logic lives here. This module must stay headless:
//! - One call to `tick` is one simulation step
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod level;
pub mod projectile;
pub mod ship;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use asteroid::Asteroid;
pub use collision::{ProjectileHit, find_projectile_hits, first_ship_hit, projectile_hits_asteroid, ship_hits_asteroid};
pub use level::{asteroid_count, spawn_level};
pub use projectile::Projectile;
pub use ship::Ship;
pub use snapshot::{AsteroidView, ShipView, Snapshot};
pub use state::{Arena, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
