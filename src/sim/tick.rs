//! Simulation tick
//!
//! Core game loop that advances the simulation by exactly one step.

use super::collision::{find_projectile_hits, first_ship_hit, remove_hits};
use super::level::spawn_level;
use super::state::{Arena, GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    /// A shot already accepted by the fire cooldown
    pub fire: bool,
}

/// Advance the game state by one tick
///
/// `arena` is the current viewport size; it is read fresh every call since
/// the view can be resized at any time.
pub fn tick(state: &mut GameState, input: &TickInput, arena: Arena) {
    state.events.clear();

    // Nothing moves after game over
    if state.phase == GamePhase::GameOver {
        return;
    }

    // Skip wrap math entirely until the view has a size
    if arena.is_degenerate() {
        log::trace!("Skipping tick for degenerate arena {}x{}", arena.width, arena.height);
        return;
    }

    state.time_ticks += 1;

    match state.phase {
        GamePhase::LevelTransition => advance_level(state, arena),
        GamePhase::Playing => step_playing(state, input, arena),
        GamePhase::GameOver => {}
    }
}

fn step_playing(state: &mut GameState, input: &TickInput, arena: Arena) {
    // Ship
    let rotation_speed = state.tuning.ship_rotation_speed;
    let thrust = state.tuning.ship_thrust;
    state.ship.update(input, rotation_speed, thrust, arena);

    if input.fire {
        let projectile_id = state.spawn_projectile();
        state.events.push(GameEvent::ProjectileFired { projectile_id });
    }

    // Asteroids drift and wrap
    for asteroid in &mut state.asteroids {
        asteroid.update();
        asteroid.pos = arena.wrap(asteroid.pos);
    }

    // Projectiles fly until their lifetime runs out
    for projectile in &mut state.projectiles {
        projectile.update();
    }
    state.projectiles.retain(|p| !p.is_expired());

    // Projectile vs asteroid: mark, then compact
    let hits = find_projectile_hits(&state.projectiles, &state.asteroids);
    for hit in &hits {
        log::debug!("Projectile {} destroyed asteroid {}", hit.projectile_id, hit.asteroid_id);
        state.events.push(GameEvent::AsteroidDestroyed {
            asteroid_id: hit.asteroid_id,
            projectile_id: hit.projectile_id,
        });
    }
    remove_hits(&hits, &mut state.projectiles, &mut state.asteroids);

    // Ship vs asteroid: at most one hit per tick
    if let Some(asteroid_id) = first_ship_hit(&state.ship, &state.asteroids).map(|a| a.id) {
        if state.health == 0 {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver { level: state.level });
            log::info!("Game over on level {}", state.level);
            return;
        }

        state.health -= 1;
        state.events.push(GameEvent::ShipHit {
            asteroid_id,
            health: state.health,
        });
        log::debug!("Ship hit by asteroid {}, health {}", asteroid_id, state.health);
    }

    if state.asteroids.is_empty() {
        state.phase = GamePhase::LevelTransition;
        state.events.push(GameEvent::LevelCleared { level: state.level });
        log::info!("Level {} cleared", state.level);
    }
}

fn advance_level(state: &mut GameState, arena: Arena) {
    state.level = state.level.saturating_add(1);
    // Stale shots would otherwise linger into the new field
    state.projectiles.clear();
    spawn_level(state, arena);
    state.phase = GamePhase::Playing;
}
