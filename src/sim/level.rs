//! Level director
//!
//! Decides how many asteroids a level gets and where they spawn.

use glam::Vec2;
use rand::Rng;

use super::asteroid::Asteroid;
use super::state::{Arena, GameEvent, GameState};
use crate::consts::MAX_SPAWN_ATTEMPTS;

/// Asteroid count for a 1-based level
///
/// Level 0 reads the first entry; levels past the table reuse the last one.
pub fn asteroid_count(level: u32, table: &[usize]) -> usize {
    let Some(&last) = table.last() else {
        return crate::consts::LEVEL_ASTEROID_COUNTS[0];
    };
    let index = level.saturating_sub(1) as usize;
    table.get(index).copied().unwrap_or(last)
}

/// Pick a spawn point at least `safe_distance` from `avoid`
///
/// Resamples up to [`MAX_SPAWN_ATTEMPTS`] times; if the arena is too small to
/// honor the exclusion the last sample is used.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    arena: Arena,
    avoid: Vec2,
    safe_distance: f32,
) -> Vec2 {
    let extent = |v: f32| if v.is_finite() && v >= 1.0 { v } else { 1.0 };
    let width = extent(arena.width);
    let height = extent(arena.height);

    let mut pos = Vec2::ZERO;
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        pos = Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height));
        if pos.distance(avoid) >= safe_distance {
            return pos;
        }
    }

    log::warn!(
        "No spawn point {} units from the ship in a {}x{} arena, placing anyway",
        safe_distance,
        arena.width,
        arena.height
    );
    pos
}

/// Replace the asteroid field with a fresh one for `state.level`
pub fn spawn_level(state: &mut GameState, arena: Arena) {
    let count = asteroid_count(state.level, &state.tuning.level_asteroid_counts);
    let avoid = state.ship.pos;
    let min_radius = state.tuning.asteroid_min_radius;
    let max_radius = state.tuning.asteroid_max_radius;
    let safe_distance = state.tuning.safe_spawn_distance;
    let speed = state.tuning.asteroid_speed;

    if arena.is_degenerate() {
        log::warn!("Spawning level {} into a degenerate arena", state.level);
    }

    state.asteroids.clear();
    state.asteroids.reserve(count);
    for _ in 0..count {
        let pos = spawn_position(&mut state.rng, arena, avoid, safe_distance);
        let size = state.rng.random_range(min_radius..max_radius);
        let id = state.next_entity_id();
        let asteroid = Asteroid::new(id, pos, size, speed, &mut state.rng);
        state.asteroids.push(asteroid);
    }

    state.events.push(GameEvent::LevelStarted {
        level: state.level,
        asteroids: count,
    });
    log::info!("Level {}: {} asteroids", state.level, count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LEVEL_ASTEROID_COUNTS;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_asteroid_count_table() {
        let table = LEVEL_ASTEROID_COUNTS;
        assert_eq!(asteroid_count(1, &table), 5);
        assert_eq!(asteroid_count(2, &table), 7);
        assert_eq!(asteroid_count(10, &table), 45);
        assert_eq!(asteroid_count(11, &table), 45);
        assert_eq!(asteroid_count(500, &table), 45);
        assert_eq!(asteroid_count(0, &table), 5);
    }

    #[test]
    fn test_asteroid_count_empty_table() {
        assert_eq!(asteroid_count(3, &[]), 5);
    }

    #[test]
    fn test_spawn_respects_exclusion() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let arena = Arena::new(800.0, 600.0);
        let ship = arena.center();
        for _ in 0..500 {
            let pos = spawn_position(&mut rng, arena, ship, 100.0);
            assert!(pos.distance(ship) >= 100.0);
            assert!(arena.contains(pos));
        }
    }

    #[test]
    fn test_spawn_gives_up_in_tiny_arena() {
        let mut rng = Pcg32::seed_from_u64(1);
        let arena = Arena::new(50.0, 50.0);
        let pos = spawn_position(&mut rng, arena, arena.center(), 100.0);
        assert!(arena.contains(pos));
    }

    #[test]
    fn test_spawn_level_sizes() {
        let arena = Arena::new(1024.0, 768.0);
        let mut state = GameState::new(5, arena);
        state.level = 3;
        spawn_level(&mut state, arena);
        assert_eq!(state.asteroids.len(), 10);
        for asteroid in &state.asteroids {
            assert!(asteroid.size >= 20.0 && asteroid.size < 50.0);
            assert!(asteroid.pos.distance(state.ship.pos) >= 100.0);
        }
        assert!(matches!(
            state.events.last(),
            Some(GameEvent::LevelStarted { level: 3, asteroids: 10 })
        ));
    }
}
