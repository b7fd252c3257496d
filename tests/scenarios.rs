//! End-to-end gameplay scenarios driven through the public API

use asteroid_field::platform::{Clock, ManualClock};
use asteroid_field::sim::{Arena, GameEvent, GamePhase, GameState, TickInput, tick};
use asteroid_field::{Controls, InputLatch};
use glam::Vec2;

fn arena() -> Arena {
    Arena::new(800.0, 600.0)
}

/// Leave only the first asteroid, parked on top of the ship
fn single_asteroid_on_ship(state: &mut GameState) {
    state.asteroids.truncate(1);
    state.asteroids[0].pos = state.ship.pos;
    state.asteroids[0].vel = Vec2::ZERO;
}

#[test]
fn idle_tick_moves_only_asteroids() {
    let mut state = GameState::new(2024, arena());
    assert_eq!(state.level, 1);
    assert_eq!(state.asteroids.len(), 5);
    let ship_before = state.ship.clone();
    let expected: Vec<Vec2> = state
        .asteroids
        .iter()
        .map(|a| arena().wrap(a.pos + a.vel))
        .collect();

    tick(&mut state, &TickInput::default(), arena());

    assert_eq!(state.ship, ship_before);
    assert_eq!(state.health, 3);
    assert_eq!(state.asteroids.len(), 5);
    for (asteroid, expected) in state.asteroids.iter().zip(expected) {
        assert!((asteroid.vel.length() - 1.0).abs() < 1e-4);
        assert!((asteroid.pos - expected).length() < 1e-3);
    }
}

#[test]
fn rapid_fire_is_suppressed_by_cooldown() {
    let clock = ManualClock::new(5_000.0);
    let mut controls = Controls::default();
    let mut state = GameState::new(11, arena());

    controls.key_down(" ", clock.now_ms());
    clock.advance(100.0);
    controls.key_down(" ", clock.now_ms());

    tick(&mut state, &controls.take_tick_input(), arena());
    assert_eq!(state.projectiles.len(), 1);

    // Still inside the 300 ms window on the next frame
    clock.advance(100.0);
    controls.key_down(" ", clock.now_ms());
    tick(&mut state, &controls.take_tick_input(), arena());
    assert_eq!(state.projectiles.len(), 1);

    // Cooldown elapsed
    clock.advance(100.0);
    controls.key_down(" ", clock.now_ms());
    tick(&mut state, &controls.take_tick_input(), arena());
    assert_eq!(state.projectiles.len(), 2);
}

#[test]
fn last_health_point_survives_a_hit() {
    let mut state = GameState::new(5, arena());
    state.health = 1;
    single_asteroid_on_ship(&mut state);

    tick(&mut state, &TickInput::default(), arena());

    assert_eq!(state.health, 0);
    assert_eq!(state.phase, GamePhase::Playing);
    assert!(!state.snapshot().game_over);
}

#[test]
fn hit_at_zero_health_ends_the_game() {
    let mut state = GameState::new(5, arena());
    state.health = 0;
    single_asteroid_on_ship(&mut state);

    tick(&mut state, &TickInput::default(), arena());

    assert_eq!(state.health, 0);
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(state.snapshot().game_over);
    assert_eq!(state.events, vec![GameEvent::GameOver { level: 1 }]);
}

#[test]
fn clearing_every_level_walks_the_table() {
    let mut state = GameState::new(31337, arena());
    let expected_counts = [5, 7, 10, 15, 20, 25, 30, 35, 40, 45, 45, 45];

    for (i, &count) in expected_counts.iter().enumerate() {
        assert_eq!(state.level, i as u32 + 1);
        assert_eq!(state.asteroids.len(), count);

        // Wipe the field and let the director refill it
        state.asteroids.clear();
        tick(&mut state, &TickInput::default(), arena());
        assert_eq!(state.phase, GamePhase::LevelTransition);
        tick(&mut state, &TickInput::default(), arena());
        assert_eq!(state.phase, GamePhase::Playing);
    }
}

#[test]
fn shooting_an_asteroid_removes_both() {
    let mut state = GameState::new(77, arena());
    state.asteroids.truncate(2);
    for asteroid in &mut state.asteroids {
        asteroid.vel = Vec2::ZERO;
    }
    // Target in the middle, a bystander in the corner keeps the level alive
    state.asteroids[0].pos = Vec2::new(400.0, 300.0);
    state.asteroids[1].pos = Vec2::new(750.0, 550.0);
    let target = state.asteroids[0].clone();

    state.ship.pos = Vec2::new(400.0 - target.size - 20.0, 300.0);
    state.ship.rotation = 0.0;

    tick(
        &mut state,
        &TickInput {
            fire: true,
            ..Default::default()
        },
        arena(),
    );
    for _ in 0..10 {
        if state.asteroids.len() < 2 {
            break;
        }
        tick(&mut state, &TickInput::default(), arena());
    }

    assert_eq!(state.asteroids.len(), 1);
    assert!(state.projectiles.is_empty());
    assert!(state.asteroids.iter().all(|a| a.id != target.id));
    assert_eq!(state.health, 3);
}

#[test]
fn restart_after_game_over() {
    let mut state = GameState::new(9, arena());
    state.health = 0;
    single_asteroid_on_ship(&mut state);
    tick(&mut state, &TickInput::default(), arena());
    assert!(state.is_game_over());

    state.restart(arena());
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.health, 3);
    assert_eq!(state.level, 1);
    assert_eq!(state.asteroids.len(), 5);
    assert!(state.projectiles.is_empty());

    tick(&mut state, &TickInput::default(), arena());
    assert_eq!(state.time_ticks, 1);
}

#[test]
fn resize_changes_wrap_bounds() {
    let mut state = GameState::new(4, arena());
    state.asteroids.clear();
    state.phase = GamePhase::Playing;
    state.ship.pos = Vec2::new(700.0, 100.0);
    state.ship.rotation = 0.0;

    // Asteroid-free field flips to LevelTransition, so only check the ship
    let small = Arena::new(500.0, 400.0);
    tick(
        &mut state,
        &TickInput {
            thrust: true,
            ..Default::default()
        },
        small,
    );
    assert!(small.contains(state.ship.pos));
    assert!((state.ship.pos.x - 203.0).abs() < 1e-3);
}
