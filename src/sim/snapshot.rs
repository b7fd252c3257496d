//! Render-ready view of the simulation
//!
//! Produced once per frame after ticking; render sinks never touch
//! [`GameState`] directly.

use glam::Vec2;
use serde::Serialize;

use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipView {
    pub pos: Vec2,
    /// Radians in [0, 2π)
    pub rotation: f32,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsteroidView {
    pub pos: Vec2,
    pub size: f32,
    /// Polygon offsets from `pos`
    pub points: Vec<Vec2>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub ship: ShipView,
    pub asteroids: Vec<AsteroidView>,
    pub projectiles: Vec<Vec2>,
    pub level: u32,
    pub health: u8,
    pub max_health: u8,
    pub phase: GamePhase,
    pub game_over: bool,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ship: ShipView {
                pos: self.ship.pos,
                rotation: self.ship.display_rotation(),
                size: self.ship.size,
            },
            asteroids: self
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    pos: a.pos,
                    size: a.size,
                    points: a.points().to_vec(),
                })
                .collect(),
            projectiles: self.projectiles.iter().map(|p| p.pos).collect(),
            level: self.level,
            health: self.health,
            max_health: self.tuning.max_health,
            phase: self.phase,
            game_over: self.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Arena;

    #[test]
    fn test_snapshot_mirrors_state() {
        let arena = Arena::new(640.0, 480.0);
        let mut state = GameState::new(8, arena);
        state.ship.rotation = -0.5;
        state.spawn_projectile();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.asteroids.len(), state.asteroids.len());
        assert_eq!(snapshot.projectiles, vec![state.ship.pos]);
        assert_eq!(snapshot.level, 1);
        assert_eq!(snapshot.health, 3);
        assert!(!snapshot.game_over);
        assert!(snapshot.ship.rotation > 0.0);
        assert_eq!(snapshot.asteroids[0].points, state.asteroids[0].points());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(8, Arena::new(640.0, 480.0));
        let json = serde_json::to_string(&state.snapshot()).expect("serializable");
        assert!(json.contains("\"phase\":\"Playing\""));
        assert!(json.contains("\"game_over\":false"));
    }
}
