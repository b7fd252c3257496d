//! Projectile entity
//!
//! Projectiles fly straight and never wrap. They leave the arena on their own
//! and are culled when the lifetime counter runs out.

use glam::Vec2;

use crate::heading;

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining ticks
    pub lifetime: i32,
}

impl Projectile {
    pub fn new(id: u32, origin: Vec2, angle: f32, speed: f32, lifetime: i32) -> Self {
        Self {
            id,
            pos: origin,
            vel: heading(angle) * speed,
            lifetime,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.lifetime -= 1;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PROJECTILE_LIFETIME, PROJECTILE_SPEED};

    fn projectile() -> Projectile {
        Projectile::new(1, Vec2::new(50.0, 50.0), 0.0, PROJECTILE_SPEED, PROJECTILE_LIFETIME)
    }

    #[test]
    fn test_velocity_from_angle() {
        let p = Projectile::new(1, Vec2::ZERO, std::f32::consts::FRAC_PI_2, 5.0, 120);
        assert!(p.vel.x.abs() < 0.0001);
        assert!((p.vel.y - 5.0).abs() < 0.0001);
    }

    #[test]
    fn test_lifetime_counts_down_by_one() {
        let mut p = projectile();
        assert_eq!(p.lifetime, 120);
        for expected in (0..120).rev() {
            assert!(!p.is_expired());
            p.update();
            assert_eq!(p.lifetime, expected);
        }
        assert!(p.is_expired());
    }

    #[test]
    fn test_moves_past_arena_without_wrapping() {
        let mut p = projectile();
        for _ in 0..100 {
            p.update();
        }
        assert!((p.pos.x - 550.0).abs() < 0.01);
    }
}
