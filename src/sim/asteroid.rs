//! Asteroid entity
//!
//! An asteroid drifts in a straight line at constant speed. Its silhouette is
//! an irregular polygon rolled once at spawn; the offsets are rigid and only
//! translate with the center.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::heading;

#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision radius
    pub size: f32,
    /// Polygon offsets from `pos`, fixed for the asteroid's lifetime
    points: Vec<Vec2>,
}

impl Asteroid {
    /// Spawn an asteroid with a random heading at `speed` units per tick
    pub fn new<R: Rng + ?Sized>(id: u32, pos: Vec2, size: f32, speed: f32, rng: &mut R) -> Self {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let vel = heading(angle) * speed;
        let points = generate_outline(size, rng);

        Self {
            id,
            pos,
            vel,
            size,
            points,
        }
    }

    /// Advance one tick (wrap is applied by the caller)
    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// Polygon offsets relative to the center
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

/// Place 5..=10 points roughly evenly around a circle of radius `size`,
/// jittering each in angle and radial scale.
fn generate_outline<R: Rng + ?Sized>(size: f32, rng: &mut R) -> Vec<Vec2> {
    let count = rng.random_range(ASTEROID_MIN_POINTS..=ASTEROID_MAX_POINTS);

    (0..count)
        .map(|i| {
            let variance = rng.random_range(ASTEROID_RADIAL_MIN..ASTEROID_RADIAL_MAX);
            let jitter = (rng.random::<f32>() - 0.5) * ASTEROID_ANGLE_JITTER;
            let angle = i as f32 / count as f32 * std::f32::consts::TAU + jitter;
            heading(angle) * size * variance
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_velocity_is_unit_speed() {
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..50 {
            let asteroid = Asteroid::new(id, Vec2::ZERO, 30.0, 1.0, &mut rng);
            assert!((asteroid.vel.length() - 1.0).abs() < 0.0001);
        }
    }

    #[test]
    fn test_outline_bounds() {
        let mut rng = Pcg32::seed_from_u64(12345);
        for id in 0..200 {
            let size = rng.random_range(20.0..50.0);
            let asteroid = Asteroid::new(id, Vec2::new(100.0, 100.0), size, 1.0, &mut rng);
            let n = asteroid.points().len();
            assert!((5..=10).contains(&n), "point count {n}");
            for p in asteroid.points() {
                let r = p.length();
                assert!(r >= 0.8 * size - 0.001 && r <= 1.2 * size + 0.001, "radius {r} for size {size}");
            }
        }
    }

    #[test]
    fn test_update_translates_shape_rigidly() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut asteroid = Asteroid::new(1, Vec2::new(10.0, 20.0), 25.0, 1.0, &mut rng);
        let points_before = asteroid.points().to_vec();
        let start = asteroid.pos;

        asteroid.update();
        asteroid.update();

        assert!((asteroid.pos - (start + asteroid.vel * 2.0)).length() < 0.0001);
        assert_eq!(asteroid.points(), points_before.as_slice());
    }
}
