//! Collision detection
//!
//! Everything is a circle: projectiles are points, asteroids use their radius,
//! and the ship uses half its size. All tests use a strict `<`, so touching
//! exactly at the threshold is not a hit.

use glam::Vec2;

use super::asteroid::Asteroid;
use super::projectile::Projectile;
use super::ship::Ship;

/// Strict circle overlap test
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, threshold: f32) -> bool {
    a.distance(b) < threshold
}

#[inline]
pub fn projectile_hits_asteroid(projectile: &Projectile, asteroid: &Asteroid) -> bool {
    circles_overlap(projectile.pos, asteroid.pos, asteroid.size)
}

#[inline]
pub fn ship_hits_asteroid(ship: &Ship, asteroid: &Asteroid) -> bool {
    circles_overlap(ship.pos, asteroid.pos, ship.size / 2.0 + asteroid.size)
}

/// A projectile/asteroid pair destroyed this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileHit {
    pub projectile_id: u32,
    pub asteroid_id: u32,
}

/// Find projectile/asteroid pairs without mutating either collection
///
/// Each projectile destroys at most one asteroid, and an asteroid claimed by
/// an earlier projectile is not tested again. Callers remove the returned IDs
/// afterwards.
pub fn find_projectile_hits(projectiles: &[Projectile], asteroids: &[Asteroid]) -> Vec<ProjectileHit> {
    let mut claimed = vec![false; asteroids.len()];
    let mut hits = Vec::new();

    for projectile in projectiles {
        let target = asteroids
            .iter()
            .enumerate()
            .find(|(i, asteroid)| !claimed[*i] && projectile_hits_asteroid(projectile, asteroid));

        if let Some((i, asteroid)) = target {
            claimed[i] = true;
            hits.push(ProjectileHit {
                projectile_id: projectile.id,
                asteroid_id: asteroid.id,
            });
        }
    }

    hits
}

/// First asteroid overlapping the ship, if any
pub fn first_ship_hit<'a>(ship: &Ship, asteroids: &'a [Asteroid]) -> Option<&'a Asteroid> {
    asteroids.iter().find(|asteroid| ship_hits_asteroid(ship, asteroid))
}

/// Drop every entity named in `hits`
pub fn remove_hits(hits: &[ProjectileHit], projectiles: &mut Vec<Projectile>, asteroids: &mut Vec<Asteroid>) {
    if hits.is_empty() {
        return;
    }
    projectiles.retain(|p| !hits.iter().any(|h| h.projectile_id == p.id));
    asteroids.retain(|a| !hits.iter().any(|h| h.asteroid_id == a.id));
}
