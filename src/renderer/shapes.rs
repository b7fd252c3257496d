//! Shape generation for 2D primitives
//!
//! Pure geometry in arena coordinates; the canvas sink only strokes and fills
//! what these return.

use glam::Vec2;

use crate::sim::{AsteroidView, ShipView};

/// Ship silhouette in local space, nose along +x
const SHIP_TRIANGLE: [Vec2; 3] = [
    Vec2::new(-10.0, -10.0),
    Vec2::new(10.0, 0.0),
    Vec2::new(-10.0, 10.0),
];

/// Radius of the circle drawn for a projectile
pub const PROJECTILE_RADIUS: f32 = 2.0;

/// Ship triangle rotated and translated into the arena
pub fn ship_triangle(ship: &ShipView) -> [Vec2; 3] {
    let rot = Vec2::from_angle(ship.rotation);
    SHIP_TRIANGLE.map(|corner| ship.pos + rot.rotate(corner))
}

/// Closed asteroid outline (first point is not repeated)
pub fn asteroid_outline(asteroid: &AsteroidView) -> Vec<Vec2> {
    asteroid.points.iter().map(|p| asteroid.pos + *p).collect()
}

/// Centers of the health pips drawn in the HUD, left to right
pub fn health_pips(health: u8, origin: Vec2, spacing: f32) -> Vec<Vec2> {
    (0..health)
        .map(|i| origin + Vec2::new(i as f32 * spacing, 0.0))
        .collect()
}
