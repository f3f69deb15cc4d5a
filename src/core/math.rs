// Math utilities and helper functions

use glam::Vec2;

/// Check if a point lies inside the box spanning `origin..=origin + size`.
/// Both edges are inclusive.
pub fn point_in_rect(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    let max = origin + size;
    point.x >= origin.x && point.x <= max.x && point.y >= origin.y && point.y <= max.y
}

/// Drop the fractional part of both components (rounds toward zero)
pub fn truncate(v: Vec2) -> Vec2 {
    Vec2::new(v.x.trunc(), v.y.trunc())
}
