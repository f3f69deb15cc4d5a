// Cursor hover selection

use glam::Vec2;

use crate::core::math::point_in_rect;

/// Hit box size used by both shipped characters (matches their draw size)
pub const DEFAULT_HIT_BOX: Vec2 = Vec2::splat(64.0);

/// Point-in-box test between the cursor and a character's hit box.
///
/// The box is anchored at the character position and extends toward +x/+y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionTester {
    size: Vec2,
}

impl Default for SelectionTester {
    fn default() -> Self {
        Self::new(DEFAULT_HIT_BOX)
    }
}

impl SelectionTester {
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    /// True if `cursor_world` lies inside the box, edges included
    pub fn is_hit(&self, cursor_world: Vec2, position: Vec2) -> bool {
        point_in_rect(cursor_world, position, self.size)
    }
}
