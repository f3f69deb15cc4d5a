// Camera and viewport for the top-down scene
//
// World space has +y pointing down the screen. The camera position is the
// world point shown at the top-left corner of the window.

use glam::Vec2;

use crate::core::math::truncate;

/// Smallest zoom the camera accepts
pub const MIN_ZOOM: f32 = 0.1;

/// 2D camera for sprite rendering
#[derive(Debug, Clone)]
pub struct Camera {
    /// World offset shown at the top-left of the viewport
    pub position: Vec2,
    /// Camera zoom level (1.0 = normal, 2.0 = zoomed in 2x)
    pub zoom: f32,
    /// Viewport width in pixels
    viewport_width: f32,
    /// Viewport height in pixels
    viewport_height: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position,
            zoom: 1.0,
            viewport_width,
            viewport_height,
        }
    }

    /// Set camera zoom
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(MIN_ZOOM);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Convert world coordinates to screen coordinates
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom
    }

    /// Un-project the cursor for hit-testing.
    ///
    /// Cursor and camera offset are truncated to whole units. Zoom is not
    /// applied.
    pub fn cursor_to_world(&self, cursor_screen: Vec2) -> Vec2 {
        truncate(cursor_screen) + truncate(self.position)
    }

    /// Get the viewport bounds in world coordinates
    pub fn viewport_bounds(&self) -> Viewport {
        Viewport {
            min: self.position,
            max: self.position
                + Vec2::new(self.viewport_width, self.viewport_height) / self.zoom,
        }
    }
}

/// Viewport bounds in world coordinates
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub min: Vec2,
    pub max: Vec2,
}

impl Viewport {
    /// Check if a box anchored at `origin` intersects the viewport
    pub fn intersects_rect(&self, origin: Vec2, size: Vec2) -> bool {
        let rect_max = origin + size;

        rect_max.x >= self.min.x
            && origin.x <= self.max.x
            && rect_max.y >= self.min.y
            && origin.y <= self.max.y
    }
}
