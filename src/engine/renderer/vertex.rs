// Per-sprite instance data for the GPU

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::engine::assets::AtlasRegion;

/// One textured quad, in screen pixels
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Top-left corner
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
    pub z_order: f32,
    pub _padding: [f32; 3],
}

impl SpriteInstance {
    pub fn new(position: Vec2, size: Vec2, region: &AtlasRegion, z_order: f32) -> Self {
        Self {
            position: position.to_array(),
            size: size.to_array(),
            uv_min: region.uv_min.to_array(),
            uv_max: region.uv_max.to_array(),
            z_order,
            _padding: [0.0; 3],
        }
    }
}
