// Character system
//
// This module contains everything related to the walking sprite characters:
// - Facing directions and the directional input seam
// - Per-type profiles (animation tables, step, timing, hit box)
// - State machine for facing and the walk cycle
// - Animation tables and the walk-cycle timer
// - Cursor hover selection

pub mod animation;
pub mod character;
pub mod direction;
pub mod profile;
pub mod selection;
pub mod state;

use crate::engine::assets::AtlasError;

// Re-export commonly used types
pub use character::{CharacterId, CharacterManager};
pub use direction::{Direction, DirectionalInput};
pub use profile::CharacterProfile;

/// Character configuration errors, raised when a character is built
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Animation table has no frame for {direction:?} pose slot {slot}")]
    MissingFrame { direction: Direction, slot: usize },

    #[error("Pose slot {0} does not exist (expected 0..=2)")]
    InvalidPoseSlot(usize),

    #[error("Walk frame interval must be greater than zero")]
    ZeroFrameInterval,

    #[error("Step size must be positive and finite, got {0}")]
    InvalidStep(f32),

    #[error("Hit box must have a positive size, got {width}x{height}")]
    InvalidHitBox { width: f32, height: f32 },

    #[error("Frame {index} is outside sheet {sheet} ({frame_count} frames)")]
    FrameOutsideSheet {
        sheet: &'static str,
        index: u32,
        frame_count: u32,
    },

    #[error(transparent)]
    Atlas(#[from] AtlasError),
}
