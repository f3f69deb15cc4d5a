// Sprite sheet bookkeeping
//
// Textures themselves are loaded elsewhere; this module only knows how frames
// are laid out on each sheet.

mod atlas;

pub use atlas::{AtlasRegion, SheetId, SheetRegistry, SpriteSheet};

/// Sprite sheet lookup errors
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("Sprite sheet not registered: {0}")]
    UnknownSheet(String),

    #[error("Frame {index} is outside sheet {sheet} ({frame_count} frames)")]
    FrameOutOfRange {
        sheet: String,
        index: u32,
        frame_count: u32,
    },

    #[error("Sheet {sheet} has an invalid layout: {columns}x{rows} frames of {frame_width}x{frame_height} px")]
    InvalidLayout {
        sheet: String,
        columns: u32,
        rows: u32,
        frame_width: u32,
        frame_height: u32,
    },
}
