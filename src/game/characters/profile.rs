// Character profiles - everything that differs between character types
//
// Ruler and Peasant share one controller; only the data below tells them apart.

use std::time::Duration;

use glam::Vec2;

use crate::engine::assets::{SheetId, SheetRegistry};

use super::animation::AnimationTable;
use super::direction::Direction;
use super::selection::DEFAULT_HIT_BOX;
use super::ConfigError;

pub const RULER_SHEET: SheetId = SheetId::new("ruler");
pub const RULER_HIGHLIGHT_SHEET: SheetId = SheetId::new("ruler_highlights");
pub const PEASANT_SHEET: SheetId = SheetId::new("peasant");

/// Walk-cycle frame duration shared by the shipped characters
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(150);

/// World units moved per tick while a direction is held
pub const DEFAULT_STEP: f32 = 2.0;

/// Offset from a base frame to its outline frame on the highlight sheet
pub const RULER_HIGHLIGHT_OFFSET: u32 = 29;

/// Selection outline drawn over a selected character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub sheet: SheetId,
    /// Added to the base frame index to find the outline frame
    pub offset: u32,
}

/// Per-type character configuration
#[derive(Debug, Clone)]
pub struct CharacterProfile {
    pub name: &'static str,
    pub animations: AnimationTable,
    /// Sheet the animation table indexes into
    pub sheet: SheetId,
    pub highlight: Option<Highlight>,
    /// World units moved per tick while walking
    pub step: f32,
    pub frame_interval: Duration,
    /// Selection hit box, anchored at the character position
    pub hit_box: Vec2,
    /// Quad size in world units
    pub draw_size: Vec2,
    /// Whether keyboard input drives this character
    pub controllable: bool,
}

impl CharacterProfile {
    /// The player's ruler: keyboard driven, outlined when hovered
    pub fn ruler() -> Result<Self, ConfigError> {
        let animations = AnimationTable::builder()
            .row(Direction::South, 8, 7, 9)
            .row(Direction::North, 17, 16, 18)
            .row(Direction::West, 14, 13, 15)
            .row(Direction::East, 11, 10, 12)
            .build()?;

        Ok(Self {
            name: "Ruler",
            animations,
            sheet: RULER_SHEET,
            highlight: Some(Highlight {
                sheet: RULER_HIGHLIGHT_SHEET,
                offset: RULER_HIGHLIGHT_OFFSET,
            }),
            step: DEFAULT_STEP,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            hit_box: DEFAULT_HIT_BOX,
            draw_size: Vec2::splat(64.0),
            controllable: true,
        })
    }

    /// A peasant: stands idle, no outline
    pub fn peasant() -> Result<Self, ConfigError> {
        let animations = AnimationTable::builder()
            .row(Direction::South, 20, 19, 21)
            .row(Direction::North, 29, 28, 30)
            .row(Direction::West, 26, 25, 27)
            .row(Direction::East, 23, 22, 24)
            .build()?;

        Ok(Self {
            name: "Peasant",
            animations,
            sheet: PEASANT_SHEET,
            highlight: None,
            step: DEFAULT_STEP,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            hit_box: DEFAULT_HIT_BOX,
            draw_size: Vec2::splat(64.0),
            controllable: false,
        })
    }

    /// Check values that would otherwise misbehave silently at runtime
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval.is_zero() {
            return Err(ConfigError::ZeroFrameInterval);
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if !(self.hit_box.x > 0.0 && self.hit_box.y > 0.0) {
            return Err(ConfigError::InvalidHitBox {
                width: self.hit_box.x,
                height: self.hit_box.y,
            });
        }
        Ok(())
    }

    /// Check that every frame this profile can draw exists on its sheets
    pub fn validate_against(&self, sheets: &SheetRegistry) -> Result<(), ConfigError> {
        self.validate()?;

        check_frames(sheets, self.sheet, self.animations.indices())?;

        if let Some(highlight) = self.highlight {
            // An overflowing outline index saturates to one no sheet contains
            check_frames(
                sheets,
                highlight.sheet,
                self.animations
                    .indices()
                    .map(|index| index.checked_add(highlight.offset).unwrap_or(u32::MAX)),
            )?;
        }

        Ok(())
    }
}

fn check_frames(
    sheets: &SheetRegistry,
    sheet_id: SheetId,
    mut indices: impl Iterator<Item = u32>,
) -> Result<(), ConfigError> {
    let sheet = sheets.get(sheet_id)?;

    match indices.find(|index| !sheet.contains(*index)) {
        Some(index) => Err(ConfigError::FrameOutsideSheet {
            sheet: sheet_id.name(),
            index,
            frame_count: sheet.frame_count(),
        }),
        None => Ok(()),
    }
}
