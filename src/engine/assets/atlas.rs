// Sprite sheet atlases: grid-laid frames addressed by integer index

use std::collections::HashMap;

use glam::Vec2;

use super::AtlasError;

/// Identifies one sprite sheet texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(&'static str);

impl SheetId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for SheetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A region within a texture atlas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRegion {
    /// UV coordinates (0.0 to 1.0)
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

impl AtlasRegion {
    /// Create a new atlas region with calculated UV coordinates
    pub fn new(x: u32, y: u32, width: u32, height: u32, atlas_width: u32, atlas_height: u32) -> Self {
        let uv_min = Vec2::new(
            x as f32 / atlas_width as f32,
            y as f32 / atlas_height as f32,
        );
        let uv_max = Vec2::new(
            (x + width) as f32 / atlas_width as f32,
            (y + height) as f32 / atlas_height as f32,
        );

        Self { uv_min, uv_max }
    }
}

/// A sprite sheet of equally sized frames, numbered row-major from 0.
///
/// Built through [`SpriteSheet::new`], which guarantees a non-empty grid whose
/// pixel size and frame count fit in `u32`.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    id: SheetId,
    /// Width of each frame in pixels
    frame_width: u32,
    /// Height of each frame in pixels
    frame_height: u32,
    /// Number of frame columns
    columns: u32,
    /// Number of frame rows
    rows: u32,
}

impl SpriteSheet {
    pub fn new(
        id: SheetId,
        frame_width: u32,
        frame_height: u32,
        columns: u32,
        rows: u32,
    ) -> Result<Self, AtlasError> {
        let fits = frame_width.checked_mul(columns).is_some()
            && frame_height.checked_mul(rows).is_some()
            && columns.checked_mul(rows).is_some();

        if !fits || frame_width == 0 || frame_height == 0 || columns == 0 || rows == 0 {
            return Err(AtlasError::InvalidLayout {
                sheet: id.name().to_string(),
                columns,
                rows,
                frame_width,
                frame_height,
            });
        }

        Ok(Self {
            id,
            frame_width,
            frame_height,
            columns,
            rows,
        })
    }

    /// Width of the whole texture in pixels
    pub fn width(&self) -> u32 {
        self.frame_width * self.columns
    }

    /// Height of the whole texture in pixels
    pub fn height(&self) -> u32 {
        self.frame_height * self.rows
    }

    pub fn frame_count(&self) -> u32 {
        self.columns * self.rows
    }

    pub fn contains(&self, index: u32) -> bool {
        index < self.frame_count()
    }

    /// Get the region of a frame
    pub fn region(&self, index: u32) -> Result<AtlasRegion, AtlasError> {
        if !self.contains(index) {
            return Err(AtlasError::FrameOutOfRange {
                sheet: self.id.name().to_string(),
                index,
                frame_count: self.frame_count(),
            });
        }

        let col = index % self.columns;
        let row = index / self.columns;

        Ok(AtlasRegion::new(
            col * self.frame_width,
            row * self.frame_height,
            self.frame_width,
            self.frame_height,
            self.width(),
            self.height(),
        ))
    }
}

/// All sprite sheets known to the renderer
#[derive(Debug, Default)]
pub struct SheetRegistry {
    sheets: HashMap<SheetId, SpriteSheet>,
}

impl SheetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sheet, replacing any sheet with the same id
    pub fn insert(&mut self, sheet: SpriteSheet) {
        self.sheets.insert(sheet.id, sheet);
    }

    pub fn with_sheet(mut self, sheet: SpriteSheet) -> Self {
        self.insert(sheet);
        self
    }

    pub fn get(&self, id: SheetId) -> Result<&SpriteSheet, AtlasError> {
        self.sheets
            .get(&id)
            .ok_or_else(|| AtlasError::UnknownSheet(id.name().to_string()))
    }

    /// Look up a frame region on a sheet
    pub fn region(&self, id: SheetId, index: u32) -> Result<AtlasRegion, AtlasError> {
        self.get(id)?.region(index)
    }

}
