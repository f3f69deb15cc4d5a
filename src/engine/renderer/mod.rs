// Rendering seam
//
// Game code decides what to draw and hands `Sprite`s to a `Renderer`. The
// bundled `SpriteBatch` turns them into instance data for a GPU backend.

mod camera;
mod sprite;
mod vertex;

pub use camera::Camera;
pub use sprite::{Sprite, SpriteBatch};
pub use vertex::SpriteInstance;

/// Anything that can draw a sprite-sheet frame as a screen-space quad
pub trait Renderer {
    fn draw_sprite(&mut self, sprite: &Sprite);
}

/// Records draw requests without drawing anything
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub sprites: Vec<Sprite>,
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.sprites.push(*sprite);
    }
}
