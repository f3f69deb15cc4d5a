// Input manager - tracks held actions and the cursor

use std::collections::HashSet;

use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::action::Action;
use super::config::InputConfig;

/// Keyboard and cursor state for the local player
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,

    /// Actions currently held
    pressed: HashSet<Action>,

    /// Actions pressed since the last `update`
    just_pressed: HashSet<Action>,

    /// Last cursor position in window pixels
    cursor: Vec2,
}

impl InputManager {
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            cursor: Vec2::ZERO,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key codes
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply a key transition
    pub fn process_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        let Some(action) = self.config.get_action(key) else {
            return;
        };

        match state {
            ElementState::Pressed if !repeat => self.press(action),
            ElementState::Pressed => {}
            ElementState::Released => self.release(action),
        }
    }

    /// Record the cursor position reported by `CursorMoved`
    pub fn set_cursor_position(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Vec2::new(position.x as f32, position.y as f32);
    }

    /// Cursor position in window pixels
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed since the last `update`
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Call once per frame after the tick has consumed input
    pub fn update(&mut self) {
        self.just_pressed.clear();
    }

    /// Drop all held keys, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
