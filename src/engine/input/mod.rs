// Input handling system
//
// Keyboard events from winit are mapped to game actions through a rebindable
// configuration; the manager keeps the held set and the last cursor position.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `config`: Key binding configuration and remapping
// - `manager`: Held actions and cursor tracking
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, Action};
//
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Query input state during the tick
// if input.is_pressed(Action::MoveSouth) {
//     // walk south
// }
//
// // At the end of each frame
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;
