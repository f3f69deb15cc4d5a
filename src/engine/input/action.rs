// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveSouth,
    MoveNorth,
    MoveEast,
    MoveWest,

    // Meta actions
    Pause,
    Menu,
}

/// Default keyboard bindings.
///
/// A drives `MoveEast` and D drives `MoveWest`; see `Direction::step_delta`.
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (WASD)
        (KeyCode::KeyS, Action::MoveSouth),
        (KeyCode::KeyW, Action::MoveNorth),
        (KeyCode::KeyA, Action::MoveEast),
        (KeyCode::KeyD, Action::MoveWest),
        // Meta
        (KeyCode::KeyP, Action::Pause),
        (KeyCode::Escape, Action::Menu),
    ]
}
