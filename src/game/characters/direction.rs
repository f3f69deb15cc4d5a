// Facing directions and the directional input seam

use glam::Vec2;

use crate::engine::input::{Action, InputManager};

/// Which way a character is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Default for Direction {
    fn default() -> Self {
        Self::South
    }
}

impl Direction {
    /// Order in which held keys are polled each tick. First match wins.
    pub const PRIORITY: [Direction; 4] = [
        Direction::South,
        Direction::North,
        Direction::East,
        Direction::West,
    ];

    /// All directions in animation-table row order
    pub const ROWS: [Direction; 4] = [
        Direction::South,
        Direction::North,
        Direction::West,
        Direction::East,
    ];

    /// Row of this direction in an animation table.
    /// Matches the layout of the character sprite sheets.
    pub fn table_row(self) -> usize {
        match self {
            Self::South => 0,
            Self::North => 1,
            Self::West => 2,
            Self::East => 3,
        }
    }

    /// Per-tick position delta when walking this way.
    ///
    /// East walks toward -x and West toward +x. Key bindings and sprite
    /// sheets assume this pairing.
    pub fn step_delta(self, step: f32) -> Vec2 {
        match self {
            Self::South => Vec2::new(0.0, step),
            Self::North => Vec2::new(0.0, -step),
            Self::East => Vec2::new(-step, 0.0),
            Self::West => Vec2::new(step, 0.0),
        }
    }

    /// Input action that drives this direction
    pub fn action(self) -> Action {
        match self {
            Self::South => Action::MoveSouth,
            Self::North => Action::MoveNorth,
            Self::East => Action::MoveEast,
            Self::West => Action::MoveWest,
        }
    }
}

/// Anything that can report whether a directional key is held this tick
pub trait DirectionalInput {
    fn is_held(&self, direction: Direction) -> bool;

    /// Highest-priority held direction, if any
    fn held_direction(&self) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|direction| self.is_held(*direction))
    }
}

impl DirectionalInput for InputManager {
    fn is_held(&self, direction: Direction) -> bool {
        self.is_pressed(direction.action())
    }
}

/// Input source that never reports a held key
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

#[cfg(test)]
impl DirectionalInput for NoInput {
    fn is_held(&self, _direction: Direction) -> bool {
        false
    }
}
