// Character state machine: facing, walking and the walk cycle

use std::time::Duration;

use super::animation::{AnimationTimer, Pose, WalkFrame};
use super::direction::Direction;

/// Snapshot of what a character is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterState {
    /// Standing still, facing a direction
    Idle(Direction),
    /// Walking in a direction, showing one of the walk frames
    Walking(Direction, WalkFrame),
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::Idle(Direction::default())
    }
}

impl CharacterState {
    pub fn direction(&self) -> Direction {
        match *self {
            Self::Idle(direction) | Self::Walking(direction, _) => direction,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Walking(..))
    }

    /// Pose to look up in the animation table
    pub fn pose(&self) -> Pose {
        match *self {
            Self::Idle(_) => Pose::Idle,
            Self::Walking(_, frame) => Pose::Walk(frame),
        }
    }
}

/// State machine that handles facing and walk-cycle transitions.
///
/// The walk timer runs exactly while the character is walking.
#[derive(Debug, Clone)]
pub struct CharacterStateMachine {
    direction: Direction,
    timer: AnimationTimer,
}

impl CharacterStateMachine {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            direction: Direction::default(),
            timer: AnimationTimer::new(frame_interval),
        }
    }

    /// Get the current state
    pub fn state(&self) -> CharacterState {
        if self.is_moving() {
            CharacterState::Walking(self.direction, self.timer.frame())
        } else {
            CharacterState::Idle(self.direction)
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_moving(&self) -> bool {
        self.timer.is_running()
    }

    /// Run one tick. `held` is the winning directional input, if any.
    pub fn update(&mut self, held: Option<Direction>, now: Duration) {
        match held {
            Some(direction) => {
                self.direction = direction;
                self.timer.tick(now);
            }
            None => self.timer.reset(),
        }
    }
}
