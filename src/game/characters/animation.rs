// Directional walk animation: frame tables and the walk-cycle timer

use std::collections::HashMap;
use std::time::Duration;

use super::direction::Direction;
use super::ConfigError;

/// Number of pose slots per direction (idle + two walk frames)
pub const POSE_SLOTS: usize = 3;

/// Which of the two alternating walk frames is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkFrame {
    First,
    Second,
}

impl Default for WalkFrame {
    fn default() -> Self {
        Self::First
    }
}

impl WalkFrame {
    /// The other walk frame
    pub fn toggled(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// 1 or 2
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

/// A column of the animation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pose {
    Idle,
    Walk(WalkFrame),
}

impl Pose {
    /// Column of this pose in an animation table
    pub fn slot(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Walk(frame) => frame.number() as usize,
        }
    }
}

/// Atlas frame index for every (direction, pose) pair of one character type.
///
/// Rows follow [`Direction::table_row`], columns follow [`Pose::slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTable {
    frames: [[u32; POSE_SLOTS]; 4],
}

impl AnimationTable {
    /// Start building a table entry by entry
    pub fn builder() -> AnimationTableBuilder {
        AnimationTableBuilder::default()
    }

    /// Atlas index to draw for a direction and pose
    pub fn frame(&self, direction: Direction, pose: Pose) -> u32 {
        self.frames[direction.table_row()][pose.slot()]
    }

    /// Every index in the table
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.frames.iter().flatten().copied()
    }
}

/// Collects table entries and refuses to build while any pair is missing
#[derive(Debug, Default)]
pub struct AnimationTableBuilder {
    entries: HashMap<(Direction, usize), u32>,
}

impl AnimationTableBuilder {
    /// Set the atlas index for one direction and pose slot
    pub fn set(mut self, direction: Direction, slot: usize, index: u32) -> Self {
        self.entries.insert((direction, slot), index);
        self
    }

    /// Set idle and both walk frames for one direction
    pub fn row(self, direction: Direction, idle: u32, walk1: u32, walk2: u32) -> Self {
        self.set(direction, 0, idle)
            .set(direction, 1, walk1)
            .set(direction, 2, walk2)
    }

    pub fn build(self) -> Result<AnimationTable, ConfigError> {
        if let Some(&(_, slot)) = self.entries.keys().find(|(_, slot)| *slot >= POSE_SLOTS) {
            return Err(ConfigError::InvalidPoseSlot(slot));
        }

        let mut frames = [[0; POSE_SLOTS]; 4];
        for direction in Direction::ROWS {
            for slot in 0..POSE_SLOTS {
                let index = self
                    .entries
                    .get(&(direction, slot))
                    .ok_or(ConfigError::MissingFrame { direction, slot })?;
                frames[direction.table_row()][slot] = *index;
            }
        }

        Ok(AnimationTable { frames })
    }
}

/// Drives the two-frame walk cycle.
///
/// `frame_start` is `None` whenever the owner is not walking, so a running
/// timer means a walking character.
#[derive(Debug, Clone)]
pub struct AnimationTimer {
    frame: WalkFrame,
    frame_start: Option<Duration>,
    frame_interval: Duration,
}

impl AnimationTimer {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame: WalkFrame::First,
            frame_start: None,
            frame_interval,
        }
    }

    /// Advance the cycle for a tick spent walking.
    /// Returns true if the walk frame toggled.
    pub fn tick(&mut self, now: Duration) -> bool {
        let start = *self.frame_start.get_or_insert(now);

        if now.saturating_sub(start) >= self.frame_interval {
            self.frame_start = Some(now);
            self.frame = self.frame.toggled();
            return true;
        }

        false
    }

    /// Stop the cycle (walking ended)
    pub fn reset(&mut self) {
        self.frame = WalkFrame::First;
        self.frame_start = None;
    }

    /// Current walk frame
    pub fn frame(&self) -> WalkFrame {
        self.frame
    }

    /// When the current walk frame started showing
    pub fn frame_start(&self) -> Option<Duration> {
        self.frame_start
    }

    /// Check if the cycle is running
    pub fn is_running(&self) -> bool {
        self.frame_start().is_some()
    }
}
