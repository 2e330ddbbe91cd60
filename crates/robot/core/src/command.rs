//! Structured robot command produced by the parser.
use std::fmt;
use std::num::NonZeroU32;

use crate::cursor::StepCursor;
use crate::geometry::{Bounds, Direction, Position};

/// One leg of a planned path: a direction plus the number of unit moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub direction: Direction,
    distance: NonZeroU32,
}

impl Step {
    pub const fn new(direction: Direction, distance: NonZeroU32) -> Self {
        Self {
            direction,
            distance,
        }
    }

    /// Builds a step from a raw distance, rejecting zero.
    pub fn try_new(direction: Direction, distance: u32) -> Option<Self> {
        NonZeroU32::new(distance).map(|distance| Self::new(direction, distance))
    }

    pub const fn distance(&self) -> u32 {
        self.distance.get()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.letter(), self.distance)
    }
}

/// A parsed robot command: the map rectangle, where the robot starts and the
/// ordered legs it should walk.
///
/// Commands are immutable. Incremental playback goes through a
/// [`StepCursor`] obtained from [`Command::cursor`], so the same command can
/// be simulated with [`crate::traverse`] while a cursor is live.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    bounds: Bounds,
    start: Position,
    steps: Vec<Step>,
}

impl Command {
    pub fn new(bounds: Bounds, start: Position, steps: Vec<Step>) -> Self {
        Self {
            bounds,
            start,
            steps,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Inclusive lower corner of the map.
    pub fn min_pos(&self) -> Position {
        self.bounds.min
    }

    /// Exclusive upper corner of the map.
    pub fn max_pos(&self) -> Position {
        self.bounds.max
    }

    pub fn start_pos(&self) -> Position {
        self.start
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Sum of all step distances, i.e. the number of unit moves in the plan.
    pub fn total_distance(&self) -> u64 {
        self.steps.iter().map(|step| u64::from(step.distance())).sum()
    }

    pub fn is_in_bounds(&self, position: Position) -> bool {
        self.bounds.contains(position)
    }

    /// Starts a fresh lazy traversal over this command's steps.
    pub fn cursor(&self) -> StepCursor {
        StepCursor::new(self)
    }
}

/// Serializes back into the command grammar, e.g.
/// `M:-10,10,-10,10;S:-5,5;[W5,E5]`.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Bounds { min, max } = self.bounds;
        write!(
            f,
            "M:{},{},{},{};S:{},{};[",
            min.x, max.x, min.y, max.y, self.start.x, self.start.y
        )?;
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{step}")?;
        }
        f.write_str("]")
    }
}
