//! Headless robot that plays a command back one tile per tick.
//!
//! The robot owns its [`Command`] and a [`StepCursor`]; nothing global is
//! involved. Every candidate position is checked with the same
//! [`robot_core::Bounds::contains`] rule the eager planner uses, so a run and
//! [`robot_core::traverse`] always agree on where a plan leaves the map.
use std::collections::HashSet;

use robot_core::{Command, Direction, ErrorSeverity, Position, RobotError, StepCursor};
use serde::Serialize;

/// Cleaning state of a map tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileState {
    Dirty,
    Clean,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("target {target} is outside the map (current position {from})")]
    OutOfBounds { from: Position, target: Position },

    #[error("moving {direction} from {from} leaves the coordinate range")]
    BeyondGrid { from: Position, direction: Direction },
}

impl RobotError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "out_of_bounds",
            Self::BeyondGrid { .. } => "beyond_grid",
        }
    }
}

/// Result of a single successful tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Moved {
        direction: Direction,
        position: Position,
    },
    Finished,
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunOutcome {
    Completed,
    /// `target` is absent when the refused move left the coordinate range.
    Aborted { target: Option<Position> },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub final_position: Position,
    pub moves: u64,
    pub cleaned_tiles: usize,
    pub total_tiles: u64,
    pub trail: Vec<Position>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Running,
    Finished,
    Aborted(MoveError),
}

pub struct Robot {
    command: Command,
    cursor: StepCursor,
    position: Position,
    /// In-bounds tiles the robot has stood on; every other map tile is dirty.
    cleaned: HashSet<Position>,
    trail: Vec<Position>,
    status: Status,
}

impl Robot {
    /// Activates a robot at the command's start position with every map tile
    /// dirty, then cleans the start tile.
    pub fn new(command: Command) -> Self {
        let position = command.start_pos();

        let mut robot = Self {
            cursor: command.cursor(),
            command,
            position,
            cleaned: HashSet::new(),
            trail: vec![position],
            status: Status::Running,
        };
        robot.clean(position);

        tracing::info!(
            start = %position,
            bounds = %robot.command.bounds(),
            moves = robot.command.total_distance(),
            "Robot activated"
        );
        if !robot.command.is_in_bounds(position) {
            tracing::warn!(start = %position, "Start position is outside the map");
        }

        robot
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// State of a map tile, or `None` for positions outside the map.
    pub fn tile(&self, position: Position) -> Option<TileState> {
        if !self.command.is_in_bounds(position) {
            return None;
        }
        Some(if self.cleaned.contains(&position) {
            TileState::Clean
        } else {
            TileState::Dirty
        })
    }

    pub fn cleaned_tiles(&self) -> usize {
        self.cleaned.len()
    }

    pub fn total_tiles(&self) -> u64 {
        self.command.bounds().area()
    }

    /// Every position occupied so far, starting with the start position.
    pub fn trail(&self) -> &[Position] {
        &self.trail
    }

    pub fn is_done(&self) -> bool {
        self.status != Status::Running
    }

    /// Performs one unit move.
    ///
    /// Once the plan is exhausted this keeps returning [`Tick::Finished`];
    /// once a move has been refused it keeps returning the same error without
    /// consuming further directions.
    pub fn tick(&mut self) -> Result<Tick, MoveError> {
        match self.status {
            Status::Finished => return Ok(Tick::Finished),
            Status::Aborted(err) => return Err(err),
            Status::Running => {}
        }

        let Some(direction) = self.cursor.next_direction() else {
            self.status = Status::Finished;
            tracing::info!(position = %self.position, "Target reached");
            return Ok(Tick::Finished);
        };

        let Some(target) = self.position.step(direction) else {
            let err = MoveError::BeyondGrid {
                from: self.position,
                direction,
            };
            self.status = Status::Aborted(err);
            tracing::warn!(
                position = %self.position,
                %direction,
                "Unable to move, target is beyond the coordinate range"
            );
            return Err(err);
        };
        if !self.command.is_in_bounds(target) {
            let err = MoveError::OutOfBounds {
                from: self.position,
                target,
            };
            self.status = Status::Aborted(err);
            tracing::warn!(
                position = %self.position,
                target = %target,
                "Unable to reach target, it is outside the map"
            );
            return Err(err);
        }

        self.position = target;
        self.trail.push(target);
        self.clean(target);
        tracing::debug!(%direction, position = %target, "Moved");

        Ok(Tick::Moved {
            direction,
            position: target,
        })
    }

    /// Ticks until the plan finishes or a move is refused.
    pub fn run_to_end(&mut self) -> RunSummary {
        let outcome = loop {
            match self.tick() {
                Ok(Tick::Moved { .. }) => continue,
                Ok(Tick::Finished) => break RunOutcome::Completed,
                Err(MoveError::OutOfBounds { target, .. }) => {
                    break RunOutcome::Aborted {
                        target: Some(target),
                    };
                }
                Err(MoveError::BeyondGrid { .. }) => break RunOutcome::Aborted { target: None },
            }
        };
        self.summary(outcome)
    }

    fn summary(&self, outcome: RunOutcome) -> RunSummary {
        RunSummary {
            outcome,
            final_position: self.position,
            moves: (self.trail.len() - 1) as u64,
            cleaned_tiles: self.cleaned_tiles(),
            total_tiles: self.total_tiles(),
            trail: self.trail.clone(),
        }
    }

    fn clean(&mut self, position: Position) {
        if self.command.is_in_bounds(position) {
            self.cleaned.insert(position);
        }
    }
}
