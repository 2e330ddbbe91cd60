//! Lazy, one-move-at-a-time playback of a command's steps.
use crate::command::{Command, Step};
use crate::geometry::Direction;

/// Traversal state over an immutable step sequence.
///
/// The cursor owns a copy of the steps and tracks `{ index, remaining }`, so
/// consuming it never changes the [`Command`] it was created from. Each call
/// to [`StepCursor::next_direction`] spends one unit of distance. Restarting
/// playback means asking the command for a new cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepCursor {
    steps: Box<[Step]>,
    index: usize,
    remaining: u32,
}

impl StepCursor {
    pub fn new(command: &Command) -> Self {
        let steps: Box<[Step]> = command.steps().into();
        let remaining = steps.first().map_or(0, Step::distance);
        Self {
            steps,
            index: 0,
            remaining,
        }
    }

    /// Returns the next direction to move in, or `None` once every step has
    /// been spent.
    pub fn next_direction(&mut self) -> Option<Direction> {
        let step = self.steps.get(self.index)?;
        let direction = step.direction;

        self.remaining -= 1;
        if self.remaining == 0 {
            self.index += 1;
            self.remaining = self.steps.get(self.index).map_or(0, Step::distance);
            tracing::trace!(index = self.index, "step exhausted");
        }

        Some(direction)
    }

    /// The step currently being consumed, if any.
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.index)
    }

    /// Unit moves left in the current step.
    pub fn remaining_in_step(&self) -> u32 {
        self.remaining
    }

    /// Unit moves left across all pending steps.
    pub fn remaining_distance(&self) -> u64 {
        let pending: u64 = self
            .steps
            .iter()
            .skip(self.index + 1)
            .map(|step| u64::from(step.distance()))
            .sum();
        u64::from(self.remaining) + pending
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.steps.len()
    }
}

impl Iterator for StepCursor {
    type Item = Direction;

    fn next(&mut self) -> Option<Direction> {
        self.next_direction()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining_distance()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
