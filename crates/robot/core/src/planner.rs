//! Eager path simulation used for pre-flight validation and reporting.
use std::collections::HashSet;

use crate::command::Command;
use crate::geometry::Position;

/// Outcome of simulating a whole command up front.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Traversal {
    /// True when every generated position stayed inside the map.
    pub in_bounds: bool,
    /// Start position followed by one entry per unit move. When the plan
    /// leaves the map, the final entry is the first out-of-bounds position.
    /// A move whose target lies beyond the `i32` range is not recorded; the
    /// path then ends at the tile the move was attempted from.
    pub path: Vec<Position>,
}

impl Traversal {
    /// The last position of a path that did not stay in bounds.
    pub fn exit_position(&self) -> Option<Position> {
        if self.in_bounds {
            None
        } else {
            self.path.last().copied()
        }
    }

    pub fn final_position(&self) -> Option<Position> {
        self.path.last().copied()
    }

    /// Visited positions in first-visit order, without repeats.
    pub fn unique_positions(&self) -> Vec<Position> {
        let mut seen = HashSet::with_capacity(self.path.len());
        self.path
            .iter()
            .copied()
            .filter(|position| seen.insert(*position))
            .collect()
    }
}

/// Walks every step of `command` one tile at a time.
///
/// The start position is recorded but not checked; every subsequent position
/// is checked with [`crate::Bounds::contains`] and the walk stops at the first
/// one that falls outside. A target that cannot be represented as a
/// [`Position`] is outside every map and also stops the walk. The command is
/// only read, so this can run while a [`crate::StepCursor`] over the same
/// command is in use.
pub fn traverse(command: &Command) -> Traversal {
    let bounds = command.bounds();
    let mut current = command.start_pos();
    let mut path = Vec::with_capacity(1 + command.total_distance().min(1 << 16) as usize);
    path.push(current);

    for step in command.steps() {
        for _ in 0..step.distance() {
            let Some(next) = current.step(step.direction) else {
                tracing::debug!(
                    from = %current,
                    direction = %step.direction,
                    "path leaves coordinate range"
                );
                return Traversal {
                    in_bounds: false,
                    path,
                };
            };
            current = next;
            path.push(current);
            if !bounds.contains(current) {
                tracing::debug!(exit = %current, moves = path.len() - 1, "path leaves bounds");
                return Traversal {
                    in_bounds: false,
                    path,
                };
            }
        }
    }

    tracing::debug!(end = %current, moves = path.len() - 1, "path stays in bounds");
    Traversal {
        in_bounds: true,
        path,
    }
}
