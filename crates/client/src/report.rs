//! Human-readable and JSON reports for planned and executed runs.
use std::fmt::Write as _;

use robot_core::{Bounds, Command, Position, Traversal};
use serde::Serialize;

use crate::mover::{RunOutcome, RunSummary};

/// Pre-flight report built from an eager traversal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub command: String,
    pub bounds: Bounds,
    pub start: Position,
    pub in_bounds: bool,
    pub moves: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_position: Option<Position>,
    /// Every visited position when in bounds, de-duplicated; the raw path
    /// up to the exit otherwise.
    pub positions: Vec<Position>,
}

impl PlanReport {
    pub fn new(command: &Command, traversal: &Traversal) -> Self {
        let positions = if traversal.in_bounds {
            traversal.unique_positions()
        } else {
            traversal.path.clone()
        };

        Self {
            command: command.to_string(),
            bounds: command.bounds(),
            start: command.start_pos(),
            in_bounds: traversal.in_bounds,
            moves: (traversal.path.len() - 1) as u64,
            exit_position: traversal.exit_position(),
            positions,
        }
    }

    pub fn render_text(&self, show_path: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Command:  {}", self.command);
        let _ = writeln!(out, "Map:      {}", self.bounds);
        let _ = writeln!(out, "Start:    {}", self.start);

        match self.exit_position {
            None => {
                let _ = writeln!(out, "Path will remain in bounds ({} moves).", self.moves);
                if show_path {
                    let _ = writeln!(
                        out,
                        "Unique positions that will be visited: {}",
                        join(&self.positions)
                    );
                }
            }
            Some(exit) => {
                if self.bounds.contains(exit) {
                    let _ = writeln!(out, "Path will leave the coordinate range after {exit}.");
                } else {
                    let _ = writeln!(out, "Path will leave bounds at {exit}.");
                }
                if show_path {
                    let _ = writeln!(
                        out,
                        "Positions that will be visited: {}",
                        join(&self.positions)
                    );
                }
            }
        }
        out
    }
}

/// Renders the outcome of a mover run.
pub fn render_run(summary: &RunSummary, show_path: bool) -> String {
    let mut out = String::new();
    match summary.outcome {
        RunOutcome::Completed => {
            let _ = writeln!(out, "Target reached at {}.", summary.final_position);
        }
        RunOutcome::Aborted {
            target: Some(target),
        } => {
            let _ = writeln!(
                out,
                "Unable to reach {target}, it is outside the map. Stopped at {}.",
                summary.final_position
            );
        }
        RunOutcome::Aborted { target: None } => {
            let _ = writeln!(
                out,
                "Unable to move past the coordinate range. Stopped at {}.",
                summary.final_position
            );
        }
    }
    let _ = writeln!(out, "Moves made: {}", summary.moves);
    let _ = writeln!(
        out,
        "Tiles cleaned: {}/{}",
        summary.cleaned_tiles, summary.total_tiles
    );
    if show_path {
        let _ = writeln!(out, "Trail: {}", join(&summary.trail));
    }
    out
}

fn join(positions: &[Position]) -> String {
    positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use robot_core::{parse, traverse};

    #[test]
    fn in_bounds_report_lists_unique_positions() {
        let command = parse("M:0,5,0,5;S:1,1;[E1,W1]").unwrap();
        let report = PlanReport::new(&command, &traverse(&command));

        assert!(report.in_bounds);
        assert_eq!(report.moves, 2);
        assert_eq!(
            report.positions,
            vec![Position::new(1, 1), Position::new(2, 1)]
        );

        let text = report.render_text(true);
        assert!(text.contains("Path will remain in bounds (2 moves)."));
        assert!(text.contains("Unique positions that will be visited: (1, 1), (2, 1)"));
    }

    #[test]
    fn out_of_bounds_report_names_exit() {
        let command = parse("M:0,5,0,5;S:4,4;[N2]").unwrap();
        let report = PlanReport::new(&command, &traverse(&command));

        assert_eq!(report.exit_position, Some(Position::new(4, 5)));
        let text = report.render_text(false);
        assert!(text.contains("Path will leave bounds at (4, 5)."));
        assert!(!text.contains("Positions that will be visited"));
    }

    #[test]
    fn coordinate_range_exit_is_reported_from_last_tile() {
        let command = parse("M:-2147483648,0,0,5;S:-2147483648,0;[W1]").unwrap();
        let report = PlanReport::new(&command, &traverse(&command));

        assert!(!report.in_bounds);
        assert_eq!(report.moves, 0);
        let text = report.render_text(false);
        assert!(text.contains("Path will leave the coordinate range after (-2147483648, 0)."));
    }

    #[test]
    fn run_report_counts_tiles_of_large_map() {
        let mut robot = crate::Robot::new(parse("M:-30000,30000,-30000,30000;S:0,0;[E2]").unwrap());
        let text = render_run(&robot.run_to_end(), false);

        assert!(text.contains("Target reached at (2, 0)."));
        assert!(text.contains("Tiles cleaned: 3/3600000000"));
    }
}
