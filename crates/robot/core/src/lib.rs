//! Command parsing and path planning for a grid-bound robot.
//!
//! `robot-core` turns a compact command string into a [`Command`] and offers
//! two ways to consume it:
//!
//! - [`traverse`] simulates the whole plan eagerly and reports whether it
//!   stays inside the map, together with every visited position.
//! - [`StepCursor`] hands out one [`Direction`] per call for incremental
//!   playback by an external mover.
//!
//! Both paths share [`Bounds::contains`] as the single bounds rule.
//!
//! ```
//! use robot_core::{Position, parse, traverse};
//!
//! let command = parse("M:0,5,0,5;S:4,4;[N2]").unwrap();
//! let traversal = traverse(&command);
//! assert!(!traversal.in_bounds);
//! assert_eq!(traversal.exit_position(), Some(Position::new(4, 5)));
//! ```
pub mod command;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod parser;
pub mod planner;

pub use command::{Command, Step};
pub use cursor::StepCursor;
pub use error::{ErrorSeverity, RobotError};
pub use geometry::{Bounds, Direction, Position};
pub use parser::{ParseError, SectionKind, parse};
pub use planner::{Traversal, traverse};

/// Advances `cursor` by one unit move. See [`StepCursor::next_direction`].
pub fn next_direction(cursor: &mut StepCursor) -> Option<Direction> {
    cursor.next_direction()
}

/// Half-open bounds check against the command's map.
pub fn is_in_bounds(command: &Command, position: Position) -> bool {
    command.is_in_bounds(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_yields_total_distance_directions() {
        let command = parse("M:-10,10,-10,10;S:-5,5;[W5,E5,N4,E3,S2,W1]").unwrap();
        let mut cursor = command.cursor();

        let mut count = 0;
        while next_direction(&mut cursor).is_some() {
            count += 1;
        }

        assert_eq!(count, command.total_distance());
        assert_eq!(next_direction(&mut cursor), None);
    }

    #[test]
    fn bounds_check_is_half_open_at_both_corners() {
        let command = parse("M:-3,3,-1,4;S:0,0;[]").unwrap();

        assert!(is_in_bounds(&command, command.min_pos()));
        assert!(!is_in_bounds(&command, command.max_pos()));
        assert!(!is_in_bounds(&command, Position::new(3, 0)));
        assert!(!is_in_bounds(&command, Position::new(0, 4)));
        assert!(is_in_bounds(&command, Position::new(2, 3)));
    }
}
