//! Grid coordinates, cardinal directions and the half-open bounding box.
use std::fmt;

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring tile one unit away in `direction`, or `None`
    /// when that tile lies beyond the `i32` coordinate range.
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four grid directions a robot can move in.
///
/// North increases `y`, East increases `x`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Single-letter code used by the command grammar.
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Inverse of [`Direction::letter`]. Case-sensitive.
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

/// Axis-aligned rectangle with inclusive `min` and exclusive `max`.
///
/// This is the only place where the bounds rule lives; the eager planner,
/// [`crate::Command::is_in_bounds`] and any external mover all call
/// [`Bounds::contains`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    pub const fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    pub const fn contains(&self, position: Position) -> bool {
        position.x >= self.min.x
            && position.x < self.max.x
            && position.y >= self.min.y
            && position.y < self.max.y
    }

    /// Number of columns; zero when the rectangle is inverted.
    pub fn width(&self) -> u32 {
        span(self.min.x, self.max.x)
    }

    /// Number of rows; zero when the rectangle is inverted.
    pub fn height(&self) -> u32 {
        span(self.min.y, self.max.y)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}) x [{}..{})",
            self.min.x, self.max.x, self.min.y, self.max.y
        )
    }
}

fn span(min: i32, max: i32) -> u32 {
    if max > min { max.abs_diff(min) } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn direction_offsets_match_grid_axes() {
        assert_eq!(Direction::North.delta(), (0, 1));
        assert_eq!(Direction::East.delta(), (1, 0));
        assert_eq!(Direction::South.delta(), (0, -1));
        assert_eq!(Direction::West.delta(), (-1, 0));
    }

    #[test]
    fn letters_round_trip_for_every_direction() {
        for direction in Direction::iter() {
            assert_eq!(Direction::from_letter(direction.letter()), Some(direction));
        }
        assert_eq!(Direction::from_letter('n'), None);
        assert_eq!(Direction::from_letter('X'), None);
    }

    #[test]
    fn step_moves_one_tile() {
        let origin = Position::new(-5, 5);
        assert_eq!(origin.step(Direction::West), Some(Position::new(-6, 5)));
        assert_eq!(origin.step(Direction::North), Some(Position::new(-5, 6)));
    }

    #[test]
    fn stepping_past_coordinate_range_yields_none() {
        let low = Position::new(i32::MIN, i32::MIN);
        assert_eq!(low.step(Direction::West), None);
        assert_eq!(low.step(Direction::South), None);
        assert_eq!(low.step(Direction::East), Some(Position::new(i32::MIN + 1, i32::MIN)));

        let high = Position::new(i32::MAX, i32::MAX);
        assert_eq!(high.step(Direction::East), None);
        assert_eq!(high.step(Direction::North), None);
        assert_eq!(high.step(Direction::South), Some(Position::new(i32::MAX, i32::MAX - 1)));
    }

    #[test]
    fn bounds_are_half_open() {
        let bounds = Bounds::new(Position::new(0, 0), Position::new(5, 5));

        assert!(bounds.contains(Position::new(0, 0)));
        assert!(bounds.contains(Position::new(4, 4)));
        assert!(!bounds.contains(Position::new(5, 4)));
        assert!(!bounds.contains(Position::new(4, 5)));
        assert!(!bounds.contains(Position::new(-1, 0)));
    }

    #[test]
    fn inverted_bounds_contain_nothing() {
        let bounds = Bounds::new(Position::new(3, 3), Position::new(1, 1));

        assert_eq!(bounds.width(), 0);
        assert_eq!(bounds.area(), 0);
        assert!(!bounds.contains(Position::new(2, 2)));
    }

    #[test]
    fn area_of_full_coordinate_range_does_not_overflow() {
        let bounds = Bounds::new(Position::new(i32::MIN, -1), Position::new(i32::MAX, 2));

        assert_eq!(bounds.width(), u32::MAX);
        assert_eq!(bounds.height(), 3);
        assert_eq!(bounds.area(), 3 * u64::from(u32::MAX));
    }
}
