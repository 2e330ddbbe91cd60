//! Parser for the textual robot command grammar.
//!
//! ```text
//! M:<minX>,<maxX>,<minY>,<maxY>;S:<startX>,<startY>;[<dir><dist>,...]
//! ```
//!
//! The three sections may appear in any order; each is recognized by its
//! prefix. Parsing stops at the first error.
use std::str::FromStr;

use crate::command::{Command, Step};
use crate::error::{ErrorSeverity, RobotError};
use crate::geometry::{Bounds, Direction, Position};

const SECTION_SEPARATOR: char = ';';
const FIELD_SEPARATOR: char = ',';
const MAP_PREFIX: &str = "M:";
const START_PREFIX: &str = "S:";
const STEPS_OPEN: char = '[';
const STEPS_CLOSE: char = ']';

const SECTION_COUNT: usize = 3;
const MAP_FIELDS: usize = 4;
const START_FIELDS: usize = 2;

/// The three kinds of top-level section in a command string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SectionKind {
    Map,
    Start,
    Steps,
}

/// Reasons a command string can be rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid command format: expected 3 sections but got {found}")]
    SectionCount { found: usize },

    #[error("invalid map format: expected 4 fields but got {found}")]
    MapFormat { found: usize },

    #[error("invalid start format: expected 2 fields but got {found}")]
    StartFormat { found: usize },

    #[error("invalid step format: {token:?}")]
    InvalidStep { token: String },

    #[error("step {token:?} must have a distance greater than zero")]
    NonPositiveDistance { token: String },

    #[error("invalid command format: unknown section {section:?}")]
    UnknownSection { section: String },

    #[error("invalid integer {value:?} in {field}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("{kind} section appears more than once")]
    DuplicateSection { kind: SectionKind },

    #[error("{kind} section is missing")]
    MissingSection { kind: SectionKind },
}

impl RobotError for ParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SectionCount { .. } => "section_count",
            Self::MapFormat { .. } => "map_format",
            Self::StartFormat { .. } => "start_format",
            Self::InvalidStep { .. } => "invalid_step",
            Self::NonPositiveDistance { .. } => "non_positive_distance",
            Self::UnknownSection { .. } => "unknown_section",
            Self::InvalidInteger { .. } => "invalid_integer",
            Self::DuplicateSection { .. } => "duplicate_section",
            Self::MissingSection { .. } => "missing_section",
        }
    }
}

/// Parses a raw command string into a [`Command`].
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no partially-built command
/// is ever returned.
pub fn parse(input: &str) -> Result<Command, ParseError> {
    let sections: Vec<&str> = input.split(SECTION_SEPARATOR).collect();
    if sections.len() != SECTION_COUNT {
        return Err(ParseError::SectionCount {
            found: sections.len(),
        });
    }

    let mut bounds = None;
    let mut start = None;
    let mut steps = None;

    for section in sections {
        if let Some(body) = section.strip_prefix(MAP_PREFIX) {
            set_once(&mut bounds, parse_map(body)?, SectionKind::Map)?;
        } else if let Some(body) = section.strip_prefix(START_PREFIX) {
            set_once(&mut start, parse_start(body)?, SectionKind::Start)?;
        } else if let Some(body) = section
            .strip_prefix(STEPS_OPEN)
            .and_then(|rest| rest.strip_suffix(STEPS_CLOSE))
        {
            set_once(&mut steps, parse_steps(body)?, SectionKind::Steps)?;
        } else {
            return Err(ParseError::UnknownSection {
                section: section.to_owned(),
            });
        }
    }

    let command = Command::new(
        bounds.ok_or(ParseError::MissingSection {
            kind: SectionKind::Map,
        })?,
        start.ok_or(ParseError::MissingSection {
            kind: SectionKind::Start,
        })?,
        steps.ok_or(ParseError::MissingSection {
            kind: SectionKind::Steps,
        })?,
    );

    tracing::debug!(
        bounds = %command.bounds(),
        start = %command.start_pos(),
        steps = command.steps().len(),
        "parsed command"
    );

    Ok(command)
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, kind: SectionKind) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::DuplicateSection { kind });
    }
    *slot = Some(value);
    Ok(())
}

fn parse_map(body: &str) -> Result<Bounds, ParseError> {
    let fields: Vec<&str> = body.split(FIELD_SEPARATOR).collect();
    let [min_x, max_x, min_y, max_y] = fields[..] else {
        return Err(ParseError::MapFormat {
            found: fields.len(),
        });
    };

    // Field order is minX,maxX,minY,maxY.
    Ok(Bounds::new(
        Position::new(parse_int("min x", min_x)?, parse_int("min y", min_y)?),
        Position::new(parse_int("max x", max_x)?, parse_int("max y", max_y)?),
    ))
}

fn parse_start(body: &str) -> Result<Position, ParseError> {
    let fields: Vec<&str> = body.split(FIELD_SEPARATOR).collect();
    let [x, y] = fields[..] else {
        return Err(ParseError::StartFormat {
            found: fields.len(),
        });
    };

    Ok(Position::new(
        parse_int("start x", x)?,
        parse_int("start y", y)?,
    ))
}

fn parse_steps(body: &str) -> Result<Vec<Step>, ParseError> {
    if body.is_empty() {
        return Ok(Vec::new());
    }
    body.split(FIELD_SEPARATOR).map(parse_step).collect()
}

fn parse_step(token: &str) -> Result<Step, ParseError> {
    let mut chars = token.chars();
    let direction = chars
        .next()
        .and_then(Direction::from_letter)
        .ok_or_else(|| ParseError::InvalidStep {
            token: token.to_owned(),
        })?;

    let distance = parse_int("step distance", chars.as_str())?;
    u32::try_from(distance)
        .ok()
        .and_then(|distance| Step::try_new(direction, distance))
        .ok_or_else(|| ParseError::NonPositiveDistance {
            token: token.to_owned(),
        })
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidInteger {
        field,
        value: value.to_owned(),
    })
}
