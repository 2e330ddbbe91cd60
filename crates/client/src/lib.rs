//! Terminal client for the grid robot.
//!
//! # Architecture
//!
//! ```text
//! robot (binary)
//!   ├─→ config   (environment + CLI overrides)
//!   ├─→ logging  (tracing subscriber, optional session log file)
//!   ├─→ robot-core::parse / traverse  (pre-flight check)
//!   └─→ mover::Robot  (tick-by-tick playback with tile coverage)
//! ```
//!
//! The client is the composition root: it parses the command once and hands
//! the resulting [`robot_core::Command`] to whichever consumer needs it.
pub mod config;
pub mod logging;
pub mod mover;
pub mod report;

pub use config::{ClientConfig, LogConfig, OutputConfig};
pub use mover::{MoveError, Robot, RunOutcome, RunSummary, Tick, TileState};
pub use report::{PlanReport, render_run};

use robot_core::{Command, ParseError, RobotError, traverse};

/// Parses `input` and builds the pre-flight report.
pub fn check(input: &str) -> Result<(Command, PlanReport), ParseError> {
    let command = robot_core::parse(input).inspect_err(|err| {
        tracing::warn!(
            code = err.error_code(),
            severity = %err.severity(),
            "Rejected command: {err}"
        );
    })?;

    let traversal = traverse(&command);
    let report = PlanReport::new(&command, &traversal);
    Ok((command, report))
}
