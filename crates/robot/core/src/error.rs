//! Common error infrastructure for robot-core.
//!
//! Domain-specific errors (e.g. [`crate::ParseError`]) are defined next to the
//! code that produces them; this module only holds the shared classification.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can carry on, e.g. by re-prompting for input
/// - **Validation**: invalid input that should be rejected without retry
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Temporary or situational failure; the process keeps running.
    ///
    /// Examples: a planned move would leave the map
    Recoverable,

    /// Input was malformed and must be changed before retrying.
    ///
    /// Examples: wrong section count, bad integer literal
    Validation,
}

/// Common trait for all robot errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait RobotError: std::error::Error {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable snake_case identifier for this error variant.
    ///
    /// Useful for logging fields and tests.
    fn error_code(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_renders_snake_case() {
        assert_eq!(ErrorSeverity::Recoverable.to_string(), "recoverable");
        assert_eq!(ErrorSeverity::Validation.as_ref(), "validation");
    }
}
