//! Error types for the employee roster.
//!
//! Attribute validation never fails (out-of-range values are clamped and
//! reported as [`ValidationWarning`](crate::models::ValidationWarning)s), so
//! the errors here only cover loading and rendering rosters.

use thiserror::Error;

/// The main error type for roster loading and rendering.
///
/// # Example
///
/// ```
/// use employee_roster::error::RosterError;
///
/// let error = RosterError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Roster file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be parsed.
    #[error("Failed to parse roster file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Roster file parsed but contained no entries.
    #[error("Roster file '{path}' contains no entries")]
    EmptyRoster {
        /// The path to the empty roster file.
        path: String,
    },

    /// A roster could not be serialized.
    #[error("Failed to serialize roster: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
