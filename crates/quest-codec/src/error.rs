// error.rs — Decode failures for the goal text format.

use thiserror::Error;

/// Malformed persisted text encountered during decode.
///
/// Line numbers are 1-based over the whole input, counting the score line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The input had no score line at all.
    #[error("empty input: expected a score line")]
    MissingScore,

    /// The first line did not parse as an integer score.
    #[error("line 1: invalid score '{value}'")]
    InvalidScore { value: String },

    /// A recognized record line ended before a required field.
    #[error("line {line}: {tag} record is missing the '{field}' field")]
    MissingField {
        line: usize,
        tag: &'static str,
        field: &'static str,
    },

    /// A required field failed to parse.
    #[error("line {line}: invalid value '{value}' for '{field}' in {tag} record")]
    InvalidField {
        line: usize,
        tag: &'static str,
        field: &'static str,
        value: String,
    },
}
