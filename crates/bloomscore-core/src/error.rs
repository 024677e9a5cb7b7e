//! Generator error types.
//!
//! The generator's inputs are caller-controlled strings over a closed
//! enumeration, so the only reachable failure is an empty course id.

use thiserror::Error;

/// Errors that can occur when generating sample quiz data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The course id was empty or whitespace-only.
    #[error("course id must not be empty")]
    EmptyCourseId,
}
