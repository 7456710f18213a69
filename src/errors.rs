// Copyright (c) The verdict Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types.

use crate::{outcome::Outcome, reporter::StatusLevel};
use thiserror::Error;

/// An error that occurs while parsing an [`Outcome`] value from a string.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error(
    "unrecognized outcome: {input}\n(known values: {})",
    Outcome::variants().join(", "),
)]
pub struct OutcomeParseError {
    input: String,
}

impl OutcomeParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// An error that occurs while parsing a [`StatusLevel`] value from a string.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error(
    "unrecognized value for status-level: {input}\n(known values: {})",
    StatusLevel::variants().join(", "),
)]
pub struct StatusLevelParseError {
    input: String,
}

impl StatusLevelParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// A trace that violates the well-formedness invariant: at most one
/// directive, recorded as the terminal event.
///
/// Returned by [`validate`](crate::validate). Indices are zero-based
/// positions in the event sequence.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum InvalidTraceError {
    /// An event was recorded after a directive ended the trace.
    #[error("event at index {index} recorded after terminal directive at index {directive_index}")]
    EventAfterDirective {
        /// The position of the directive.
        directive_index: usize,

        /// The position of the offending event.
        index: usize,
    },

    /// A second skip or incomplete directive was recorded.
    #[error("second directive at index {index}, first at index {directive_index}")]
    MultipleDirectives {
        /// The position of the first directive.
        directive_index: usize,

        /// The position of the second directive.
        index: usize,
    },
}

/// An error that occurs while writing a report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteReportError {
    /// An error occurred while writing the report to the provided output.
    #[error("error writing to output")]
    Io(#[source] std::io::Error),

    /// An error occurred while serializing the report to JSON.
    #[error("error serializing report to JSON")]
    Json(#[source] serde_json::Error),
}

impl From<std::io::Error> for WriteReportError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for WriteReportError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}
