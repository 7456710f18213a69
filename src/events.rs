// Copyright (c) The verdict Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Execution traces: test cases and the events recorded while they run.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// A single executed test case: its name plus the ordered sequence of events
/// recorded during its one execution attempt.
///
/// A driver builds the trace incrementally with [`record`](Self::record) while
/// the test body runs. Once execution ends the trace is complete and is handed
/// to [`classify`](crate::classify()), which borrows it and never mutates it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// The name of the test case.
    pub name: SmolStr,

    /// Events recorded during execution, in order.
    pub events: Vec<Event>,
}

impl TestCase {
    /// Creates a new test case with an empty trace.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }

    /// Appends an event to the trace.
    ///
    /// In a well-formed trace nothing follows a directive: skip and
    /// incomplete markers terminate the test body immediately. See
    /// [`validate`](crate::validate) for checking this.
    pub fn record(&mut self, event: Event) -> &mut Self {
        self.events.push(event);
        self
    }

    /// Returns true if the trace contains a skip or incomplete directive.
    pub fn has_directive(&self) -> bool {
        self.events.iter().any(Event::is_directive)
    }
}

/// One unit of recorded activity during a test case's execution.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Event {
    /// An assertion completed.
    Assertion {
        /// Whether the assertion held.
        passed: bool,

        /// The assertion's message, shown on failure.
        message: String,
    },

    /// An unhandled failure aborted the test body.
    ///
    /// In a well-formed trace this is the last event before any directive:
    /// an uncaught condition stops further assertions from running.
    Failure {
        /// What kind of condition went unhandled.
        #[serde(rename = "failure-kind")]
        kind: FailureKind,

        /// A description of the failure.
        message: String,
    },

    /// A non-terminal diagnostic signal was raised.
    ///
    /// Diagnostics are observational: they are collected into the report but
    /// never change the outcome on their own.
    Diagnostic {
        /// How severe the signal is.
        severity: Severity,

        /// The diagnostic message.
        message: String,
    },

    /// The test marked itself incomplete and stopped.
    MarkIncomplete {
        /// The reason given to the directive.
        reason: String,
    },

    /// The test marked itself skipped and stopped.
    MarkSkipped {
        /// The reason given to the directive.
        reason: String,
    },
}

impl Event {
    /// Creates a passing assertion event.
    pub fn passed_assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            passed: true,
            message: message.into(),
        }
    }

    /// Creates a failing assertion event.
    pub fn failed_assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            passed: false,
            message: message.into(),
        }
    }

    /// Creates an unhandled-failure event of the given kind.
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// Creates a diagnostic event of the given severity.
    pub fn diagnostic(severity: Severity, message: impl Into<String>) -> Self {
        Self::Diagnostic {
            severity,
            message: message.into(),
        }
    }

    /// Returns true for the skip and incomplete directives.
    pub fn is_directive(&self) -> bool {
        matches!(self, Self::MarkIncomplete { .. } | Self::MarkSkipped { .. })
    }
}

/// The kind of condition behind an [`Event::Failure`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// A runtime error.
    Error,

    /// An exception that propagated out of the test body.
    UncaughtException,
}

/// How severe a [`Event::Diagnostic`] signal is.
///
/// Every severity is non-terminal: a warning, deprecation, or notice attaches
/// to the report's diagnostics but does not by itself fail a test that
/// otherwise passes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// A warning was triggered.
    Warning,

    /// Use of a deprecated construct was reported.
    Deprecation,

    /// An informational notice was raised.
    Notice,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Deprecation => write!(f, "deprecation"),
            Severity::Notice => write!(f, "notice"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn event_json_representation() {
        let event = Event::failed_assertion("expected string, got bool");
        let json = serde_json::to_string(&event).expect("event serializes");
        assert_eq!(
            json,
            r#"{"kind":"assertion","passed":false,"message":"expected string, got bool"}"#,
        );

        let event = Event::failure(FailureKind::UncaughtException, "Class not found");
        let json = serde_json::to_string(&event).expect("event serializes");
        assert_eq!(
            json,
            r#"{"kind":"failure","failure-kind":"uncaught-exception","message":"Class not found"}"#,
        );
    }

    #[test]
    fn directive_detection() {
        let mut test_case = TestCase::new("it_is_skipped");
        assert!(!test_case.has_directive());

        test_case.record(Event::MarkSkipped {
            reason: "// TODO: mark skipped".to_owned(),
        });
        assert!(test_case.has_directive());
    }
}
