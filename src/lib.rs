// Copyright (c) The verdict Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Outcome classification for test-case execution traces.
//!
//! A test driver runs a test body and records what happened as a sequence of
//! [`Event`]s: assertion results, unhandled failures, diagnostic signals, and
//! explicit skip/incomplete directives. Once the trace is complete,
//! [`classify`] turns it into exactly one [`Report`] carrying the terminal
//! [`Outcome`] and the ordered diagnostics.
//!
//! The classifier is a pure function: it performs no I/O, touches no shared
//! state, and never fails. Multiple test cases may be classified in parallel
//! by independent callers with no coordination.
//!
//! ```
//! use verdict::{classify, Event, Outcome, TestCase};
//!
//! let mut test_case = TestCase::new("it_fails");
//! test_case.record(Event::failed_assertion("expected string, got bool"));
//!
//! let report = classify(&test_case);
//! assert_eq!(report.outcome, Outcome::Failed);
//! assert_eq!(report.failure_message.as_deref(), Some("expected string, got bool"));
//! ```

mod classify;
mod errors;
mod events;
mod outcome;
mod report;
pub mod reporter;

pub use classify::*;
pub use errors::*;
pub use events::*;
pub use outcome::*;
pub use report::*;
