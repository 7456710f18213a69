// Copyright (c) The verdict Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The terminal classification of a test case.

use crate::errors::OutcomeParseError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The single terminal classification of a test case's execution.
///
/// Outcomes are exhaustive and mutually exclusive: every classified test case
/// gets exactly one, and no "unknown" outcome is representable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Every assertion held and nothing aborted the test body.
    ///
    /// A test that recorded no events at all is also `Passed`: success is
    /// vacuous, not flagged.
    Passed,

    /// At least one assertion failed.
    Failed,

    /// An unhandled failure aborted the test body.
    Errored,

    /// The test marked itself incomplete.
    Incomplete,

    /// The test marked itself skipped.
    Skipped,
}

impl Outcome {
    /// String representations of all known variants.
    pub fn variants() -> &'static [&'static str] {
        &["passed", "failed", "errored", "incomplete", "skipped"]
    }

    /// Returns true if this outcome fails a run.
    ///
    /// `Failed` and `Errored` are failing; `Passed`, `Incomplete` and
    /// `Skipped` are not. Drivers map this to their exit-code policy.
    pub fn is_failing(self) -> bool {
        match self {
            Outcome::Failed | Outcome::Errored => true,
            Outcome::Passed | Outcome::Incomplete | Outcome::Skipped => false,
        }
    }

    /// Returns true if this outcome does not fail a run.
    pub fn is_success(self) -> bool {
        !self.is_failing()
    }
}

impl FromStr for Outcome {
    type Err = OutcomeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let val = match s {
            "passed" => Outcome::Passed,
            "failed" => Outcome::Failed,
            "errored" => Outcome::Errored,
            "incomplete" => Outcome::Incomplete,
            "skipped" => Outcome::Skipped,
            other => return Err(OutcomeParseError::new(other)),
        };
        Ok(val)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "passed"),
            Outcome::Failed => write!(f, "failed"),
            Outcome::Errored => write!(f, "errored"),
            Outcome::Incomplete => write!(f, "incomplete"),
            Outcome::Skipped => write!(f, "skipped"),
        }
    }
}
