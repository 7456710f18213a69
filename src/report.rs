// Copyright (c) The verdict Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classification results and per-run aggregation.

use crate::{events::Severity, outcome::Outcome};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A non-terminal observational signal copied out of a trace.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// How severe the signal is.
    pub severity: Severity,

    /// The diagnostic message.
    pub message: String,
}

/// The result of classifying one test case.
///
/// Produced once per trace by [`classify`](crate::classify()) and immutable
/// afterwards. Serializes to a single JSON object for machine consumption.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Report {
    /// The name of the classified test case.
    pub test_name: SmolStr,

    /// The terminal outcome.
    pub outcome: Outcome,

    /// Every diagnostic recorded during execution, in original order.
    ///
    /// Diagnostics are collected regardless of the outcome; they are a side
    /// channel and never change the classification.
    pub diagnostics: Vec<Diagnostic>,

    /// Why the test did not plainly pass.
    ///
    /// The first failing assertion's message for `Failed`, the failure
    /// message for `Errored`, the directive reason for `Incomplete` and
    /// `Skipped`, and absent for `Passed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
}

/// Counters over the reports of one run.
///
/// This is the minimal run-level contract on top of
/// [`Outcome::is_failing`]: a run fails exactly when a failed or errored
/// report is present.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RunStats {
    /// The total number of reports aggregated.
    pub finished_count: usize,

    /// The number of tests that passed.
    pub passed: usize,

    /// The number of tests that failed.
    pub failed: usize,

    /// The number of tests that errored.
    pub errored: usize,

    /// The number of tests marked incomplete.
    pub incomplete: usize,

    /// The number of tests that were skipped.
    pub skipped: usize,
}

impl RunStats {
    /// Aggregates a whole run's reports into one set of counters.
    pub fn summarize<'a>(reports: impl IntoIterator<Item = &'a Report>) -> Self {
        let mut stats = Self::default();
        for report in reports {
            stats.on_report(report);
        }
        stats
    }

    /// Folds one report into the counters.
    pub fn on_report(&mut self, report: &Report) {
        self.finished_count += 1;
        match report.outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Errored => self.errored += 1,
            Outcome::Incomplete => self.incomplete += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }

    /// Returns true if this run is considered a success.
    ///
    /// Skipped and incomplete tests do not fail a run.
    pub fn is_success(&self) -> bool {
        !self.any_failed()
    }

    /// Returns true if any tests failed or errored.
    #[inline]
    pub fn any_failed(&self) -> bool {
        self.failed > 0 || self.errored > 0
    }
}
