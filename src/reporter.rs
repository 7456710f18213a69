// Copyright (c) The verdict Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Renders reports in human-readable and machine-readable formats.
//!
//! The main structure in this module is [`ReportDisplayer`].

use crate::{
    errors::{StatusLevelParseError, WriteReportError},
    events::Severity,
    outcome::Outcome,
    report::{Report, RunStats},
};
use owo_colors::{OwoColorize, Style};
use serde::Deserialize;
use std::{fmt, io::Write, str::FromStr};

/// Status level to show in displayer output.
///
/// Status levels are incremental: each level causes all the statuses listed
/// above it to be output. For example, [`Pass`](Self::Pass) implies
/// [`Fail`](Self::Fail).
#[derive(Copy, Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusLevel {
    /// No output.
    None,

    /// Only output failed and errored tests.
    Fail,

    /// Output passing tests in addition to the variants above.
    Pass,

    /// Output skipped and incomplete tests in addition to the variants above.
    All,
}

impl StatusLevel {
    /// String representations of all known variants.
    pub fn variants() -> &'static [&'static str] {
        &["none", "fail", "pass", "all"]
    }
}

impl FromStr for StatusLevel {
    type Err = StatusLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let val = match s {
            "none" => StatusLevel::None,
            "fail" => StatusLevel::Fail,
            "pass" => StatusLevel::Pass,
            "all" => StatusLevel::All,
            other => return Err(StatusLevelParseError::new(other)),
        };
        Ok(val)
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLevel::None => write!(f, "none"),
            StatusLevel::Fail => write!(f, "fail"),
            StatusLevel::Pass => write!(f, "pass"),
            StatusLevel::All => write!(f, "all"),
        }
    }
}

impl Default for StatusLevel {
    fn default() -> Self {
        StatusLevel::All
    }
}

/// Prints out reports and run summaries.
///
/// Uncolored by default; call [`colorize`](Self::colorize) when writing to a
/// terminal that supports it.
#[derive(Debug, Default)]
pub struct ReportDisplayer {
    status_level: StatusLevel,
    styles: Box<Styles>,
}

impl ReportDisplayer {
    /// Creates a new displayer showing every status, without color.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status level below which reports are not printed.
    pub fn set_status_level(&mut self, status_level: StatusLevel) -> &mut Self {
        self.status_level = status_level;
        self
    }

    /// Enables colored output.
    pub fn colorize(&mut self) -> &mut Self {
        self.styles.colorize();
        self
    }

    /// Writes one report as an aligned status line, followed by the failure
    /// message and the recorded diagnostics, if any.
    ///
    /// Reports below the configured [`StatusLevel`] are not written.
    pub fn write_report(
        &self,
        report: &Report,
        mut writer: impl Write,
    ) -> Result<(), WriteReportError> {
        if !self.should_display(report.outcome) {
            return Ok(());
        }

        let (status_str, style) = match report.outcome {
            Outcome::Passed => ("PASS", self.styles.pass),
            Outcome::Failed => ("FAIL", self.styles.fail),
            Outcome::Errored => ("ERROR", self.styles.fail),
            Outcome::Incomplete => ("INCOMPLETE", self.styles.skip),
            Outcome::Skipped => ("SKIP", self.styles.skip),
        };
        // The width is to align status tags across reports.
        write!(writer, "{:>12} ", status_str.style(style))?;
        writeln!(writer, "{}", report.test_name)?;

        if let Some(message) = &report.failure_message {
            writeln!(writer, "{:>12} {}", "", message)?;
        }

        for diagnostic in &report.diagnostics {
            let tag = match diagnostic.severity {
                Severity::Warning => "WARNING",
                Severity::Deprecation => "DEPRECATED",
                Severity::Notice => "NOTICE",
            };
            write!(writer, "{:>12} ", tag.style(self.styles.diagnostic))?;
            writeln!(writer, "{}", diagnostic.message)?;
        }

        Ok(())
    }

    /// Writes a one-line summary of a whole run.
    pub fn write_summary(
        &self,
        stats: &RunStats,
        mut writer: impl Write,
    ) -> Result<(), WriteReportError> {
        let summary_style = if stats.any_failed() {
            self.styles.fail
        } else {
            self.styles.pass
        };
        write!(writer, "{:>12} ", "Summary".style(summary_style))?;

        write!(
            writer,
            "{} tests run: {} {}, ",
            stats.finished_count.style(self.styles.count),
            stats.passed.style(self.styles.count),
            "passed".style(self.styles.pass),
        )?;

        if stats.failed > 0 {
            write!(
                writer,
                "{} {}, ",
                stats.failed.style(self.styles.count),
                "failed".style(self.styles.fail),
            )?;
        }

        if stats.errored > 0 {
            write!(
                writer,
                "{} {}, ",
                stats.errored.style(self.styles.count),
                "errored".style(self.styles.fail),
            )?;
        }

        if stats.incomplete > 0 {
            write!(
                writer,
                "{} {}, ",
                stats.incomplete.style(self.styles.count),
                "incomplete".style(self.styles.skip),
            )?;
        }

        write!(
            writer,
            "{} {}",
            stats.skipped.style(self.styles.count),
            "skipped".style(self.styles.skip),
        )?;

        writeln!(writer)?;
        Ok(())
    }

    fn should_display(&self, outcome: Outcome) -> bool {
        let required = match outcome {
            Outcome::Failed | Outcome::Errored => StatusLevel::Fail,
            Outcome::Passed => StatusLevel::Pass,
            Outcome::Incomplete | Outcome::Skipped => StatusLevel::All,
        };
        self.status_level >= required
    }
}

/// Writes one report as a single line of JSON, for machine consumption.
pub fn write_json_line(report: &Report, mut writer: impl Write) -> Result<(), WriteReportError> {
    serde_json::to_writer(&mut writer, report)?;
    writer.write_all(b"\n")?;
    Ok(())
}

#[derive(Debug, Default)]
struct Styles {
    count: Style,
    pass: Style,
    fail: Style,
    skip: Style,
    diagnostic: Style,
}

impl Styles {
    fn colorize(&mut self) {
        self.count = Style::new().bold();
        self.pass = Style::new().green().bold();
        self.fail = Style::new().red().bold();
        self.skip = Style::new().yellow().bold();
        self.diagnostic = Style::new().magenta().bold();
    }
}
