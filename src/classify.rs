// Copyright (c) The verdict Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The outcome classifier.

use crate::{
    errors::InvalidTraceError,
    events::{Event, TestCase},
    outcome::Outcome,
    report::{Diagnostic, Report},
};

/// Classifies one executed test case into a [`Report`].
///
/// Total and deterministic: never fails, never blocks, performs no I/O. The
/// first matching rule wins, in this strict priority order:
///
/// 1. a skip directive → [`Outcome::Skipped`], with the directive reason;
/// 2. an incomplete directive → [`Outcome::Incomplete`], with the reason;
/// 3. an unhandled failure → [`Outcome::Errored`], with the first failure's
///    message;
/// 4. a failing assertion → [`Outcome::Failed`], with the first failing
///    assertion's message;
/// 5. otherwise → [`Outcome::Passed`], including the empty trace.
///
/// Every diagnostic in the trace is copied into the report in original order
/// no matter which rule fired.
///
/// Malformed traces (a second directive, or events after a directive) are a
/// driver bug, but classification still proceeds by the same priority order
/// rather than refusing to run. Use [`validate`] to reject them up front.
pub fn classify(test_case: &TestCase) -> Report {
    let mut skip_reason = None;
    let mut incomplete_reason = None;
    let mut failure_message = None;
    let mut assertion_message = None;
    let mut diagnostics = Vec::new();

    for event in &test_case.events {
        match event {
            Event::Assertion { passed: true, .. } => {}
            Event::Assertion {
                passed: false,
                message,
            } => {
                if assertion_message.is_none() {
                    assertion_message = Some(message.clone());
                }
            }
            Event::Failure { message, .. } => {
                if failure_message.is_none() {
                    failure_message = Some(message.clone());
                }
            }
            Event::Diagnostic { severity, message } => {
                diagnostics.push(Diagnostic {
                    severity: *severity,
                    message: message.clone(),
                });
            }
            Event::MarkIncomplete { reason } => {
                if incomplete_reason.is_none() {
                    incomplete_reason = Some(reason.clone());
                }
            }
            Event::MarkSkipped { reason } => {
                if skip_reason.is_none() {
                    skip_reason = Some(reason.clone());
                }
            }
        }
    }

    if let Err(error) = validate(test_case) {
        tracing::debug!(
            test_name = %test_case.name,
            %error,
            "malformed trace, classifying best-effort",
        );
    }

    let (outcome, failure_message) = if let Some(reason) = skip_reason {
        (Outcome::Skipped, Some(reason))
    } else if let Some(reason) = incomplete_reason {
        (Outcome::Incomplete, Some(reason))
    } else if let Some(message) = failure_message {
        (Outcome::Errored, Some(message))
    } else if let Some(message) = assertion_message {
        (Outcome::Failed, Some(message))
    } else {
        (Outcome::Passed, None)
    };

    Report {
        test_name: test_case.name.clone(),
        outcome,
        diagnostics,
        failure_message,
    }
}

/// Checks that a trace upholds the well-formedness invariant: at most one
/// directive, and nothing recorded after it.
///
/// [`classify`] does not require this — it classifies malformed traces
/// best-effort — but drivers that build traces incrementally can use this to
/// catch recording bugs at the source.
pub fn validate(test_case: &TestCase) -> Result<(), InvalidTraceError> {
    let mut directive_index = None;
    for (index, event) in test_case.events.iter().enumerate() {
        if let Some(directive_index) = directive_index {
            if event.is_directive() {
                return Err(InvalidTraceError::MultipleDirectives {
                    directive_index,
                    index,
                });
            }
            return Err(InvalidTraceError::EventAfterDirective {
                directive_index,
                index,
            });
        }
        if event.is_directive() {
            directive_index = Some(index);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{FailureKind, Severity};
    use pretty_assertions::assert_eq;

    fn trace(name: &str, events: Vec<Event>) -> TestCase {
        TestCase {
            name: name.into(),
            events,
        }
    }

    #[test]
    fn empty_trace_passes() {
        let report = classify(&trace("it_is_risky", vec![]));
        assert_eq!(report.outcome, Outcome::Passed);
        assert_eq!(report.diagnostics, vec![]);
        assert_eq!(report.failure_message, None);
    }

    #[test]
    fn passing_assertion_passes() {
        let report = classify(&trace(
            "it_passes",
            vec![Event::passed_assertion("is string")],
        ));
        assert_eq!(report.outcome, Outcome::Passed);
        assert_eq!(report.failure_message, None);
    }

    #[test]
    fn failing_assertion_fails_with_first_message() {
        let report = classify(&trace(
            "it_fails",
            vec![
                Event::passed_assertion("is string"),
                Event::failed_assertion("expected string, got bool"),
                Event::failed_assertion("second failure"),
            ],
        ));
        assert_eq!(report.outcome, Outcome::Failed);
        assert_eq!(
            report.failure_message.as_deref(),
            Some("expected string, got bool"),
        );
    }

    #[test]
    fn unhandled_failure_errors() {
        let report = classify(&trace(
            "it_generates_an_error",
            vec![
                Event::passed_assertion("is string"),
                Event::failure(FailureKind::Error, "Class not found"),
            ],
        ));
        assert_eq!(report.outcome, Outcome::Errored);
        assert_eq!(report.failure_message.as_deref(), Some("Class not found"));
    }

    #[test]
    fn unhandled_failure_outranks_failing_assertion() {
        let report = classify(&trace(
            "it_aborts",
            vec![
                Event::failed_assertion("expected 3, got 4"),
                Event::failure(FailureKind::UncaughtException, "out of memory"),
            ],
        ));
        assert_eq!(report.outcome, Outcome::Errored);
        assert_eq!(report.failure_message.as_deref(), Some("out of memory"));
    }

    #[test]
    fn diagnostics_do_not_change_a_pass() {
        let report = classify(&trace(
            "it_generates_a_warning",
            vec![
                Event::passed_assertion("is true"),
                Event::diagnostic(Severity::Warning, "non-fatal error was triggered"),
            ],
        ));
        assert_eq!(report.outcome, Outcome::Passed);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic {
                severity: Severity::Warning,
                message: "non-fatal error was triggered".to_owned(),
            }],
        );
    }

    #[test]
    fn diagnostics_are_preserved_in_order_on_failure() {
        let report = classify(&trace(
            "it_warns_then_fails",
            vec![
                Event::diagnostic(Severity::Deprecation, "example deprecation"),
                Event::failed_assertion("expected string, got bool"),
                Event::diagnostic(Severity::Notice, "example notice"),
            ],
        ));
        assert_eq!(report.outcome, Outcome::Failed);
        assert_eq!(
            report.diagnostics,
            vec![
                Diagnostic {
                    severity: Severity::Deprecation,
                    message: "example deprecation".to_owned(),
                },
                Diagnostic {
                    severity: Severity::Notice,
                    message: "example notice".to_owned(),
                },
            ],
        );
    }

    #[test]
    fn skip_directive_wins() {
        let report = classify(&trace(
            "it_marks_skipped",
            vec![Event::MarkSkipped {
                reason: "// TODO: mark skipped".to_owned(),
            }],
        ));
        assert_eq!(report.outcome, Outcome::Skipped);
        assert_eq!(
            report.failure_message.as_deref(),
            Some("// TODO: mark skipped"),
        );
    }

    #[test]
    fn incomplete_directive_wins_over_failures() {
        let report = classify(&trace(
            "it_marks_incomplete",
            vec![
                Event::failed_assertion("expected 1, got 2"),
                Event::MarkIncomplete {
                    reason: "// TODO: mark incomplete".to_owned(),
                },
            ],
        ));
        assert_eq!(report.outcome, Outcome::Incomplete);
        assert_eq!(
            report.failure_message.as_deref(),
            Some("// TODO: mark incomplete"),
        );
    }

    #[test]
    fn skip_outranks_everything_in_a_malformed_trace() {
        // Nothing should follow a directive, but classification still
        // applies the priority order to whatever was recorded.
        let malformed = trace(
            "it_is_malformed",
            vec![
                Event::failed_assertion("expected string, got bool"),
                Event::MarkSkipped {
                    reason: "skipped late".to_owned(),
                },
                Event::failure(FailureKind::Error, "after the end"),
            ],
        );
        let report = classify(&malformed);
        assert_eq!(report.outcome, Outcome::Skipped);
        assert_eq!(report.failure_message.as_deref(), Some("skipped late"));
    }

    #[test]
    fn validate_accepts_well_formed_traces() {
        validate(&trace("empty", vec![])).expect("empty trace is well-formed");
        validate(&trace(
            "terminal_directive",
            vec![
                Event::passed_assertion("is true"),
                Event::MarkIncomplete {
                    reason: "todo".to_owned(),
                },
            ],
        ))
        .expect("terminal directive is well-formed");
    }

    #[test]
    fn validate_rejects_events_after_a_directive() {
        let err = validate(&trace(
            "event_after_directive",
            vec![
                Event::MarkSkipped {
                    reason: "skip".to_owned(),
                },
                Event::passed_assertion("is true"),
            ],
        ))
        .unwrap_err();
        assert_eq!(
            err,
            InvalidTraceError::EventAfterDirective {
                directive_index: 0,
                index: 1,
            },
        );

        let err = validate(&trace(
            "two_directives",
            vec![
                Event::MarkSkipped {
                    reason: "skip".to_owned(),
                },
                Event::MarkIncomplete {
                    reason: "todo".to_owned(),
                },
            ],
        ))
        .unwrap_err();
        assert_eq!(
            err,
            InvalidTraceError::MultipleDirectives {
                directive_index: 0,
                index: 1,
            },
        );
    }
}
