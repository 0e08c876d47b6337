//! Stream-collecting transformation logger.
//!
//! Errors, warnings and plain messages are folded into three text streams as
//! they arrive. The verbose stream receives every line, so it is the merged
//! record of the whole run in emission order.

use std::backtrace::BacktraceStatus;
use std::fmt;

use super::sink::{SourceLocation, TransformationLogger, Verbosity};

const INDENT_UNIT: &str = "  ";

#[cfg(windows)]
const NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
const NEWLINE: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn tag(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// Logger for a single transformation run.
///
/// The escalation and stack-trace policies are fixed at construction, so a
/// validator builds a fresh logger for every run.
#[derive(Debug, Clone, Default)]
pub struct TransformLogger {
    errors: String,
    warnings: String,
    verbose: String,
    indent_level: usize,
    treat_warnings_as_errors: bool,
    include_stack_trace: bool,
}

impl TransformLogger {
    pub fn new(include_stack_trace: bool, treat_warnings_as_errors: bool) -> Self {
        Self {
            treat_warnings_as_errors,
            include_stack_trace,
            ..Self::default()
        }
    }

    pub fn error_log(&self) -> &str {
        &self.errors
    }

    pub fn warning_log(&self) -> &str {
        &self.warnings
    }

    pub fn verbose_log(&self) -> &str {
        &self.verbose
    }

    /// True once anything reached the error stream, escalated warnings included
    pub fn has_logged_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_logged_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn treats_warnings_as_errors(&self) -> bool {
        self.treat_warnings_as_errors
    }

    /// Clear all streams and the indentation. Policies are kept.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.warnings.clear();
        self.verbose.clear();
        self.indent_level = 0;
    }

    fn record(&mut self, severity: Severity, location: SourceLocation<'_>, message: &str) {
        let line = if location.has_line() {
            format!(
                "{} ({}, {}) {}: {}",
                location.file_name(),
                location.line,
                location.column,
                severity.tag(),
                message
            )
        } else {
            message.to_string()
        };

        let stream = match severity {
            Severity::Error => &mut self.errors,
            Severity::Warning => &mut self.warnings,
        };
        append_line(stream, &line);
        append_line(&mut self.verbose, &line);
    }

    fn describe_error(&self, error: &anyhow::Error) -> String {
        if !self.include_stack_trace {
            return error.to_string();
        }

        let mut lines: Vec<String> = error
            .chain()
            .enumerate()
            .map(|(depth, cause)| match depth {
                0 => cause.to_string(),
                _ => format!("caused by: {cause}"),
            })
            .collect();

        let backtrace = error.backtrace();
        if backtrace.status() == BacktraceStatus::Captured {
            lines.push(backtrace.to_string().trim_end().to_string());
        }

        lines.join(NEWLINE)
    }
}

impl TransformationLogger for TransformLogger {
    fn log_message(&mut self, _verbosity: Verbosity, message: fmt::Arguments<'_>) {
        let line = format!("{}{}", INDENT_UNIT.repeat(self.indent_level), message);
        append_line(&mut self.verbose, &line);
    }

    fn log_error(&mut self, location: SourceLocation<'_>, message: fmt::Arguments<'_>) {
        self.record(Severity::Error, location, &message.to_string());
    }

    fn log_warning(&mut self, location: SourceLocation<'_>, message: fmt::Arguments<'_>) {
        // Escalation happens here, at emission, so the error stream alone
        // decides the verdict.
        let severity = if self.treat_warnings_as_errors {
            Severity::Error
        } else {
            Severity::Warning
        };
        self.record(severity, location, &message.to_string());
    }

    fn log_error_from_exception(&mut self, error: &anyhow::Error, location: SourceLocation<'_>) {
        let text = self.describe_error(error);
        self.log_error(location, format_args!("{text}"));
    }

    fn start_section(&mut self, verbosity: Verbosity, message: fmt::Arguments<'_>) {
        self.log_message(verbosity, message);
        self.indent_level += 1;
    }

    fn end_section(&mut self, verbosity: Verbosity, message: fmt::Arguments<'_>) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.log_message(verbosity, message);
    }
}

fn append_line(stream: &mut String, line: &str) {
    stream.push_str(line);
    stream.push_str(NEWLINE);
}
