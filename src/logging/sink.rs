//! Logging Contract
//!
//! Every event a transformation engine may emit while applying a transform.

use std::fmt;

/// Importance of a plain message or section marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Normal,
    Verbose,
}

/// Where in a file an error or warning was raised
///
/// A location only renders as a `"{file} ({line}, {column})"` tag when
/// `line` is positive; `0` means "no line information".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation<'a> {
    pub file: Option<&'a str>,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation<'static> {
    /// No location at all
    pub const NONE: SourceLocation<'static> = SourceLocation {
        file: None,
        line: 0,
        column: 0,
    };
}

impl<'a> SourceLocation<'a> {
    /// A file without line information
    pub fn file(file: &'a str) -> Self {
        Self {
            file: Some(file),
            line: 0,
            column: 0,
        }
    }

    /// A position inside a file
    pub fn at(file: &'a str, line: u32, column: u32) -> Self {
        Self {
            file: Some(file),
            line,
            column,
        }
    }

    pub fn has_line(&self) -> bool {
        self.line > 0
    }

    /// Final path segment of `file`, empty when there is none
    pub fn file_name(&self) -> &'a str {
        self.file
            .map(|path| path.rsplit(['/', '\\']).next().unwrap_or(path))
            .unwrap_or("")
    }
}

/// Sink for the events a transformation engine emits during one application.
///
/// [`TransformLogger`](super::TransformLogger) is the collecting
/// implementation; tests substitute recording or no-op sinks.
pub trait TransformationLogger {
    /// Log an informational message
    fn log_message(&mut self, verbosity: Verbosity, message: fmt::Arguments<'_>);

    /// Log an error, optionally tagged with its location
    fn log_error(&mut self, location: SourceLocation<'_>, message: fmt::Arguments<'_>);

    /// Log a warning, optionally tagged with its location
    fn log_warning(&mut self, location: SourceLocation<'_>, message: fmt::Arguments<'_>);

    /// Log an error raised as a Rust error value
    fn log_error_from_exception(&mut self, error: &anyhow::Error, location: SourceLocation<'_>);

    /// Log a message, then indent everything logged after it
    fn start_section(&mut self, verbosity: Verbosity, message: fmt::Arguments<'_>);

    /// Drop one indentation level, then log a message
    fn end_section(&mut self, verbosity: Verbosity, message: fmt::Arguments<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_strips_directories() {
        assert_eq!(SourceLocation::file("a/b/web.config").file_name(), "web.config");
        assert_eq!(
            SourceLocation::file(r"C:\work\web.Release.config").file_name(),
            "web.Release.config"
        );
        assert_eq!(SourceLocation::file("web.config").file_name(), "web.config");
        assert_eq!(SourceLocation::NONE.file_name(), "");
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Vec<String>,
    }

    impl TransformationLogger for RecordingLogger {
        fn log_message(&mut self, verbosity: Verbosity, message: fmt::Arguments<'_>) {
            self.events.push(format!("message {verbosity:?} {message}"));
        }

        fn log_error(&mut self, location: SourceLocation<'_>, message: fmt::Arguments<'_>) {
            self.events.push(format!("error {} {message}", location.line));
        }

        fn log_warning(&mut self, location: SourceLocation<'_>, message: fmt::Arguments<'_>) {
            self.events.push(format!("warning {} {message}", location.line));
        }

        fn log_error_from_exception(&mut self, error: &anyhow::Error, _: SourceLocation<'_>) {
            self.events.push(format!("exception {error}"));
        }

        fn start_section(&mut self, _: Verbosity, message: fmt::Arguments<'_>) {
            self.events.push(format!("start {message}"));
        }

        fn end_section(&mut self, _: Verbosity, message: fmt::Arguments<'_>) {
            self.events.push(format!("end {message}"));
        }
    }

    fn emit_all(logger: &mut dyn TransformationLogger) {
        logger.start_section(Verbosity::default(), format_args!("section"));
        logger.log_message(Verbosity::Verbose, format_args!("step {}", 1));
        logger.log_warning(SourceLocation::at("t.config", 2, 4), format_args!("odd"));
        logger.log_error(SourceLocation::NONE, format_args!("bad"));
        logger.log_error_from_exception(&anyhow::anyhow!("thrown"), SourceLocation::file("t.config"));
        logger.end_section(Verbosity::default(), format_args!("section"));
    }

    #[test]
    fn test_contract_is_substitutable() {
        let mut recorder = RecordingLogger::default();
        emit_all(&mut recorder);

        assert_eq!(
            recorder.events,
            vec![
                "start section",
                "message Verbose step 1",
                "warning 2 odd",
                "error 0 bad",
                "exception thrown",
                "end section",
            ]
        );
    }

    #[test]
    fn test_has_line() {
        assert!(!SourceLocation::NONE.has_line());
        assert!(!SourceLocation::file("x.config").has_line());
        assert!(SourceLocation::at("x.config", 3, 0).has_line());
    }
}
