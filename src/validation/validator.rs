//! Validation Orchestrator
//!
//! One `validate` call is one run: a brand-new logger, one document load,
//! one transform read, one engine application, one verdict.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use super::engine::{DocumentLoader, TextDocumentLoader, TransformEngine};
use crate::config::ValidatorOptions;
use crate::logging::{TransformLogger, TransformationLogger, Verbosity};

/// Faults raised by the validator itself, before any I/O
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("argument '{parameter}' must not be empty")]
    InvalidArgument { parameter: &'static str },
}

/// Snapshot of the most recent completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub succeeded: bool,
    pub error_log: String,
    pub warning_log: String,
    pub verbose_log: String,
}

/// Validates transformations for testing purposes.
///
/// Runs are sequential; use one validator per thread for parallel runs.
#[derive(Debug)]
pub struct TransformValidator<E, L = TextDocumentLoader> {
    engine: E,
    loader: L,
    options: ValidatorOptions,
    logger: TransformLogger,
    outcome: Option<bool>,
}

impl<E> TransformValidator<E, TextDocumentLoader>
where
    E: TransformEngine<Document = String>,
{
    pub fn new(engine: E) -> Self {
        Self::with_loader(engine, TextDocumentLoader)
    }
}

impl<E, L> TransformValidator<E, L>
where
    L: DocumentLoader,
    E: TransformEngine<Document = L::Document>,
{
    pub fn with_loader(engine: E, loader: L) -> Self {
        let options = ValidatorOptions::default();
        Self {
            engine,
            loader,
            logger: TransformLogger::new(options.include_stack_trace, options.treat_warnings_as_errors),
            options,
            outcome: None,
        }
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Validate `transform` against `source` using the configured
    /// escalation policy (warnings are errors by default).
    pub fn validate(
        &mut self,
        source: impl AsRef<Path>,
        transform: impl AsRef<Path>,
    ) -> anyhow::Result<bool> {
        let treat_warnings_as_errors = self.options.treat_warnings_as_errors;
        self.validate_with(source, transform, treat_warnings_as_errors)
    }

    /// Validate `transform` against `source`.
    ///
    /// Returns `Ok(false)` when the engine reports failure or anything reached
    /// the error log. Empty paths, unreadable files and load failures are
    /// returned as errors, and the logs of the previous run stay in place.
    pub fn validate_with(
        &mut self,
        source: impl AsRef<Path>,
        transform: impl AsRef<Path>,
        treat_warnings_as_errors: bool,
    ) -> anyhow::Result<bool> {
        let source = source.as_ref();
        let transform = transform.as_ref();

        if source.as_os_str().is_empty() {
            return Err(ValidationError::InvalidArgument { parameter: "source" }.into());
        }
        if transform.as_os_str().is_empty() {
            return Err(ValidationError::InvalidArgument {
                parameter: "transform",
            }
            .into());
        }

        let transform_name = display_name(transform);
        let mut logger = TransformLogger::new(self.options.include_stack_trace, treat_warnings_as_errors);
        logger.log_message(
            Verbosity::Verbose,
            format_args!(
                "Applying transformations '{}' on file '{}'...",
                transform_name,
                display_name(source)
            ),
        );
        log::debug!(
            "Applying {} to {}",
            transform.display(),
            source.display()
        );

        let mut document = self.loader.load(source, true)?;
        let transform_text = std::fs::read_to_string(transform)?;

        let applied = self.engine.apply(&transform_text, &mut document, &mut logger);
        let succeeded = applied && !logger.has_logged_errors();

        if !succeeded {
            logger.log_message(
                Verbosity::Normal,
                format_args!("Error while applying transformations '{transform_name}'."),
            );
            log::warn!(
                "Transformation {} failed on {} (engine applied: {})",
                transform.display(),
                source.display(),
                applied
            );
        }
        log::debug!("Validation finished, succeeded: {succeeded}");

        self.logger = logger;
        self.outcome = Some(succeeded);
        Ok(succeeded)
    }

    /// Errors of the last completed run
    pub fn error_log(&self) -> &str {
        self.logger.error_log()
    }

    /// Warnings of the last completed run. Empty when warnings were escalated.
    pub fn warning_log(&self) -> &str {
        self.logger.warning_log()
    }

    /// Everything logged during the last completed run
    pub fn verbose_log(&self) -> &str {
        self.logger.verbose_log()
    }

    pub fn logger(&self) -> &TransformLogger {
        &self.logger
    }

    /// Report of the last completed run, `None` before the first one
    pub fn report(&self) -> Option<ValidationReport> {
        self.outcome.map(|succeeded| ValidationReport {
            succeeded,
            error_log: self.error_log().to_string(),
            warning_log: self.warning_log().to_string(),
            verbose_log: self.verbose_log().to_string(),
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
