//! Transform Validator
//!
//! Checks whether a declarative document transformation applies cleanly to a
//! source document, and keeps a severity-separated log of the run for test
//! assertions.
//!
//! This library provides:
//! - A transformation logger with error, warning and verbose streams
//! - Warnings-as-errors escalation decided at emission time
//! - A validator driving a pluggable transformation engine
//! - Options loadable from TOML

pub mod config;
pub mod logging;
pub mod validation;

// Re-exports for clean public API
pub use config::ValidatorOptions;
pub use logging::{SourceLocation, TransformLogger, TransformationLogger, Verbosity};
pub use validation::{
    DocumentLoader, TextDocumentLoader, TransformEngine, TransformValidator, ValidationError,
    ValidationReport,
};
