//! Transformation Validation
//!
//! Drives a transformation engine against a source document and turns its
//! outcome into a verdict plus the three log streams.

pub mod engine;
pub mod validator;

pub use engine::{DocumentLoader, TextDocumentLoader, TransformEngine};
pub use validator::{TransformValidator, ValidationError, ValidationReport};
