//! Transformation Logging
//!
//! The logging contract engines report through, and the stream-collecting
//! logger the validator hands them.

pub mod logger;
pub mod sink;

pub use logger::TransformLogger;
pub use sink::{SourceLocation, TransformationLogger, Verbosity};
