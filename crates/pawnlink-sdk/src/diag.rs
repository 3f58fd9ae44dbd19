//! DiagLog trait — diagnostics sink for the dispatch path
//!
//! The engine reports classification failures, missing array-length
//! metadata, and managed exceptions through this trait. Implementations
//! never return errors and never change the outcome of a dispatch.

/// Append-only diagnostics sink.
pub trait DiagLog: Send + Sync {
    /// Record an error line.
    fn error(&self, message: &str);

    /// Record an informational line.
    fn info(&self, message: &str);
}

/// A sink that discards everything. Useful in tests.
pub struct NullDiag;

impl DiagLog for NullDiag {
    fn error(&self, _message: &str) {}

    fn info(&self, _message: &str) {}
}
