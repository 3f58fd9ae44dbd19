//! Error types for the bridge boundary

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Bridge boundary error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    /// An indirect cell (string or array address) could not be resolved
    /// in VM memory. Aborts the current call only.
    #[error("Invalid indirect cell: {cell:#010x}")]
    BadIndirection {
        /// The raw cell word that failed to resolve
        cell: u32,
    },

    /// The caller supplied a different argument count than the plan was
    /// built against.
    #[error("Argument count mismatch: plan has {expected} parameters, got {got}")]
    Arity {
        /// Parameter count the plan was built with
        expected: usize,
        /// Argument count supplied by the caller
        got: usize,
    },

    /// Bridge load/bootstrap failure
    #[error("Load error: {0}")]
    Load(String),

    /// Collaborator-level failure
    #[error("{0}")]
    Host(String),
}

impl From<String> for BridgeError {
    fn from(s: String) -> Self {
        BridgeError::Host(s)
    }
}

impl From<&str> for BridgeError {
    fn from(s: &str) -> Self {
        BridgeError::Host(s.to_string())
    }
}
