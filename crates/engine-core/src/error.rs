//! Error types for capability operations.

use thiserror::Error;

/// Errors that can occur at the capability boundary.
///
/// `Unavailable` and `Timeout` are transient: the session state is left
/// untouched by a failed exchange, so the caller may retry the same request.
/// `Malformed` signals a broken prompt/model contract and is surfaced
/// distinctly so operators can tell it apart from an outage.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The capability cannot be reached.
    #[error("capability unavailable: {0}")]
    Unavailable(String),

    /// A capability invocation timed out.
    #[error("capability timed out")]
    Timeout,

    /// Capability output failed to parse into the expected structured shape.
    #[error("malformed capability output: {0}")]
    Malformed(String),

    /// The capability is misconfigured.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl EngineError {
    /// Whether the caller may safely retry the same exchange.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(EngineError::Unavailable("down".to_string()).is_retryable());
        assert!(EngineError::Timeout.is_retryable());
        assert!(!EngineError::Malformed("bad intent".to_string()).is_retryable());
        assert!(!EngineError::Configuration("missing url".to_string()).is_retryable());
    }
}
