//! Error types for the logging pipeline

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unrecognized level text
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Several handlers of a fan-out failed
    #[error("{}", join_errors(.0))]
    Multiple(Vec<LoggerError>),

    /// Error reported by a user-supplied handler
    #[error("Handler error: {0}")]
    HandlerError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

fn join_errors(errors: &[LoggerError]) -> String {
    let parts: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!("{} handler(s) failed: {}", errors.len(), parts.join("; "))
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a handler error
    pub fn handler<S: Into<String>>(msg: S) -> Self {
        LoggerError::HandlerError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Collapse a list of failures into one error, `None` when empty
    pub fn combine(mut errors: Vec<LoggerError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(LoggerError::Multiple(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("Config", "unknown time format");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::handler("sink closed");
        assert!(matches!(err, LoggerError::HandlerError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::InvalidLevel("loud".to_string());
        assert_eq!(err.to_string(), "Invalid log level: 'loud'");

        let err = LoggerError::config("Config", "bad time format");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for Config: bad time format"
        );
    }

    #[test]
    fn test_combine() {
        assert!(LoggerError::combine(Vec::new()).is_none());

        let single = LoggerError::combine(vec![LoggerError::other("a")]).unwrap();
        assert!(matches!(single, LoggerError::Other(_)));

        let many =
            LoggerError::combine(vec![LoggerError::other("a"), LoggerError::other("b")]).unwrap();
        assert_eq!(many.to_string(), "2 handler(s) failed: a; b");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", io_err);

        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("access denied"));
    }
}
