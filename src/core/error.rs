//! Error types for the batching logger

pub type Result<T> = std::result::Result<T, BatchlogError>;

#[derive(Debug, thiserror::Error)]
pub enum BatchlogError {
    /// IO error from a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Sink-specific failure
    #[error("Sink '{name}' error: {message}")]
    Sink { name: String, message: String },
}

impl BatchlogError {
    /// Create a sink error
    pub fn sink(name: impl Into<String>, message: impl Into<String>) -> Self {
        BatchlogError::Sink {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_error_display() {
        let err = BatchlogError::sink("file", "disk full");
        assert_eq!(err.to_string(), "Sink 'file' error: disk full");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: BatchlogError = io_err.into();
        assert!(matches!(err, BatchlogError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
