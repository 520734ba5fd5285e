use shared::format::FormatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Locale error: {source}")]
    LocaleError {
        #[from]
        source: FormatError,
    },

    // The external submission transport failed before producing a response.
    #[error("Submission transport error: {0}")]
    TransportError(String),

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::from(FormatError::UnknownLocale("xx-YY".to_string()));
        assert_eq!(err.to_string(), "Locale error: Unsupported locale: xx-YY");

        let err = EngineError::TransportError("connection refused".to_string());
        assert_eq!(err.to_string(), "Submission transport error: connection refused");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: EngineError = parse.unwrap_err().into();
        assert!(matches!(err, EngineError::JsonError { .. }));
    }
}
