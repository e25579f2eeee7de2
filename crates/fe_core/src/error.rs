use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Invalid observation: {field}: {reason}")]
    InvalidObservation { field: &'static str, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl EncodeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EncodeError::InvalidObservation { field, reason: reason.into() }
    }

    /// Schema violations are precondition failures of the caller, never worth a retry.
    pub fn is_recoverable(&self) -> bool {
        match self {
            EncodeError::InvalidObservation { .. } => false,
            EncodeError::Json(_) => false,
            EncodeError::Config { .. } => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, EncodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_observation_message() {
        let err = EncodeError::invalid("active", "index 11 out of range for 11 players");
        assert_eq!(
            err.to_string(),
            "Invalid observation: active: index 11 out of range for 11 players"
        );
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: EncodeError = parse.unwrap_err().into();
        assert!(matches!(err, EncodeError::Json(_)));
    }
}
