use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Feed endpoint returned HTTP {status}")]
    HttpStatusError { status: reqwest::StatusCode },

    #[error("Feed decode failed: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FetchError {
    /// Non-2xx statuses count as network failures, same bucket as transport
    /// errors; only body-level problems are decode failures.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FetchError::NetworkError(_) | FetchError::HttpStatusError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::NetworkError(_) => {
                "Could not reach the earthquake feed. Check your connection.".to_string()
            }
            FetchError::HttpStatusError { status } => {
                format!("The earthquake feed rejected the request (HTTP {}).", status)
            }
            FetchError::DecodeError(_) => {
                "The earthquake feed returned data this tool could not read.".to_string()
            }
            FetchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FetchError::NetworkError(_) | FetchError::HttpStatusError { .. } => {
                "Retry once connectivity is restored; the fetch is safe to repeat."
            }
            FetchError::DecodeError(_) => {
                "Verify the endpoint serves the USGS GeoJSON format (format=geojson)."
            }
            FetchError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
