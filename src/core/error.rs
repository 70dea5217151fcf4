/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, PaymobError>;

/// Errors surfaced by the gateway client
#[derive(thiserror::Error, Debug)]
pub enum PaymobError {
    /// Required payment fields missing from caller-supplied data.
    /// Raised before any network call is made.
    #[error("missing required payment fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Validation errors for caller-supplied values
    #[error("validation error: {0}")]
    Validation(String),

    /// Unexpected or malformed gateway response, non-2xx status, or
    /// transport failure. Fatal to the current operation; never retried
    /// by this layer.
    #[error("gateway error: {0}")]
    Gateway(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

// Helper functions for common error scenarios
impl PaymobError {
    pub fn missing_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PaymobError::MissingFields(fields.into_iter().map(Into::into).collect())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        PaymobError::Validation(msg.into())
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        PaymobError::Gateway(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        PaymobError::Configuration(msg.into())
    }
}
