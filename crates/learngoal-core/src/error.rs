//! Error types for configuration and the completion client.

/// Startup configuration errors. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// API key variable unset or blank.
    #[error("API key not found. Set {var} in the environment or a .env file.")]
    MissingApiKey { var: &'static str },

    /// API key contains characters that cannot go into an HTTP header.
    #[error("API key in {var} is not a valid header value")]
    InvalidApiKey { var: &'static str },
}

/// Completion errors. Each one carries a message fit for display.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Authentication failed (401/403).
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Any other non-success status from the API.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Connection, TLS or body transfer failure.
    #[error("network error: {message}")]
    Network { message: String },

    /// Body could not be parsed as a Messages response.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Response parsed but carried no text block.
    #[error("empty response: no text content returned by the model")]
    EmptyResponse,

    /// HTTP client could not be built from the configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CompletionError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            _ => 1,
        }
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for completion operations.
pub type CompletionResult<T> = Result<T, CompletionError>;
