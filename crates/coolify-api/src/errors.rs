use thiserror::Error;

/// API-specific errors for coolify-api
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Core domain error: {0}")]
    Core(#[from] coolify_core::CoolifyError),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Status-code level failures reported by the remote API.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Resource not found: {url} - {message}")]
    NotFound { url: String, message: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Rate limited by the server")]
    RateLimited,

    #[error("Unexpected redirect with status {status}")]
    UnexpectedRedirect { status: u16 },

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("HTTP error {status}: {message}")]
    Unexpected { status: u16, message: String },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
