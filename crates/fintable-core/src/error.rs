//! Error types for pipeline operations.
//!
//! [`FetchError`] covers every way the fetcher can fail. [`InputError`] covers
//! rejected user input, which never changes pipeline state.

use thiserror::Error;

/// Errors that can occur while fetching income statements.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection failures, timeouts and body read errors.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Rate limit exceeded by a provider.
    #[error("Rate limited by {provider}")]
    RateLimited {
        /// The provider that rate limited the request.
        provider: String,
    },

    /// The API reported an error in an otherwise successful response.
    #[error("API error: {0}")]
    Api(String),

    /// The response body could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The provider is missing its endpoint or key.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors raised by rejected user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A numeric bound that is neither empty nor a number.
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber {
        /// The bound being edited.
        field: &'static str,
        /// The rejected text.
        value: String,
    },

    /// A year outside the selectable set.
    #[error("Year {0} is not selectable (choose 2020-2024)")]
    YearOutOfRange(i32),

    /// A command or option that is not recognized.
    #[error("Unknown input: {0}")]
    Unknown(String),
}

/// Result type alias using [`FetchError`].
pub type Result<T> = std::result::Result<T, FetchError>;
