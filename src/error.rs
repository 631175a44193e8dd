//! Error types for the SEO analyzer
//!
//! Every variant here is fatal to an analysis: once one is raised, no result
//! collection is produced. Missing upstream data ("no data") is not an error
//! and is modelled with `Option::None` on the individual collections instead.

use thiserror::Error;

/// Message surfaced when the caller submits an empty input string
pub const EMPTY_INPUT_MESSAGE: &str = "Input text is empty";

/// The main error type for analyzer operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input string was empty
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,

    /// Network or transport failure while fetching a URL
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The configured stop-word list could not be loaded
    #[error("Stop-word error: {0}")]
    StopWords(#[from] StopWordsError),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Transport failures while resolving a URL input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// DNS, connect, reset, timeout or body read failure; carries the
    /// transport's own message
    #[error("{0}")]
    Request(String),

    /// The server answered with a non-2xx status
    #[error("The remote server returned an error: ({status}) for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// URL that was requested
        url: String,
    },
}

/// Stop-word list loading errors
#[derive(Error, Debug)]
pub enum StopWordsError {
    /// The stop-word file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error from a string
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// The single human-readable message reported to callers
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match (err.status(), err.url()) {
            (Some(status), Some(url)) => FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            },
            _ => FetchError::Request(err.to_string()),
        }
    }
}
