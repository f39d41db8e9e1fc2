//! Error types for the kata exercises.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors produced by the string calculator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The input contained one or more negative numbers.
    ///
    /// Every negative found is listed as written, in the order encountered.
    /// Negatives too large for an `i64` are reported too.
    #[error("negatives not allowed: {}", join_negatives(.negatives))]
    NegativeNumbers { negatives: Vec<String> },

    /// A custom delimiter could not be compiled into a split pattern.
    #[error("invalid delimiter: {0}")]
    InvalidDelimiter(String),
}

fn join_negatives(negatives: &[String]) -> String {
    negatives.join(", ")
}

/// Errors that can occur when fetching users over HTTP.
#[derive(Error, Debug)]
pub enum UserApiError {
    /// The API answered with a non-success status code
    #[error("User fetch failed")]
    FetchFailed { status: u16 },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

impl UserApiError {
    /// HTTP status code carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::FetchFailed { status } => Some(*status),
            _ => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CalculatorError
pub type CalculatorResult<T> = Result<T, CalculatorError>;

/// Convenience type alias for Results with UserApiError
pub type UserApiResult<T> = Result<T, UserApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
