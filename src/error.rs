//! Error types for the contacts search core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the document-search service.
#[derive(Error, Debug)]
pub enum SearchApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Service returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Document or index not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Errors returned by the index synchronizer and the search gateway.
#[derive(Error, Debug)]
pub enum ContactsError {
    /// The contact carries no identifier the index could be keyed by.
    #[error("{operation}: contact identifier is missing")]
    IdentifierMissing { operation: &'static str },

    /// Upsert or delete against the search service failed.
    #[error("{operation} of contact {id} failed: {source}")]
    IndexingFailed {
        operation: &'static str,
        id: String,
        #[source]
        source: SearchApiError,
    },

    /// The search request itself failed.
    #[error("search for {query:?} on field {field:?} failed: {source}")]
    SearchFailed {
        query: String,
        field: String,
        #[source]
        source: SearchApiError,
    },

    /// Reading the indexed document by identifier failed.
    #[error("lookup of contact {id} failed: {source}")]
    LookupFailed {
        id: String,
        #[source]
        source: SearchApiError,
    },

    /// A stored document could not be decoded into a contact.
    #[error("hit {hit_id} could not be decoded: {source}")]
    DecodeFailed {
        hit_id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ContactsError {
    /// Whether retrying the same call could succeed.
    ///
    /// Only failures of the external service qualify; caller errors and
    /// data-contract violations need intervention first.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::IndexingFailed { .. }
                | Self::SearchFailed { .. }
                | Self::LookupFailed { .. }
        )
    }

    /// Whether the search service reported the document as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::IndexingFailed {
                source: SearchApiError::NotFound(_),
                ..
            }
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SearchApiError
pub type SearchApiResult<T> = Result<T, SearchApiError>;

/// Convenience type alias for Results with ContactsError
pub type ContactsResult<T> = Result<T, ContactsError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
