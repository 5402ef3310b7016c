//! Error types for the MercadoPago SDK.
//!
//! This module defines all error types that can occur while building requests,
//! talking to the API and converting payloads. All errors implement the standard
//! [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Serialization Errors** ([`MpError::Serialization`]): wire JSON could not be
//!   produced or parsed (see [`SerializationError`])
//! - **Network Errors** ([`MpError::HttpError`], [`MpError::TransportError`]): HTTP
//!   communication failures
//! - **API Errors** ([`MpError::Api`]): the API answered with a status code above 299
//! - **Validation Errors** ([`MpError::InvalidInput`], [`MpError::Config`]): caller
//!   input or configuration was rejected before any I/O
//!
//! # Examples
//!
//! ```
//! use mercadopago::error::{MpError, Result};
//!
//! fn require_device(device_id: &str) -> Result<&str> {
//!     if device_id.is_empty() {
//!         return Err(MpError::InvalidInput("device id cannot be empty".to_owned()));
//!     }
//!     Ok(device_id)
//! }
//!
//! assert!(require_device("").is_err());
//! ```

use thiserror::Error;

/// Result type alias for SDK operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, MpError>;

/// Errors that can occur in the SDK.
///
/// # Error Recovery
///
/// - **Transient errors** ([`HttpError`](Self::HttpError)): the SDK never retries; the
///   caller decides whether to resend
/// - **API errors** ([`Api`](Self::Api)): inspect `status` and `body`, 4xx usually means
///   the request must change
/// - **Serialization errors** ([`Serialization`](Self::Serialization)): either the API
///   contract changed or the response was not JSON, see
///   [`SerializationError::is_syntax`]
/// - **Validation errors** ([`InvalidInput`](Self::InvalidInput),
///   [`Config`](Self::Config)): fix the input and try again
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum MpError {
    /// Converting between a resource and its wire JSON failed.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// HTTP request failed.
    ///
    /// Wraps [`reqwest::Error`]: timeouts, refused connections, DNS and TLS failures.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The API answered with a status code above 299.
    ///
    /// `message` is the `message` field of the error body when the API sent one.
    ///
    /// # Examples
    ///
    /// ```
    /// use mercadopago::error::MpError;
    ///
    /// let err = MpError::Api {
    ///     status: 404,
    ///     message: "order not found".to_owned(),
    ///     body: r#"{"message":"order not found"}"#.to_owned(),
    /// };
    /// assert_eq!(err.to_string(), "API error (status 404): order not found");
    /// ```
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Human-readable error message.
        message: String,
        /// Raw response body.
        body: String,
    },

    /// The transport rejected the request before sending it.
    ///
    /// Raised for non-HTTPS URIs and for header names or values carrying control
    /// characters.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// Caller input was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// SDK configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MpError {
    /// Returns the HTTP status code for [`MpError::Api`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure to convert a resource to or from wire JSON.
///
/// Deserialization is fail-fast: a malformed document or a single malformed date
/// rejects the whole resource instead of returning it partially populated.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// The resource could not be turned into JSON.
    #[error("failed to serialize {resource}: {source}")]
    Serialize {
        /// Name of the resource type.
        resource: &'static str,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The resource serialized to something other than a JSON object.
    #[error("{resource} did not serialize to a JSON object")]
    NotAnObject {
        /// Name of the resource type.
        resource: &'static str,
    },

    /// The JSON document could not be turned into the target resource.
    ///
    /// Covers syntactically invalid JSON, type mismatches and malformed dates.
    #[error("failed to deserialize {resource}: {source}")]
    Deserialize {
        /// Name of the target resource type.
        resource: &'static str,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A date string does not follow the wire date pattern.
    #[error("invalid date '{value}': expected yyyy-MM-ddTHH:mm:ss.SSS±HHMM")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },
}

impl SerializationError {
    /// Returns true if the input was not valid JSON at all.
    ///
    /// A `false` result on a deserialization error means the JSON was well formed
    /// but did not match the expected shape, which usually points to an API
    /// contract change.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        match self {
            Self::Deserialize { source, .. } => source.is_syntax() || source.is_eof(),
            _ => false,
        }
    }
}
