//! Error types for the Boekuwzending client.
//!
//! The taxonomy is flat: callers match on the variant to tell a
//! missing credential apart from a rejected token exchange, a failed
//! application request, or a programming error in the serializer table.

use thiserror::Error;

/// Result type alias for Boekuwzending operations.
pub type BuzResult<T> = Result<T, BuzError>;

/// Error type for Boekuwzending client operations.
#[derive(Debug, Error)]
pub enum BuzError {
    /// Credentials were never set, or one of their parts is empty.
    ///
    /// Raised before any network I/O takes place.
    #[error("API credentials not specified, use BuzClient::set_credentials")]
    NoCredentials,

    /// The client-credentials token exchange failed.
    ///
    /// Carries no underlying message so that nothing from the credential
    /// exchange leaks to callers.
    #[error("Authorization failed")]
    AuthorizationFailed,

    /// An application request failed at the transport or decoding stage.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Transport or parse error text.
        message: String,
        /// HTTP status code, when a response was received.
        status: Option<u16>,
    },

    /// No serializer is registered for the requested resource type.
    #[error("No serializer available for type {type_name}")]
    SerializerNotFound {
        /// Name of the resource type.
        type_name: String,
    },

    /// A wire map could not be converted into a resource.
    #[error("Invalid {type_name} data: {message}")]
    InvalidData {
        /// Name of the resource type being decoded.
        type_name: String,
        /// What was wrong with the data.
        message: String,
    },

    /// Caller input was rejected before a request was made.
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation issue.
        message: String,
    },

    /// Client, environment or registry misconfiguration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },
}

impl BuzError {
    /// Creates a request failure without an HTTP status.
    pub fn request_failed(message: impl Into<String>) -> Self {
        BuzError::RequestFailed {
            message: message.into(),
            status: None,
        }
    }

    /// Creates a request failure for a received HTTP status.
    pub fn request_failed_status(status: u16, message: impl Into<String>) -> Self {
        BuzError::RequestFailed {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Creates a serializer-not-found error.
    pub fn serializer_not_found(type_name: impl Into<String>) -> Self {
        BuzError::SerializerNotFound {
            type_name: type_name.into(),
        }
    }

    /// Creates an invalid data error.
    pub fn invalid_data(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        BuzError::InvalidData {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        BuzError::Validation {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        BuzError::Configuration {
            message: message.into(),
        }
    }

    /// Returns true if this error came from the authentication stage.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, BuzError::NoCredentials | BuzError::AuthorizationFailed)
    }

    /// Returns the HTTP status code attached to a request failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            BuzError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<url::ParseError> for BuzError {
    fn from(err: url::ParseError) -> Self {
        BuzError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}
