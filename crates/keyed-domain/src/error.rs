//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for keyed dependency resolution
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was absent or malformed at a call boundary
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// A registration cannot be expressed by the target container
    #[error("Not supported: {message}")]
    NotSupported {
        /// Description of the unsupported operation
        message: String,
    },

    /// No service is registered for the requested key
    #[error("No service of type {service} with key {key} could be found.")]
    NoSuchService {
        /// Name of the requested service type
        service: String,
        /// Name of the requested key type
        key: String,
    },

    /// No service is registered for the requested (unkeyed) service type
    #[error("No service for type {service} has been registered.")]
    ServiceNotRegistered {
        /// Name of the requested service type
        service: String,
    },

    /// A resolved value does not have the statically requested type
    #[error("Type mismatch: expected {expected}")]
    TypeMismatch {
        /// Name of the expected type
        expected: String,
    },

    /// A constructor or factory failed while activating a service
    #[error("Failed to activate {service}: {source}")]
    Activation {
        /// Name of the service being activated
        service: String,
        /// The underlying failure
        #[source]
        source: Box<Error>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Precondition and contract errors
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not supported error
    pub fn not_supported<S: Into<String>>(message: S) -> Self {
        Self::NotSupported {
            message: message.into(),
        }
    }
}

// Resolution error creation methods
impl Error {
    /// Create a "no such service" error naming both the key and the service
    pub fn no_such_service<S: Into<String>, K: Into<String>>(service: S, key: K) -> Self {
        Self::NoSuchService {
            service: service.into(),
            key: key.into(),
        }
    }

    /// Create a "service not registered" error
    pub fn service_not_registered<S: Into<String>>(service: S) -> Self {
        Self::ServiceNotRegistered {
            service: service.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<S: Into<String>>(expected: S) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
        }
    }

    /// Wrap an activation failure with the name of the service being built
    pub fn activation<S: Into<String>>(service: S, source: Error) -> Self {
        Self::Activation {
            service: service.into(),
            source: Box::new(source),
        }
    }

    /// Whether this error (or the activation failure it wraps) means a
    /// registration was missing
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NoSuchService { .. } | Self::ServiceNotRegistered { .. } => true,
            Self::Activation { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

// Configuration and internal error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
