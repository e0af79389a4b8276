//! Error handling types

use std::time::Duration;

use thiserror::Error;

use crate::value_objects::{AttemptRecord, CapabilityName};

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error
type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the Reel pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Network-related error
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Database-related error
    #[error("Database error: {message}")]
    Database {
        /// Description of the database error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// A provider's capability call failed
    #[error("{provider} error: {message}")]
    Provider {
        /// Provider that raised the error
        provider: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The capability is not part of the registry
    #[error("Unknown capability: {name}")]
    UnknownCapability {
        /// Name that was requested
        name: String,
    },

    /// The provider name is not registered for the capability
    #[error("Unknown {capability} provider '{provider}'. Available providers: {available:?}")]
    UnknownProvider {
        /// Capability whose namespace was searched
        capability: CapabilityName,
        /// Name that was requested
        provider: String,
        /// Names registered for the capability
        available: Vec<String>,
    },

    /// A provider failed to initialize
    #[error("Failed to construct {capability} provider '{provider}': {message}")]
    ProviderConstruction {
        /// Capability being resolved
        capability: CapabilityName,
        /// Provider being constructed
        provider: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Every candidate of a chain failed
    #[error("All {capability} providers failed. {}", summarize_attempts(.attempts))]
    ChainExhausted {
        /// Capability being invoked
        capability: CapabilityName,
        /// Attempt history in chain order
        attempts: Vec<AttemptRecord>,
    },

    /// A caller-supplied deadline elapsed before the invocation finished
    #[error("{capability} invocation exceeded its deadline of {after:?}")]
    DeadlineExceeded {
        /// Capability being invoked
        capability: CapabilityName,
        /// The deadline that elapsed
        after: Duration,
    },
}

fn summarize_attempts(attempts: &[AttemptRecord]) -> String {
    let tried: Vec<String> = attempts.iter().map(ToString::to_string).collect();
    let last = attempts
        .iter()
        .rev()
        .find_map(AttemptRecord::failure)
        .map(|failure| failure.error.to_string())
        .unwrap_or_else(|| "none".to_string());
    format!(
        "Tried {} candidate(s): [{}]. Last error: {}",
        attempts.len(),
        tried.join("; "),
        last
    )
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
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
}

// Network and database error creation methods
impl Error {
    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Create a database error with source
    pub fn database_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Provider resolution error creation methods
impl Error {
    /// Create a provider operation error
    pub fn provider<P: Into<String>, S: Into<String>>(provider: P, message: S) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a provider operation error with source
    pub fn provider_with_source<
        P: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        provider: P,
        message: S,
        source: E,
    ) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unknown capability error
    pub fn unknown_capability<S: Into<String>>(name: S) -> Self {
        Self::UnknownCapability { name: name.into() }
    }

    /// Create a provider construction error
    pub fn construction<P: Into<String>, S: Into<String>>(
        capability: CapabilityName,
        provider: P,
        message: S,
    ) -> Self {
        Self::ProviderConstruction {
            capability,
            provider: provider.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a missing-credential construction error
    pub fn missing_credential<P: Into<String>>(
        capability: CapabilityName,
        provider: P,
        variable: &str,
    ) -> Self {
        Self::construction(
            capability,
            provider,
            format!("{variable} not found in configuration or environment"),
        )
    }
}

// Error inspection
impl Error {
    /// Attempt history of an exhausted chain
    pub fn attempts(&self) -> Option<&[AttemptRecord]> {
        match self {
            Self::ChainExhausted { attempts, .. } => Some(attempts),
            _ => None,
        }
    }
}
