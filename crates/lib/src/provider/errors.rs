//! Provider error types for the Covenant library.
//!
//! This module defines structured error types for provider operations.
//! Lookup misses are not errors: `ContractProvider::get` signals absence
//! through its `Option` return.

use thiserror::Error as ThisError;

use crate::Error;

/// Errors that can occur during provider operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum ProviderError {
    /// The provider strategy does not support the requested operation.
    #[error("Provider '{provider}' does not support {operation}")]
    UnsupportedOperation {
        /// The name of the provider strategy
        provider: &'static str,
        /// The operation that is not supported
        operation: &'static str,
    },

    /// A configuration option was supplied with an invalid value.
    #[error("Invalid configuration option '{option}': {reason}")]
    InvalidConfiguration {
        /// The name of the invalid option
        option: String,
        /// Description of why the option is invalid
        reason: String,
    },

    /// A required configuration option was not supplied.
    #[error("Missing configuration option '{option}'")]
    MissingConfiguration {
        /// The name of the missing option
        option: String,
    },
}

impl ProviderError {
    /// Check if this error indicates an operation the strategy does not support.
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, ProviderError::UnsupportedOperation { .. })
    }

    /// Check if this error indicates a configuration problem.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ProviderError::InvalidConfiguration { .. } | ProviderError::MissingConfiguration { .. }
        )
    }

    /// Get the provider strategy name if this error names one.
    pub fn provider(&self) -> Option<&'static str> {
        match self {
            ProviderError::UnsupportedOperation { provider, .. } => Some(provider),
            _ => None,
        }
    }
}

// Conversion from ProviderError to the main Error type
impl From<ProviderError> for Error {
    fn from(err: ProviderError) -> Self {
        Error::Provider(err)
    }
}
