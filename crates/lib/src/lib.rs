//!
//! Covenant: contract-based tenant authorization for multi-tenant services.
//! This library provides the credential record, its validation rule, and the
//! pluggable strategies for sourcing credentials.
//!
//! ## Core Concepts
//!
//! * **Contracts (`contract::Contract`)**: The credential record representing one tenant's
//!   right to use the service, validated against a presented key.
//! * **Keys (`contract::Key`)**: A read-only capability presented by a caller, exposing the
//!   master, contract, and signature identifiers a contract is matched against. Key format
//!   and derivation are external concerns.
//! * **Licenses (`contract::License`)**: Operator-supplied entitlement data (contract id +
//!   signature) used to bootstrap the single-tenant provider.
//! * **Providers (`provider::ContractProvider`)**: A pluggable strategy for looking up and
//!   minting contracts, so callers need not know whether contracts come from local
//!   configuration, a database, or a remote license service.
//!
//! The only strategy shipped here is `provider::SingleContractProvider`, which serves
//! exactly one contract derived from the operator's own license.

pub mod contract;
pub mod provider;

/// Re-export the `Contract` struct for easier access.
pub use contract::Contract;

/// Result type used throughout the Covenant library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Covenant library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured contract errors from the contract module
    #[error(transparent)]
    Contract(contract::ContractError),

    /// Structured provider errors from the provider module
    #[error(transparent)]
    Provider(provider::ProviderError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Contract(_) => "contract",
            Error::Provider(_) => "provider",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates an operation the provider strategy does not support.
    pub fn is_unsupported_operation(&self) -> bool {
        match self {
            Error::Provider(provider_err) => provider_err.is_unsupported_operation(),
            _ => false,
        }
    }

    /// Check if this error indicates an invalid or missing configuration option.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Error::Provider(provider_err) => provider_err.is_configuration_error(),
            _ => false,
        }
    }

    /// Check if this error indicates malformed contract data.
    pub fn is_contract_error(&self) -> bool {
        matches!(self, Error::Contract(_))
    }

    /// Check if this error is serialization related.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
