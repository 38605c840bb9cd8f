//! Provider implementations for Covenant contracts
//!
//! This module provides the core `ContractProvider` trait and the strategies
//! implementing it.
//!
//! The `ContractProvider` trait defines the interface for sourcing `Contract`
//! records. This allows the validation logic to be independent of where
//! contracts come from: local configuration, a database, or a remote license
//! service.

use std::collections::HashMap;

use serde_json::Value;

use crate::Result;
use crate::contract::Contract;

pub mod errors;
pub mod single;

pub use errors::ProviderError;
pub use single::SingleContractProvider;

/// ContractProvider trait abstracting how contracts are sourced.
///
/// A provider is one strategy for obtaining `Contract` records: the shipped
/// `SingleContractProvider` serves the operator's own contract from a local
/// license, and future strategies may fetch contracts from a database or a
/// remote license service without changing callers.
///
/// Providers are stateless from the caller's perspective beyond whatever
/// internal cache or configuration each strategy holds. All implementations
/// must be `Send` and `Sync` so a provider can be shared across threads;
/// lookups return owned `Contract` copies, so no locking is required on the
/// read path.
///
/// Every operation is a bounded, synchronous computation. Failures are
/// reported synchronously as typed errors or as explicit not-found results;
/// there is no retry behavior and no background work. Any retry or fallback
/// policy belongs to the caller.
pub trait ContractProvider: Send + Sync {
    /// Returns the stable name of the provider strategy.
    ///
    /// Used for diagnostics and for selecting a strategy from configuration.
    fn name(&self) -> &'static str;

    /// Configures the provider from a generic option map.
    ///
    /// # Arguments
    /// * `options` - A mapping of option name to value. The recognized option
    ///   set is strategy-specific; strategies with no options ignore the map.
    ///
    /// # Returns
    /// A `Result` that fails with `ProviderError::InvalidConfiguration` or
    /// `ProviderError::MissingConfiguration` when an option is invalid, or
    /// required and absent.
    fn configure(&mut self, options: &HashMap<String, Value>) -> Result<()>;

    /// Attempts to mint a new contract.
    ///
    /// # Returns
    /// A `Result` containing the new `Contract`, or
    /// `ProviderError::UnsupportedOperation` when the strategy does not
    /// support dynamic contract creation.
    fn create(&self) -> Result<Contract>;

    /// Looks up a contract by its identifier.
    ///
    /// Absence is an expected, non-exceptional outcome: an identifier unknown
    /// to this provider yields `None`, never an error. Callers must treat a
    /// miss as a routine branch, not a fault.
    ///
    /// # Arguments
    /// * `id` - The id of the contract to retrieve.
    ///
    /// # Returns
    /// An owned copy of the `Contract` if this provider knows the id.
    fn get(&self, id: u32) -> Option<Contract>;
}
