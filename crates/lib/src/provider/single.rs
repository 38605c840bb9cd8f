use std::collections::HashMap;

use serde_json::Value;

use crate::Result;
use crate::contract::{Contract, ContractState, License};
use crate::provider::{ContractProvider, ProviderError};

/// A provider serving exactly one contract: the operator's own.
///
/// This strategy is for single-tenant deployments where no dynamic contract
/// issuance is needed. The one owner contract is derived from the operator's
/// `License` at construction time and is immutable afterwards, so any number
/// of threads may look it up concurrently without synchronization.
///
/// The provider intentionally refuses to create contracts; `create` always
/// fails with `ProviderError::UnsupportedOperation`.
#[derive(Debug, Clone)]
pub struct SingleContractProvider {
    /// The owner contract.
    owner: Contract,
}

impl SingleContractProvider {
    /// The stable name of this provider strategy.
    pub const NAME: &'static str = "single";

    /// Create a new single contract provider from the operator's license.
    ///
    /// Builds the one owner contract with `master_id = 1` (the operator
    /// itself), the license's contract id and signature, and the `Allowed`
    /// state. This is the only contract this provider will ever produce.
    pub fn new(license: &License) -> Self {
        let owner = Contract {
            id: license.contract,
            master_id: 1,
            signature: license.signature,
            state: ContractState::Allowed,
        };
        tracing::debug!(contract = owner.id, "initialized single contract provider");
        Self { owner }
    }
}

impl ContractProvider for SingleContractProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// No configurable options exist for this strategy; any supplied keys
    /// are ignored and configuration always succeeds.
    fn configure(&mut self, _options: &HashMap<String, Value>) -> Result<()> {
        Ok(())
    }

    fn create(&self) -> Result<Contract> {
        Err(ProviderError::UnsupportedOperation {
            provider: Self::NAME,
            operation: "contract creation",
        }
        .into())
    }

    fn get(&self, id: u32) -> Option<Contract> {
        if self.owner.id != id {
            return None;
        }

        Some(self.owner)
    }
}
