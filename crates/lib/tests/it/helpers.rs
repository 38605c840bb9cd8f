use covenant::contract::{Contract, ContractState, License, StaticKey};
use covenant::provider::SingleContractProvider;
use rand::Rng;

// Helper functions for contract and provider testing
//
// This module provides small factories for licenses, providers, contracts,
// and keys so individual tests stay focused on the property under test.

/// The operator license used by most provider tests
pub fn operator_license() -> License {
    License {
        contract: 42,
        signature: 999,
    }
}

/// Create a single contract provider from an arbitrary license
pub fn provider_with(contract: u32, signature: u32) -> SingleContractProvider {
    SingleContractProvider::new(&License {
        contract,
        signature,
    })
}

/// Create the key that matches a contract exactly
pub fn matching_key(contract: &Contract) -> StaticKey {
    StaticKey {
        master: contract.master_id,
        contract: contract.id,
        signature: contract.signature,
    }
}

/// Create a contract with random field values in the given state
pub fn random_contract(rng: &mut impl Rng, state: ContractState) -> Contract {
    Contract {
        id: rng.gen_range(0..=u32::MAX),
        master_id: rng.gen_range(0..=u16::MAX),
        signature: rng.gen_range(0..=u32::MAX),
        state,
    }
}

/// Pick a value in `0..=max` distinct from `taken`
pub fn different_from(rng: &mut impl Rng, taken: u32, max: u32) -> u32 {
    loop {
        let candidate = rng.gen_range(0..=max);
        if candidate != taken {
            return candidate;
        }
    }
}
