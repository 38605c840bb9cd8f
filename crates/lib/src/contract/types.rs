//! Core contract data structures for Covenant
//!
//! This module defines the credential record (`Contract`), its state
//! enumeration, the `Key` capability presented by callers, and the operator
//! `License` used to bootstrap the single-tenant provider.

use serde::{Deserialize, Serialize};

use crate::contract::errors::ContractError;

/// State of a contract
///
/// The ordinal form is part of the wire contract: `Allowed = 0`,
/// `Refused = 1`. Any persisted or transported encoding goes through the
/// `u8` conversions below so the numbering is preserved.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "u8", try_from = "u8")]
pub enum ContractState {
    /// The contract grants access. Default for provider-issued owner contracts.
    #[default]
    Allowed,
    /// The contract denies access. A refused contract never validates against any key.
    Refused,
}

impl From<ContractState> for u8 {
    fn from(state: ContractState) -> Self {
        match state {
            ContractState::Allowed => 0,
            ContractState::Refused => 1,
        }
    }
}

impl TryFrom<u8> for ContractState {
    type Error = ContractError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ContractState::Allowed),
            1 => Ok(ContractState::Refused),
            value => Err(ContractError::InvalidState { value }),
        }
    }
}

/// Access key capability presented by a caller
///
/// A key exposes the three identifiers a contract is matched against. It is
/// read-only; how keys are encoded, derived, or parsed is an external
/// concern and out of scope for this library.
pub trait Key {
    /// The master account identifier embedded in the key.
    fn master(&self) -> u16;

    /// The contract identifier embedded in the key.
    fn contract(&self) -> u32;

    /// The signature embedded in the key.
    fn signature(&self) -> u32;
}

/// A contract (tenant account)
///
/// Represents one tenant's permission record: which master account owns it,
/// the signature a presented key must carry, and whether access is
/// currently allowed. Contracts are small `Copy` records; providers hand
/// out owned copies so concurrent readers need no locking.
///
/// The serde field names (`id`, `master`, `sign`, `state`) are the wire
/// form shared with the service's configuration and transport layers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contract {
    /// The contract id, unique per contract.
    pub id: u32,
    /// The id of the owning master account.
    #[serde(rename = "master")]
    pub master_id: u16,
    /// The signature a presented key must match exactly.
    #[serde(rename = "sign")]
    pub signature: u32,
    /// The state of the contract.
    pub state: ContractState,
}

impl Contract {
    /// Validate the contract data against a presented key.
    ///
    /// Returns `true` iff the key's master, signature, and contract
    /// identifiers all match this contract's fields exactly and the
    /// contract is in the `Allowed` state. There is no partial or fuzzy
    /// matching; a mismatch on any field yields `false`, never an error.
    ///
    /// Pure and side-effect free; repeated calls are idempotent.
    pub fn validate<K: Key + ?Sized>(&self, key: &K) -> bool {
        self.master_id == key.master()
            && self.signature == key.signature()
            && self.id == key.contract()
            && self.state == ContractState::Allowed
    }
}

/// Operator license
///
/// The operator's own entitlement: the contract identifier and signature the
/// single-tenant provider derives its one owner contract from. Sourced
/// externally (e.g. from a configuration file or license blob); parsing and
/// validation of the license source itself is out of scope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct License {
    /// The contract id granted by this license.
    pub contract: u32,
    /// The signature keys for this contract must carry.
    #[serde(rename = "sign")]
    pub signature: u32,
}

/// A fixed-value key
///
/// The simplest possible `Key` implementation: three public fields returned
/// verbatim by the accessors. Suitable for tests and local tooling where
/// keys are constructed in-process rather than parsed from an encoded form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaticKey {
    /// The master account identifier.
    pub master: u16,
    /// The contract identifier.
    pub contract: u32,
    /// The signature.
    pub signature: u32,
}

impl Key for StaticKey {
    fn master(&self) -> u16 {
        self.master
    }

    fn contract(&self) -> u32 {
        self.contract
    }

    fn signature(&self) -> u32 {
        self.signature
    }
}
