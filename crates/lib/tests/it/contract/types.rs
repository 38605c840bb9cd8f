use covenant::contract::{Contract, ContractState, License};

use crate::helpers::*;

#[test]
fn test_state_wire_numbering_is_stable() {
    // The ordinal numbering is shared with persisted and transported forms
    // and must never drift.
    assert_eq!(
        serde_json::to_value(ContractState::Allowed).unwrap(),
        serde_json::json!(0)
    );
    assert_eq!(
        serde_json::to_value(ContractState::Refused).unwrap(),
        serde_json::json!(1)
    );
}

#[test]
fn test_contract_json_roundtrip() {
    let mut rng = rand::thread_rng();
    for state in [ContractState::Allowed, ContractState::Refused] {
        let contract = random_contract(&mut rng, state);
        let json = serde_json::to_string(&contract).unwrap();
        let parsed: Contract = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, contract);
    }
}

#[test]
fn test_license_parses_from_operator_config() {
    // The shape an operator's configuration file uses for its license entry.
    let license: License = serde_json::from_str(r#"{"contract": 42, "sign": 999}"#).unwrap();
    assert_eq!(license, operator_license());
}

#[test]
fn test_contract_rejects_out_of_range_state() {
    let result: Result<Contract, _> =
        serde_json::from_str(r#"{"id": 1, "master": 1, "sign": 1, "state": 2}"#);
    assert!(result.is_err());
}
