//! Contract module for Covenant
//!
//! This module provides the credential record and its validation rule: a
//! `Contract` holds the fields a tenant's access is checked against, and
//! answers whether a presented `Key` authorizes access.

pub mod errors;
pub mod types;

// Re-export main types for easier access
pub use errors::ContractError;
pub use types::*;
