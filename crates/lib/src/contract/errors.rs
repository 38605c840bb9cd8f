//! Contract error types for the Covenant library.
//!
//! This module defines structured error types for contract data handling,
//! providing better error context and type safety compared to string-based
//! errors. Note that validation itself cannot fail: a key that does not
//! match a contract is a `false` result, not an error.

use thiserror::Error as ThisError;

use crate::Error;

/// Errors that can occur while handling contract data.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum ContractError {
    /// A state ordinal outside the closed {0, 1} set was presented.
    #[error("Invalid contract state: {value}")]
    InvalidState {
        /// The ordinal value that does not name a contract state
        value: u8,
    },
}

impl ContractError {
    /// Check if this error indicates an invalid state ordinal.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, ContractError::InvalidState { .. })
    }
}

// Conversion from ContractError to the main Error type
impl From<ContractError> for Error {
    fn from(err: ContractError) -> Self {
        Error::Contract(err)
    }
}
