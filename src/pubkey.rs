//! Solana public key (address) parsing.
//!
//! Accounts arrive from JavaScript either as base58 strings or raw bytes;
//! both are checked here before they reach a payload or account list.

use crate::error::{SfsError, ShapeViolation};

/// Re-export the underlying Solana Pubkey type.
pub use solana_sdk::pubkey::Pubkey;

/// Extension trait for Pubkey to add field-aware error handling.
pub trait PubkeyExt {
    fn from_base58(field: &'static str, address: &str) -> Result<Pubkey, SfsError>;
    fn from_bytes_checked(field: &'static str, bytes: &[u8]) -> Result<Pubkey, SfsError>;
}

impl PubkeyExt for Pubkey {
    /// Create a Pubkey from a base58 string that must decode to exactly 32 bytes.
    fn from_base58(field: &'static str, address: &str) -> Result<Pubkey, SfsError> {
        let bytes = bs58::decode(address)
            .into_vec()
            .map_err(|e| SfsError::invalid(&format!("Invalid {}: {} ({})", field, address, e)))?;

        Pubkey::from_bytes_checked(field, &bytes)
    }

    /// Create a Pubkey from a byte slice that must be exactly 32 bytes.
    fn from_bytes_checked(field: &'static str, bytes: &[u8]) -> Result<Pubkey, SfsError> {
        let array: [u8; 32] = bytes
            .try_into()
            .map_err(|_| SfsError::shape(field, ShapeViolation::KeyLength { len: bytes.len() }))?;

        Ok(Pubkey::from(array))
    }
}
