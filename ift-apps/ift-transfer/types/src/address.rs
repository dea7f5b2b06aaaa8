//! Account address derivation and validation for Cosmos-style hosts.
use ift_primitives::prelude::*;
use ift_primitives::Signer;
use sha2::{Digest, Sha256};
use subtle_encoding::bech32;

use crate::error::IftError;

/// Length in bytes of an address derived for a module account.
pub const MODULE_ADDRESS_LENGTH: usize = 20;

/// Derives the raw address of a module account: the first 20 bytes of the
/// SHA-256 of the module name.
pub fn module_address_bytes(module_name: &str) -> [u8; MODULE_ADDRESS_LENGTH] {
    let hash = Sha256::digest(module_name.as_bytes());
    let mut address = [0u8; MODULE_ADDRESS_LENGTH];
    address.copy_from_slice(&hash[..MODULE_ADDRESS_LENGTH]);
    address
}

/// Derives the bech32 account of a module for a chain using `prefix` as its
/// human readable part.
pub fn module_account(module_name: &str, prefix: &str) -> Signer {
    Signer::new(bech32::encode(prefix, module_address_bytes(module_name)))
}

/// Encodes raw address bytes as a bech32 account.
pub fn bech32_account(prefix: &str, address: impl AsRef<[u8]>) -> Signer {
    Signer::new(bech32::encode(prefix, address))
}

/// Decodes a bech32 account and checks it belongs to the chain using
/// `expected_prefix`. Both 20-byte (user) and 32-byte (derived) addresses
/// are accepted.
pub fn decode_bech32_account(account: &Signer, expected_prefix: &str) -> Result<Vec<u8>, IftError> {
    let invalid = |reason: &str| IftError::InvalidAddress {
        address: account.to_string(),
        reason: reason.to_string(),
    };

    let (prefix, bytes) = bech32::decode(account.as_str()).map_err(|_| invalid("not bech32"))?;

    if prefix != expected_prefix {
        return Err(invalid("unexpected human readable part"));
    }

    match bytes.len() {
        20 | 32 => Ok(bytes),
        _ => Err(invalid("unexpected address length")),
    }
}
