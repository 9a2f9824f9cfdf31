//! Recovery of the address that authorized an off-chain action.
//!
//! Contracts in this system hand out a 32-byte message hash; wallets sign it
//! either with `personal_sign` (EIP-191 prefix) or as a raw prehash. Both
//! forms are accepted.

use alloy_primitives::{eip191_hash_message, Address, Signature, B256};

use crate::errors::DomainError;

pub fn parse_signature(signature: &[u8]) -> Result<Signature, DomainError> {
    if signature.len() != 65 {
        return Err(DomainError::SignatureInvalid(format!(
            "expected 65 signature bytes, got {}",
            signature.len()
        )));
    }
    Signature::try_from(signature)
        .map_err(|e| DomainError::SignatureInvalid(format!("malformed signature: {}", e)))
}

/// Checks that `signature` over `hash` was produced by `expected`.
pub fn verify_authorizer(
    hash: B256,
    signature: &[u8],
    expected: Address,
) -> Result<(), DomainError> {
    let sig = parse_signature(signature)?;

    let personal = sig
        .recover_address_from_prehash(&eip191_hash_message(hash))
        .ok();
    if personal == Some(expected) {
        return Ok(());
    }

    let raw = sig.recover_address_from_prehash(&hash).ok();
    if raw == Some(expected) {
        return Ok(());
    }

    let recovered = personal
        .or(raw)
        .map(|a| a.to_string())
        .unwrap_or_else(|| "nothing".to_string());
    Err(DomainError::SignatureInvalid(format!(
        "signature recovers to {}, expected {}",
        recovered, expected
    )))
}
