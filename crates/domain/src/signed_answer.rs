use alloy_primitives::{keccak256, Address, Bytes, B256};
use alloy_sol_types::SolValue;

use crate::errors::DomainError;

/// Tag bytes prepended to every gateway digest (EIP-191 version 0x00,
/// "data with intended validator").
pub const SIGNATURE_TAG: [u8; 2] = [0x19, 0x00];

/// A resolved answer signed by the gateway key, ready to be handed back to
/// the origin resolver's callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedAnswer {
    pub result: Bytes,
    pub expires_at: u64,
    pub signature: Bytes,
}

impl SignedAnswer {
    /// Digest the origin contract recomputes before recovering the signer:
    /// `keccak256(0x1900 ‖ sender ‖ expires ‖ keccak256(request) ‖ keccak256(result))`.
    pub fn digest(sender: Address, expires_at: u64, request: &[u8], result: &[u8]) -> B256 {
        let mut buf = Vec::with_capacity(2 + 20 + 8 + 32 + 32);
        buf.extend_from_slice(&SIGNATURE_TAG);
        buf.extend_from_slice(sender.as_slice());
        buf.extend_from_slice(&expires_at.to_be_bytes());
        buf.extend_from_slice(keccak256(request).as_slice());
        buf.extend_from_slice(keccak256(result).as_slice());
        keccak256(buf)
    }

    /// `abi.encode(bytes result, uint64 expires, bytes sig)`.
    pub fn abi_encode(&self) -> Bytes {
        (self.result.clone(), self.expires_at, self.signature.clone())
            .abi_encode_params()
            .into()
    }

    pub fn abi_decode(data: &[u8]) -> Result<Self, DomainError> {
        let (result, expires_at, signature) = <(Bytes, u64, Bytes)>::abi_decode_params(data)
            .map_err(|e| {
                DomainError::InvalidRequest(format!("signed answer is not ABI-encoded: {}", e))
            })?;
        Ok(Self {
            result,
            expires_at,
            signature,
        })
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }
}
