//! The inner `addr` query carried inside `resolve(bytes name, bytes data)`.

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;

use crate::abi::{IAddrResolver, IAddressResolver, COIN_TYPE_ETH};
use crate::dns_name::namehash;
use crate::errors::DomainError;

/// Address queries the gateway answers. Text records and other coin types
/// are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrQuery {
    /// `addr(bytes32)`
    Addr { node: B256 },
    /// `addr(bytes32,uint256)` with coin type 60.
    MultichainAddr { node: B256 },
}

impl AddrQuery {
    pub fn for_name(name: &str) -> Self {
        AddrQuery::Addr {
            node: namehash(name),
        }
    }

    pub fn parse(data: &[u8]) -> Result<Self, DomainError> {
        let Some(selector) = data.get(..4) else {
            return Err(DomainError::InvalidRequest(format!(
                "inner call is {} bytes, too short for a selector",
                data.len()
            )));
        };

        if selector == IAddrResolver::addrCall::SELECTOR {
            let call = IAddrResolver::addrCall::abi_decode(data).map_err(|e| {
                DomainError::InvalidRequest(format!("malformed addr(bytes32) call: {}", e))
            })?;
            return Ok(AddrQuery::Addr { node: call.node });
        }

        if selector == IAddressResolver::addrCall::SELECTOR {
            let call = IAddressResolver::addrCall::abi_decode(data).map_err(|e| {
                DomainError::InvalidRequest(format!("malformed addr(bytes32,uint256) call: {}", e))
            })?;
            if call.coinType != U256::from(COIN_TYPE_ETH) {
                return Err(DomainError::InvalidRequest(format!(
                    "unsupported coin type {}",
                    call.coinType
                )));
            }
            return Ok(AddrQuery::MultichainAddr { node: call.node });
        }

        Err(DomainError::InvalidRequest(format!(
            "unsupported resolver function 0x{}",
            alloy_primitives::hex::encode(selector)
        )))
    }

    pub fn node(&self) -> B256 {
        match self {
            AddrQuery::Addr { node } | AddrQuery::MultichainAddr { node } => *node,
        }
    }

    pub fn abi_encode(&self) -> Bytes {
        match *self {
            AddrQuery::Addr { node } => IAddrResolver::addrCall { node }.abi_encode().into(),
            AddrQuery::MultichainAddr { node } => IAddressResolver::addrCall {
                node,
                coinType: U256::from(COIN_TYPE_ETH),
            }
            .abi_encode()
            .into(),
        }
    }

    /// Decodes the ABI-encoded return value of this query. An unset record
    /// decodes to the zero address.
    pub fn decode_answer(&self, result: &[u8]) -> Result<Address, DomainError> {
        match self {
            AddrQuery::Addr { .. } => IAddrResolver::addrCall::abi_decode_returns(result)
                .map_err(|e| {
                    DomainError::ResolutionFailed(format!("undecodable addr answer: {}", e))
                }),
            AddrQuery::MultichainAddr { .. } => {
                let raw = IAddressResolver::addrCall::abi_decode_returns(result).map_err(|e| {
                    DomainError::ResolutionFailed(format!("undecodable addr answer: {}", e))
                })?;
                match raw.len() {
                    0 => Ok(Address::ZERO),
                    20 => Ok(Address::from_slice(&raw)),
                    n => Err(DomainError::ResolutionFailed(format!(
                        "address answer is {} bytes, expected 20",
                        n
                    ))),
                }
            }
        }
    }
}
