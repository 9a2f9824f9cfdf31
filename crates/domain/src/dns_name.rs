//! DNS wire-format names as used by ENSIP-10 `resolve(bytes name, bytes data)`.
//!
//! A dotted name is packed as a sequence of `(length, label bytes)` pairs
//! terminated by a zero length byte: `alice.eth` becomes
//! `05 'alice' 03 'eth' 00`. Decoding parses untrusted request bodies, so every
//! malformed input is reported as [`DomainError::MalformedEncoding`] and never
//! panics.

use alloy_primitives::{keccak256, B256};
use std::fmt;

use crate::errors::DomainError;

pub const MAX_LABEL_LEN: usize = 63;

/// A validated, canonical wire-format name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedName(Vec<u8>);

impl EncodedName {
    /// Validates raw wire bytes and keeps the canonical form (everything up to
    /// and including the first zero length byte).
    pub fn from_wire(wire: &[u8]) -> Result<Self, DomainError> {
        encode(&decode(wire)?)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Dotted form. Cannot fail: the bytes were validated on construction.
    pub fn to_dotted(&self) -> String {
        decode(&self.0).unwrap_or_default()
    }

    /// Leftmost label, e.g. `alice` for `alice.lisk.eth`.
    pub fn first_label(&self) -> Option<&str> {
        let len = *self.0.first()? as usize;
        if len == 0 {
            return None;
        }
        std::str::from_utf8(self.0.get(1..1 + len)?).ok()
    }

    pub fn is_root(&self) -> bool {
        self.0 == [0]
    }
}

impl fmt::Display for EncodedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dotted())
    }
}

/// Packs a dotted name into wire format.
///
/// The empty string is the root name and encodes to a single zero byte.
pub fn encode(name: &str) -> Result<EncodedName, DomainError> {
    if name.is_empty() {
        return Ok(EncodedName(vec![0]));
    }

    let mut wire = Vec::with_capacity(name.len() + 2);
    for label in name.split('.') {
        if label.is_empty() {
            return Err(DomainError::MalformedEncoding(format!(
                "empty label in '{}'",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::MalformedEncoding(format!(
                "label '{}' is {} bytes, maximum is {}",
                label,
                label.len(),
                MAX_LABEL_LEN
            )));
        }
        wire.push(label.len() as u8);
        wire.extend_from_slice(label.as_bytes());
    }
    wire.push(0);

    Ok(EncodedName(wire))
}

/// Unpacks wire format into a dotted name without a trailing dot.
///
/// Parsing stops at the first zero length byte; bytes after it are ignored.
pub fn decode(wire: &[u8]) -> Result<String, DomainError> {
    let mut name = String::with_capacity(wire.len());
    let mut pos = 0usize;

    loop {
        let Some(&len) = wire.get(pos) else {
            return Err(DomainError::MalformedEncoding(format!(
                "missing zero-length terminator after {} bytes",
                wire.len()
            )));
        };
        pos += 1;

        if len == 0 {
            break;
        }

        let len = len as usize;
        // Also rejects 0xC0 compression pointers, which are never valid here.
        if len > MAX_LABEL_LEN {
            return Err(DomainError::MalformedEncoding(format!(
                "length byte {} at offset {} exceeds {}",
                len,
                pos - 1,
                MAX_LABEL_LEN
            )));
        }

        let end = pos + len;
        let Some(raw) = wire.get(pos..end) else {
            return Err(DomainError::MalformedEncoding(format!(
                "label at offset {} overruns buffer of {} bytes",
                pos - 1,
                wire.len()
            )));
        };
        let label = std::str::from_utf8(raw).map_err(|_| {
            DomainError::MalformedEncoding(format!("label at offset {} is not UTF-8", pos - 1))
        })?;
        if label.contains('.') {
            return Err(DomainError::MalformedEncoding(format!(
                "label '{}' contains a dot",
                label
            )));
        }

        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(label);
        pos = end;
    }

    Ok(name)
}

/// EIP-137 namehash of a dotted name.
pub fn namehash(name: &str) -> B256 {
    let mut node = B256::ZERO;
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        let label_hash = keccak256(label.as_bytes());
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(node.as_slice());
        buf[32..].copy_from_slice(label_hash.as_slice());
        node = keccak256(buf);
    }
    node
}
