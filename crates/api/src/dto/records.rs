use namegate_domain::{DomainError, RegistrationRequest};
use serde::{Deserialize, Serialize};

use crate::utils::{parse_address, parse_hex_bytes, parse_name};

/// Body shared by `/api/ens-register` and `/api/ens-sync`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordRequest {
    pub name: String,
    pub address: String,
    pub label: Option<String>,
    pub signature: Option<String>,
}

impl RecordRequest {
    pub fn into_domain(self) -> Result<RegistrationRequest, DomainError> {
        let signature = match self.signature.as_deref() {
            Some(sig) if !sig.trim().is_empty() => Some(parse_hex_bytes("signature", sig)?),
            _ => None,
        };
        Ok(RegistrationRequest {
            name: parse_name(&self.name)?,
            address: parse_address("address", &self.address)?,
            label: self.label.filter(|l| !l.trim().is_empty()),
            signature,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    pub name: Option<String>,
}
