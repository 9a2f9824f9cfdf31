use namegate_domain::{DomainError, MetaTxAuthorization};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::{parse_address, parse_amount, parse_hex_bytes};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    pub sender: String,
    pub receiver: String,
    pub amount: Value,
    pub signature: String,
    pub target_contract: Option<String>,
    pub nonce: Option<Value>,
}

impl RelayRequest {
    pub fn into_authorization(self) -> Result<MetaTxAuthorization, DomainError> {
        let target_contract = match self.target_contract.as_deref() {
            Some(target) if !target.trim().is_empty() => {
                Some(parse_address("targetContract", target)?)
            }
            _ => None,
        };
        let nonce = match &self.nonce {
            None | Some(Value::Null) => None,
            Some(nonce) => Some(parse_amount("nonce", nonce)?),
        };

        Ok(MetaTxAuthorization {
            sender: parse_address("sender", &self.sender)?,
            receiver: parse_address("receiver", &self.receiver)?,
            amount: parse_amount("amount", &self.amount)?,
            target_contract,
            nonce,
            signature: parse_hex_bytes("signature", &self.signature)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayResponse {
    pub tx_hash: String,
    pub success: bool,
    pub confirmed: bool,
}
