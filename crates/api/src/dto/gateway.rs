use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayRequest {
    pub sender: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayResponse {
    /// `abi.encode(bytes result, uint64 expires, bytes sig)`, 0x-prefixed.
    pub data: String,
}
