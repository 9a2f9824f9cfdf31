use async_trait::async_trait;
use namegate_application::ports::GatewayClient;
use namegate_domain::offchain::expand_gateway_url;
use namegate_domain::{Address, Bytes, DomainError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

#[derive(Serialize)]
struct GatewayRequest<'a> {
    sender: String,
    data: &'a Bytes,
}

#[derive(Deserialize)]
struct GatewayReply {
    data: Bytes,
}

/// EIP-3668 gateway client: `GET` when the URL template carries `{data}`,
/// JSON `POST {sender, data}` otherwise.
pub struct HttpGatewayClient {
    client: reqwest::Client,
}

impl HttpGatewayClient {
    pub fn new(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::ConfigError(format!("HTTP client build failed: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl GatewayClient for HttpGatewayClient {
    #[instrument(skip(self, call_data), fields(sender = %sender))]
    async fn fetch(
        &self,
        url_template: &str,
        sender: Address,
        call_data: &Bytes,
    ) -> Result<Bytes, DomainError> {
        let (url, is_get) = expand_gateway_url(url_template, sender, call_data);

        let request = if is_get {
            self.client.get(&url)
        } else {
            self.client.post(&url).json(&GatewayRequest {
                sender: format!("{:#x}", sender),
                data: call_data,
            })
        };

        let response = request.send().await.map_err(|e| {
            warn!(url = %url_template, error = %e, "Gateway request failed");
            DomainError::GatewayUnreachable(format!("{}: {}", url_template, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url_template, status = %status, "Gateway answered with an error status");
            return Err(DomainError::GatewayUnreachable(format!(
                "{}: HTTP {}",
                url_template, status
            )));
        }

        let reply: GatewayReply = response.json().await.map_err(|e| {
            warn!(url = %url_template, error = %e, "Gateway reply is not a data object");
            DomainError::GatewayUnreachable(format!("{}: invalid reply: {}", url_template, e))
        })?;

        debug!(url = %url_template, len = reply.data.len(), "Gateway answered");
        Ok(reply.data)
    }
}
