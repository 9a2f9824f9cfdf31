use async_trait::async_trait;
use namegate_domain::{Address, Bytes, DomainError};

#[async_trait]
pub trait GatewayClient: Send + Sync {
    /// Queries one EIP-3668 URL template and returns the `data` field of the
    /// gateway's reply. Any failure is `GatewayUnreachable`.
    async fn fetch(
        &self,
        url_template: &str,
        sender: Address,
        call_data: &Bytes,
    ) -> Result<Bytes, DomainError>;
}
