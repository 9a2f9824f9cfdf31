//! JSON-RPC adapters for the origin chain (CCIP-Read resolver) and chain 2
//! (registry, forwarder, relayer account).

pub mod origin;
pub mod registry;
pub mod relay;
pub mod rpc;

pub use origin::AlloyOriginResolver;
pub use registry::AlloyRegistryClient;
pub use relay::AlloyRelayChain;

use alloy::network::TransactionBuilder;
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::TransportError;
use namegate_domain::{Address, Bytes};

/// Read-only `eth_call` against `to` at the latest block.
pub(crate) async fn eth_call(
    provider: &DynProvider,
    to: Address,
    input: impl Into<Bytes>,
) -> Result<Bytes, TransportError> {
    let tx = TransactionRequest::default()
        .with_to(to)
        .with_input(input.into());
    provider.call(tx).await
}
