use alloy::network::EthereumWallet;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::reqwest::Url;
use alloy::transports::{RpcError, TransportError};
use namegate_domain::config::RpcConfig;
use namegate_domain::{Bytes, DomainError};
use tracing::error;

/// Builds a read-only JSON-RPC provider whose HTTP client enforces the
/// configured connect and request timeouts.
pub fn connect(rpc_url: &str, cfg: &RpcConfig) -> Result<DynProvider, DomainError> {
    let client = rpc_client(rpc_url, cfg)?;
    Ok(ProviderBuilder::default().connect_client(client).erased())
}

/// Same as [`connect`], with a wallet layer that signs outgoing transactions.
pub fn connect_with_wallet(
    rpc_url: &str,
    cfg: &RpcConfig,
    wallet: EthereumWallet,
) -> Result<DynProvider, DomainError> {
    let client = rpc_client(rpc_url, cfg)?;
    Ok(ProviderBuilder::default()
        .wallet(wallet)
        .connect_client(client)
        .erased())
}

fn rpc_client(rpc_url: &str, cfg: &RpcConfig) -> Result<RpcClient, DomainError> {
    let url = rpc_url.parse::<Url>().map_err(|e| {
        error!(rpc_url, error = %e, "Invalid RPC URL");
        DomainError::ConfigError(format!("invalid RPC URL '{}': {}", rpc_url, e))
    })?;

    let http_client = alloy::transports::http::reqwest::Client::builder()
        .connect_timeout(cfg.connect_timeout())
        .timeout(cfg.timeout())
        .build()
        .map_err(|e| {
            error!(error = %e, "HTTP client build failed");
            DomainError::ConfigError(format!("HTTP client initialization failed: {}", e))
        })?;

    Ok(RpcClient::builder().http_with_client(http_client, url))
}

/// Whether an RPC failure happened on the way to the node rather than inside
/// the EVM.
pub fn is_transport_failure(err: &TransportError) -> bool {
    match err {
        RpcError::Transport(_) => return true,
        // Node answered; its message text says nothing about the transport.
        RpcError::ErrorResp(_) => return false,
        _ => {}
    }
    let err_str = format!("{:?}", err);
    err_str.contains("Connection refused")
        || err_str.contains("Connection reset")
        || err_str.contains("No route to host")
        || err_str.contains("timeout")
        || err_str.contains("Timeout")
        || err_str.contains("dns error")
}

/// Maps a failed read call: transport problems become `ChainUnavailable`
/// (retried), everything else `ResolutionFailed`.
pub fn categorize_call_error(context: &str, err: &TransportError) -> DomainError {
    if is_transport_failure(err) {
        error!(context, error = %err, "RPC connection error");
        DomainError::ChainUnavailable(format!("{}: {}", context, err))
    } else {
        error!(context, error = %err, "Contract call failed");
        DomainError::ResolutionFailed(format!("{}: {}", context, err))
    }
}

/// Revert payload carried by a JSON-RPC error response, if any.
pub fn revert_data(err: &TransportError) -> Option<Bytes> {
    err.as_error_resp().and_then(|payload| payload.as_revert_data())
}

/// Human-readable reason for a reverted simulation: the decoded
/// `Error(string)` payload when present, else the node's message.
pub fn revert_reason(err: &TransportError) -> String {
    if let Some(reason) = revert_data(err)
        .as_deref()
        .and_then(|data| alloy::sol_types::decode_revert_reason(data))
    {
        return reason;
    }
    match err.as_error_resp() {
        Some(payload) => payload.message.to_string(),
        None => err.to_string(),
    }
}
