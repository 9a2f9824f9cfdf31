use namegate_application::ports::{AnswerSigner, RelayChain};
use namegate_application::use_cases::FallbackResolverUseCase;
use namegate_domain::config::ConfigError;
use namegate_domain::Config;
use namegate_infrastructure::chain::{AlloyOriginResolver, AlloyRegistryClient, AlloyRelayChain};
use namegate_infrastructure::gateway_client::HttpGatewayClient;
use namegate_infrastructure::signing::{parse_private_key, LocalAnswerSigner};
use std::sync::Arc;
use tracing::info;

/// Chain clients and keys the server needs. Every one of them is required.
pub struct Chains {
    pub registry: Arc<AlloyRegistryClient>,
    pub relay: Arc<AlloyRelayChain>,
    pub gateway_signer: Arc<LocalAnswerSigner>,
}

impl Chains {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let gateway_key = config
            .gateway
            .signing_key
            .as_deref()
            .ok_or(ConfigError::Missing("gateway.signing_key"))?;
        let relayer_key = config
            .relayer
            .private_key
            .as_deref()
            .ok_or(ConfigError::Missing("relayer.private_key"))?;
        let registry_address = config
            .l2
            .registry_address
            .ok_or(ConfigError::Missing("l2.registry_address"))?;

        let gateway_signer = LocalAnswerSigner::from_hex(gateway_key)?;
        let relayer = parse_private_key(relayer_key)?;

        let registry = AlloyRegistryClient::connect(&config.l2.rpc_url, registry_address, &config.rpc)?;
        let relay = AlloyRelayChain::connect(
            &config.l2.rpc_url,
            config.l2.chain_id,
            relayer,
            &config.rpc,
        )?;

        info!(
            l2_rpc = %config.l2.rpc_url,
            chain_id = config.l2.chain_id,
            registry = %registry_address,
            gateway_signer = %gateway_signer.address(),
            relayer = %relay.relayer_address(),
            "Chain clients ready"
        );

        Ok(Self {
            registry: Arc::new(registry),
            relay: Arc::new(relay),
            gateway_signer: Arc::new(gateway_signer),
        })
    }
}

/// Client-side resolver for the `resolve` command. Only chain 1 settings are
/// needed.
pub fn fallback_resolver(config: &Config) -> anyhow::Result<FallbackResolverUseCase> {
    let resolver_address = config
        .origin
        .resolver_address
        .ok_or(ConfigError::Missing("origin.resolver_address"))?;

    let origin = AlloyOriginResolver::connect(&config.origin.rpc_url, resolver_address, &config.rpc)?;
    let gateway = HttpGatewayClient::new(config.gateway.fetch_timeout())?;

    Ok(FallbackResolverUseCase::new(
        Arc::new(origin),
        Arc::new(gateway),
        config.gateway.default_url.clone(),
    ))
}
