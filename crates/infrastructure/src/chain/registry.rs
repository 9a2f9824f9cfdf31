use alloy::providers::DynProvider;
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use namegate_application::ports::{CrossChainResolver, Registrar};
use namegate_domain::abi::IL2Registry;
use namegate_domain::config::RpcConfig;
use namegate_domain::{Address, Bytes, DomainError, EncodedName, B256, U256};
use tracing::{debug, error, instrument};

use super::eth_call;
use super::rpc::{self, categorize_call_error};

/// Read access to the chain-2 registry: ENSIP-10 `resolve` plus the
/// registrar views used to authorize registrations.
pub struct AlloyRegistryClient {
    provider: DynProvider,
    registry: Address,
}

impl AlloyRegistryClient {
    pub fn new(provider: DynProvider, registry: Address) -> Self {
        Self { provider, registry }
    }

    pub fn connect(rpc_url: &str, registry: Address, cfg: &RpcConfig) -> Result<Self, DomainError> {
        Ok(Self::new(rpc::connect(rpc_url, cfg)?, registry))
    }

    async fn call<C: SolCall>(&self, context: &str, call: C) -> Result<C::Return, DomainError> {
        let output = eth_call(&self.provider, self.registry, call.abi_encode())
            .await
            .map_err(|e| categorize_call_error(context, &e))?;

        C::abi_decode_returns(&output).map_err(|e| {
            error!(context, error = %e, "Registry returned undecodable output");
            DomainError::ResolutionFailed(format!("{}: {}", context, e))
        })
    }
}

#[async_trait]
impl CrossChainResolver for AlloyRegistryClient {
    #[instrument(skip(self, data), fields(name = %name, registry = %self.registry))]
    async fn resolve(&self, name: &EncodedName, data: &Bytes) -> Result<Bytes, DomainError> {
        let answer = self
            .call(
                "registry.resolve",
                IL2Registry::resolveCall {
                    name: Bytes::copy_from_slice(name.as_bytes()),
                    data: data.clone(),
                },
            )
            .await?;

        debug!(answer_len = answer.len(), "Registry answered");
        Ok(answer)
    }
}

#[async_trait]
impl Registrar for AlloyRegistryClient {
    fn registry_address(&self) -> Address {
        self.registry
    }

    #[instrument(skip(self))]
    async fn available(&self, label: &str) -> Result<bool, DomainError> {
        self.call(
            "registry.available",
            IL2Registry::availableCall {
                label: label.to_string(),
            },
        )
        .await
    }

    #[instrument(skip(self))]
    async fn registration_nonce(&self, owner: Address) -> Result<U256, DomainError> {
        self.call("registry.nonces", IL2Registry::noncesCall { owner })
            .await
    }

    #[instrument(skip(self))]
    async fn registration_hash(
        &self,
        label: &str,
        owner: Address,
        nonce: U256,
    ) -> Result<B256, DomainError> {
        self.call(
            "registry.registrationHash",
            IL2Registry::registrationHashCall {
                label: label.to_string(),
                owner,
                nonce,
            },
        )
        .await
    }
}
