use alloy::providers::DynProvider;
use alloy::sol_types::{SolCall, SolError, SolValue};
use async_trait::async_trait;
use namegate_application::ports::{OriginResolver, OriginResponse};
use namegate_domain::abi::IExtendedResolver;
use namegate_domain::config::RpcConfig;
use namegate_domain::{Address, Bytes, DomainError, EncodedName, OffchainLookup};
use tracing::{debug, error, instrument};

use super::eth_call;
use super::rpc::{self, categorize_call_error, revert_data};

/// The ENSIP-10 resolver on the origin chain, queried the way a wallet does:
/// a plain `eth_call` that may revert with `OffchainLookup`.
pub struct AlloyOriginResolver {
    provider: DynProvider,
    resolver: Address,
}

impl AlloyOriginResolver {
    pub fn new(provider: DynProvider, resolver: Address) -> Self {
        Self { provider, resolver }
    }

    pub fn connect(rpc_url: &str, resolver: Address, cfg: &RpcConfig) -> Result<Self, DomainError> {
        Ok(Self::new(rpc::connect(rpc_url, cfg)?, resolver))
    }
}

#[async_trait]
impl OriginResolver for AlloyOriginResolver {
    fn resolver_address(&self) -> Address {
        self.resolver
    }

    #[instrument(skip(self, data), fields(name = %name, resolver = %self.resolver))]
    async fn resolve(
        &self,
        name: &EncodedName,
        data: &Bytes,
    ) -> Result<OriginResponse, DomainError> {
        let call = IExtendedResolver::resolveCall {
            name: Bytes::copy_from_slice(name.as_bytes()),
            data: data.clone(),
        };

        match eth_call(&self.provider, self.resolver, call.abi_encode()).await {
            Ok(output) => {
                let answer = IExtendedResolver::resolveCall::abi_decode_returns(&output)
                    .map_err(|e| {
                        error!(error = %e, "Origin resolver returned undecodable output");
                        DomainError::ResolutionFailed(format!("origin.resolve: {}", e))
                    })?;
                Ok(OriginResponse::Answer(answer))
            }
            Err(e) => {
                let lookup = revert_data(&e).and_then(|data| {
                    IExtendedResolver::OffchainLookup::abi_decode(&data).ok()
                });
                match lookup {
                    Some(lookup) => {
                        debug!(
                            sender = %lookup.sender,
                            urls = lookup.urls.len(),
                            "Origin resolver requested an off-chain lookup"
                        );
                        Ok(OriginResponse::Offchain(OffchainLookup::from(lookup)))
                    }
                    None => Err(categorize_call_error("origin.resolve", &e)),
                }
            }
        }
    }

    #[instrument(skip(self, lookup, response), fields(sender = %lookup.sender))]
    async fn callback(
        &self,
        lookup: &OffchainLookup,
        response: &Bytes,
    ) -> Result<Bytes, DomainError> {
        let mut input = lookup.callback_function.to_vec();
        input.extend_from_slice(
            &(response.clone(), lookup.extra_data.clone()).abi_encode_params(),
        );

        let output = eth_call(&self.provider, lookup.sender, input)
            .await
            .map_err(|e| categorize_call_error("origin.callback", &e))?;

        Bytes::abi_decode(&output).map_err(|e| {
            error!(error = %e, "Callback returned undecodable output");
            DomainError::ResolutionFailed(format!("origin.callback: {}", e))
        })
    }
}
