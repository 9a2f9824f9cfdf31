use namegate_domain::dns_name::encode;
use namegate_domain::{AddrQuery, Address, Bytes, DomainError, OffchainLookup};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::{GatewayClient, OriginResolver, OriginResponse};

/// Wallet-side resolution of a name through the origin resolver, following
/// an `OffchainLookup` revert to the gateway when the contract asks for one.
pub struct FallbackResolverUseCase {
    origin: Arc<dyn OriginResolver>,
    gateway: Arc<dyn GatewayClient>,
    default_url: Option<String>,
}

impl FallbackResolverUseCase {
    pub fn new(
        origin: Arc<dyn OriginResolver>,
        gateway: Arc<dyn GatewayClient>,
        default_url: Option<String>,
    ) -> Self {
        Self {
            origin,
            gateway,
            default_url,
        }
    }

    /// `Ok(None)` for unset names and for any chain or gateway failure.
    /// Only malformed names are errors.
    pub async fn resolve_address(&self, name: &str) -> Result<Option<Address>, DomainError> {
        match self.try_resolve_address(name).await {
            Ok(address) => Ok(address),
            Err(e @ DomainError::MalformedEncoding(_)) => Err(e),
            Err(e) => {
                warn!(name = %name, error = %e, "Name resolution failed");
                Ok(None)
            }
        }
    }

    /// Like [`resolve_address`](Self::resolve_address) but surfaces why
    /// resolution failed.
    #[instrument(skip(self))]
    pub async fn try_resolve_address(&self, name: &str) -> Result<Option<Address>, DomainError> {
        let encoded = encode(name)?;
        let query = AddrQuery::for_name(name);
        let inner = query.abi_encode();

        let result = match self.origin.resolve(&encoded, &inner).await? {
            OriginResponse::Answer(result) => {
                debug!(name = %name, "Origin resolver answered on-chain");
                result
            }
            OriginResponse::Offchain(lookup) => self.follow_lookup(name, &lookup).await?,
        };

        let address = query.decode_answer(&result)?;
        Ok((address != Address::ZERO).then_some(address))
    }

    async fn follow_lookup(&self, name: &str, lookup: &OffchainLookup) -> Result<Bytes, DomainError> {
        let origin = self.origin.resolver_address();
        if lookup.sender != origin {
            return Err(DomainError::ResolutionFailed(format!(
                "OffchainLookup sender {} is not the resolver {}",
                lookup.sender, origin
            )));
        }

        let candidates = lookup
            .urls
            .iter()
            .map(String::as_str)
            .chain(self.default_url.as_deref());

        let mut last_error = None;
        for url in candidates {
            match self.gateway.fetch(url, lookup.sender, &lookup.call_data).await {
                Ok(response) => {
                    debug!(name = %name, url = %url, "Gateway answered");
                    return self.origin.callback(lookup, &response).await;
                }
                Err(e) => {
                    warn!(name = %name, url = %url, error = %e, "Gateway candidate failed");
                    last_error = Some(e);
                }
            }
        }

        Err(match last_error {
            Some(DomainError::GatewayUnreachable(reason)) => DomainError::GatewayUnreachable(reason),
            Some(other) => DomainError::GatewayUnreachable(other.to_string()),
            None => DomainError::GatewayUnreachable(format!(
                "no gateway URL available for {}",
                name
            )),
        })
    }
}
