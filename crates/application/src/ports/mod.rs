mod answer_signer;
mod cross_chain_resolver;
mod gateway_client;
mod origin_resolver;
mod record_repository;
mod registrar;
mod relay_chain;

pub use answer_signer::AnswerSigner;
pub use cross_chain_resolver::CrossChainResolver;
pub use gateway_client::GatewayClient;
pub use origin_resolver::{OriginResolver, OriginResponse};
pub use record_repository::RecordRepository;
pub use registrar::Registrar;
pub use relay_chain::RelayChain;
