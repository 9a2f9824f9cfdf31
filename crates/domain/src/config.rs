pub mod chains;
pub mod database;
pub mod errors;
pub mod gateway;
pub mod logging;
pub mod relayer;
pub mod root;
pub mod rpc;
pub mod server;

pub use chains::{L2Config, OriginConfig};
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use gateway::GatewayConfig;
pub use logging::LoggingConfig;
pub use relayer::RelayerConfig;
pub use root::{CliOverrides, Config, GATEWAY_KEY_ENV, RELAYER_KEY_ENV};
pub use rpc::RpcConfig;
pub use server::ServerConfig;
