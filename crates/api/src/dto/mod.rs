pub mod gateway;
pub mod records;
pub mod relay;

pub use gateway::{GatewayRequest, GatewayResponse};
pub use records::{LookupResponse, RecordRequest, RecordResponse};
pub use relay::{RelayRequest, RelayResponse};
