pub mod gateway;
pub mod health;
pub mod records;
pub mod relay;
