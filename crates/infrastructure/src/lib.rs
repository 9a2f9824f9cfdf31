pub mod chain;
pub mod database;
pub mod gateway_client;
pub mod repositories;
pub mod signing;
