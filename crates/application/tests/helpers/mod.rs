#![allow(unused_imports)]

mod mock_chain;
mod mock_repositories;

pub use mock_chain::*;
pub use mock_repositories::*;
