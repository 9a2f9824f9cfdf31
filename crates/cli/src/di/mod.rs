mod chains;
mod jobs;
mod repositories;
mod use_cases;

pub use chains::{fallback_resolver, Chains};
pub use jobs::build_jobs;
pub use repositories::Repositories;
pub use use_cases::UseCases;
