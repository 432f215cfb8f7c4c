// Library root: re-exports all modules so integration tests and the CLI can
// access the crate's public API.

pub mod config;
pub mod draft;
pub mod engine;
pub mod request;
pub mod valuation;

pub use config::EngineConfig;
pub use engine::DraftAssistant;
pub use request::{DraftRequest, DraftResponse, RequestError, ScoringType};
pub use valuation::catalog::{Catalog, CatalogPlayer, load_catalog};
