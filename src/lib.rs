// Core modules
pub mod core;

// Functional modules
pub mod config;
pub mod extraction;
pub mod fetch;
pub mod reporting;
pub mod storage;
pub mod ui;

// Re-export commonly used items for convenience
pub use config::{CliConfig, Config};
pub use crate::core::{LinkCollectError, LinkSet, Origin, PageResponse, Result, ScopeMode};
pub use extraction::{LinkCollector, LinkPattern};
pub use fetch::{FetchConfig, HttpFetcher, PageFetcher};
pub use storage::LinkStore;
