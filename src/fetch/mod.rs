//! Page retrieval
//!
//! The extraction core only needs the status and body of one page; this
//! module provides the trait it fetches through and the HTTP implementation.

pub mod client;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::PageResponse;

pub use client::{FetchConfig, HttpFetcher};

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url`, returning whatever status the server answered with.
    ///
    /// Transport failures are reported as `FetchFailure` without a status.
    async fn fetch(&self, url: &str) -> Result<PageResponse>;
}
