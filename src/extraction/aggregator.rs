//! Public extraction entry points
//!
//! Fetches the page, runs both scans and merges what they find.

use log::debug;

use crate::core::error::{LinkCollectError, Result};
use crate::core::types::{LinkSet, PageResponse, ScopeMode};
use crate::extraction::normalizer::origin_of;
use crate::extraction::pattern::LinkPattern;
use crate::extraction::pipeline::Pipeline;
use crate::extraction::{tag_scan, text_scan};
use crate::fetch::PageFetcher;
use crate::reporting::logging;

/// Unrestricted extraction from an already fetched page.
pub fn extract_all_links(page: &PageResponse, pattern: &LinkPattern) -> Result<LinkSet> {
    extract(page, pattern, ScopeMode::Unrestricted)
}

/// Domain-scoped extraction from an already fetched page.
pub fn extract_links_with_main_url(page: &PageResponse, pattern: &LinkPattern) -> Result<LinkSet> {
    extract(page, pattern, ScopeMode::DomainScoped)
}

/// Union of the text scan and tag scan of `page`.
pub fn extract(page: &PageResponse, pattern: &LinkPattern, mode: ScopeMode) -> Result<LinkSet> {
    let origin = origin_of(&page.url)?;
    debug!("Scanning {} for '{}' ({mode})", page.url, pattern.as_str());
    let pipeline = Pipeline::new(&origin, pattern);

    let mut links = text_scan::scan_text(&page.body, &pipeline, mode)?;
    let text_count = links.len();

    let tag_links = tag_scan::scan_tags(&page.document(), &pipeline);
    let tag_count = tag_links.len();

    links.merge(tag_links);
    logging::log_scan_counts(text_count, tag_count, links.len());

    Ok(links)
}

/// Fetches one page and extracts the links matching a pattern from it.
#[derive(Debug)]
pub struct LinkCollector<F> {
    fetcher: F,
}

impl<F: PageFetcher> LinkCollector<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Links matching `pattern` anywhere in their full URL.
    pub async fn collect_all_links(&self, url: &str, pattern: &str) -> Result<LinkSet> {
        self.collect(url, pattern, ScopeMode::Unrestricted).await
    }

    /// Links matching `pattern` with the page origin stripped, plus the
    /// scans anchored on the page's own host.
    pub async fn collect_links_with_main_url(&self, url: &str, pattern: &str) -> Result<LinkSet> {
        self.collect(url, pattern, ScopeMode::DomainScoped).await
    }

    pub async fn collect(&self, url: &str, pattern: &str, mode: ScopeMode) -> Result<LinkSet> {
        let pattern = LinkPattern::new(pattern)?;
        origin_of(url)?;

        let page = self.fetch_page(url).await?;
        let links = extract(&page, &pattern, mode)?;
        logging::log_extraction_complete(&page.url, mode, links.len());

        Ok(links)
    }

    async fn fetch_page(&self, url: &str) -> Result<PageResponse> {
        logging::log_fetch(url);
        let page = self.fetcher.fetch(url).await?;

        if !page.is_success() {
            return Err(LinkCollectError::FetchFailure {
                url: url.to_string(),
                status: Some(page.status),
                reason: "non-success status".to_string(),
            });
        }

        Ok(page)
    }
}
