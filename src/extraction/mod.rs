//! Link extraction
//!
//! Turns one fetched page into the set of absolute links matching a
//! pattern. Two scans feed the same candidate pipeline: a regex scan over
//! the raw body text and a scan of link-bearing tag attributes in the
//! parsed document.

pub mod aggregator;
pub mod normalizer;
pub mod pattern;
pub mod pipeline;
pub mod tag_scan;
pub mod text_scan;

pub use aggregator::{LinkCollector, extract, extract_all_links, extract_links_with_main_url};
pub use normalizer::{Stripped, origin_of, resolve, strip_origin};
pub use pattern::{LinkPattern, filter, match_prefix};
pub use pipeline::{MatchStyle, Pipeline};
pub use tag_scan::scan_tags;
pub use text_scan::scan_text;
