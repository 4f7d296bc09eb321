//! Link attributes of the parsed document

use log::{debug, warn};
use scraper::{Html, Selector};

use crate::core::constants::link_tags;
use crate::core::types::{LinkSet, ScopeMode};
use crate::extraction::pipeline::{MatchStyle, Pipeline};

/// Collect link attributes from the tag table and keep the values whose
/// host-relative form matches the pattern from its first character.
pub fn scan_tags(document: &Html, pipeline: &Pipeline<'_>) -> LinkSet {
    let candidates = tag_candidates(document);
    debug!("Tag scan found {} attribute value(s)", candidates.len());

    pipeline.run(candidates, ScopeMode::DomainScoped, MatchStyle::Prefix)
}

/// Values of every present link attribute on every element of the tag table
pub fn tag_candidates(document: &Html) -> Vec<&str> {
    let mut candidates = Vec::new();

    for (tag, attributes) in link_tags::TABLE {
        let selector = match Selector::parse(tag) {
            Ok(selector) => selector,
            Err(err) => {
                warn!("Skipping tag '{tag}': {err}");
                continue;
            }
        };

        for element in document.select(&selector) {
            candidates.extend(
                attributes
                    .iter()
                    .filter_map(|attribute| element.value().attr(attribute)),
            );
        }
    }

    candidates
}
