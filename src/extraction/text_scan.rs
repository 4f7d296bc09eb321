//! Regex scans over the raw response body
//!
//! These find references that never appear in a link attribute: URLs in
//! inline scripts, JSON blobs, CSS, comments and so on.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::scan_patterns;
use crate::core::error::{LinkCollectError, Result};
use crate::core::types::{LinkSet, Origin, ScopeMode};
use crate::extraction::normalizer::is_path_like;
use crate::extraction::pipeline::{MatchStyle, Pipeline};

static DOUBLE_QUOTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(scan_patterns::DOUBLE_QUOTED).expect("Failed to compile double quote pattern")
});

static SINGLE_QUOTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(scan_patterns::SINGLE_QUOTED).expect("Failed to compile single quote pattern")
});

static PROTOCOL_RELATIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(scan_patterns::PROTOCOL_RELATIVE)
        .expect("Failed to compile protocol-relative pattern")
});

static ABSOLUTE_SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(scan_patterns::ABSOLUTE_SCHEME).expect("Failed to compile absolute URL pattern")
});

/// Scan `body` and run the candidates through `pipeline` in `mode`.
pub fn scan_text(body: &str, pipeline: &Pipeline<'_>, mode: ScopeMode) -> Result<LinkSet> {
    let candidates = text_candidates(body, pipeline.origin(), mode)?;
    debug!("Text scan found {} candidate(s)", candidates.len());

    Ok(pipeline.run(candidates, mode, MatchStyle::Search))
}

/// Raw candidates from every text scan that applies to `mode`.
///
/// Domain-scoped scans add two passes anchored on the page's own host.
pub fn text_candidates<'b>(body: &'b str, origin: &Origin, mode: ScopeMode) -> Result<Vec<&'b str>> {
    let mut candidates = quoted_literals(body);
    candidates.extend(matches_of(&PROTOCOL_RELATIVE, body));
    candidates.extend(matches_of(&ABSOLUTE_SCHEME, body));

    if mode == ScopeMode::DomainScoped {
        for anchored in host_anchored_patterns(origin)? {
            candidates.extend(matches_of(&anchored, body));
        }
    }

    Ok(candidates)
}

/// Contents of quoted string literals that look like paths
fn quoted_literals(body: &str) -> Vec<&str> {
    [&*DOUBLE_QUOTED, &*SINGLE_QUOTED]
        .into_iter()
        .flat_map(|quoted| quoted.captures_iter(body))
        .filter_map(|caps| caps.get(1))
        .map(|literal| literal.as_str())
        .filter(|literal| is_path_like(literal))
        .collect()
}

fn matches_of<'b>(regex: &Regex, body: &'b str) -> Vec<&'b str> {
    regex.find_iter(body).map(|found| found.as_str()).collect()
}

fn host_anchored_patterns(origin: &Origin) -> Result<[Regex; 2]> {
    let host = regex::escape(origin.authority());
    let compile = |source: String| {
        Regex::new(&source).map_err(|err| LinkCollectError::InvalidPattern {
            pattern: source.clone(),
            source: Some(err),
        })
    };

    Ok([
        compile(format!("//{host}{}", scan_patterns::REFERENCE_TAIL))?,
        compile(format!("https?://{host}{}", scan_patterns::REFERENCE_TAIL))?,
    ])
}
