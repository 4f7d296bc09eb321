use rustc_hash::FxHashSet;
use scraper::Html;
use serde::Serialize;
use url::Url;

use std::fmt;

/// The `scheme://host[:port]` part of a URL, used as the resolution base.
///
/// Built through `extraction::normalizer::origin_of`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    base: Url,
    text: String,
}

impl Origin {
    /// `None` when the parts do not form a URL with a host
    pub(crate) fn from_parts(scheme: &str, authority: &str) -> Option<Self> {
        let text = format!("{scheme}://{authority}");
        let base = Url::parse(&text).ok()?;
        if base.host_str().is_none_or(str::is_empty) {
            return None;
        }
        Some(Self { base, text })
    }

    pub fn scheme(&self) -> &str {
        self.base.scheme()
    }

    /// Host plus explicit port, e.g. `example.com:8080`
    pub fn authority(&self) -> &str {
        &self.text[self.scheme().len() + 3..]
    }

    /// Root URL (`scheme://host[:port]/`) that references are joined onto
    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A fetched page as the extractors see it.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// Final request URL after redirects
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl PageResponse {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as an HTML document
    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// How candidates are presented to the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScopeMode {
    /// The page origin is stripped before matching, so patterns see host-relative paths
    #[default]
    DomainScoped,
    /// Patterns see the full absolute URL
    Unrestricted,
}

impl ScopeMode {
    pub fn from_domain_flag(include_domain: bool) -> Self {
        if include_domain {
            ScopeMode::Unrestricted
        } else {
            ScopeMode::DomainScoped
        }
    }
}

impl fmt::Display for ScopeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeMode::DomainScoped => write!(f, "domain-scoped"),
            ScopeMode::Unrestricted => write!(f, "unrestricted"),
        }
    }
}

/// Deduplicated absolute links. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    links: FxHashSet<String>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the link was already present
    pub fn insert(&mut self, link: impl Into<String>) -> bool {
        self.links.insert(link.into())
    }

    pub fn merge(&mut self, other: LinkSet) {
        self.links.extend(other.links);
    }

    pub fn contains(&self, link: &str) -> bool {
        self.links.contains(link)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.links.iter()
    }

    /// Sorted copy of the links, for writing and display
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut links: Vec<String> = self.links.iter().cloned().collect();
        links.sort_unstable();
        links
    }

    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut links: Vec<String> = self.links.into_iter().collect();
        links.sort_unstable();
        links
    }
}

impl FromIterator<String> for LinkSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for LinkSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.links.extend(iter);
    }
}

impl IntoIterator for LinkSet {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_origin_display() {
        let origin = Origin::from_parts("https", "example.com:8080").unwrap();
        assert_eq!(origin.to_string(), "https://example.com:8080");
        assert_eq!(origin.as_str(), "https://example.com:8080");
        assert_eq!(origin.scheme(), "https");
        assert_eq!(origin.authority(), "example.com:8080");
        assert_eq!(origin.base().as_str(), "https://example.com:8080/");
    }

    #[test]
    fn test_origin__when_host_missing__is_none() {
        assert!(Origin::from_parts("https", "").is_none());
        assert!(Origin::from_parts("https", "exa mple.com").is_none());
    }

    #[test]
    fn test_page_response__when_2xx__is_success() {
        assert!(PageResponse::new("https://a.com/", 200, "").is_success());
        assert!(PageResponse::new("https://a.com/", 204, "").is_success());
        assert!(!PageResponse::new("https://a.com/", 301, "").is_success());
        assert!(!PageResponse::new("https://a.com/", 404, "").is_success());
    }

    #[test]
    fn test_scope_mode_from_domain_flag() {
        assert_eq!(ScopeMode::from_domain_flag(false), ScopeMode::DomainScoped);
        assert_eq!(ScopeMode::from_domain_flag(true), ScopeMode::Unrestricted);
        assert_eq!(ScopeMode::default(), ScopeMode::DomainScoped);
    }

    #[test]
    fn test_link_set__when_duplicates_inserted__keeps_one() {
        let mut set = LinkSet::new();
        assert!(set.insert("https://a.com/x"));
        assert!(!set.insert("https://a.com/x"));
        // Trailing slash is a different string
        assert!(set.insert("https://a.com/x/"));

        assert_eq!(set.len(), 2);
        assert!(set.contains("https://a.com/x"));
    }

    #[test]
    fn test_link_set_merge_and_sorted_output() {
        let mut left: LinkSet = vec!["https://a.com/b".to_string(), "https://a.com/a".to_string()]
            .into_iter()
            .collect();
        let right: LinkSet = vec!["https://a.com/a".to_string(), "https://a.com/c".to_string()]
            .into_iter()
            .collect();

        left.merge(right);

        assert_eq!(
            left.into_sorted_vec(),
            vec!["https://a.com/a", "https://a.com/b", "https://a.com/c"]
        );
    }

    #[test]
    fn test_link_set_equality_ignores_insertion_order() {
        let mut first = LinkSet::new();
        first.insert("https://a.com/1");
        first.insert("https://a.com/2");

        let mut second = LinkSet::new();
        second.insert("https://a.com/2");
        second.insert("https://a.com/1");

        assert_eq!(first, second);
    }
}
