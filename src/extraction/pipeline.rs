//! The resolve → strip → match → re-resolve routine shared by all scans

use log::trace;

use crate::core::error::Result;
use crate::core::types::{LinkSet, Origin, ScopeMode};
use crate::extraction::normalizer::{
    Stripped, has_explicit_host, is_path_like, resolve, strip_resolved,
};
use crate::extraction::pattern::LinkPattern;

/// How the pattern is applied to a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStyle {
    /// Unanchored search; capture groups pick parts of the candidate
    Search,
    /// Must match from the first character; the whole candidate is kept
    Prefix,
}

/// Resolution and matching context for one extraction call.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    origin: &'a Origin,
    pattern: &'a LinkPattern,
}

impl<'a> Pipeline<'a> {
    pub fn new(origin: &'a Origin, pattern: &'a LinkPattern) -> Self {
        Self { origin, pattern }
    }

    pub fn origin(&self) -> &'a Origin {
        self.origin
    }

    /// Run raw candidates through the pipeline.
    ///
    /// Candidates that cannot be resolved are dropped; they never fail the run.
    pub fn run<I, S>(&self, candidates: I, mode: ScopeMode, style: MatchStyle) -> LinkSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut links = LinkSet::new();
        for candidate in candidates {
            match self.process(candidate.as_ref(), mode, style) {
                Ok(found) => links.extend(found),
                Err(err) => trace!("Dropping candidate: {err}"),
            }
        }
        links
    }

    fn process(&self, candidate: &str, mode: ScopeMode, style: MatchStyle) -> Result<Vec<String>> {
        let absolute = resolve(self.origin, candidate)?;
        let subject = match mode {
            ScopeMode::DomainScoped => strip_resolved(self.origin, &absolute),
            ScopeMode::Unrestricted => Stripped {
                value: absolute.clone(),
                was_stripped: false,
            },
        };

        match style {
            MatchStyle::Prefix => {
                if self.pattern.match_prefix(&subject.value) {
                    Ok(vec![absolute])
                } else {
                    Ok(Vec::new())
                }
            }
            MatchStyle::Search => Ok(self
                .pattern
                .matches_in(&subject.value)
                .into_iter()
                .filter_map(|output| match self.link_for(output, &subject, &absolute) {
                    Ok(link) => Some(link),
                    Err(err) => {
                        trace!("Dropping match '{output}': {err}");
                        None
                    }
                })
                .collect()),
        }
    }

    /// Turn one pattern output back into an absolute link.
    ///
    /// References carrying a host, and paths cut from a host-relative subject,
    /// are resolved against the origin. Anything else (a captured slug, a
    /// host name) selects the candidate it was found in.
    fn link_for(&self, output: &str, subject: &Stripped, absolute: &str) -> Result<String> {
        if has_explicit_host(output) || (subject.was_stripped && is_path_like(output)) {
            resolve(self.origin, output)
        } else {
            Ok(absolute.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::extraction::normalizer::origin_of;

    fn run(
        pattern: &str,
        candidates: &[&str],
        mode: ScopeMode,
        style: MatchStyle,
    ) -> Vec<String> {
        let origin = origin_of("https://example.com/").unwrap();
        let pattern = LinkPattern::new(pattern).unwrap();
        Pipeline::new(&origin, &pattern)
            .run(candidates, mode, style)
            .into_sorted_vec()
    }

    #[test]
    fn test_search__when_captured_slug__keeps_candidate_link() {
        let links = run(
            r"blog/(post-\d+)",
            &["/blog/post-1", "https://example.com/blog/post-2"],
            ScopeMode::DomainScoped,
            MatchStyle::Search,
        );

        assert_eq!(
            links,
            vec![
                "https://example.com/blog/post-1",
                "https://example.com/blog/post-2"
            ]
        );
    }

    #[test]
    fn test_search__when_path_matched_in_stripped_subject__resolves_it() {
        let links = run(
            r"/blog/[^?]+",
            &["/blog/post-1?ref=home", "blog/post-2"],
            ScopeMode::DomainScoped,
            MatchStyle::Search,
        );

        assert_eq!(
            links,
            vec![
                "https://example.com/blog/post-1",
                "https://example.com/blog/post-2"
            ]
        );
    }

    #[test]
    fn test_search__when_unrestricted__matches_against_full_url() {
        let links = run(
            r"cdn\.example\.com",
            &["//cdn.example.com/x.png", "/local.png"],
            ScopeMode::Unrestricted,
            MatchStyle::Search,
        );

        assert_eq!(links, vec!["https://cdn.example.com/x.png"]);
    }

    #[test]
    fn test_search__when_domain_scoped__origin_is_invisible_to_pattern() {
        let links = run(
            r"example\.com",
            &["https://example.com/about", "https://other.org/example.com"],
            ScopeMode::DomainScoped,
            MatchStyle::Search,
        );

        assert_eq!(links, vec!["https://other.org/example.com"]);
    }

    #[test]
    fn test_search__when_output_is_absolute_url__uses_it() {
        let links = run(
            r"https://[^?]+",
            &["https://other.org/a?b=c"],
            ScopeMode::Unrestricted,
            MatchStyle::Search,
        );

        assert_eq!(links, vec!["https://other.org/a"]);
    }

    #[test]
    fn test_search__when_other_origin_path_output__keeps_candidate() {
        // Not stripped, so the cut path must not be re-rooted on the page origin
        let links = run(
            r"blog/.*",
            &["https://other.org/blog/x"],
            ScopeMode::DomainScoped,
            MatchStyle::Search,
        );

        assert_eq!(links, vec!["https://other.org/blog/x"]);
    }

    #[test]
    fn test_prefix__is_anchored_on_stripped_value() {
        let links = run(
            r"/blog",
            &["/blog/post-1", "https://example.com/blog/post-2", "/en/blog/post-3"],
            ScopeMode::DomainScoped,
            MatchStyle::Prefix,
        );

        assert_eq!(
            links,
            vec![
                "https://example.com/blog/post-1",
                "https://example.com/blog/post-2"
            ]
        );
    }

    #[test]
    fn test_run__when_candidate_unresolvable__drops_only_that_one() {
        let links = run(
            r".*",
            &["mailto:someone@example.com", "http://[::1", "/ok"],
            ScopeMode::DomainScoped,
            MatchStyle::Prefix,
        );

        assert_eq!(links, vec!["https://example.com/ok"]);
    }

    #[test]
    fn test_run__when_duplicates__collapses_them() {
        let links = run(
            r"/a",
            &["/a", "a", "https://example.com/a", "//example.com/a"],
            ScopeMode::DomainScoped,
            MatchStyle::Prefix,
        );

        assert_eq!(links, vec!["https://example.com/a"]);
    }
}
