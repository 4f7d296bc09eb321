//! User supplied link patterns
//!
//! Search and prefix matching over candidate strings.

use regex::Regex;

use crate::core::error::{LinkCollectError, Result};

/// A compiled user pattern.
#[derive(Debug, Clone)]
pub struct LinkPattern {
    regex: Regex,
}

impl LinkPattern {
    /// Compile `pattern`. Empty patterns are rejected.
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(LinkCollectError::InvalidPattern {
                pattern: String::new(),
                source: None,
            });
        }

        let regex = Regex::new(pattern).map_err(|err| LinkCollectError::InvalidPattern {
            pattern: pattern.to_string(),
            source: Some(err),
        })?;

        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn has_groups(&self) -> bool {
        self.regex.captures_len() > 1
    }

    /// Every match in `subject`: the participating capture groups when the
    /// pattern has any, the whole match otherwise.
    pub fn matches_in<'s>(&self, subject: &'s str) -> Vec<&'s str> {
        if self.has_groups() {
            self.regex
                .captures_iter(subject)
                .flat_map(|caps| {
                    caps.iter()
                        .skip(1)
                        .flatten()
                        .map(|group| group.as_str())
                        .collect::<Vec<_>>()
                })
                .collect()
        } else {
            self.regex
                .find_iter(subject)
                .map(|found| found.as_str())
                .collect()
        }
    }

    /// True when the pattern matches starting at the first character.
    pub fn match_prefix(&self, subject: &str) -> bool {
        // Leftmost-first semantics: a match at 0, if any, is the one returned
        self.regex
            .find(subject)
            .is_some_and(|found| found.start() == 0)
    }
}

/// Search every string with `pattern`, expanding multiple matches and
/// dropping strings without one.
pub fn filter<I, S>(strings: I, pattern: &LinkPattern) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    strings
        .into_iter()
        .flat_map(|string| {
            pattern
                .matches_in(string.as_ref())
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn match_prefix(string: &str, pattern: &LinkPattern) -> bool {
    pattern.match_prefix(string)
}
