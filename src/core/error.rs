use std::fmt;

/// Error types for link collection operations
#[derive(Debug)]
pub enum LinkCollectError {
    /// The seed URL has no parsable `scheme://host` prefix
    MalformedUrl(String),

    /// The page could not be fetched, or the server answered with a non-success status
    FetchFailure {
        url: String,
        status: Option<u16>,
        reason: String,
    },

    /// The user supplied pattern is empty or does not compile
    InvalidPattern {
        pattern: String,
        source: Option<regex::Error>,
    },

    /// A single candidate value could not be resolved to an absolute URL
    AttributeResolution { value: String, reason: String },

    /// IO error (result files, config files)
    Io(std::io::Error),

    /// HTTP client error
    Http(reqwest::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for LinkCollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkCollectError::MalformedUrl(url) => write!(f, "Invalid URL format: {url}"),
            LinkCollectError::FetchFailure {
                url,
                status: Some(status),
                ..
            } => write!(f, "Failed to retrieve the web page: {url} returned {status}"),
            LinkCollectError::FetchFailure {
                url,
                status: None,
                reason,
            } => write!(f, "Failed to retrieve the web page: {url} ({reason})"),
            LinkCollectError::InvalidPattern {
                pattern,
                source: Some(err),
            } => write!(f, "Invalid regex pattern '{pattern}': {err}"),
            LinkCollectError::InvalidPattern {
                pattern,
                source: None,
            } => write!(f, "Invalid regex pattern '{pattern}'"),
            LinkCollectError::AttributeResolution { value, reason } => {
                write!(f, "Could not resolve '{value}': {reason}")
            }
            LinkCollectError::Io(err) => write!(f, "IO error: {err}"),
            LinkCollectError::Http(err) => write!(f, "HTTP error: {err}"),
            LinkCollectError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for LinkCollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkCollectError::InvalidPattern {
                source: Some(err), ..
            } => Some(err),
            LinkCollectError::Io(err) => Some(err),
            LinkCollectError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl LinkCollectError {
    /// True for errors that abort a whole extraction call.
    ///
    /// Only `AttributeResolution` is recovered locally by dropping the one candidate.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LinkCollectError::AttributeResolution { .. })
    }
}

impl From<std::io::Error> for LinkCollectError {
    fn from(err: std::io::Error) -> Self {
        LinkCollectError::Io(err)
    }
}

impl From<reqwest::Error> for LinkCollectError {
    fn from(err: reqwest::Error) -> Self {
        LinkCollectError::Http(err)
    }
}

/// Type alias for Results using LinkCollectError
pub type Result<T> = std::result::Result<T, LinkCollectError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let malformed = LinkCollectError::MalformedUrl("example.com".to_string());
        assert_eq!(format!("{malformed}"), "Invalid URL format: example.com");

        let fetch = LinkCollectError::FetchFailure {
            url: "https://example.com/".to_string(),
            status: Some(404),
            reason: "Not Found".to_string(),
        };
        assert_eq!(
            format!("{fetch}"),
            "Failed to retrieve the web page: https://example.com/ returned 404"
        );

        let transport = LinkCollectError::FetchFailure {
            url: "https://example.com/".to_string(),
            status: None,
            reason: "connection refused".to_string(),
        };
        assert!(format!("{transport}").contains("connection refused"));
    }

    #[test]
    #[allow(clippy::invalid_regex)]
    fn test_invalid_pattern_keeps_regex_source() {
        let regex_error = regex::Regex::new("[invalid").unwrap_err();
        let err = LinkCollectError::InvalidPattern {
            pattern: "[invalid".to_string(),
            source: Some(regex_error),
        };

        assert!(err.source().is_some());
        assert!(format!("{err}").starts_with("Invalid regex pattern '[invalid':"));

        let empty = LinkCollectError::InvalidPattern {
            pattern: String::new(),
            source: None,
        };
        assert!(empty.source().is_none());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err = LinkCollectError::from(io_error);

        match err {
            LinkCollectError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_only_attribute_resolution_is_recoverable() {
        let local = LinkCollectError::AttributeResolution {
            value: "mailto:someone".to_string(),
            reason: "no host".to_string(),
        };
        assert!(!local.is_fatal());

        let fatal = vec![
            LinkCollectError::MalformedUrl("x".to_string()),
            LinkCollectError::FetchFailure {
                url: "x".to_string(),
                status: Some(500),
                reason: String::new(),
            },
            LinkCollectError::InvalidPattern {
                pattern: String::new(),
                source: None,
            },
            LinkCollectError::Config("x".to_string()),
        ];
        for err in fatal {
            assert!(err.is_fatal(), "{err:?} should be fatal");
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LinkCollectError>();
    }
}
