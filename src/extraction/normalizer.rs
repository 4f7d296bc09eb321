//! Origin computation and relative reference resolution
//!
//! Every candidate, whichever scan found it, goes through these functions
//! before it is matched against the pattern, so the same logical link is
//! always presented to the pattern in the same form.

use url::Url;

use crate::core::error::{LinkCollectError, Result};
use crate::core::types::Origin;

/// A link with the page origin removed when it was a same-origin URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub value: String,
    /// True when `value` is host-relative
    pub was_stripped: bool,
}

/// Compute `scheme://host[:port]` of a full URL.
pub fn origin_of(url: &str) -> Result<Origin> {
    let malformed = || LinkCollectError::MalformedUrl(url.to_string());

    let parsed = Url::parse(url.trim()).map_err(|_| malformed())?;
    let host = parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(malformed)?;

    let authority = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    Origin::from_parts(parsed.scheme(), &authority).ok_or_else(malformed)
}

/// Resolve `link` against `origin` (RFC 3986), yielding an absolute URL with a host.
///
/// An empty link resolves to the origin root.
pub fn resolve(origin: &Origin, link: &str) -> Result<String> {
    let joined = origin
        .base()
        .join(link)
        .map_err(|err| LinkCollectError::AttributeResolution {
            value: link.to_string(),
            reason: err.to_string(),
        })?;

    if joined.host_str().is_none_or(str::is_empty) {
        return Err(LinkCollectError::AttributeResolution {
            value: link.to_string(),
            reason: "resolved URL has no host".to_string(),
        });
    }

    Ok(joined.into())
}

/// Resolve `link` and remove the leading origin, giving a host-relative form
/// for same-origin links. Links on other origins stay absolute.
pub fn strip_origin(origin: &Origin, link: &str) -> Result<Stripped> {
    let absolute = resolve(origin, link)?;
    Ok(strip_resolved(origin, &absolute))
}

/// Strip the origin from an already resolved URL.
///
/// The origin only counts when it ends on a boundary, so `https://a.com.evil.org/`
/// is not treated as `https://a.com`.
pub(crate) fn strip_resolved(origin: &Origin, absolute: &str) -> Stripped {
    match absolute.strip_prefix(origin.as_str()) {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '?', '#']) => Stripped {
            value: rest.to_string(),
            was_stripped: true,
        },
        _ => Stripped {
            value: absolute.to_string(),
            was_stripped: false,
        },
    }
}

/// Values containing a path separator, the shape of anything worth resolving
pub fn is_path_like(value: &str) -> bool {
    value.contains('/') || value.contains('\\')
}

/// True for `//host/...` and `scheme://host/...` references
pub fn has_explicit_host(value: &str) -> bool {
    value.starts_with("//")
        || Url::parse(value).is_ok_and(|url| url.host_str().is_some_and(|h| !h.is_empty()))
}
