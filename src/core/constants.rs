/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful status messages
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - one link per line, nothing else
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// HTTP related constants
pub mod http {
    /// Default timeout for the page fetch in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    /// Largest accepted timeout (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86400;
    /// Maximum redirects followed while fetching the page
    pub const MAX_REDIRECTS: usize = 10;

    /// Desktop browser User-Agent; some sites serve bare pages to unknown agents
    pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/50.0.2661.102 Safari/537.36";
}

/// Result storage layout
pub mod storage {
    /// Root directory for collected links
    pub const DEFAULT_DATA_DIR: &str = "data";
    /// File holding the links of one (host, pattern) scope
    pub const LINKS_FILE_NAME: &str = "links.txt";
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".linkcollect.toml";
    /// How many parent directories are searched for the config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Regex sources for the raw text scans
pub mod scan_patterns {
    /// Double quoted string literal, contents captured
    pub const DOUBLE_QUOTED: &str = r#""(.*?)""#;
    /// Single quoted string literal, contents captured
    pub const SINGLE_QUOTED: &str = r"'(.*?)'";
    /// Protocol-relative reference up to whitespace, quote, backtick or `>`
    pub const PROTOCOL_RELATIVE: &str = r#"//[^\s>"'`]+"#;
    /// Absolute http(s) reference, same terminators
    pub const ABSOLUTE_SCHEME: &str = r#"https?://[^\s>"'`]+"#;
    /// Characters terminating a reference, appended to host anchored scans
    pub const REFERENCE_TAIL: &str = r#"[^\s>"'`]+"#;
}

/// Element tags carrying links, and the attributes read from each.
///
/// Adding a tag or attribute is a change to this table only.
pub mod link_tags {
    /// Attributes checked on every link-bearing element
    pub const LINK_ATTRIBUTES: [&str; 3] = ["href", "src", "data-src"];

    /// Tag name paired with the attributes read from it
    pub const TABLE: [(&str, &[&str]); 13] = [
        ("a", &LINK_ATTRIBUTES),
        ("link", &LINK_ATTRIBUTES),
        ("script", &LINK_ATTRIBUTES),
        ("base", &LINK_ATTRIBUTES),
        ("form", &LINK_ATTRIBUTES),
        ("area", &LINK_ATTRIBUTES),
        ("iframe", &LINK_ATTRIBUTES),
        ("img", &LINK_ATTRIBUTES),
        ("audio", &LINK_ATTRIBUTES),
        ("video", &LINK_ATTRIBUTES),
        ("source", &LINK_ATTRIBUTES),
        ("track", &LINK_ATTRIBUTES),
        ("embed", &LINK_ATTRIBUTES),
    ];
}
