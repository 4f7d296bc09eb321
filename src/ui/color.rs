//! Color utilities for terminal output

use std::env;

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";

    pub const SUCCESS: &'static str = "\x1b[92m";
    pub const WARNING: &'static str = "\x1b[93m";
    pub const FAIL: &'static str = "\x1b[91m";
    pub const INFO: &'static str = "\x1b[94m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

pub fn success(text: &str) -> String {
    colorize(text, Colors::SUCCESS)
}

pub fn warning(text: &str) -> String {
    colorize(text, Colors::WARNING)
}

pub fn failure(text: &str) -> String {
    colorize(text, Colors::FAIL)
}

pub fn info(text: &str) -> String {
    colorize(text, Colors::INFO)
}

/// Check if the current environment supports ANSI colors
pub fn supports_formatting() -> bool {
    // Check if colors are explicitly disabled
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Disable formatting when running tests
    if cfg!(test) || env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    match env::var("TERM") {
        Ok(term) => !(term == "dumb" || term.is_empty()),
        Err(_) => false,
    }
}
