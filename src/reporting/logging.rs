use crate::config::Config;
use crate::core::types::ScopeMode;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    // A second initialization (tests, embedding) keeps the first logger
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, mode: ScopeMode) {
    let timeout = config.timeout.unwrap_or(30);
    let skip_ssl_verification = config.skip_ssl_verification.unwrap_or(false);

    info!("Configuration: mode={mode}, timeout={timeout}s, data_dir={}", config.data_dir());
    info!(
        "HTTP: proxy={}, skip_ssl={skip_ssl_verification}",
        config.proxy.as_deref().unwrap_or("none")
    );
}

pub fn log_fetch(url: &str) {
    info!("Fetching {url}");
}

/// Log how many links each scan contributed
pub fn log_scan_counts(text_links: usize, tag_links: usize, unique_links: usize) {
    debug!("Text scan matched {text_links} link(s), tag scan matched {tag_links}");
    debug!("{unique_links} unique link(s) after merging");
}

pub fn log_extraction_complete(url: &str, mode: ScopeMode, link_count: usize) {
    if link_count == 0 {
        warn!("No links matched on {url} ({mode})");
    } else {
        info!("Collected {link_count} link(s) from {url} ({mode})");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
