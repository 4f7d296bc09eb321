//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{http, output_formats, storage};
use crate::core::error::{LinkCollectError, Result};
use crate::fetch::FetchConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Timeout in seconds for the page fetch
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// HTTP/HTTPS proxy URL
    pub proxy: Option<String>,

    /// Skip SSL certificate verification
    pub skip_ssl_verification: Option<bool>,

    /// Directory the collected links are written under
    pub data_dir: Option<String>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(http::DEFAULT_TIMEOUT_SECONDS),
            user_agent: None, // Browser-like agent from FetchConfig
            proxy: None,
            skip_ssl_verification: Some(false),
            data_dir: Some(storage::DEFAULT_DATA_DIR.to_string()),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinkCollectError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            LinkCollectError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for the config file in `dir` and its parents, falling back to defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        for path in Self::candidate_paths(dir) {
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    fn candidate_paths(dir: &Path) -> Vec<PathBuf> {
        (0..=storage::CONFIG_SEARCH_DEPTH)
            .map(|level| {
                let mut path = dir.to_path_buf();
                for _ in 0..level {
                    path.push("..");
                }
                path.join(storage::CONFIG_FILE_NAME)
            })
            .collect()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }

        // Network & security
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref proxy) = cli_config.proxy {
            self.proxy = Some(proxy.clone());
        }
        if cli_config.skip_ssl_verification {
            self.skip_ssl_verification = Some(true);
        }

        // Output & storage
        if let Some(ref data_dir) = cli_config.data_dir {
            self.data_dir = Some(data_dir.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(http::DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn data_dir(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(storage::DEFAULT_DATA_DIR)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Request settings for the page fetcher
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| http::DEFAULT_USER_AGENT.to_string()),
            timeout: self.timeout_duration(),
            proxy: self.proxy.clone(),
            skip_ssl_verification: self.skip_ssl_verification.unwrap_or(false),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(LinkCollectError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > http::MAX_TIMEOUT_SECONDS {
                return Err(LinkCollectError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(ref user_agent) = self.user_agent
            && user_agent.trim().is_empty()
        {
            return Err(LinkCollectError::Config(
                "User-Agent cannot be empty.".to_string(),
            ));
        }

        if let Some(ref proxy) = self.proxy
            && url::Url::parse(proxy).is_err()
        {
            return Err(LinkCollectError::Config(format!(
                "Proxy '{proxy}' is not a valid URL. Expected e.g. http://proxy.example.com:8080."
            )));
        }

        if let Some(ref data_dir) = self.data_dir
            && data_dir.trim().is_empty()
        {
            return Err(LinkCollectError::Config(
                "Data directory cannot be empty.".to_string(),
            ));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(LinkCollectError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>, // --timeout

    // Network & security
    pub user_agent: Option<String>,  // --user-agent
    pub proxy: Option<String>,       // --proxy
    pub skip_ssl_verification: bool, // --insecure

    // Output & storage
    pub data_dir: Option<String>,      // --data-dir
    pub output_format: Option<String>, // --format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub no_progress: bool,             // --no-progress

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
