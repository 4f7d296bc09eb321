// Command-line interface definitions and parsing for linkcollect

use crate::config::CliConfig;
use crate::core::constants::{http, output_formats};
use crate::core::types::ScopeMode;
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Core Options
    /// Webpage URL
    #[arg(short = 'u', long, value_name = "URL", help_heading = "Core Options")]
    pub url: String,

    /// Regex pattern the links must match
    #[arg(
        short = 'p',
        long,
        value_name = "REGEX",
        value_parser = NonEmptyStringValueParser::new(),
        help_heading = "Core Options"
    )]
    pub pattern: String,

    /// Include the website domain when matching internal links. By default the
    /// domain is removed from internal links before the pattern is applied
    #[arg(short = 'd', long, help_heading = "Core Options")]
    pub domain: bool,

    /// Delete the output of a previous run with the same URL host and pattern.
    /// By default a repeated run stops without searching
    #[arg(short = 'c', long, help_heading = "Core Options")]
    pub clear_directory: bool,

    /// Directory collected links are written under (default: data)
    #[arg(long, value_name = "DIR", help_heading = "Core Options")]
    pub data_dir: Option<String>,

    // Network & Security
    /// Request timeout in seconds (default: 30)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Network & Security"
    )]
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network & Security")]
    pub user_agent: Option<String>,

    /// HTTP/HTTPS proxy URL
    #[arg(long, value_name = "URL", help_heading = "Network & Security")]
    pub proxy: Option<String>,

    /// Skip SSL certificate verification
    #[arg(long, help_heading = "Network & Security")]
    pub insecure: bool,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable progress spinner
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

impl Cli {
    pub fn scope_mode(&self) -> ScopeMode {
        ScopeMode::from_domain_flag(self.domain)
    }
}

/// Convert parsed CLI arguments to CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    if let Some(timeout) = cli.timeout
        && timeout > http::MAX_TIMEOUT_SECONDS
    {
        eprintln!(
            "Warning: Timeout of {timeout} seconds is quite large. Consider using a smaller value."
        );
    }

    CliConfig {
        timeout: cli.timeout,
        user_agent: cli.user_agent.clone(),
        proxy: cli.proxy.clone(),
        skip_ssl_verification: cli.insecure,
        data_dir: cli.data_dir.clone(),
        output_format: cli.format.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_progress: cli.no_progress,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse__minimal_arguments() {
        let cli = Cli::try_parse_from(["linkcollect", "-u", "https://example.com", "-p", "blog"])
            .unwrap();

        assert_eq!(cli.url, "https://example.com");
        assert_eq!(cli.pattern, "blog");
        assert!(!cli.domain);
        assert!(!cli.clear_directory);
        assert_eq!(cli.scope_mode(), ScopeMode::DomainScoped);
    }

    #[test]
    fn test_parse__domain_flag_selects_unrestricted() {
        let cli = Cli::try_parse_from([
            "linkcollect",
            "--url",
            "https://example.com",
            "--pattern",
            "blog",
            "--domain",
            "--clear-directory",
        ])
        .unwrap();

        assert!(cli.clear_directory);
        assert_eq!(cli.scope_mode(), ScopeMode::Unrestricted);
    }

    #[test]
    fn test_parse__when_pattern_empty__fails() {
        let result = Cli::try_parse_from(["linkcollect", "-u", "https://example.com", "-p", ""]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse__when_required_missing__fails() {
        assert!(Cli::try_parse_from(["linkcollect", "-p", "blog"]).is_err());
        assert!(Cli::try_parse_from(["linkcollect", "-u", "https://example.com"]).is_err());
    }

    #[test]
    fn test_parse__when_format_unknown__fails() {
        let result = Cli::try_parse_from([
            "linkcollect",
            "-u",
            "https://example.com",
            "-p",
            "blog",
            "--format",
            "xml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_to_config_copies_options() {
        let cli = Cli::try_parse_from([
            "linkcollect",
            "-u",
            "https://example.com",
            "-p",
            "blog",
            "-t",
            "12",
            "--user-agent",
            "agent/2",
            "--insecure",
            "--data-dir",
            "out",
            "--format",
            "json",
            "-v",
            "--no-config",
        ])
        .unwrap();

        let config = cli_to_config(&cli);
        assert_eq!(config.timeout, Some(12));
        assert_eq!(config.user_agent, Some("agent/2".to_string()));
        assert!(config.skip_ssl_verification);
        assert_eq!(config.data_dir, Some("out".to_string()));
        assert_eq!(config.output_format, Some("json".to_string()));
        assert!(config.verbose);
        assert!(config.no_config);
        assert!(config.config_file.is_none());
    }
}
