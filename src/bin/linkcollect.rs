use clap::Parser;
use linkcollect::config::{CliConfig, Config};
use linkcollect::core::constants::output_formats;
use linkcollect::extraction::LinkCollector;
use linkcollect::fetch::HttpFetcher;
use linkcollect::reporting::logging;
use linkcollect::storage::LinkStore;
use linkcollect::ui::output::{self, RunSummary};
use linkcollect::ui::{Cli, ProgressReporter, cli_to_config};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            logging::log_error("Link collection failed", Some(e.as_ref()));
            output::display_error(&format!("Error: {e}"));
            std::process::exit(1);
        }
    }
}

/// Collect, report and store the links for one invocation
pub async fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;
    config.validate()?;

    let verbose = config.verbose.unwrap_or(false);
    logging::init_logger(verbose, cli_config.quiet);

    let mode = cli.scope_mode();
    logging::log_config_info(&config, mode);

    let output_format = config.output_format().to_string();
    // Status lines would corrupt machine-readable output
    let chatty = !cli_config.quiet && output_format == output_formats::TEXT;

    let store = LinkStore::new(config.data_dir());
    if cli.clear_directory {
        let folder = store.folder_for(&cli.url, &cli.pattern)?;
        if store.delete(&cli.url, &cli.pattern)? {
            output::display_cleared(&folder, !chatty);
        }
    } else if let Some(folder) = store.existing_folder(&cli.url, &cli.pattern)? {
        output::display_already_executed(&folder, &output_format);
        return Ok(0);
    }

    output::display_collecting(!chatty);

    let mut progress = ProgressReporter::new(chatty && !cli_config.no_progress);
    progress.start_fetch(&cli.url);

    let fetcher = HttpFetcher::new(&config.fetch_config())?;
    let collector = LinkCollector::new(fetcher);
    let links = match collector.collect(&cli.url, &cli.pattern, mode).await {
        Ok(links) => {
            progress.finish(links.len());
            links
        }
        Err(e) => {
            progress.finish_and_clear();
            return Err(e.into());
        }
    };

    output::display_found(links.len(), !chatty);

    let file = if links.is_empty() {
        logging::log_warning(&format!(
            "Nothing on {} matched '{}'",
            cli.url, cli.pattern
        ));
        // Leave nothing behind so the same command can be retried
        store.delete(&cli.url, &cli.pattern)?;
        None
    } else {
        output::display_saving(!chatty);
        Some(store.save(&links, &cli.url, &cli.pattern)?)
    };

    let summary = RunSummary::new(&cli.url, &cli.pattern, mode, &links, file.as_deref());
    output::display_summary(&summary, &output_format, cli_config.quiet)?;

    Ok(0)
}

/// Config file (unless disabled) with the CLI arguments layered on top
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    Ok(config)
}
