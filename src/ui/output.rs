use serde::Serialize;
use std::path::Path;

use crate::core::constants::output_formats;
use crate::core::types::{LinkSet, ScopeMode};
use crate::ui::color;

/// Everything a finished run reports about itself.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub url: &'a str,
    pub pattern: &'a str,
    pub mode: ScopeMode,
    pub count: usize,
    pub links: Vec<String>,
    pub file: Option<String>,
}

impl<'a> RunSummary<'a> {
    pub fn new(
        url: &'a str,
        pattern: &'a str,
        mode: ScopeMode,
        links: &LinkSet,
        file: Option<&Path>,
    ) -> Self {
        Self {
            url,
            pattern,
            mode,
            count: links.len(),
            links: links.to_sorted_vec(),
            file: file.map(|path| path.display().to_string()),
        }
    }
}

pub fn display_collecting(quiet: bool) {
    if !quiet {
        println!("{}", color::info("Collecting links from the webpage..."));
    }
}

pub fn found_message(count: usize) -> String {
    format!("Found {count} link(s) matching the regex pattern.")
}

pub fn display_found(count: usize, quiet: bool) {
    if quiet {
        return;
    }
    if count == 0 {
        println!("{}", color::warning("No links found matching the regex pattern."));
    } else {
        println!("{}", color::success(&found_message(count)));
    }
}

pub fn display_saving(quiet: bool) {
    if !quiet {
        println!("Saving the links to links.txt file.");
    }
}

pub fn already_executed_message(folder: &Path) -> String {
    format!(
        "This command has already been executed!\nResults are in {}\nRun again with -c/--clear-directory to delete them and search again.",
        folder.display()
    )
}

/// Printed even in quiet mode; the run stops here without searching.
/// Machine-readable formats keep stdout clean, so the warning goes to stderr.
pub fn display_already_executed(folder: &Path, output_format: &str) {
    let message = color::warning(&already_executed_message(folder));
    if output_format == output_formats::TEXT {
        println!("{message}");
    } else {
        eprintln!("{message}");
    }
}

pub fn display_cleared(folder: &Path, quiet: bool) {
    if !quiet {
        println!(
            "Deleted previous results in {}",
            color::info(&folder.display().to_string())
        );
    }
}

pub fn display_error(message: &str) {
    eprintln!("{}", color::failure(message));
}

/// Render the summary in one of the supported output formats
pub fn render_summary(summary: &RunSummary<'_>, output_format: &str) -> serde_json::Result<String> {
    match output_format {
        output_formats::MINIMAL => Ok(render_minimal(summary)),
        output_formats::JSON => serde_json::to_string_pretty(summary),
        _ => Ok(render_text(summary)),
    }
}

pub fn display_summary(
    summary: &RunSummary<'_>,
    output_format: &str,
    quiet: bool,
) -> serde_json::Result<()> {
    // Text output only repeats what the status lines already said
    if quiet && output_format == output_formats::TEXT {
        return Ok(());
    }

    let rendered = render_summary(summary, output_format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// One link per line, nothing else
fn render_minimal(summary: &RunSummary<'_>) -> String {
    summary.links.join("\n")
}

fn render_text(summary: &RunSummary<'_>) -> String {
    match summary.file {
        Some(ref file) => format!("Links written to {}", color::info(file)),
        None => String::new(),
    }
}
