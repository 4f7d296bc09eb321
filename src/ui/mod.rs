//! User interface and interaction
//!
//! CLI parsing, terminal colors, result output and the progress spinner.

pub mod cli;
pub mod color;
pub mod output;
pub mod progress;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use output::RunSummary;
pub use progress::ProgressReporter;
