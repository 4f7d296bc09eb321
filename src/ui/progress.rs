use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the page is fetched and scanned.
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            spinner: None,
            enabled,
        }
    }

    pub fn start_fetch(&mut self, url: &str) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Fetching {url}"));
        pb.enable_steady_tick(Duration::from_millis(120));
        self.spinner = Some(pb);
    }

    pub fn finish(&mut self, link_count: usize) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_with_message(format!("✓ Scanned page ({link_count} matching link(s))"));
        }
    }

    pub fn finish_and_clear(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}
