use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use log::debug;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::constants::storage;
use crate::core::error::Result;
use crate::core::types::LinkSet;
use crate::extraction::normalizer::origin_of;

/// Result files laid out as `<root>/<host>/<encoded pattern>/links.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStore {
    root: PathBuf,
}

impl Default for LinkStore {
    fn default() -> Self {
        Self::new(storage::DEFAULT_DATA_DIR)
    }
}

impl LinkStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Folder holding the results of `pattern` on the host of `url`
    pub fn folder_for(&self, url: &str, pattern: &str) -> Result<PathBuf> {
        let origin = origin_of(url)?;
        Ok(self
            .root
            .join(origin.authority())
            .join(safe_folder_name(pattern)))
    }

    pub fn links_file(&self, url: &str, pattern: &str) -> Result<PathBuf> {
        Ok(self
            .folder_for(url, pattern)?
            .join(storage::LINKS_FILE_NAME))
    }

    /// The scope's folder, if a previous run created it
    pub fn existing_folder(&self, url: &str, pattern: &str) -> Result<Option<PathBuf>> {
        let folder = self.folder_for(url, pattern)?;
        Ok(folder.exists().then_some(folder))
    }

    pub fn exists(&self, url: &str, pattern: &str) -> Result<bool> {
        Ok(self.existing_folder(url, pattern)?.is_some())
    }

    /// Write the links sorted, one per line, replacing any previous file.
    pub fn save(&self, links: &LinkSet, url: &str, pattern: &str) -> Result<PathBuf> {
        let folder = self.folder_for(url, pattern)?;
        fs::create_dir_all(&folder)?;

        let file_path = folder.join(storage::LINKS_FILE_NAME);
        let mut file = fs::File::create(&file_path)?;
        for link in links.to_sorted_vec() {
            writeln!(file, "{link}")?;
        }
        file.flush()?;

        debug!("Wrote {} link(s) to {}", links.len(), file_path.display());
        Ok(file_path)
    }

    /// Remove the scope's folder. Returns false when there was nothing to remove.
    pub fn delete(&self, url: &str, pattern: &str) -> Result<bool> {
        match self.existing_folder(url, pattern)? {
            Some(folder) => {
                fs::remove_dir_all(&folder)?;
                debug!("Removed {}", folder.display());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Filesystem-safe name for a pattern: base64 with `/` swapped for `_`
pub fn safe_folder_name(pattern: &str) -> String {
    BASE64.encode(pattern.as_bytes()).replace('/', "_")
}
