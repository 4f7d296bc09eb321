//! Result persistence
//!
//! Collected links are written per (host, pattern) scope so a repeated run
//! can detect that it was already executed.

pub mod store;

pub use store::{LinkStore, safe_folder_name};
