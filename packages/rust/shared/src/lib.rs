//! Shared types, error model, and configuration for notesplit.
//!
//! This crate is the foundation depended on by all other notesplit crates.
//! It provides:
//! - [`NotesplitError`], the unified error type
//! - Domain types ([`Segment`], [`SplitReport`], [`PageRecord`])
//! - Configuration ([`AppConfig`], [`SplitConfig`], config loading)
//! - The title lookup tables ([`TitleMappings`])

pub mod config;
pub mod error;
pub mod mappings;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, CONFIG_FILE_NAME, LinksConfig, PageConfig, PathsConfig, SplitConfig,
    config_file_path, init_config, load_config, load_config_from,
};
pub use error::{NotesplitError, Result};
pub use mappings::TitleMappings;
pub use types::{BackupRecord, PageRecord, Segment, SplitReport};
