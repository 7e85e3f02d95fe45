//! Application configuration for notesplit.
//!
//! Project config lives at `<root>/notesplit.toml` and is optional.
//! CLI flags override config file values, which override defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NotesplitError, Result};
use crate::mappings::TitleMappings;

/// Default configuration file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "notesplit.toml";

// ---------------------------------------------------------------------------
// Config structs (matching notesplit.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Source and output locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Relative link prefixes written into pages and index lines.
    #[serde(default)]
    pub links: LinksConfig,

    /// Page rendering and fallback identifiers.
    #[serde(default)]
    pub page: PageConfig,

    /// Extra title → topic entries layered over the built-in table.
    #[serde(default)]
    pub topics: BTreeMap<String, String>,

    /// Extra title → slug entries layered over the built-in table.
    #[serde(default)]
    pub slugs: BTreeMap<String, String>,
}

/// `[paths]` section. All paths are relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// The notes file to split.
    #[serde(default = "default_source")]
    pub source: String,

    /// Directory receiving one page per section.
    #[serde(default = "default_problems_dir")]
    pub problems_dir: String,

    /// Directory holding the per-topic index pages.
    #[serde(default = "default_topics_dir")]
    pub topics_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            problems_dir: default_problems_dir(),
            topics_dir: default_topics_dir(),
        }
    }
}

fn default_source() -> String {
    "apcs/notes.md".into()
}
fn default_problems_dir() -> String {
    "apcs/problems".into()
}
fn default_topics_dir() -> String {
    "apcs/topics".into()
}

/// `[links]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Breadcrumb target for the site index, as seen from a page.
    #[serde(default = "default_index_link")]
    pub index: String,

    /// Prefix for topic index links, as seen from a page.
    #[serde(default = "default_topics_link")]
    pub topics: String,

    /// Prefix for page links, as seen from a topic index.
    #[serde(default = "default_problems_link")]
    pub problems: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            index: default_index_link(),
            topics: default_topics_link(),
            problems: default_problems_link(),
        }
    }
}

fn default_index_link() -> String {
    "../index.md".into()
}
fn default_topics_link() -> String {
    "../topics".into()
}
fn default_problems_link() -> String {
    "../problems".into()
}

/// `[page]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Text of the breadcrumb link back to the index.
    #[serde(default = "default_back_label")]
    pub back_label: String,

    /// Text of the breadcrumb topic link; `{topic}` is replaced by the topic id.
    #[serde(default = "default_topic_label")]
    pub topic_label: String,

    /// Topic used for titles missing from the topic table.
    #[serde(default = "default_topic")]
    pub default_topic: String,

    /// Slug used when the fallback slugifier strips a title entirely.
    #[serde(default = "default_fallback_slug")]
    pub fallback_slug: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            back_label: default_back_label(),
            topic_label: default_topic_label(),
            default_topic: default_topic(),
            fallback_slug: default_fallback_slug(),
        }
    }
}

fn default_back_label() -> String {
    "← 回 APCS 索引".into()
}
fn default_topic_label() -> String {
    "主題：{topic}".into()
}
fn default_topic() -> String {
    "misc".into()
}
fn default_fallback_slug() -> String {
    "section".into()
}

// ---------------------------------------------------------------------------
// Split config (runtime, merged from config file + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime configuration for one split run, with paths anchored at the root.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Project root all relative paths hang off.
    pub root: PathBuf,
    /// Absolute-or-root-joined path to the notes file.
    pub source: PathBuf,
    /// Directory receiving the per-section pages.
    pub problems_dir: PathBuf,
    /// Directory receiving the per-topic index pages.
    pub topics_dir: PathBuf,
    /// Link prefixes.
    pub links: LinksConfig,
    /// Page rendering options.
    pub page: PageConfig,
    /// Read-only title lookup tables.
    pub mappings: TitleMappings,
    /// Plan only; never touch the filesystem.
    pub dry_run: bool,
}

impl SplitConfig {
    /// Resolve a runtime config from the file config and a project root.
    pub fn from_app(config: &AppConfig, root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            source: root.join(&config.paths.source),
            problems_dir: root.join(&config.paths.problems_dir),
            topics_dir: root.join(&config.paths.topics_dir),
            links: config.links.clone(),
            page: config.page.clone(),
            mappings: TitleMappings::builtin().with_overrides(&config.topics, &config.slugs),
            dry_run: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the project config file (`<root>/notesplit.toml`).
pub fn config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Load the project config. Returns defaults if the file does not exist.
pub fn load_config(root: &Path) -> Result<AppConfig> {
    let path = config_file_path(root);

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| NotesplitError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        NotesplitError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    validate_config(&config)?;
    Ok(config)
}

/// Write a default config file into the project root.
/// Returns the path to the created file. Refuses to overwrite an existing one.
pub fn init_config(root: &Path) -> Result<PathBuf> {
    let path = config_file_path(root);
    if path.exists() {
        return Err(NotesplitError::config(format!(
            "{} already exists; remove it first to regenerate defaults",
            path.display()
        )));
    }

    std::fs::create_dir_all(root).map_err(|e| NotesplitError::io(root, e))?;

    let content = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| NotesplitError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| NotesplitError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Reject values that would produce unusable file names.
fn validate_config(config: &AppConfig) -> Result<()> {
    check_file_stem("page.default_topic", &config.page.default_topic)?;
    check_file_stem("page.fallback_slug", &config.page.fallback_slug)?;
    for (title, slug) in &config.slugs {
        check_file_stem(&format!("slug for '{title}'"), slug)?;
    }
    for (title, topic) in &config.topics {
        check_file_stem(&format!("topic for '{title}'"), topic)?;
    }
    Ok(())
}

/// A stem is joined directly under an output directory, so it must stay a
/// single path component.
fn check_file_stem(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() || value.contains(['/', '\\']) || value == ".." {
        return Err(NotesplitError::config(format!(
            "{field} must be a non-empty file stem, got '{value}'"
        )));
    }
    Ok(())
}
