//! Core domain types for a split run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// One `## <title>` block of the source notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Heading text, trimmed.
    pub title: String,
    /// Everything up to the next heading, trailing whitespace collapsed to a
    /// single newline.
    pub body: String,
}

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// What happened to one segment during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// Section title.
    pub title: String,
    /// Resolved topic id.
    pub topic: String,
    /// Resolved file stem.
    pub slug: String,
    /// Page path relative to the project root, `/`-separated.
    pub path: String,
    /// Whether a link line was (or in a dry run, would be) appended to the
    /// topic index.
    pub link_added: bool,
    /// SHA-256 of the rendered page content.
    pub content_hash: String,
}

/// Outcome of the backup guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRecord {
    /// Backup path relative to the project root.
    pub path: String,
    /// `true` if this run created the backup.
    pub created: bool,
}

/// Summary of a full split run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    /// Source path relative to the project root.
    pub source: String,
    /// Backup outcome.
    pub backup: BackupRecord,
    /// One record per segment, in source order.
    pub pages: Vec<PageRecord>,
    /// Set when nothing was written.
    #[serde(default)]
    pub dry_run: bool,
    /// When the run finished.
    pub generated_at: DateTime<Utc>,
}

impl SplitReport {
    /// Distinct topic ids touched by this run, in first-seen order.
    pub fn topics(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for page in &self.pages {
            if !seen.contains(&page.topic.as_str()) {
                seen.push(&page.topic);
            }
        }
        seen
    }

    /// Number of link lines appended (or that would be appended).
    pub fn links_added(&self) -> usize {
        self.pages.iter().filter(|p| p.link_added).count()
    }
}
