//! End-to-end `split` pipeline: notes → sections → pages + topic indexes.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::Utc;
use tracing::{info, instrument, warn};

use notesplit_markdown::{link_line, parse_notes, render_page, resolve_slug};
use notesplit_shared::{
    BackupRecord, NotesplitError, PageRecord, Result, SplitConfig, SplitReport,
};

use crate::backup;
use crate::index;
use crate::writer;

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after a section's page and index line are handled.
    fn page_written(&self, title: &str, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, report: &SplitReport);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn page_written(&self, _title: &str, _current: usize, _total: usize) {}
    fn done(&self, _report: &SplitReport) {}
}

/// Run the full `split` pipeline.
///
/// 1. Read the source notes (fails if missing)
/// 2. Split into sections (fails if none)
/// 3. Back up the source once
/// 4. Per section, in source order: write the page, then list it in its
///    topic index
///
/// In dry-run mode steps 3 and 4 only compute what would happen.
#[instrument(skip_all, fields(source = %config.source.display(), dry_run = config.dry_run))]
pub fn split_notes(config: &SplitConfig, progress: &dyn ProgressReporter) -> Result<SplitReport> {
    // --- Phase 1: Load ---
    progress.phase("Reading notes");
    if !config.source.exists() {
        return Err(NotesplitError::SourceMissing {
            path: config.source.clone(),
        });
    }
    let text = fs::read_to_string(&config.source)
        .map_err(|e| NotesplitError::io(&config.source, e))?;

    // --- Phase 2: Segment ---
    let segments = parse_notes(&text, &config.source)?;
    info!(sections = segments.len(), "notes split into sections");

    // --- Phase 3: Backup ---
    progress.phase("Backing up source");
    let (backup_file, backup_created) = if config.dry_run {
        let path = backup::backup_path(&config.source);
        let would_create = !path.exists();
        (path, would_create)
    } else {
        backup::ensure_backup(&config.source)?
    };

    // --- Phase 4: Pages + indexes ---
    progress.phase("Writing pages");
    if !config.dry_run {
        writer::prepare_dir(&config.problems_dir)?;
    }

    let total = segments.len();
    let mut pages = Vec::with_capacity(total);
    let mut seen_slugs: HashSet<String> = HashSet::new();
    let mut planned_links: HashSet<String> = HashSet::new();

    for (i, segment) in segments.iter().enumerate() {
        let topic = config
            .mappings
            .resolve_topic(&segment.title, &config.page.default_topic);
        let slug = resolve_slug(&segment.title, &config.mappings, &config.page.fallback_slug);

        if !seen_slugs.insert(slug.clone()) {
            warn!(title = %segment.title, slug = %slug, "slug already used in this run, page will be overwritten");
        }

        let content = render_page(segment, topic, &config.links, &config.page);
        let page_file = writer::page_path(&config.problems_dir, &slug);
        let line = link_line(&segment.title, &slug, &config.links);

        let link_added = if config.dry_run {
            planned_link(&config.topics_dir, topic, &line, &mut planned_links)?
        } else {
            writer::write_page(&config.problems_dir, &slug, &content)?;
            index::append_link(&config.topics_dir, topic, &line)?
        };

        info!(title = %segment.title, topic, slug = %slug, link_added, "section handled");
        progress.page_written(&segment.title, i + 1, total);

        pages.push(PageRecord {
            title: segment.title.clone(),
            topic: topic.to_string(),
            slug,
            path: relative_display(&config.root, &page_file),
            link_added,
            content_hash: writer::content_hash(&content),
        });
    }

    let report = SplitReport {
        source: relative_display(&config.root, &config.source),
        backup: BackupRecord {
            path: relative_display(&config.root, &backup_file),
            created: backup_created,
        },
        pages,
        dry_run: config.dry_run,
        generated_at: Utc::now(),
    };

    info!(
        pages = report.pages.len(),
        links_added = report.links_added(),
        backup_created,
        "split complete"
    );
    progress.done(&report);

    Ok(report)
}

/// Dry-run counterpart of [`index::append_link`]: reads, never writes.
fn planned_link(
    topics_dir: &Path,
    topic: &str,
    line: &str,
    planned: &mut HashSet<String>,
) -> Result<bool> {
    let path = index::topic_index_path(topics_dir, topic);
    let existing = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(NotesplitError::io(&path, e)),
    };

    Ok(index::needs_link(&existing, line) && planned.insert(format!("{topic}\n{line}")))
}

/// `path` relative to `root`, `/`-separated, for reports and summaries.
fn relative_display(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
