//! Per-topic index pages: append-only, deduplicated link lists.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use notesplit_shared::{NotesplitError, Result};

/// Path of the index page for `topic` under `topics_dir`.
pub fn topic_index_path(topics_dir: &Path, topic: &str) -> PathBuf {
    topics_dir.join(format!("{topic}.md"))
}

/// Whether `line` still needs appending to an index with this content.
pub fn needs_link(existing: &str, line: &str) -> bool {
    !existing.contains(line)
}

/// Ensure `line` appears in the index for `topic`.
///
/// Creates the topics directory and an empty index if absent, then appends
/// `line` plus a newline unless the file already contains it. Existing
/// content is never rewritten. Returns `true` if the line was appended.
///
/// A newline is inserted first only when the file has content that does not
/// end in one. An empty index gets no separator, so a fresh index starts with
/// its first link line instead of a blank line.
#[instrument(skip(topics_dir), fields(dir = %topics_dir.display()))]
pub fn append_link(topics_dir: &Path, topic: &str, line: &str) -> Result<bool> {
    fs::create_dir_all(topics_dir).map_err(|e| NotesplitError::io(topics_dir, e))?;
    let path = topic_index_path(topics_dir, topic);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| NotesplitError::io(&path, e))?;

    let existing = fs::read_to_string(&path).map_err(|e| NotesplitError::io(&path, e))?;
    if !needs_link(&existing, line) {
        debug!(path = %path.display(), "link already listed");
        return Ok(false);
    }

    let mut chunk = String::with_capacity(line.len() + 2);
    if !existing.is_empty() && !existing.ends_with('\n') {
        chunk.push('\n');
    }
    chunk.push_str(line);
    chunk.push('\n');

    file.write_all(chunk.as_bytes())
        .map_err(|e| NotesplitError::io(&path, e))?;

    debug!(path = %path.display(), "link appended");
    Ok(true)
}
