//! One-time snapshot of the source notes before anything is mutated.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use notesplit_shared::{NotesplitError, Result};

/// Backup location for `source`: same directory, extension replaced by
/// `backup.md` (`notes.md` → `notes.backup.md`).
pub fn backup_path(source: &Path) -> PathBuf {
    source.with_extension("backup.md")
}

/// Copy `source` to its backup path unless a backup already exists.
///
/// Returns the backup path and whether this call created it. An existing
/// backup is never touched, even if the source changed since.
#[instrument(skip_all, fields(source = %source.display()))]
pub fn ensure_backup(source: &Path) -> Result<(PathBuf, bool)> {
    let backup = backup_path(source);

    if backup.exists() {
        debug!(backup = %backup.display(), "backup already present, leaving it");
        return Ok((backup, false));
    }

    fs::copy(source, &backup).map_err(|e| NotesplitError::io(&backup, e))?;
    preserve_mtime(source, &backup)?;

    info!(backup = %backup.display(), "backed up source notes");
    Ok((backup, true))
}

/// Carry the source's modification time over to the copy.
/// `fs::copy` already carries permissions.
fn preserve_mtime(source: &Path, backup: &Path) -> Result<()> {
    let modified = fs::metadata(source)
        .and_then(|m| m.modified())
        .map_err(|e| NotesplitError::io(source, e))?;

    File::options()
        .write(true)
        .open(backup)
        .and_then(|f| f.set_modified(modified))
        .map_err(|e| NotesplitError::io(backup, e))
}
