//! Problem page output.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use notesplit_shared::{NotesplitError, Result};

/// Path of the page for `slug` under `problems_dir`.
pub fn page_path(problems_dir: &Path, slug: &str) -> PathBuf {
    problems_dir.join(format!("{slug}.md"))
}

/// Create the problems directory (and parents) if absent.
pub fn prepare_dir(problems_dir: &Path) -> Result<()> {
    fs::create_dir_all(problems_dir).map_err(|e| NotesplitError::io(problems_dir, e))
}

/// Write a rendered page, replacing any existing file of the same name.
pub fn write_page(problems_dir: &Path, slug: &str, content: &str) -> Result<PathBuf> {
    let path = page_path(problems_dir, slug);
    fs::write(&path, content).map_err(|e| NotesplitError::io(&path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote page");
    Ok(path)
}

/// Hex SHA-256 of rendered content.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "notesplit-writer-test-{}",
            uuid::Uuid::now_v7()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn prepare_dir_creates_parents() {
        let tmp = temp_dir();
        let dir = tmp.join("a/b/problems");
        prepare_dir(&dir).unwrap();
        assert!(dir.is_dir());
        // Idempotent.
        prepare_dir(&dir).unwrap();
    }

    #[test]
    fn write_page_overwrites() {
        let tmp = temp_dir();
        write_page(&tmp, "alpha", "old\n").unwrap();
        let path = write_page(&tmp, "alpha", "new\n").unwrap();

        assert_eq!(path, tmp.join("alpha.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), "new\n");
    }

    #[test]
    fn write_into_missing_dir_fails_with_path() {
        let tmp = temp_dir();
        let err = write_page(&tmp.join("nope"), "alpha", "x").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn content_hash_is_stable_hex() {
        let a = content_hash("# A\n");
        assert_eq!(a.len(), 64);
        assert_eq!(a, content_hash("# A\n"));
        assert_ne!(a, content_hash("# B\n"));
    }
}
