//! Markdown handling for notesplit: section segmentation, slugs, and page
//! rendering.
//!
//! Everything here is pure string work; file I/O lives in `notesplit-core`.

mod render;
mod slug;

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use notesplit_shared::{NotesplitError, Result, Segment};

pub use render::{link_line, render_page};
pub use slug::{resolve_slug, slugify};

// ---------------------------------------------------------------------------
// Segmenter
// ---------------------------------------------------------------------------

/// Split notes into `## <title>` sections.
///
/// A boundary is decided by line shape alone: every `## <title>` line starts
/// a new section. Text before the first heading is dropped. Returns an empty
/// list when the notes contain no second-level heading.
#[instrument(skip_all, fields(len = text.len()))]
pub fn split_sections(text: &str) -> Vec<Segment> {
    static H2_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^##\s+(\S.*?)\s*$").expect("valid regex"));

    let mut segments = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        if let Some(caps) = H2_RE.captures(line) {
            if let Some((title, lines)) = current.take() {
                segments.push(finish_segment(title, &lines));
            }
            current = Some((caps[1].trim().to_string(), Vec::new()));
            continue;
        }

        if let Some((_, lines)) = current.as_mut() {
            lines.push(line);
        }
    }

    if let Some((title, lines)) = current {
        segments.push(finish_segment(title, &lines));
    }

    debug!(count = segments.len(), "sections split");
    segments
}

/// Split notes read from `path`, failing when no section is found.
pub fn parse_notes(text: &str, path: &Path) -> Result<Vec<Segment>> {
    let segments = split_sections(text);
    if segments.is_empty() {
        return Err(NotesplitError::NoSegmentsFound {
            path: path.to_path_buf(),
        });
    }
    Ok(segments)
}

fn finish_segment(title: String, lines: &[&str]) -> Segment {
    let mut body = lines.join("\n").trim_end().to_string();
    body.push('\n');
    Segment { title, body }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_path(name: &str) -> std::path::PathBuf {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(name)
    }

    fn load_fixture(name: &str) -> String {
        fs::read_to_string(fixture_path(name))
            .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"))
    }

    #[test]
    fn splits_two_sections() {
        let text = "## Alpha Problem\nSome body text.\n\n## Beta Problem\nOther text.\n";
        let segs = split_sections(text);

        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].title, "Alpha Problem");
        assert_eq!(segs[0].body, "Some body text.\n");
        assert_eq!(segs[1].title, "Beta Problem");
        assert_eq!(segs[1].body, "Other text.\n");
    }

    #[test]
    fn drops_preamble_before_first_heading() {
        let text = "# Notes\n\nintro paragraph\n\n## Only\nbody\n";
        let segs = split_sections(text);
        assert_eq!(segs.len(), 1);
        assert!(!segs[0].body.contains("intro"));
    }

    #[test]
    fn deeper_headings_stay_in_body() {
        let text = "## Top\n### Sub\ntext\n#### Deeper\n";
        let segs = split_sections(text);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].body, "### Sub\ntext\n#### Deeper\n");
    }

    #[test]
    fn heading_needs_space_and_text() {
        let text = "## Real\n##NoSpace\n##   \nend\n";
        let segs = split_sections(text);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].body, "##NoSpace\n##   \nend\n");
    }

    #[test]
    fn title_is_trimmed() {
        let segs = split_sections("##   Spaced Title   \nx\n");
        assert_eq!(segs[0].title, "Spaced Title");
    }

    #[test]
    fn trailing_blank_lines_collapse_to_one_newline() {
        let segs = split_sections("## A\nline\n\n\n   \n\n## B\n");
        assert_eq!(segs[0].body, "line\n");
        assert_eq!(segs[1].body, "\n");
    }

    #[test]
    fn heading_inside_code_fence_starts_new_section() {
        let text = "## A\n```cpp\nint x;\n## B\nb\n## C\nc\n";
        let segs = split_sections(text);

        let titles: Vec<&str> = segs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(segs[0].body, "```cpp\nint x;\n");
    }

    #[test]
    fn unbalanced_fence_in_preamble_does_not_hide_headings() {
        let segs = parse_notes("intro\n```\n## A\na\n## B\nb\n", Path::new("notes.md")).unwrap();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].title, "A");
        assert_eq!(segs[1].body, "b\n");
    }

    #[test]
    fn crlf_input_is_handled() {
        let segs = split_sections("## A\r\nbody\r\n## B\r\nmore\r\n");
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].title, "A");
        assert_eq!(segs[0].body, "body\n");
    }

    #[test]
    fn parse_notes_rejects_headingless_text() {
        let err = parse_notes("# Title only\n\ntext\n", Path::new("notes.md")).unwrap_err();
        assert!(matches!(err, NotesplitError::NoSegmentsFound { .. }));
    }

    #[test]
    fn fixture_section_count_and_order() {
        let text = load_fixture("notes/apcs.md");
        let segs = parse_notes(&text, Path::new("apcs.md")).unwrap();

        let titles: Vec<&str> = segs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["搬家", "內積", "Tree Distance I (CSES 1132)", "未分類題目"]);
        assert!(segs.iter().all(|s| !s.title.is_empty()));
    }

    #[test]
    fn bodies_reproduce_content_after_first_heading() {
        let text = load_fixture("notes/apcs.md");
        let segs = split_sections(&text);

        let first = text.find("## ").expect("fixture has a heading");
        let normalize = |s: &str| {
            s.lines()
                .map(str::trim_end)
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        };

        let rebuilt: String = segs
            .iter()
            .map(|s| format!("## {}\n{}", s.title, s.body))
            .collect();
        assert_eq!(normalize(&rebuilt), normalize(&text[first..]));
    }
}
