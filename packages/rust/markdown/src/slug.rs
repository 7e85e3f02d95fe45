//! Title → file stem resolution.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use notesplit_shared::TitleMappings;

/// Resolve the page slug for `title`.
///
/// The mapping table wins; otherwise the title is slugified, and a title that
/// slugifies to nothing gets `fallback`.
pub fn resolve_slug(title: &str, mappings: &TitleMappings, fallback: &str) -> String {
    if let Some(slug) = mappings.slug_for(title) {
        return slug.to_string();
    }

    let slug = slugify(title);
    if slug.is_empty() {
        tracing::debug!(title, fallback, "title slugified to nothing, using fallback");
        fallback.to_string()
    } else {
        slug
    }
}

/// Derive a slug from free text. May return an empty string.
///
/// NFKD-decomposes, drops everything but letters, numbers, `_`, `-` and
/// whitespace (so combining accents go), trims, lowercases, then collapses
/// runs of whitespace, `_` and `-` into one `-`.
pub fn slugify(title: &str) -> String {
    static NON_WORD_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s-]").expect("valid regex"));
    static SEPARATOR_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid regex"));

    let decomposed: String = title.nfkd().collect();
    let kept = NON_WORD_RE.replace_all(&decomposed, "");
    let lowered = kept.trim().to_lowercase();

    SEPARATOR_RE.replace_all(&lowered, "-").into_owned()
}
