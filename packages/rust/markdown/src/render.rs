//! Page and index-line rendering.

use notesplit_shared::{LinksConfig, PageConfig, Segment};

/// Render a standalone page for `segment`.
///
/// Layout: breadcrumb line, blank line, `# <title>`, blank line, body.
/// The body is left-trimmed and ends with exactly one newline.
pub fn render_page(segment: &Segment, topic: &str, links: &LinksConfig, page: &PageConfig) -> String {
    let topic_label = page.topic_label.replace("{topic}", topic);
    let mut out = format!(
        "[{back}]({index}) · [{topic_label}]({topic_href})\n\n# {title}\n",
        back = page.back_label,
        index = links.index,
        topic_href = join_link(&links.topics, topic),
        title = segment.title,
    );

    let body = segment.body.trim_start().trim_end();
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body);
        out.push('\n');
    }

    out
}

/// Render the topic index line pointing at a page.
pub fn link_line(title: &str, slug: &str, links: &LinksConfig) -> String {
    format!("- [{title}]({})", join_link(&links.problems, slug))
}

/// `<prefix>/<stem>.md`, tolerating a trailing slash on the prefix.
fn join_link(prefix: &str, stem: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        format!("{stem}.md")
    } else {
        format!("{prefix}/{stem}.md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(title: &str, body: &str) -> Segment {
        Segment {
            title: title.into(),
            body: body.into(),
        }
    }

    #[test]
    fn page_layout_matches_breadcrumb_format() {
        let page = render_page(
            &segment("Alpha Problem", "Some body text.\n"),
            "dp",
            &LinksConfig::default(),
            &PageConfig::default(),
        );

        assert_eq!(
            page,
            "[← 回 APCS 索引](../index.md) · [主題：dp](../topics/dp.md)\n\n\
             # Alpha Problem\n\n\
             Some body text.\n"
        );
    }

    #[test]
    fn body_is_left_trimmed() {
        let page = render_page(
            &segment("A", "\n\n```cpp\nint main() {}\n```\n"),
            "misc",
            &LinksConfig::default(),
            &PageConfig::default(),
        );
        assert!(page.contains("# A\n\n```cpp\n"));
        assert!(page.ends_with("```\n"));
        assert!(!page.ends_with("\n\n"));
    }

    #[test]
    fn empty_body_ends_after_heading() {
        let page = render_page(
            &segment("Empty", "\n"),
            "misc",
            &LinksConfig::default(),
            &PageConfig::default(),
        );
        assert!(page.ends_with("# Empty\n"));
    }

    #[test]
    fn custom_labels_and_links() {
        let links = LinksConfig {
            index: "/index.md".into(),
            topics: "/topics/".into(),
            problems: "/problems".into(),
        };
        let page_cfg = PageConfig {
            back_label: "Back".into(),
            topic_label: "Topic: {topic}".into(),
            ..PageConfig::default()
        };
        let page = render_page(&segment("X", "y\n"), "graph", &links, &page_cfg);
        assert!(page.starts_with("[Back](/index.md) · [Topic: graph](/topics/graph.md)\n"));
    }

    #[test]
    fn link_line_points_at_problem_page() {
        let line = link_line("搬家", "moving", &LinksConfig::default());
        assert_eq!(line, "- [搬家](../problems/moving.md)");
    }

    #[test]
    fn join_link_without_prefix() {
        assert_eq!(join_link("", "alpha"), "alpha.md");
        assert_eq!(join_link("../problems/", "alpha"), "../problems/alpha.md");
    }
}
