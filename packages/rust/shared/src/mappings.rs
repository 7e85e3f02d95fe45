//! Title lookup tables: which topic a section belongs to and which file
//! stem its page gets.
//!
//! The built-in tables are plain literals. Project config may layer extra
//! entries on top at startup; after that the tables are read-only.

use std::collections::{BTreeMap, HashMap};

/// Built-in title → topic table.
const BUILTIN_TOPICS: &[(&str, &str)] = &[
    ("互補 CP", "bit-hash"),
    ("置物櫃分配", "dp"),
    ("飛黃騰達", "greedy-lis"),
    ("幸運數字", "range-ds"),
    ("搬家", "graph"),
    ("美食博覽會", "misc"),
    ("內積", "dp"),
    ("低地距離", "range-ds"),
    ("投資遊戲", "dp"),
    ("切割費用", "range-ds"),
    ("階梯數字", "dp"),
    ("Tree Distance I (CSES 1132)", "graph"),
    ("真假子圖", "graph"),
    ("邏輯電路", "graph"),
    ("病毒演化", "graph"),
];

/// Built-in title → slug table. Keeps CJK titles from collapsing into
/// unreadable or placeholder file names.
const BUILTIN_SLUGS: &[(&str, &str)] = &[
    ("互補 CP", "complementary-pairs"),
    ("置物櫃分配", "locker"),
    ("飛黃騰達", "rising"),
    ("幸運數字", "lucky-number"),
    ("搬家", "moving"),
    ("美食博覽會", "food-expo"),
    ("內積", "dot-product"),
    ("低地距離", "lowland-distance"),
    ("投資遊戲", "investment-skip-k"),
    ("切割費用", "cut-cost"),
    ("階梯數字", "digit-dp"),
    ("Tree Distance I (CSES 1132)", "tree-distance-i"),
    ("真假子圖", "fake-subgraph-2sat-dsu"),
    ("邏輯電路", "logic-circuit-dag"),
    ("病毒演化", "virus-evolution-tree-dp"),
];

/// Exact-match title lookup tables.
#[derive(Debug, Clone, Default)]
pub struct TitleMappings {
    topics: HashMap<String, String>,
    slugs: HashMap<String, String>,
}

impl TitleMappings {
    /// Tables holding only the built-in entries.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_TOPICS, BUILTIN_SLUGS)
    }

    /// Build tables from literal `(title, value)` pairs.
    pub fn from_pairs(topics: &[(&str, &str)], slugs: &[(&str, &str)]) -> Self {
        Self {
            topics: owned_table(topics),
            slugs: owned_table(slugs),
        }
    }

    /// Layer extra entries over these tables; extra entries win on conflict.
    pub fn with_overrides(
        mut self,
        topics: &BTreeMap<String, String>,
        slugs: &BTreeMap<String, String>,
    ) -> Self {
        self.topics
            .extend(topics.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.slugs
            .extend(slugs.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Topic listed for `title`, if any.
    pub fn topic_for(&self, title: &str) -> Option<&str> {
        self.topics.get(title).map(String::as_str)
    }

    /// Slug listed for `title`, if any.
    pub fn slug_for(&self, title: &str) -> Option<&str> {
        self.slugs.get(title).map(String::as_str)
    }

    /// Topic for `title`, or `default_topic` when unlisted.
    pub fn resolve_topic<'a>(&'a self, title: &str, default_topic: &'a str) -> &'a str {
        self.topic_for(title).unwrap_or(default_topic)
    }
}

fn owned_table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_cover_the_same_titles() {
        let m = TitleMappings::builtin();
        for (title, _) in BUILTIN_TOPICS {
            assert!(m.slug_for(title).is_some(), "no slug for {title}");
        }
        assert_eq!(BUILTIN_TOPICS.len(), BUILTIN_SLUGS.len());
    }

    #[test]
    fn lookup_is_exact_match() {
        let m = TitleMappings::builtin();
        assert_eq!(m.topic_for("Tree Distance I (CSES 1132)"), Some("graph"));
        assert_eq!(m.topic_for("tree distance i (cses 1132)"), None);
        assert_eq!(m.slug_for("搬家 "), None);
    }

    #[test]
    fn resolve_topic_defaults_when_unlisted() {
        let m = TitleMappings::builtin();
        assert_eq!(m.resolve_topic("內積", "misc"), "dp");
        assert_eq!(m.resolve_topic("Unknown Problem", "misc"), "misc");
    }

    #[test]
    fn overrides_win_over_builtin() {
        let mut topics = BTreeMap::new();
        topics.insert("美食博覽會".to_string(), "dp".to_string());
        let mut slugs = BTreeMap::new();
        slugs.insert("New One".to_string(), "new-one".to_string());

        let m = TitleMappings::builtin().with_overrides(&topics, &slugs);
        assert_eq!(m.topic_for("美食博覽會"), Some("dp"));
        assert_eq!(m.slug_for("New One"), Some("new-one"));
        assert_eq!(m.slug_for("搬家"), Some("moving"));
    }
}
