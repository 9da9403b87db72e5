//! Machine-readable comment tags (`+key=value` lines).

use indexmap::IndexMap;

/// Sigil that marks a comment line as a machine-readable tag.
pub const TAG_MARKER: &str = "+";

/// Tags extracted from a block of comment lines, in first-seen order.
///
/// A tag may appear several times; every occurrence is kept. Tags without
/// a `=value` part are recorded with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentTags {
    tags: IndexMap<String, Vec<String>>,
}

impl CommentTags {
    /// Whether the tag is present at all.
    pub fn contains(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    /// All values recorded for a tag.
    pub fn values(&self, key: &str) -> &[String] {
        self.tags.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// The value of a tag that is expected to appear exactly once.
    pub fn single(&self, key: &str) -> Option<&str> {
        match self.values(key) {
            [value] => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn strip_comment_prefix(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix("//").map(str::trim_start).unwrap_or(line)
}

/// Extract `+key=value` tags from comment lines.
///
/// Lines may carry a leading `//` comment marker; it is ignored.
pub fn extract_comment_tags<S: AsRef<str>>(lines: &[S]) -> CommentTags {
    let mut tags: IndexMap<String, Vec<String>> = IndexMap::new();

    for line in lines {
        let Some(tag) = strip_comment_prefix(line.as_ref()).strip_prefix(TAG_MARKER) else {
            continue;
        };
        let (key, value) = tag.split_once('=').unwrap_or((tag, ""));
        tags.entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    CommentTags { tags }
}

/// Drop tag lines, keeping the prose.
pub fn filter_comment_tags<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !strip_comment_prefix(line).starts_with(TAG_MARKER))
        .map(str::to_string)
        .collect()
}
