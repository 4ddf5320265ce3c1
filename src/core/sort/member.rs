use crate::core::data::TextRange;

use super::key::SortKey;

/// Maximum characters shown when a computed member is summarized.
const MAX_LABEL_CHARS: usize = 24;

/// One sortable member of a structure.
///
/// Members are never rewritten; sorting only reorders references to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub key: SortKey,
    /// Source range of the member, excluding any trailing separator.
    pub range: TextRange,
    pub original_index: usize,
}

impl Member {
    pub fn new(key: SortKey, range: TextRange, original_index: usize) -> Self {
        Self {
            key,
            range,
            original_index,
        }
    }

    /// Short human-readable name for reports.
    ///
    /// Computed members have no static name, so their source text is
    /// summarized instead (`[A]`, `...rest`).
    pub fn label(&self, text: &str) -> String {
        match &self.key {
            SortKey::Numeric(name) | SortKey::Name(name) => name.clone(),
            SortKey::Computed(_) => summarize(self.range.slice(text)),
        }
    }
}

fn summarize(member_text: &str) -> String {
    let member_text = member_text.trim();
    if member_text.starts_with('[')
        && let Some(end) = member_text.find(']')
    {
        return member_text[..=end].to_string();
    }

    let first_line = member_text.lines().next().unwrap_or_default().trim();
    if first_line.chars().count() > MAX_LABEL_CHARS {
        let truncated: String = first_line.chars().take(MAX_LABEL_CHARS).collect();
        format!("{}...", truncated)
    } else {
        first_line.to_string()
    }
}
