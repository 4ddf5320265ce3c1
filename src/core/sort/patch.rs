//! Range-diff patcher.
//!
//! Rewrites the text of an enclosing structure so that each member slot holds
//! the text of the member that sorts into it. Everything between slots
//! (separators, whitespace, comments, trailing commas) is copied verbatim.

use crate::core::data::TextRange;

/// One slot substitution: the text at `source` is written where `target` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeDiff {
    /// Range of the member currently occupying the slot.
    pub target: TextRange,
    /// Range of the member whose text moves into the slot.
    pub source: TextRange,
}

impl RangeDiff {
    pub fn new(target: TextRange, source: TextRange) -> Self {
        Self { target, source }
    }
}

/// Build the replacement text for `enclosing`.
///
/// `source_text` is the whole file and all ranges are offsets into it. Slots
/// must lie inside `enclosing` and must not overlap; a slot that violates
/// either is left untouched.
pub fn build_patched_text(source_text: &str, enclosing: TextRange, diffs: &[RangeDiff]) -> String {
    let mut diffs: Vec<&RangeDiff> = diffs
        .iter()
        .filter(|diff| enclosing.contains(&diff.target))
        .collect();
    diffs.sort_by_key(|diff| diff.target.start);

    let mut patched = String::with_capacity(enclosing.len());
    let mut cursor = enclosing.start;

    for diff in diffs {
        if diff.target.start < cursor {
            continue;
        }
        patched.push_str(TextRange::new(cursor, diff.target.start).slice(source_text));
        patched.push_str(diff.source.slice(source_text));
        cursor = diff.target.end;
    }

    patched.push_str(TextRange::new(cursor, enclosing.end).slice(source_text));
    patched
}
