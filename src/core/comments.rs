//! Per-file comment index keyed by the line each comment ends on.
//!
//! Directive lookup only ever asks one question: "which comments end on line N?"
//! The index answers it without walking the swc comment maps again for every
//! candidate structure.

use std::collections::{BTreeMap, HashSet};

use swc_common::{
    BytePos, SourceMap, Span,
    comments::{CommentKind, SingleThreadedComments},
};

/// A comment with its text and 1-based line span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceComment {
    /// Comment body; swc has already stripped `//` and `/* */`.
    pub text: String,
    pub kind: CommentKind,
    pub span: Span,
    pub start_line: usize,
    pub end_line: usize,
}

/// Read-only lookup of comments by end line.
pub trait CommentSource {
    /// Comments whose last line is `line`, in source order.
    fn comments_ending_on_line(&self, line: usize) -> &[SourceComment];
}

#[derive(Debug, Clone, Default)]
pub struct CommentIndex {
    by_end_line: BTreeMap<usize, Vec<SourceComment>>,
}

impl CommentIndex {
    pub fn new(comments: impl IntoIterator<Item = SourceComment>) -> Self {
        let mut by_end_line: BTreeMap<usize, Vec<SourceComment>> = BTreeMap::new();
        for comment in comments {
            by_end_line.entry(comment.end_line).or_default().push(comment);
        }
        for comments in by_end_line.values_mut() {
            comments.sort_by_key(|c| c.span.lo);
        }
        Self { by_end_line }
    }

    /// Build the index from swc's leading/trailing comment maps.
    ///
    /// A comment may be registered under several positions; it is kept once.
    pub fn from_swc(comments: &SingleThreadedComments, source_map: &SourceMap) -> Self {
        let (leading, trailing) = comments.borrow_all();
        let mut seen: HashSet<BytePos> = HashSet::new();

        let collected: Vec<SourceComment> = leading
            .values()
            .chain(trailing.values())
            .flatten()
            .filter(|cmt| seen.insert(cmt.span.lo))
            .map(|cmt| {
                let start_line = source_map.lookup_char_pos(cmt.span.lo).line;
                // `hi` is exclusive; step back onto the last character of the comment
                let last = BytePos(cmt.span.hi.0.saturating_sub(1).max(cmt.span.lo.0));
                let end_line = source_map.lookup_char_pos(last).line;
                SourceComment {
                    text: cmt.text.to_string(),
                    kind: cmt.kind,
                    span: cmt.span,
                    start_line,
                    end_line,
                }
            })
            .collect();

        Self::new(collected)
    }

    pub fn len(&self) -> usize {
        self.by_end_line.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_end_line.is_empty()
    }
}

impl CommentSource for CommentIndex {
    fn comments_ending_on_line(&self, line: usize) -> &[SourceComment] {
        self.by_end_line
            .get(&line)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
