use swc_common::{BytePos, Span};

/// Half-open byte range `[start, end)` into a file's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Convert an swc span into offsets relative to the file that starts at `base`.
    pub fn from_span(span: Span, base: BytePos) -> Self {
        Self {
            start: span.lo.0.saturating_sub(base.0) as usize,
            end: span.hi.0.saturating_sub(base.0) as usize,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, other: &TextRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn overlaps(&self, other: &TextRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Text covered by this range, or `""` if it is out of bounds.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or_default()
    }
}

/// A replacement of one source range by new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub range: TextRange,
    pub replacement: String,
}

impl Fix {
    pub fn new(range: TextRange, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }
}
