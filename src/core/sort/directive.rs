//! `@sort-keys` directive parsing.
//!
//! A directive is a comment whose last line is the line right above the
//! structure it annotates:
//!
//! ```ts
//! // @sort-keys
//! const object = { a: 1, b: 2 }
//!
//! /* @sort-keys reversed */
//! enum Keys { B, A }
//! ```

use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::core::comments::CommentSource;

/// Directive name used when the config does not override it.
pub const DEFAULT_DIRECTIVE: &str = "sort-keys";

/// Modifier that flips the ordering of named and numeric keys.
pub const REVERSED_MODIFIER: &str = "reversed";

static DEFAULT_MATCHER: LazyLock<DirectiveMatcher> = LazyLock::new(|| {
    DirectiveMatcher::new(DEFAULT_DIRECTIVE).expect("default directive name is valid")
});

/// A parsed directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directive {
    pub is_reversed: bool,
}

/// Matches comment bodies against one directive name.
///
/// Leading `@`, `*` (JSDoc continuation) and whitespace are ignored; the name
/// must be followed by whitespace or the end of the comment.
#[derive(Debug, Clone)]
pub struct DirectiveMatcher {
    name: String,
    pattern: Regex,
}

impl Default for DirectiveMatcher {
    fn default() -> Self {
        DEFAULT_MATCHER.clone()
    }
}

impl DirectiveMatcher {
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim().trim_start_matches('@');
        if name.is_empty() || name.contains(char::is_whitespace) {
            bail!("Invalid directive name: \"{}\"", name);
        }
        let pattern = Regex::new(&format!(
            r"^[\s*@]*{}(?:\s(?P<modifiers>[\s\S]*))?$",
            regex::escape(name)
        ))
        .with_context(|| format!("Invalid directive name: \"{}\"", name))?;

        Ok(Self {
            name: name.to_string(),
            pattern,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse a directive from comment text (swc has already stripped `//` and `/* */`).
    ///
    /// Returns `None` for any comment that is not this directive; a malformed
    /// directive is simply not a directive.
    pub fn parse(&self, text: &str) -> Option<Directive> {
        let captures = self.pattern.captures(text)?;
        let is_reversed = captures
            .name("modifiers")
            .map(|m| {
                m.as_str()
                    .split(|c: char| c.is_whitespace() || c == '*')
                    .any(|token| token == REVERSED_MODIFIER)
            })
            .unwrap_or(false);

        Some(Directive { is_reversed })
    }

    /// Find the directive whose comment ends on `expected_end_line`.
    ///
    /// When several comments on that line qualify, the first one in source
    /// order wins.
    pub fn find(
        &self,
        comments: &impl CommentSource,
        expected_end_line: usize,
    ) -> Option<Directive> {
        if expected_end_line == 0 {
            return None;
        }
        comments
            .comments_ending_on_line(expected_end_line)
            .iter()
            .find_map(|comment| self.parse(&comment.text))
    }
}
