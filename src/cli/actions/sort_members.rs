//! SortMembers action.
//!
//! Rewrites `@sort-keys` structures with their members in sorted order.
//! Used by the `sortkeys fix` command.

use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
};

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::traits::{Action, ActionStats};
use crate::{core::fix_source, issues::UnsortedKeysIssue, rules::sort_keys::RuleOptions};

/// Action to sort the members of annotated structures.
///
/// Fixes are recomputed from each file's current text rather than taken from
/// the issues, so nested structures and files changed since the check are
/// handled correctly.
pub struct SortMembers;

impl SortMembers {
    fn group_by_file(issues: &[UnsortedKeysIssue]) -> BTreeMap<&str, usize> {
        let mut by_file: BTreeMap<&str, usize> = BTreeMap::new();
        for issue in issues {
            *by_file.entry(issue.context.file_path()).or_default() += 1;
        }
        by_file
    }

    fn sort_file(file_path: &str, issue_count: usize, options: &RuleOptions) -> Result<ActionStats> {
        let code = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?;
        let outcome = fix_source(&code, file_path, options)?;

        if outcome.is_changed() {
            fs::write(file_path, &outcome.output)
                .with_context(|| format!("Failed to write file: {}", file_path))?;
        }

        Ok(ActionStats {
            processed: issue_count,
            skipped: outcome.remaining,
            changes_applied: outcome.applied,
            files_modified: usize::from(outcome.is_changed()),
        })
    }

    fn preview_to<W: Write>(issues: &[UnsortedKeysIssue], writer: &mut W) {
        for issue in issues {
            let ctx = &issue.context;
            let line = ctx.line();
            let col = ctx.col();
            let source_line = &ctx.source_line;

            // Clickable location: --> path:line:col
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}  {}",
                "-->".blue(),
                ctx.file_path(),
                line,
                col,
                format!("[{}]", issue.kind).dimmed().cyan()
            );
            let _ = writeln!(writer, "     {}", "|".blue());
            let _ = writeln!(
                writer,
                " {:>3} {} {}",
                line.to_string().blue(),
                "|".blue(),
                source_line
            );

            let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            let _ = writeln!(
                writer,
                "     {} {:>padding$}{}",
                "|".blue(),
                "",
                "^".green(),
                padding = caret_padding
            );
            let _ = writeln!(
                writer,
                "   {} sorted: {}",
                "=".blue(),
                issue.expected_order.join(", ")
            );
            let _ = writeln!(writer);
        }
    }
}

impl Action<UnsortedKeysIssue> for SortMembers {
    fn run(issues: &[UnsortedKeysIssue], options: &RuleOptions) -> Result<ActionStats> {
        let mut stats = ActionStats::default();
        for (file_path, issue_count) in Self::group_by_file(issues) {
            stats += Self::sort_file(file_path, issue_count, options)?;
        }
        Ok(stats)
    }

    fn preview(issues: &[UnsortedKeysIssue]) {
        Self::preview_to(issues, &mut io::stdout().lock());
    }
}
