//! Fix command - Reorder the members of `@sort-keys` structures.
//!
//! Nested annotated structures are sorted too: each file is re-checked
//! after rewriting until no unsorted structure is left.
//!
//! Use `--apply` to actually rewrite files (default is dry-run mode).

use std::collections::HashSet;

use anyhow::Result;
use colored::Colorize;

use super::super::{
    actions::{Action, ActionStats, SortMembers},
    args::FixCommand,
    exit_status::ExitStatus,
    report::{self, FAILURE_MARK},
};
use crate::{
    core::{CheckContext, MAX_FIX_PASSES},
    issues::UnsortedKeysIssue,
    rules::sort_keys::check_unsorted_keys_issues,
};

pub fn fix(cmd: FixCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let issues: Vec<UnsortedKeysIssue> = check_unsorted_keys_issues(&ctx);
    let file_count = issues
        .iter()
        .map(|issue| issue.context.file_path())
        .collect::<HashSet<_>>()
        .len();

    let mut remaining = 0;
    if issues.is_empty() {
        report::print_success(ctx.files.len());
    } else if apply {
        let stats: ActionStats = SortMembers::run(&issues, &ctx.options)?;
        println!(
            "{} {} structure(s) in {} file(s) (processed {} issue(s)).",
            "Sorted".green().bold(),
            stats.changes_applied,
            stats.files_modified,
            stats.processed
        );
        if stats.skipped > 0 {
            println!(
                "{} {} structure(s) still unsorted after {} passes.",
                FAILURE_MARK.red(),
                stats.skipped,
                MAX_FIX_PASSES
            );
        }
        remaining = stats.skipped;
    } else {
        SortMembers::preview(&issues);
        println!(
            "{} {} structure(s) in {} file(s).",
            "Would sort".yellow().bold(),
            issues.len(),
            file_count
        );
        println!("Run with {} to rewrite these files.", "--apply".cyan());
    }

    let parse_error_count = ctx.parsed_files_errors().len();
    report::print_parse_warning(parse_error_count, ctx.verbose);

    Ok(ExitStatus::for_fix(
        parse_error_count,
        issues.len(),
        apply,
        remaining,
    ))
}
