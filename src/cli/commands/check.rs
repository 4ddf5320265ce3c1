//! Check command - Report `@sort-keys` structures with unsorted members.
//!
//! Files that fail to parse are reported alongside and also fail the check.

use anyhow::Result;

use super::super::{args::CheckCommand, exit_status::ExitStatus, report};
use crate::{core::CheckContext, issues::Issue, rules::sort_keys::check_unsorted_keys_issues};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let mut issues: Vec<Issue> = check_unsorted_keys_issues(&ctx)
        .into_iter()
        .map(Issue::UnsortedKeys)
        .collect();
    issues.extend(
        ctx.parsed_files_errors()
            .iter()
            .map(|i| Issue::ParseError(i.clone())),
    );

    if issues.is_empty() {
        report::print_success(ctx.files.len());
    } else {
        issues.sort();
        report::report(&issues);
    }

    Ok(ExitStatus::for_check(issues.len()))
}
