//! Action trait definition.

use anyhow::Result;

use crate::rules::sort_keys::RuleOptions;

/// Statistics from running an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionStats {
    /// Number of issues processed.
    pub processed: usize,
    /// Number of issues left unresolved.
    pub skipped: usize,
    /// Number of changes actually applied to files.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

impl std::ops::AddAssign for ActionStats {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.changes_applied += other.changes_applied;
        self.files_modified += other.files_modified;
    }
}

/// Action trait, implemented per issue type.
///
/// # Example
///
/// ```ignore
/// if apply {
///     SortMembers::run(&issues, &options)?;
/// } else {
///     SortMembers::preview(&issues);
/// }
/// ```
pub trait Action<I> {
    /// Modify files to resolve `issues`.
    fn run(issues: &[I], options: &RuleOptions) -> Result<ActionStats>;

    /// Describe what `run` would change (dry-run mode).
    fn preview(issues: &[I]);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_action_stats_add_assign() {
        let mut stats1 = ActionStats {
            processed: 5,
            skipped: 1,
            changes_applied: 4,
            files_modified: 2,
        };
        let stats2 = ActionStats {
            processed: 3,
            skipped: 2,
            changes_applied: 1,
            files_modified: 1,
        };

        stats1 += stats2;

        assert_eq!(
            stats1,
            ActionStats {
                processed: 8,
                skipped: 3,
                changes_applied: 5,
                files_modified: 3,
            }
        );
    }

    #[test]
    fn test_action_stats_default() {
        assert_eq!(
            ActionStats::default(),
            ActionStats {
                processed: 0,
                skipped: 0,
                changes_applied: 0,
                files_modified: 0,
            }
        );
    }
}
