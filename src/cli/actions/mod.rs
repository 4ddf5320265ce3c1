//! Actions for processing sort-keys issues.
//!
//! Actions turn issues into file modifications. Every action has a dry-run
//! `preview` and a `run` that writes the files.
//!
//! ## Actions
//!
//! - [`SortMembers`]: Rewrite annotated structures with their members sorted (fix)
//!
//! ## Example
//!
//! ```ignore
//! use sortkeys::cli::actions::{Action, SortMembers};
//!
//! let issues = check_unsorted_keys_issues(&ctx);
//! let stats = SortMembers::run(&issues, &ctx.options)?;
//! ```

mod sort_members;
mod traits;

pub use sort_members::SortMembers;
pub use traits::{Action, ActionStats};
