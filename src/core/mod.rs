//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `comments`: Per-file comment index queried by end line
//! - `context`: `CheckContext`, config + scanned files + lazily computed analysis
//! - `data`: Shared data types (`TextRange`, `Fix`, `SourceContext`)
//! - `file_scanner`: Source file discovery with includes/ignores
//! - `fixer`: Applies fixes, re-checking until nested structures settle
//! - `parsers`: swc-based TS/TSX/JS/JSX parsing
//! - `sort`: Directive parsing, sort keys, comparer, permutation and patcher

pub mod comments;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod fixer;
pub mod parsers;
pub mod sort;

pub use comments::{CommentIndex, CommentSource, SourceComment};
pub use context::{AllUnsortedKeysIssues, CheckContext};
pub use data::{Fix, SourceContext, SourceLocation, TextRange};
pub use fixer::{AppliedFixes, FixOutcome, MAX_FIX_PASSES, apply_fixes, fix_source};
