//! Sorting engine for `@sort-keys` annotated structures.
//!
//! Everything in here is pure: it works on extracted [`Member`]s and plain
//! source text, never on the AST, so each piece can be tested in isolation.
//!
//! ## Module Structure
//!
//! - `directive`: Finds and parses the `@sort-keys [reversed]` comment
//! - `key`: Sort keys (`Numeric`, `Name`, `Computed`) and their classification
//! - `member`: A sortable member (key + source range + original index)
//! - `comparer`: Total order over members, honoring the reversed flag
//! - `permutation`: Stable sort plus identity-based change detection
//! - `patch`: Rewrites the enclosing text so members appear in sorted order

pub mod comparer;
pub mod directive;
pub mod key;
pub mod member;
pub mod patch;
pub mod permutation;

pub use comparer::{Comparer, NumericOrder};
pub use directive::{DEFAULT_DIRECTIVE, Directive, DirectiveMatcher, REVERSED_MODIFIER};
pub use key::SortKey;
pub use member::Member;
pub use patch::{RangeDiff, build_patched_text};
pub use permutation::{SortOutcome, sort_members};
