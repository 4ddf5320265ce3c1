//! Rule implementations.
//!
//! - `sort_keys`: Unsorted members in `@sort-keys` structures
//!   (message id `hasUnsortedKeys`)

pub mod sort_keys;
