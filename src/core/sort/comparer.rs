//! Total order over members.
//!
//! Ascending order is: digit-only keys, then named keys (by UTF-16 code
//! units), then computed keys (by original position). Digit-only keys compare
//! as text by default (`'1'`, `'11'`, `'2'`), or by value with
//! [`NumericOrder::Numeric`]. The reversed flag
//! flips everything except the relative order of computed keys, which have no
//! static value to reverse.

use std::cmp::Ordering;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::key::SortKey;
use super::member::Member;

/// How two digit-only keys compare with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NumericOrder {
    /// `'2'` before `'11'`.
    Numeric,
    /// `'11'` before `'2'`; digit-only keys still rank before names.
    #[default]
    Lexical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Comparer {
    pub reversed: bool,
    pub numeric_order: NumericOrder,
}

impl Comparer {
    pub fn new(reversed: bool, numeric_order: NumericOrder) -> Self {
        Self {
            reversed,
            numeric_order,
        }
    }

    pub fn compare(&self, a: &Member, b: &Member) -> Ordering {
        let ordering = match (&a.key, &b.key) {
            // Not subject to `reversed`
            (SortKey::Computed(x), SortKey::Computed(y)) => return x.cmp(y),
            (SortKey::Numeric(x), SortKey::Numeric(y)) => match self.numeric_order {
                NumericOrder::Numeric => compare_digits(x, y),
                NumericOrder::Lexical => x.cmp(y),
            },
            (SortKey::Name(x), SortKey::Name(y)) => x.encode_utf16().cmp(y.encode_utf16()),
            (x, y) => x.rank().cmp(&y.rank()),
        };

        if self.reversed {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Compare two ASCII digit strings by numeric value, without overflow.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
