use super::comparer::Comparer;
use super::member::Member;

/// Members in sorted order, borrowed from the original sequence.
#[derive(Debug)]
pub struct SortOutcome<'a> {
    pub sorted: Vec<&'a Member>,
    /// True if any position now holds a different member.
    pub changed: bool,
}

/// Stable sort of `members` by `comparer`.
///
/// Change detection compares member identity at each position, not member
/// values, so two members with equal keys never count as a change.
pub fn sort_members<'a>(members: &'a [Member], comparer: &Comparer) -> SortOutcome<'a> {
    let mut sorted: Vec<&Member> = members.iter().collect();
    sorted.sort_by(|a, b| comparer.compare(a, b));

    let changed = members
        .iter()
        .zip(&sorted)
        .any(|(original, sorted)| !std::ptr::eq(original, *sorted));

    SortOutcome { sorted, changed }
}
