//! Incremental repair of the node ordering.
//!
//! After a placement exactly one node's key has grown. Everything left of
//! its position is still ordered before it, so only the suffix needs a look:
//! a binary search finds the new slot and a contiguous shift moves the entry
//! there. Entries in between keep their relative order.

/// Find the slot the entry at `from` must move to.
///
/// `seq` must be sorted under `precedes` everywhere except at `from`, whose
/// key may have grown. `precedes(a, b)` is the strict ordering on the
/// indices stored in `seq`. Returns the last position `p >= from` such that
/// no entry in `from + 1..=p` sorts after the moved entry, i.e. an upper
/// bound search over the suffix.
///
/// # Panics
///
/// Panics if `from >= seq.len()`.
pub fn find_new_position<F>(seq: &[usize], from: usize, precedes: F) -> usize
where
    F: Fn(usize, usize) -> bool,
{
    assert!(from < seq.len(), "reposition from {from} out of range {}", seq.len());

    let moved = seq[from];
    let mut low = from;
    let mut high = seq.len();

    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if precedes(moved, seq[mid]) {
            high = mid;
        } else {
            low = mid;
        }
    }

    low
}

/// Move the entry at `current` to `target`, shifting `current + 1..=target`
/// one slot toward `current`.
///
/// # Panics
///
/// Panics if `target < current` or `target` is out of range.
pub fn shift_to(seq: &mut [usize], current: usize, target: usize) {
    assert!(
        current <= target,
        "shift target {target} is left of current position {current}"
    );
    if current == target {
        return;
    }
    seq[current..=target].rotate_left(1);
}

/// Restore sortedness after the key at `from` grew. Returns the new position.
pub fn reposition<F>(seq: &mut [usize], from: usize, precedes: F) -> usize
where
    F: Fn(usize, usize) -> bool,
{
    let target = find_new_position(seq, from, precedes);
    shift_to(seq, from, target);
    target
}
