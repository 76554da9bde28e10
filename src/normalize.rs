//! # Weight Normalizer
//! Pure functions that keep a [`SelectionSet`]'s shares summing to 100.
//!
//! - `add` resets every share to an equal split (manual adjustments are
//!   discarded on purpose).
//! - `remove` rescales the survivors proportionally.
//! - `breakpoints_from_shares` / `shares_from_breakpoints` convert between
//!   per-entry shares and the `n-1` interior handles of a segmented 0–100
//!   control.
//!
//! Fallback policy, shared by every function here: negative and non-finite
//! shares count as 0, and a zero total is redistributed equally. Nothing in
//! this module panics or returns an error.

use crate::selection::{SelectionEntry, SelectionSet, SHARE_TOTAL};

/// Add `item_id` with an equal split across all entries.
///
/// The first entry gets 100; adding to `n` entries gives every entry
/// `100 / (n + 1)`. Adding an id that is already present returns the set
/// unchanged.
pub fn add(set: &SelectionSet, item_id: &str) -> SelectionSet {
    if set.contains(item_id) {
        return set.clone();
    }
    if set.is_empty() {
        return set.pushed(SelectionEntry::new(item_id, SHARE_TOTAL));
    }

    let equal = SHARE_TOTAL / (set.len() + 1) as f64;
    set.with_shares(&vec![equal; set.len()])
        .pushed(SelectionEntry::new(item_id, equal))
}

/// Remove `item_id` and rescale the remaining shares to sum to 100.
///
/// Removing an absent id returns the set unchanged. If every survivor had
/// share 0, they split 100 equally.
pub fn remove(set: &SelectionSet, item_id: &str) -> SelectionSet {
    let Some(index) = set.position(item_id) else {
        return set.clone();
    };
    let remaining = set.without_index(index);
    if remaining.is_empty() {
        return remaining;
    }
    let shares = renormalize(&remaining.shares());
    remaining.with_shares(&shares)
}

/// Cumulative shares of entries `0..=i` for `i in 0..n-1`.
///
/// Length is `n - 1` (empty for `n <= 1`); the last entry's share is the gap
/// between the final breakpoint and 100.
pub fn breakpoints_from_shares(set: &SelectionSet) -> Vec<f64> {
    let n = set.len();
    let mut acc = 0.0;
    set.entries()
        .iter()
        .take(n.saturating_sub(1))
        .map(|e| {
            acc += e.share;
            acc
        })
        .collect()
}

/// Shares implied by a (possibly malformed) breakpoint sequence.
///
/// For `n` entries the effective breakpoints are `b_0..b_{n-1}`: `b_i` is
/// `breakpoints[i]` when present and 100 when missing, and extras are
/// ignored. A control with `n - 1` handles therefore always ends at 100.
/// Each segment is `max(0, b_i - b_{i-1})` with `b_{-1} = 0`, so handles
/// dragged past each other produce empty segments rather than negative
/// ones. Breakpoints are clamped to the control's `0..=100` range and a
/// non-finite breakpoint repeats the previous one. The segments are then
/// rescaled to sum to 100 (equal split if they are all empty).
pub fn shares_from_breakpoints(set: &SelectionSet, breakpoints: &[f64]) -> SelectionSet {
    let n = set.len();
    if n == 0 {
        return set.clone();
    }

    let mut segments = Vec::with_capacity(n);
    let mut previous = 0.0;
    for i in 0..n {
        let current = match breakpoints.get(i) {
            Some(&b) if b.is_finite() => b.clamp(0.0, SHARE_TOTAL),
            Some(_) => previous,
            None => SHARE_TOTAL,
        };
        segments.push((current - previous).max(0.0));
        previous = current;
    }

    set.with_shares(&renormalize(&segments))
}

/// Scale `values` so they sum to exactly 100.
///
/// Negative and non-finite values count as 0; an all-zero input yields an
/// equal split. Empty input yields an empty vector.
pub fn renormalize(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let clean = values
        .iter()
        .map(|&v| if v.is_finite() && v > 0.0 { v } else { 0.0 })
        .collect::<Vec<_>>();
    let total: f64 = clean.iter().sum();

    if total <= 0.0 || !total.is_finite() {
        let equal = SHARE_TOTAL / clean.len() as f64;
        return vec![equal; clean.len()];
    }

    let scale = SHARE_TOTAL / total;
    clean.into_iter().map(|v| v * scale).collect()
}
