//! # Selection Set
//! Ordered list of chosen catalog items, each with a usage share in percent.
//!
//! A non-empty set produced by the operations in [`crate::normalize`] always
//! has shares summing to 100 (within [`SHARE_TOLERANCE`]). Order matters: it is
//! the left-to-right layout of the segmented range control, so it decides
//! which breakpoint belongs to which entry.

use serde::{Deserialize, Serialize};

/// Shares of a non-empty set sum to this.
pub const SHARE_TOTAL: f64 = 100.0;

/// Absolute tolerance for the share-sum invariant.
pub const SHARE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub item_id: String,
    /// Usage share in percent, `0..=100`.
    pub share: f64,
}

impl SelectionEntry {
    pub fn new(item_id: impl Into<String>, share: f64) -> Self {
        Self {
            item_id: item_id.into(),
            share,
        }
    }
}

/// Span one entry occupies along the 0–100 control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub item_id: String,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    entries: Vec<SelectionEntry>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap raw entries as-is.
    ///
    /// Nothing is checked here: duplicate ids and drifted share sums are
    /// accepted so callers can restore arbitrary state. Use
    /// [`SelectionSet::is_normalized`] to test the invariant.
    pub fn from_entries(entries: Vec<SelectionEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.position(item_id).is_some()
    }

    pub fn position(&self, item_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.item_id == item_id)
    }

    pub fn share_of(&self, item_id: &str) -> Option<f64> {
        self.position(item_id).map(|i| self.entries[i].share)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.item_id.as_str())
    }

    pub fn shares(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.share).collect()
    }

    pub fn total_share(&self) -> f64 {
        self.entries.iter().map(|e| e.share).sum()
    }

    /// Empty, or unique ids with finite non-negative shares summing to 100.
    pub fn is_normalized(&self) -> bool {
        if self.entries.is_empty() {
            return true;
        }
        let shares_ok = self
            .entries
            .iter()
            .all(|e| e.share.is_finite() && e.share >= 0.0);
        let unique = self
            .entries
            .iter()
            .enumerate()
            .all(|(i, e)| !self.entries[..i].iter().any(|p| p.item_id == e.item_id));
        shares_ok && unique && (self.total_share() - SHARE_TOTAL).abs() <= SHARE_TOLERANCE
    }

    /// Cumulative `[start, end)` span per entry, in order.
    pub fn segments(&self) -> Vec<Segment> {
        let mut start = 0.0;
        self.entries
            .iter()
            .map(|e| {
                let end = start + e.share;
                let seg = Segment {
                    item_id: e.item_id.clone(),
                    start,
                    end,
                };
                start = end;
                seg
            })
            .collect()
    }

    /// Same ids, new shares (zipped in order; extra shares are ignored).
    pub(crate) fn with_shares(&self, shares: &[f64]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .zip(shares)
                .map(|(e, &share)| SelectionEntry::new(e.item_id.clone(), share))
                .collect(),
        }
    }

    pub(crate) fn pushed(&self, entry: SelectionEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    pub(crate) fn without_index(&self, index: usize) -> Self {
        let mut entries = self.entries.clone();
        entries.remove(index);
        Self { entries }
    }
}
