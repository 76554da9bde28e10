//! # Position Calculator
//! Maps a selection to one axis value in `[-1, 1]` by share-weighted average
//! of catalog scores: score 50 lands on 0, scores 0 and 100 on -1 and +1.
//!
//! Two independent axes form a [`Position`]: the editor axis (Liberal ↔
//! Authoritative) and the language axis (Community ↔ Corporate). Nothing is
//! cached; every call recomputes from the values it is given.

use serde::Serialize;
use std::fmt;

use crate::catalog::{Catalog, CatalogSet, Category, FALLBACK_SCORE};
use crate::normalize::renormalize;
use crate::selection::{SelectionSet, SHARE_TOTAL};

/// Half-width of the score domain; `(score - 50) / 50` lands in `[-1, 1]`.
const SCORE_HALF_RANGE: f64 = 50.0;

/// Axis value for `set`, scored against `catalog`.
///
/// Empty set → 0. Weights divide by the set's actual total rather than
/// assuming 100, so drifted shares still average correctly. Ids missing from
/// the catalog score 50.
pub fn compute_axis(set: &SelectionSet, catalog: &Catalog) -> f64 {
    if set.is_empty() {
        return 0.0;
    }

    let weighted_sum: f64 = set
        .entries()
        .iter()
        .zip(weights(set))
        .map(|(e, w)| w * catalog.score_or_fallback(&e.item_id))
        .sum();

    to_axis(weighted_sum)
}

/// Per-entry weights summing to 1 (see [`renormalize`] for degenerate totals).
fn weights(set: &SelectionSet) -> Vec<f64> {
    renormalize(&set.shares())
        .into_iter()
        .map(|s| s / SHARE_TOTAL)
        .collect()
}

fn to_axis(weighted_score: f64) -> f64 {
    ((weighted_score - FALLBACK_SCORE) / SCORE_HALF_RANGE).clamp(-1.0, 1.0)
}

/// The derived 2-D compass point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    pub editor_axis: f64,
    pub language_axis: f64,
}

impl Position {
    pub fn new(editor_axis: f64, language_axis: f64) -> Self {
        Self {
            editor_axis,
            language_axis,
        }
    }

    /// Both axes, each against its own catalog.
    pub fn compute(editors: &SelectionSet, languages: &SelectionSet, catalogs: &CatalogSet) -> Self {
        Self {
            editor_axis: compute_axis(editors, catalogs.get(Category::Editors)),
            language_axis: compute_axis(languages, catalogs.get(Category::Languages)),
        }
    }

    pub fn axis(&self, category: Category) -> f64 {
        match category {
            Category::Editors => self.editor_axis,
            Category::Languages => self.language_axis,
        }
    }

    /// Horizontal is the language axis, vertical the editor axis.
    /// Zero counts as Left / Libertarian.
    pub fn quadrant(&self) -> Quadrant {
        match (self.editor_axis > 0.0, self.language_axis > 0.0) {
            (true, false) => Quadrant::AuthoritarianLeft,
            (true, true) => Quadrant::AuthoritarianRight,
            (false, false) => Quadrant::LibertarianLeft,
            (false, true) => Quadrant::LibertarianRight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    AuthoritarianLeft,
    AuthoritarianRight,
    LibertarianLeft,
    LibertarianRight,
}

impl Quadrant {
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::AuthoritarianLeft => "Authoritarian Left",
            Quadrant::AuthoritarianRight => "Authoritarian Right",
            Quadrant::LibertarianLeft => "Libertarian Left",
            Quadrant::LibertarianRight => "Libertarian Right",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry's part in an axis value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub item_id: String,
    /// Display name, or the id itself when the catalog does not know it.
    pub display_name: String,
    pub share: f64,
    /// `share / total`, in `[0, 1]`.
    pub weight: f64,
    pub score: f64,
    /// `weight * score`; these sum to the weighted score behind `axis`.
    pub weighted_score: f64,
    pub known: bool,
}

/// Axis value plus the per-entry listing it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisBreakdown {
    pub axis: f64,
    pub contributions: Vec<Contribution>,
}

/// Same arithmetic as [`compute_axis`], itemised in selection order.
pub fn explain_axis(set: &SelectionSet, catalog: &Catalog) -> AxisBreakdown {
    let contributions = set
        .entries()
        .iter()
        .zip(weights(set))
        .map(|(e, weight)| {
            let item = catalog.get(&e.item_id);
            let score = item.map_or(FALLBACK_SCORE, |it| it.score);
            Contribution {
                item_id: e.item_id.clone(),
                display_name: item.map_or_else(|| e.item_id.clone(), |it| it.display_name.clone()),
                share: e.share,
                weight,
                score,
                weighted_score: weight * score,
                known: item.is_some(),
            }
        })
        .collect::<Vec<_>>();

    let axis = if contributions.is_empty() {
        0.0
    } else {
        to_axis(contributions.iter().map(|c| c.weighted_score).sum())
    };

    AxisBreakdown {
        axis,
        contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;
    use crate::selection::SelectionEntry;

    fn catalog() -> Catalog {
        Catalog::from_items(vec![
            CatalogItem::new("top", "Top", 100.0),
            CatalogItem::new("bottom", "Bottom", 0.0),
            CatalogItem::new("mid", "Mid", 50.0),
        ])
        .unwrap()
    }

    fn set(pairs: &[(&str, f64)]) -> SelectionSet {
        SelectionSet::from_entries(
            pairs
                .iter()
                .map(|&(id, s)| SelectionEntry::new(id, s))
                .collect(),
        )
    }

    #[test]
    fn empty_is_center() {
        assert_eq!(compute_axis(&SelectionSet::new(), &catalog()), 0.0);
    }

    #[test]
    fn single_entry_extremes() {
        let c = catalog();
        assert!((compute_axis(&set(&[("top", 100.0)]), &c) - 1.0).abs() < 1e-12);
        assert!((compute_axis(&set(&[("bottom", 100.0)]), &c) + 1.0).abs() < 1e-12);
        assert!(compute_axis(&set(&[("mid", 100.0)]), &c).abs() < 1e-12);
    }

    #[test]
    fn divides_by_actual_total() {
        // 30/10 drifted shares still weigh 75% / 25%.
        let a = compute_axis(&set(&[("top", 30.0), ("bottom", 10.0)]), &catalog());
        assert!((a - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_total_weighs_equally() {
        let a = compute_axis(&set(&[("top", 0.0), ("mid", 0.0)]), &catalog());
        assert!((a - 0.5).abs() < 1e-12);
    }

    #[test]
    fn unknown_id_scores_center() {
        let a = compute_axis(&set(&[("top", 50.0), ("ghost", 50.0)]), &catalog());
        assert!((a - 0.5).abs() < 1e-12);
    }

    #[test]
    fn quadrant_follows_signs() {
        assert_eq!(Position::new(0.4, -0.2).quadrant(), Quadrant::AuthoritarianLeft);
        assert_eq!(Position::new(0.4, 0.2).quadrant(), Quadrant::AuthoritarianRight);
        assert_eq!(Position::new(0.0, 0.0).quadrant(), Quadrant::LibertarianLeft);
        assert_eq!(Position::new(-1.0, 1.0).quadrant().label(), "Libertarian Right");
    }

    #[test]
    fn breakdown_matches_axis() {
        let c = catalog();
        let s = set(&[("top", 60.0), ("ghost", 40.0)]);
        let b = explain_axis(&s, &c);
        assert!((b.axis - compute_axis(&s, &c)).abs() < 1e-12);
        assert_eq!(b.contributions.len(), 2);
        assert!(b.contributions[0].known);
        assert!(!b.contributions[1].known);
        assert_eq!(b.contributions[1].display_name, "ghost");
        assert!((b.contributions[0].weight - 0.6).abs() < 1e-12);
        assert!((b.contributions[1].weighted_score - 20.0).abs() < 1e-12);
    }
}
