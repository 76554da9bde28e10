//! # Compass Session
//! Owns the two selection sets and applies user intents to them one at a time.
//!
//! Every accepted intent replaces a set with the value returned by the pure
//! functions in [`crate::normalize`], recomputes the [`Position`], and hands it
//! to the registered [`PositionObserver`]. Intents that would break a
//! precondition (unknown id, duplicate add, removing an absent id, dragging a
//! control with fewer than two entries) are logged and ignored; the observer
//! is not called for them.

use serde::Deserialize;
use std::fmt;
use tracing::{debug, warn};

use crate::catalog::{CatalogSet, Category};
use crate::normalize;
use crate::position::{explain_axis, AxisBreakdown, Position};
use crate::selection::SelectionSet;

/// Receives the freshly computed position after every mutation.
pub trait PositionObserver {
    fn on_position_update(&mut self, editor_axis: f64, language_axis: f64);
}

impl<F> PositionObserver for F
where
    F: FnMut(f64, f64),
{
    fn on_position_update(&mut self, editor_axis: f64, language_axis: f64) {
        (self)(editor_axis, language_axis)
    }
}

/// A user action coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    Add {
        category: Category,
        item_id: String,
    },
    Remove {
        category: Category,
        item_id: String,
    },
    SetBreakpoints {
        category: Category,
        breakpoints: Vec<f64>,
    },
}

impl Intent {
    pub fn category(&self) -> Category {
        match self {
            Intent::Add { category, .. }
            | Intent::Remove { category, .. }
            | Intent::SetBreakpoints { category, .. } => *category,
        }
    }
}

/// Outcome of applying one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    Ignored,
}

pub struct CompassSession {
    catalogs: CatalogSet,
    editors: SelectionSet,
    languages: SelectionSet,
    observer: Option<Box<dyn PositionObserver>>,
}

impl fmt::Debug for CompassSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompassSession")
            .field("editors", &self.editors)
            .field("languages", &self.languages)
            .field("observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

impl CompassSession {
    pub fn new(catalogs: CatalogSet) -> Self {
        Self {
            catalogs,
            editors: SelectionSet::new(),
            languages: SelectionSet::new(),
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: impl PositionObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    pub fn selection(&self, category: Category) -> &SelectionSet {
        match category {
            Category::Editors => &self.editors,
            Category::Languages => &self.languages,
        }
    }

    pub fn position(&self) -> Position {
        Position::compute(&self.editors, &self.languages, &self.catalogs)
    }

    pub fn breakdown(&self, category: Category) -> AxisBreakdown {
        explain_axis(self.selection(category), self.catalogs.get(category))
    }

    /// Current handle positions for the category's segmented control.
    pub fn breakpoints(&self, category: Category) -> Vec<f64> {
        normalize::breakpoints_from_shares(self.selection(category))
    }

    /// Add a catalog item with an equal-split reset of all shares.
    pub fn add_item(&mut self, category: Category, item_id: &str) -> Position {
        self.try_add(category, item_id);
        self.position()
    }

    /// Remove a selected item and rescale the rest.
    pub fn remove_item(&mut self, category: Category, item_id: &str) -> Position {
        self.try_remove(category, item_id);
        self.position()
    }

    /// Apply a drag of the segmented control. Needs at least two entries.
    pub fn set_breakpoints(&mut self, category: Category, breakpoints: &[f64]) -> Position {
        self.try_set_breakpoints(category, breakpoints);
        self.position()
    }

    /// Dispatch an [`Intent`], reporting whether it was committed (and so
    /// whether the observer was notified).
    pub fn apply(&mut self, intent: &Intent) -> Applied {
        let category = intent.category();
        match intent {
            Intent::Add { item_id, .. } => self.try_add(category, item_id),
            Intent::Remove { item_id, .. } => self.try_remove(category, item_id),
            Intent::SetBreakpoints { breakpoints, .. } => {
                self.try_set_breakpoints(category, breakpoints)
            }
        }
    }

    fn try_add(&mut self, category: Category, item_id: &str) -> Applied {
        let catalog = self.catalogs.get(category);
        if !catalog.contains(item_id) {
            let hint = catalog.suggest(item_id).map(|it| it.id.clone());
            warn!(target: "compass", %category, item_id, suggestion = ?hint, "unknown item; add ignored");
            return Applied::Ignored;
        }
        if self.selection(category).contains(item_id) {
            debug!(target: "compass", %category, item_id, "already selected; add ignored");
            return Applied::Ignored;
        }

        let next = normalize::add(self.selection(category), item_id);
        self.commit(category, next, "add")
    }

    fn try_remove(&mut self, category: Category, item_id: &str) -> Applied {
        if !self.selection(category).contains(item_id) {
            debug!(target: "compass", %category, item_id, "not selected; remove ignored");
            return Applied::Ignored;
        }

        let next = normalize::remove(self.selection(category), item_id);
        self.commit(category, next, "remove")
    }

    fn try_set_breakpoints(&mut self, category: Category, breakpoints: &[f64]) -> Applied {
        let current = self.selection(category);
        if current.len() < 2 {
            debug!(target: "compass", %category, len = current.len(), "nothing to drag; breakpoints ignored");
            return Applied::Ignored;
        }

        let next = normalize::shares_from_breakpoints(current, breakpoints);
        self.commit(category, next, "set_breakpoints")
    }

    /// Store `next`, then notify the observer. Always reports `Changed`,
    /// even when the shares come out identical (a drag back to the same spot).
    fn commit(&mut self, category: Category, next: SelectionSet, op: &'static str) -> Applied {
        debug_assert!(next.is_normalized(), "{op} broke the share invariant");

        match category {
            Category::Editors => self.editors = next,
            Category::Languages => self.languages = next,
        }

        let pos = self.position();
        debug!(
            target: "compass",
            op,
            %category,
            entries = self.selection(category).len(),
            shares = ?self.selection(category).shares(),
            editor_axis = pos.editor_axis,
            language_axis = pos.language_axis,
            "selection updated"
        );

        if let Some(observer) = self.observer.as_mut() {
            observer.on_position_update(pos.editor_axis, pos.language_axis);
        }
        Applied::Changed
    }
}
