// src/lib.rs
// Public library surface for integration tests and presentation layers.

pub mod catalog;
pub mod config;
pub mod normalize;
pub mod position;
pub mod selection;
pub mod session;

// ---- Re-exports for stable public API ----
pub use crate::catalog::{Catalog, CatalogItem, CatalogSet, Category};
pub use crate::position::{compute_axis, explain_axis, AxisBreakdown, Position, Quadrant};
pub use crate::selection::{SelectionEntry, SelectionSet};
pub use crate::session::{Applied, CompassSession, Intent, PositionObserver};
