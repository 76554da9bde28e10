//! # Catalog
//!
//! Static reference data for the compass: the selectable editors and
//! languages, each with a fixed score in `[0, 100]`.
//!
//! - Editors are scored along Liberal (0) ↔ Authoritative (100).
//! - Languages are scored along Community (0) ↔ Corporate (100).
//! - Catalogs are built once (from the built-in seed or a config file) and
//!   passed by reference to whoever needs a score; nothing mutates them.
//! - Lookups are by exact id; `suggest` offers a fuzzy fallback for noisy
//!   input (typos, display names, odd casing).

use anyhow::{anyhow, bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};
use tracing::warn;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Score used for ids that are missing from a catalog (axis center).
pub const FALLBACK_SCORE: f64 = 50.0;

/// Minimum Jaro-Winkler similarity for `Catalog::suggest`.
const SUGGEST_THRESHOLD: f64 = 0.85;

static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9_+#.\-]*$").expect("catalog id regex"));

/// Which of the two independent catalogs an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Editors,
    Languages,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Editors, Category::Languages];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Editors => "editors",
            Category::Languages => "languages",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable tool with its fixed score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    #[serde(rename = "name", alias = "display_name")]
    pub display_name: String,
    pub score: f64,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            score,
        }
    }
}

/// Ordered, immutable list of items with an id index.
///
/// Order is the order items were declared in, which is the order a
/// presentation layer offers them as choices.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, validating ids and clamping scores into `[0, 100]`.
    ///
    /// Errors on empty or malformed ids, duplicate ids, and non-finite scores.
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());
        let mut out = Vec::with_capacity(items.len());

        for (pos, mut item) in items.into_iter().enumerate() {
            if item.id.trim().is_empty() {
                bail!("catalog item #{pos} has an empty id");
            }
            if !ID_RE.is_match(&item.id) {
                bail!("catalog id `{}` must match {}", item.id, ID_RE.as_str());
            }
            if !item.score.is_finite() {
                bail!("catalog item `{}` has a non-finite score", item.id);
            }
            if !(SCORE_MIN..=SCORE_MAX).contains(&item.score) {
                let clamped = item.score.clamp(SCORE_MIN, SCORE_MAX);
                warn!(id = %item.id, score = item.score, clamped, "catalog score out of range");
                item.score = clamped;
            }
            if index.insert(item.id.clone(), out.len()).is_some() {
                return Err(anyhow!("duplicate catalog id `{}`", item.id));
            }
            out.push(item);
        }

        Ok(Self { items: out, index })
    }

    /// Built-in seed from a static table. The table is known-good.
    fn from_seed(seed: &[(&str, &str, f64)]) -> Self {
        let items = seed
            .iter()
            .map(|&(id, name, score)| CatalogItem::new(id, name, score))
            .collect::<Vec<_>>();
        let index = items
            .iter()
            .enumerate()
            .map(|(i, it)| (it.id.clone(), i))
            .collect();
        Self { items, index }
    }

    /// Editors shipped with the compass (0 most liberal, 100 most authoritative).
    pub fn default_editors() -> Self {
        Self::from_seed(&[
            ("atom", "Atom", 70.0),
            ("cursor", "Cursor", 90.0),
            ("eclipse", "Eclipse", 90.0),
            ("emacs", "Emacs", 20.0),
            ("intellij", "IntelliJ IDEA", 100.0),
            ("nano", "Nano", 0.0),
            ("neovim", "Neovim", 20.0),
            ("notepadpp", "Notepad++", 45.0),
            ("sublime", "Sublime Text", 40.0),
            ("vim", "Vim", 20.0),
            ("vscode", "VS Code", 90.0),
            ("webstorm", "WebStorm", 100.0),
            ("zed", "Zed", 30.0),
        ])
    }

    /// Languages shipped with the compass (0 most indie, 100 most big tech).
    pub fn default_languages() -> Self {
        Self::from_seed(&[
            ("bash", "Bash", 0.0),
            ("c", "C", 80.0),
            ("cpp", "C++", 90.0),
            ("clojure", "Clojure", 5.0),
            ("csharp", "C#", 95.0),
            ("dart", "Dart", 65.0),
            ("elixir", "Elixir", 10.0),
            ("erlang", "Erlang", 15.0),
            ("f_sharp", "F#", 30.0),
            ("go", "Go", 60.0),
            ("haskell", "Haskell", 25.0),
            ("java", "Java", 90.0),
            ("javascript", "JavaScript", 80.0),
            ("kotlin", "Kotlin", 75.0),
            ("python", "Python", 50.0),
            ("ruby", "Ruby", 20.0),
            ("rust", "Rust", 40.0),
            ("scala", "Scala", 45.0),
            ("swift", "Swift", 70.0),
            ("typescript", "TypeScript", 80.0),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn score_of(&self, id: &str) -> Option<f64> {
        self.get(id).map(|it| it.score)
    }

    /// Score for `id`, or [`FALLBACK_SCORE`] if the id is not in this catalog.
    pub fn score_or_fallback(&self, id: &str) -> f64 {
        self.score_of(id).unwrap_or(FALLBACK_SCORE)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Closest item to a noisy query, by id or display name.
    ///
    /// Exact (normalized) matches win; otherwise the best Jaro-Winkler
    /// similarity at or above 0.85 is returned.
    pub fn suggest(&self, query: &str) -> Option<&CatalogItem> {
        let q = normalize(query);
        if q.is_empty() {
            return None;
        }

        let mut best: Option<(&CatalogItem, f64)> = None;
        for it in &self.items {
            let by_id = strsim::jaro_winkler(&q, &normalize(&it.id));
            let by_name = strsim::jaro_winkler(&q, &normalize(&it.display_name));
            let sim = by_id.max(by_name);
            if sim >= 1.0 {
                return Some(it);
            }
            if best.map_or(true, |(_, b)| sim > b) {
                best = Some((it, sim));
            }
        }

        best.filter(|&(_, sim)| sim >= SUGGEST_THRESHOLD)
            .map(|(it, _)| it)
    }
}

/// The pair of catalogs a session draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSet {
    pub editors: Catalog,
    pub languages: Catalog,
}

impl CatalogSet {
    pub fn new(editors: Catalog, languages: Catalog) -> Self {
        Self { editors, languages }
    }

    /// Both built-in catalogs.
    pub fn builtin() -> Self {
        Self::new(Catalog::default_editors(), Catalog::default_languages())
    }

    pub fn get(&self, category: Category) -> &Catalog {
        match category {
            Category::Editors => &self.editors,
            Category::Languages => &self.languages,
        }
    }
}

impl Default for CatalogSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Lowercase, treat separators as spaces, collapse whitespace.
fn normalize(s: &str) -> String {
    let out = s
        .trim()
        .to_ascii_lowercase()
        .replace(['-', '_', '/', '.', '\t'], " ");
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_match_shipped_scores() {
        let eds = Catalog::default_editors();
        let langs = Catalog::default_languages();
        assert_eq!(eds.len(), 13);
        assert_eq!(langs.len(), 20);
        assert_eq!(eds.score_of("vscode"), Some(90.0));
        assert_eq!(eds.score_of("nano"), Some(0.0));
        assert_eq!(langs.score_of("csharp"), Some(95.0));
        assert_eq!(langs.get("f_sharp").unwrap().display_name, "F#");
    }

    #[test]
    fn seeds_are_disjoint() {
        let eds = Catalog::default_editors();
        let langs = Catalog::default_languages();
        assert!(eds.iter().all(|e| !langs.contains(&e.id)));
    }

    #[test]
    fn missing_id_falls_back_to_center() {
        let eds = Catalog::default_editors();
        assert_eq!(eds.score_of("rust"), None);
        assert!((eds.score_or_fallback("rust") - FALLBACK_SCORE).abs() < 1e-12);
    }

    #[test]
    fn from_items_rejects_duplicates() {
        let err = Catalog::from_items(vec![
            CatalogItem::new("vim", "Vim", 20.0),
            CatalogItem::new("vim", "Vim again", 30.0),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err}");
    }

    #[test]
    fn from_items_rejects_bad_ids_and_nan() {
        assert!(Catalog::from_items(vec![CatalogItem::new("", "Empty", 1.0)]).is_err());
        assert!(Catalog::from_items(vec![CatalogItem::new("VS Code", "VS Code", 1.0)]).is_err());
        assert!(Catalog::from_items(vec![CatalogItem::new("x", "X", f64::NAN)]).is_err());
    }

    #[test]
    fn from_items_clamps_scores() {
        let c = Catalog::from_items(vec![
            CatalogItem::new("hi", "High", 140.0),
            CatalogItem::new("lo", "Low", -3.0),
        ])
        .unwrap();
        assert_eq!(c.score_of("hi"), Some(100.0));
        assert_eq!(c.score_of("lo"), Some(0.0));
        assert_eq!(c.items()[0].id, "hi");
    }

    #[test]
    fn suggest_handles_names_and_typos() {
        let eds = Catalog::default_editors();
        assert_eq!(eds.suggest("VS-Code").map(|it| it.id.as_str()), Some("vscode"));
        assert_eq!(eds.suggest("neovm").map(|it| it.id.as_str()), Some("neovim"));
        assert_eq!(eds.suggest("Sublime Text").map(|it| it.id.as_str()), Some("sublime"));
        assert!(eds.suggest("photoshop").is_none());
        assert!(eds.suggest("   ").is_none());
    }

    #[test]
    fn catalog_set_routes_by_category() {
        let set = CatalogSet::builtin();
        assert!(set.get(Category::Editors).contains("zed"));
        assert!(set.get(Category::Languages).contains("rust"));
        assert_eq!(Category::Languages.to_string(), "languages");
    }
}
