// src/config/catalog.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::catalog::{Catalog, CatalogItem, CatalogSet};

pub const ENV_CATALOG_PATH: &str = "COMPASS_CATALOG_PATH";
pub const DEFAULT_CATALOG_TOML: &str = "config/catalog.toml";
pub const DEFAULT_CATALOG_JSON: &str = "config/catalog.json";

/// On-disk shape. A missing section means "use the built-in seed".
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    editors: Option<Vec<CatalogItem>>,
    #[serde(default)]
    languages: Option<Vec<CatalogItem>>,
}

/// Load catalogs from an explicit path. Supports TOML or JSON formats.
pub fn load_catalogs_from(path: &Path) -> Result<CatalogSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading catalog from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let set = parse_catalogs(&content, ext.as_str())
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    info!(
        path = %path.display(),
        editors = set.editors.len(),
        languages = set.languages.len(),
        "catalog loaded"
    );
    Ok(set)
}

/// Load catalogs using env var + fallbacks:
/// 1) $COMPASS_CATALOG_PATH
/// 2) config/catalog.toml
/// 3) config/catalog.json
/// 4) built-in seed
pub fn load_catalogs_default() -> Result<CatalogSet> {
    if let Ok(p) = std::env::var(ENV_CATALOG_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_catalogs_from(&pb);
        } else {
            return Err(anyhow!(
                "{ENV_CATALOG_PATH} points to non-existent path {}",
                pb.display()
            ));
        }
    }
    let toml_p = PathBuf::from(DEFAULT_CATALOG_TOML);
    if toml_p.exists() {
        return load_catalogs_from(&toml_p);
    }
    let json_p = PathBuf::from(DEFAULT_CATALOG_JSON);
    if json_p.exists() {
        return load_catalogs_from(&json_p);
    }
    info!("no catalog file found; using built-in catalogs");
    Ok(CatalogSet::builtin())
}

/// Parse catalog text. `hint_ext` picks the format; unknown hints try both.
pub fn parse_catalogs(s: &str, hint_ext: &str) -> Result<CatalogSet> {
    let file = match hint_ext {
        "toml" => toml::from_str::<CatalogFile>(s).context("invalid TOML catalog")?,
        "json" => serde_json::from_str::<CatalogFile>(s).context("invalid JSON catalog")?,
        _ => {
            // Content sniffing: JSON documents start with `{`.
            if s.trim_start().starts_with('{') {
                serde_json::from_str::<CatalogFile>(s).context("invalid JSON catalog")?
            } else {
                toml::from_str::<CatalogFile>(s)
                    .map_err(|_| anyhow!("unsupported catalog format"))?
            }
        }
    };
    build(file)
}

fn build(file: CatalogFile) -> Result<CatalogSet> {
    let editors = match file.editors {
        Some(items) => Catalog::from_items(items).context("editors")?,
        None => Catalog::default_editors(),
    };
    let languages = match file.languages {
        Some(items) => Catalog::from_items(items).context("languages")?,
        None => Catalog::default_languages(),
    };
    Ok(CatalogSet::new(editors, languages))
}
