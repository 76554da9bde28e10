//! Configuration: catalog file resolution and tracing setup for binaries.

pub mod catalog;

pub use catalog::{
    load_catalogs_default, load_catalogs_from, parse_catalogs, DEFAULT_CATALOG_JSON,
    DEFAULT_CATALOG_TOML, ENV_CATALOG_PATH,
};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_LOG: &str = "COMPASS_LOG";
pub const ENV_LOG_FORMAT: &str = "COMPASS_LOG_FORMAT";

const DEFAULT_LOG_FILTER: &str = "dev_compass=info,compass=info,warn";

/// Install a global subscriber for binaries.
///
/// Filter comes from `COMPASS_LOG`, then `RUST_LOG`, then a quiet default.
/// `COMPASS_LOG_FORMAT=json` switches to JSON lines. Calling this twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn init_tracing() {
    let filter = std::env::var(ENV_LOG)
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json = std::env::var(ENV_LOG_FORMAT)
        .ok()
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    let _ = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().compact()).try_init()
    };
}
