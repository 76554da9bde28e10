//! Demo that replays a scripted sequence of intents through a session and
//! prints the position after each step.
//!
//! Usage: `compass_demo [script.toml]` (defaults to `config/demo_script.toml`).

use anyhow::{Context, Result};
use dev_compass::{config, Applied, Category, CompassSession, Intent};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::info;

const DEFAULT_SCRIPT: &str = "config/demo_script.toml";

#[derive(Debug, Deserialize)]
struct Script {
    steps: Vec<Intent>,
}

fn main() -> Result<()> {
    // Load .env in local/dev; no-op otherwise.
    let _ = dotenvy::dotenv();
    config::init_tracing();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT));
    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading script {}", path.display()))?;
    let script: Script =
        toml::from_str(&text).with_context(|| format!("parsing script {}", path.display()))?;

    let catalogs = config::load_catalogs_default()?;
    let mut session = CompassSession::new(catalogs).with_observer(|e: f64, l: f64| {
        info!(editor_axis = e, language_axis = l, "position update");
    });

    for (n, step) in script.steps.iter().enumerate() {
        let outcome = session.apply(step);
        let pos = session.position();
        println!(
            "#{:<2} {:<8} {:<60} editors {:+.3}  languages {:+.3}  ({})",
            n + 1,
            match outcome {
                Applied::Changed => "applied",
                Applied::Ignored => "ignored",
            },
            format!("{step:?}"),
            pos.editor_axis,
            pos.language_axis,
            pos.quadrant()
        );
    }

    for category in Category::ALL {
        println!("\n{category}:");
        for c in session.breakdown(category).contributions {
            println!(
                "  {:<16} {:>5.1}%  score {:>5.1}",
                c.display_name, c.share, c.score
            );
        }
    }

    println!("compass-demo done");
    Ok(())
}
