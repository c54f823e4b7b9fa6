//! Loads the GDP table and prints the initial page description as JSON.
//!
//! Usage: `gdpboard [DATA_FILE]`. Without an argument the `data_path`
//! setting is used. Logs go to stderr; filter them with `RUST_LOG`.

use anyhow::Context;
use gdpboard::dashboard::Dashboard;
use gdpboard::data::load_table;
use gdpboard::default_selection::{RngSource, default_selection};
use gdpboard::settings::Settings;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load();
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.data_path.clone())
        .context("no data file given and no data_path in settings")?;

    let table = load_table(&path, settings.delimiter)
        .with_context(|| format!("loading {}", path.display()))?;
    let table = Arc::new(table);

    let mut random = match settings.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let initial = default_selection(&table, &mut random, settings.default_country_count);

    let dashboard = Dashboard::new(table, initial, &settings);
    let layout = serde_json::to_string_pretty(&dashboard.layout())?;
    println!("{}", layout);
    Ok(())
}
