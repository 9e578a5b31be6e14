//! towny-stats - prints Towny statistics for the server and named players.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use towny_stats_engine::infrastructure::ports::SettingsRepo;
use towny_stats_engine::infrastructure::{AppConfig, InMemoryTownRegistry, JsonSettingsRepo};
use towny_stats_engine::App;

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "towny_stats_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(registry = %config.registry_path.display(), "Starting towny-stats");

    let registry = InMemoryTownRegistry::from_json_file(&config.registry_path)
        .context("Failed to load registry snapshot")?;

    let settings: Arc<dyn SettingsRepo> = match &config.settings_path {
        Some(path) => Arc::new(
            JsonSettingsRepo::from_path(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        ),
        None => Arc::new(JsonSettingsRepo::empty()),
    };

    let app = App::new(Arc::new(registry), settings);

    let players: Vec<String> = std::env::args().skip(1).collect();
    let report = app.statistics_report(&players)?;

    let json = if config.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
