use std::path::PathBuf;

use dashboard_db::Database;

use crate::config::{AppConfig, SettingsManager};

/// Open the local DB, seed and migrate settings, load config (fatal on error).
pub fn init_foundation() -> Result<(Database, AppConfig, PathBuf), anyhow::Error> {
    load_dotenv();
    let dir = data_dir();
    std::fs::create_dir_all(&dir)?;

    let db_path = dir.join("local.db");
    tracing::info!("Opening database at {}", db_path.display());
    let db = Database::open(&db_path)?;

    let sm = SettingsManager::new(db.clone());
    if let Err(e) = sm.migrate_from_env() {
        tracing::error!("Failed to migrate from env: {e}");
    }
    sm.initialize_defaults()?;

    let config = AppConfig::load(&sm)?;
    tracing::info!(api_url = %config.api_url, "Settings loaded");
    Ok((db, config, dir))
}

/// Determine the data directory for the application.
/// Priority: SUPPORT_DASHBOARD_DATA_DIR env var > ~/.support-dashboard
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SUPPORT_DASHBOARD_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".support-dashboard")
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}
