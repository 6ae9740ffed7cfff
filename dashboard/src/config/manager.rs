//! SettingsManager: DB-backed settings with defaults and env migration.

use std::collections::HashMap;

use dashboard_db::{Database, DbError};

use super::defaults::DEFAULT_SETTINGS;
use super::validation::validate_setting;
use super::{SettingInfo, SettingType};

/// Wraps [`Database`] to provide high-level settings operations.
pub struct SettingsManager {
    db: Database,
}

impl SettingsManager {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get a setting value. Falls back to default if not in DB.
    pub fn get_setting(&self, key: &str) -> Result<String, anyhow::Error> {
        if let Some(val) = self.db.get_setting(key)? {
            return Ok(val);
        }
        if let Some(def) = DEFAULT_SETTINGS.get(key) {
            return Ok(def.default.to_string());
        }
        anyhow::bail!("setting not found: {key}");
    }

    /// Set a setting value with validation.
    pub fn set_setting(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        let def = DEFAULT_SETTINGS
            .get(key)
            .ok_or_else(|| anyhow::anyhow!("unknown setting key: {key}"))?;

        validate_setting(key, value)
            .map_err(|e| anyhow::anyhow!("validation error for {key}: {e}"))?;

        let setting_type = if def.secret {
            SettingType::Secret
        } else {
            SettingType::Normal
        };
        self.db.set_setting(key, value, setting_type.as_str())?;
        Ok(())
    }

    /// Drop the stored value so the default applies again.
    ///
    /// Returns `false` when nothing was stored for the key.
    pub fn reset_setting(&self, key: &str) -> Result<bool, anyhow::Error> {
        if !DEFAULT_SETTINGS.contains_key(key) {
            anyhow::bail!("unknown setting key: {key}");
        }
        match self.db.delete_setting(key) {
            Ok(()) => Ok(true),
            Err(DbError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Get all known settings, filling in defaults for missing keys.
    pub fn get_all_settings(&self) -> Result<Vec<SettingInfo>, anyhow::Error> {
        let db_settings: HashMap<String, String> = self.db.get_all_settings()?;

        let mut result: Vec<SettingInfo> = DEFAULT_SETTINGS
            .values()
            .map(|def| {
                let value = db_settings
                    .get(def.key)
                    .cloned()
                    .unwrap_or_else(|| def.default.to_string());
                SettingInfo {
                    key: def.key.to_string(),
                    has_value: !value.is_empty(),
                    value,
                    setting_type: if def.secret {
                        SettingType::Secret
                    } else {
                        SettingType::Normal
                    },
                    description: def.description.to_string(),
                }
            })
            .collect();
        result.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(result)
    }

    /// Initialize default settings in DB (skip existing).
    pub fn initialize_defaults(&self) -> Result<(), anyhow::Error> {
        for (key, def) in DEFAULT_SETTINGS.iter() {
            if self.db.get_setting(key)?.is_some() {
                continue;
            }
            let type_str = if def.secret { "secret" } else { "normal" };
            self.db.set_setting(key, def.default, type_str)?;
        }
        Ok(())
    }

    /// Migrate settings from environment variables to DB (one-time).
    ///
    /// Only keys still at their default are taken over, and only valid values.
    pub fn migrate_from_env(&self) -> Result<u32, anyhow::Error> {
        let mut migrated = 0u32;
        for key in DEFAULT_SETTINGS.keys() {
            if self.db.get_setting(key)?.is_some() {
                continue;
            }
            let Ok(env_val) = std::env::var(key) else {
                continue;
            };
            if env_val.is_empty() {
                continue;
            }
            if let Err(e) = validate_setting(key, &env_val) {
                tracing::warn!("Ignoring invalid {key} from env: {e}");
                continue;
            }
            self.set_setting(key, &env_val)?;
            tracing::info!("Migrated setting from env: {key}");
            migrated += 1;
        }
        if migrated > 0 {
            tracing::info!("Migration completed: {migrated} settings migrated");
        }
        Ok(migrated)
    }

    pub fn db(&self) -> &Database {
        &self.db
    }
}
