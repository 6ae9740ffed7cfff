//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

use dashboard_client::DEFAULT_API_BASE;

/// (key, default, secret, description)
type DefTuple = (&'static str, &'static str, bool, &'static str);

const DEFS: &[DefTuple] = &[
    ("API_URL", DEFAULT_API_BASE, false, "Base URL for dashboard API calls; may be a path relative to APP_ORIGIN"),
    ("APP_ORIGIN", "http://localhost:3000", false, "Origin that relative API URLs resolve against"),
    ("PUBLIC_API_URL", "", false, "Externally reachable API base embedded in the widget install script"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub secret: bool,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, secret, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    secret,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
