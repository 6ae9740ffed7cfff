//! Runtime application configuration loaded from DB + environment overrides.

use dashboard_client::DEFAULT_API_BASE;
use url::Url;

use super::defaults::get_default;
use super::manager::SettingsManager;

/// Runtime configuration populated from the settings DB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub app_origin: String,
    pub public_api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_BASE.into(),
            app_origin: "http://localhost:3000".into(),
            public_api_url: String::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the settings manager (DB-first, env overrides).
    pub fn load(sm: &SettingsManager) -> Result<Self, anyhow::Error> {
        let g = |key: &str| -> String {
            let value = std::env::var(key)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| sm.get_setting(key).unwrap_or_default());
            if value.is_empty() {
                get_default(key).unwrap_or_default().to_string()
            } else {
                value
            }
        };

        Ok(Self {
            api_url: g("API_URL"),
            app_origin: g("APP_ORIGIN"),
            // Empty is meaningful here: fall back to the resolved API base.
            public_api_url: std::env::var("PUBLIC_API_URL")
                .unwrap_or_else(|_| sm.get_setting("PUBLIC_API_URL").unwrap_or_default()),
        })
    }

    /// Absolute base URL for REST calls, without a trailing slash.
    ///
    /// A relative `api_url` such as `/api` is resolved against `app_origin`.
    pub fn api_base(&self) -> Result<String, url::ParseError> {
        let resolved = match Url::parse(&self.api_url) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse(&self.app_origin)?.join(&self.api_url)?
            }
            Err(e) => return Err(e),
        };
        Ok(resolved.as_str().trim_end_matches('/').to_string())
    }

    /// Base URL embedded in the widget install script.
    ///
    /// Third-party pages load the script from here, so it is always absolute.
    pub fn widget_script_base(&self) -> Result<String, url::ParseError> {
        let public = self.public_api_url.trim();
        if public.is_empty() {
            return self.api_base();
        }
        Ok(Url::parse(public)?.as_str().trim_end_matches('/').to_string())
    }
}
