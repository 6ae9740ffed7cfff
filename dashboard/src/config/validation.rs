//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

static RE_HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/\s?#]+(/[^\s?#]*)?$").unwrap());
static RE_ORIGIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/\s?#]+/?$").unwrap());
static RE_ABS_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/[^\s?#]*$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "API_URL" => {
            if !RE_HTTP_URL.is_match(value) && !RE_ABS_PATH.is_match(value) {
                return Err("must be an http(s) URL or a path starting with '/'".into());
            }
        }
        "APP_ORIGIN" => {
            if !RE_ORIGIN.is_match(value) {
                return Err("must be an http(s) origin such as http://localhost:3000".into());
            }
        }
        "PUBLIC_API_URL" => {
            if !value.is_empty() && !RE_HTTP_URL.is_match(value) {
                return Err("must be empty or an absolute http(s) URL".into());
            }
        }
        _ => {}
    }
    Ok(())
}
