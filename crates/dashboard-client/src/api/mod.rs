//! Dashboard backend REST client.
//!
//! Every request rides on the shared cookie jar; the session cookie set by
//! the login endpoint authenticates all later calls. No bearer header is sent.

pub mod analytics;
mod audio;
mod auth;
mod documents;
mod request;
mod sessions;
mod tickets;
mod visitors;
mod website;
mod widget;

use std::sync::Arc;

use reqwest::cookie::Jar;

use crate::ClientError;
use crate::models::*;

/// Fallback base path when no API URL is configured.
pub const DEFAULT_API_BASE: &str = "/api";

/// REST client for the dashboard backend.
#[derive(Clone)]
pub struct DashboardClient {
    pub(super) http: reqwest::Client,
    pub(super) jar: Arc<Jar>,
    pub(super) base_url: url::Url,
}
