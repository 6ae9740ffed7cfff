//! Support dashboard REST client library.
//!
//! Provides the cookie-authenticated REST client for the dashboard
//! backend and the shared type definitions exchanged with it.

pub mod api;
pub mod models;

pub use api::{DEFAULT_API_BASE, DashboardClient};
pub use api::analytics::DEFAULT_ANALYTICS_DAYS;
pub use models::{
    AuthResponse, ChatMessage, ChatSession, Document, FONT_OPTIONS, MessageSender, ProfileUpdate, User, Visitor,
    WELCOME_MESSAGE_MAX_CHARS, WidgetPosition, WidgetSettings, WidgetSettingsUpdate,
};

use serde::Deserialize;

/// Unified error type for the dashboard-client crate.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Error body shape returned by the backend on failed requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ClientError {
    /// Build an [`ClientError::Api`] from a non-2xx status and raw body.
    ///
    /// Prefers the `message` field of a JSON body; otherwise keeps the raw text.
    pub(crate) fn from_response(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);
        Self::Api { status, message }
    }

    /// HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message to show the user: the server's message if one was sent, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
