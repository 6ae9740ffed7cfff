//! Shared type definitions exchanged with the dashboard backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Upper bound on the widget welcome message, in characters.
pub const WELCOME_MESSAGE_MAX_CHARS: usize = 500;

/// Font stacks offered by the widget font selector, as `(label, value)` pairs.
pub const FONT_OPTIONS: &[(&str, &str)] = &[
    ("Arial", "Arial, sans-serif"),
    ("Helvetica", "Helvetica, sans-serif"),
    ("Times New Roman", "'Times New Roman', serif"),
    ("Georgia", "Georgia, serif"),
    ("Courier New", "'Courier New', monospace"),
    ("Verdana", "Verdana, sans-serif"),
    ("Trebuchet MS", "'Trebuchet MS', sans-serif"),
    ("Comic Sans MS", "'Comic Sans MS', cursive"),
];

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Corner of the host page the chat widget is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetPosition {
    #[default]
    BottomRight,
    BottomLeft,
}

impl WidgetPosition {
    pub const ALL: [WidgetPosition; 2] = [WidgetPosition::BottomRight, WidgetPosition::BottomLeft];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BottomRight => "Bottom Right",
            Self::BottomLeft => "Bottom Left",
        }
    }
}

impl fmt::Display for WidgetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom-right" => Ok(Self::BottomRight),
            "bottom-left" => Ok(Self::BottomLeft),
            other => Err(format!(
                "unknown position '{other}' (expected 'bottom-right' or 'bottom-left')"
            )),
        }
    }
}

/// Per-account widget configuration from GET /widget/settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSettings {
    pub bot_token: String,
    pub primary_color: String,
    pub text_color: String,
    pub font_family: String,
    pub position: WidgetPosition,
    pub welcome_message: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            primary_color: "#007bff".into(),
            text_color: "#ffffff".into(),
            font_family: "Arial, sans-serif".into(),
            position: WidgetPosition::BottomRight,
            welcome_message: "Hi! How can I help you today?".into(),
        }
    }
}

/// Form body for POST /widget/customize.
///
/// Field order is the wire order. The bot token has no slot here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSettingsUpdate {
    pub primary_color: String,
    pub text_color: String,
    pub font_family: String,
    pub position: WidgetPosition,
    pub welcome_message: String,
}

impl From<&WidgetSettings> for WidgetSettingsUpdate {
    fn from(s: &WidgetSettings) -> Self {
        Self {
            primary_color: s.primary_color.clone(),
            text_color: s.text_color.clone(),
            font_family: s.font_family.clone(),
            position: s.position,
            welcome_message: s.welcome_message.clone(),
        }
    }
}

/// Response of POST /widget/regenerate-token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegenerateTokenResponse {
    pub bot_token: String,
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// Knowledge-base document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub uploaded_at: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub visitor_id: String,
    pub visitor_name: String,
    pub started_at: String,
    pub last_message_at: String,
    pub message_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub session_id: String,
    pub sender: MessageSender,
    pub content: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub total_messages: u64,
    pub created_at: String,
    pub last_active: String,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Dashboard account holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Envelope returned by the login and signup endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub company_name: &'a str,
    pub password: &'a str,
}

/// Body for PUT /auth/profile. Unset fields are left out of the request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_settings_camel_case() {
        let body = r##"{
            "botToken": "tok_123",
            "primaryColor": "#112233",
            "textColor": "#ffffff",
            "fontFamily": "Georgia, serif",
            "position": "bottom-left",
            "welcomeMessage": "Hello"
        }"##;

        let s: WidgetSettings = serde_json::from_str(body).unwrap();
        assert_eq!(s.bot_token, "tok_123");
        assert_eq!(s.primary_color, "#112233");
        assert_eq!(s.position, WidgetPosition::BottomLeft);
        assert_eq!(s.welcome_message, "Hello");
    }

    #[test]
    fn test_update_form_has_no_token() {
        let settings = WidgetSettings {
            bot_token: "secret".into(),
            ..WidgetSettings::default()
        };
        let update = WidgetSettingsUpdate::from(&settings);
        let json = serde_json::to_value(&update).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();

        assert_eq!(keys.len(), 5);
        assert!(!keys.iter().any(|k| k.contains("token")));
        assert_eq!(json["position"], "bottom-right");
    }

    #[test]
    fn test_position_parse() {
        assert_eq!("bottom-left".parse::<WidgetPosition>(), Ok(WidgetPosition::BottomLeft));
        assert!("top-left".parse::<WidgetPosition>().is_err());
        assert_eq!(WidgetPosition::BottomRight.label(), "Bottom Right");
    }

    #[test]
    fn test_font_catalogue_contains_default() {
        let default = WidgetSettings::default();
        assert_eq!(FONT_OPTIONS.len(), 8);
        assert!(FONT_OPTIONS.iter().any(|(_, v)| *v == default.font_family));
    }

    #[test]
    fn test_profile_update_omits_unset_fields() {
        let update = ProfileUpdate {
            name: Some("Ada".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"name":"Ada"}"#);
    }

    #[test]
    fn test_message_sender_lowercase() {
        let msg: ChatMessage = serde_json::from_str(
            r#"{"id":"m1","sessionId":"s1","sender":"bot","content":"hi","timestamp":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(msg.sender, MessageSender::Bot);
    }
}
