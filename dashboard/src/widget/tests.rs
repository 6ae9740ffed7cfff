use std::sync::{Arc, Mutex};

use dashboard_client::{ClientError, WidgetPosition, WidgetSettings, WidgetSettingsUpdate};
use tokio::sync::mpsc::UnboundedReceiver;

use super::input::cap_welcome_message;
use super::manager::*;
use super::*;
use crate::notification::{Notifier, Toast};
use crate::store::DashboardStore;

/// In-process backend; `None` makes the corresponding call fail.
#[derive(Clone, Default)]
struct FakeBackend {
    fetched: Option<WidgetSettings>,
    save_ok: bool,
    token: Option<String>,
    saved: Arc<Mutex<Vec<WidgetSettingsUpdate>>>,
}

fn server_error() -> ClientError {
    ClientError::Api {
        status: 500,
        message: "boom".into(),
    }
}

impl WidgetBackend for FakeBackend {
    async fn fetch_settings(&self) -> Result<WidgetSettings, ClientError> {
        self.fetched.clone().ok_or_else(server_error)
    }

    async fn save_settings(&self, update: &WidgetSettingsUpdate) -> Result<(), ClientError> {
        self.saved.lock().unwrap().push(update.clone());
        if self.save_ok {
            Ok(())
        } else {
            Err(server_error())
        }
    }

    async fn regenerate_token(&self) -> Result<String, ClientError> {
        self.token.clone().ok_or_else(server_error)
    }
}

fn server_settings() -> WidgetSettings {
    WidgetSettings {
        bot_token: "tok_server".into(),
        primary_color: "#222222".into(),
        text_color: "#eeeeee".into(),
        font_family: "Georgia, serif".into(),
        position: WidgetPosition::BottomLeft,
        welcome_message: "Hello from the server".into(),
    }
}

fn manager(
    backend: FakeBackend,
    store: DashboardStore,
) -> (WidgetSettingsManager<FakeBackend>, UnboundedReceiver<Toast>) {
    let (notifier, rx) = Notifier::channel();
    let m = WidgetSettingsManager::new(backend, store, notifier, "https://api.example.com");
    (m, rx)
}

fn drain(rx: &mut UnboundedReceiver<Toast>) -> Vec<Toast> {
    let mut out = Vec::new();
    while let Ok(t) = rx.try_recv() {
        out.push(t);
    }
    out
}

#[tokio::test]
async fn test_load_success_populates_draft_and_store() {
    let store = DashboardStore::new();
    let backend = FakeBackend {
        fetched: Some(server_settings()),
        ..Default::default()
    };
    let (mut m, mut rx) = manager(backend, store.clone());
    assert!(m.is_loading());

    m.load().await.unwrap();

    assert_eq!(m.phase(), ViewPhase::Ready);
    assert_eq!(m.draft(), &server_settings());
    assert_eq!(store.widget_settings(), Some(server_settings()));
    assert!(!m.is_dirty());
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn test_load_failure_keeps_defaults_and_leaves_loading() {
    let store = DashboardStore::new();
    let (mut m, mut rx) = manager(FakeBackend::default(), store.clone());

    assert!(m.load().await.is_err());

    assert!(!m.is_loading());
    assert_eq!(m.draft(), &WidgetSettings::default());
    assert_eq!(m.draft().primary_color, "#007bff");
    assert_eq!(m.draft().welcome_message, "Hi! How can I help you today?");
    assert!(store.widget_settings().is_none());
    assert_eq!(drain(&mut rx), vec![Toast::error(LOAD_FAILED)]);
}

#[tokio::test]
async fn test_load_failure_keeps_previous_committed_value() {
    let store = DashboardStore::new();
    store.set_widget_settings(server_settings());
    let (mut m, _rx) = manager(FakeBackend::default(), store.clone());

    let _ = m.load().await;

    assert_eq!(store.widget_settings(), Some(server_settings()));
}

#[tokio::test]
async fn test_save_commits_editable_fields_only() {
    let store = DashboardStore::new();
    let backend = FakeBackend {
        fetched: Some(server_settings()),
        save_ok: true,
        token: Some("tok_rotated".into()),
        ..Default::default()
    };
    let saved = backend.saved.clone();
    let (mut m, mut rx) = manager(backend, store.clone());
    m.load().await.unwrap();

    m.regenerate_token().await.unwrap();
    m.update_field(WidgetField::PrimaryColor("#ff0000".into()));
    m.update_field(WidgetField::Position(WidgetPosition::BottomRight));
    assert!(m.is_dirty());

    m.save().await.unwrap();

    let committed = store.widget_settings().unwrap();
    assert_eq!(WidgetSettingsUpdate::from(&committed), WidgetSettingsUpdate::from(m.draft()));
    assert_eq!(committed.bot_token, "tok_server");
    assert_eq!(m.draft().bot_token, "tok_rotated");
    assert!(!m.is_dirty());

    let sent = saved.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].primary_color, "#ff0000");
    assert_eq!(sent[0].position, WidgetPosition::BottomRight);

    assert_eq!(
        drain(&mut rx),
        vec![Toast::success(TOKEN_REGENERATED), Toast::success(SAVE_SUCCEEDED)]
    );
}

#[tokio::test]
async fn test_save_failure_keeps_draft_and_store() {
    let store = DashboardStore::new();
    let backend = FakeBackend {
        fetched: Some(server_settings()),
        save_ok: false,
        ..Default::default()
    };
    let (mut m, mut rx) = manager(backend, store.clone());
    m.load().await.unwrap();

    m.update_field(WidgetField::WelcomeMessage("Edited".into()));
    assert!(m.save().await.is_err());

    assert_eq!(m.draft().welcome_message, "Edited");
    assert_eq!(store.widget_settings(), Some(server_settings()));
    assert!(m.is_dirty());
    assert_eq!(drain(&mut rx), vec![Toast::error(SAVE_FAILED)]);
}

#[tokio::test]
async fn test_clean_draft_can_still_be_saved() {
    let backend = FakeBackend {
        fetched: Some(server_settings()),
        save_ok: true,
        ..Default::default()
    };
    let saved = backend.saved.clone();
    let (mut m, _rx) = manager(backend, DashboardStore::new());
    m.load().await.unwrap();

    assert!(!m.is_dirty());
    m.save().await.unwrap();
    assert_eq!(saved.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_regenerate_changes_only_draft_token() {
    let store = DashboardStore::new();
    let backend = FakeBackend {
        fetched: Some(server_settings()),
        token: Some("tok_new".into()),
        ..Default::default()
    };
    let (mut m, _rx) = manager(backend, store.clone());
    m.load().await.unwrap();
    m.update_field(WidgetField::TextColor("#123456".into()));
    let before = m.draft().clone();

    m.regenerate_token().await.unwrap();

    let after = m.draft();
    assert_eq!(after.bot_token, "tok_new");
    assert_eq!(WidgetSettingsUpdate::from(after), WidgetSettingsUpdate::from(&before));
    assert_eq!(store.widget_settings(), Some(server_settings()));
    assert_eq!(
        m.install_snippet(),
        r#"<script src="https://api.example.com/widget/widget-direct.js" data-bot-token="tok_new"></script>"#
    );
}

#[tokio::test]
async fn test_regenerate_and_save_in_separate_views_do_not_cross() {
    let store = DashboardStore::new();
    let backend = FakeBackend {
        fetched: Some(server_settings()),
        save_ok: true,
        token: Some("tok_rotated".into()),
        ..Default::default()
    };
    let saved = backend.saved.clone();
    let (mut rotating, _rx_a) = manager(backend.clone(), store.clone());
    let (mut editing, _rx_b) = manager(backend, store.clone());
    rotating.load().await.unwrap();
    editing.load().await.unwrap();

    rotating.regenerate_token().await.unwrap();
    editing.update_field(WidgetField::FontFamily("Verdana, sans-serif".into()));
    editing.update_field(WidgetField::WelcomeMessage("Need a hand?".into()));
    editing.save().await.unwrap();

    // The save committed the five fields and left the token alone.
    let committed = store.widget_settings().unwrap();
    assert_eq!(committed.bot_token, "tok_server");
    assert_eq!(
        WidgetSettingsUpdate::from(&committed),
        WidgetSettingsUpdate::from(editing.draft())
    );
    assert_eq!(saved.lock().unwrap().len(), 1);

    // Each view's draft only reflects its own action.
    assert_eq!(rotating.draft().bot_token, "tok_rotated");
    assert_eq!(
        WidgetSettingsUpdate::from(rotating.draft()),
        WidgetSettingsUpdate::from(&server_settings())
    );
    assert_eq!(editing.draft().bot_token, "tok_server");
    assert_eq!(editing.draft().font_family, "Verdana, sans-serif");
}

#[tokio::test]
async fn test_regenerate_failure_keeps_token() {
    let backend = FakeBackend {
        fetched: Some(server_settings()),
        ..Default::default()
    };
    let (mut m, mut rx) = manager(backend, DashboardStore::new());
    m.load().await.unwrap();

    assert!(m.regenerate_token().await.is_err());
    assert_eq!(m.draft().bot_token, "tok_server");
    assert_eq!(drain(&mut rx), vec![Toast::error(TOKEN_REGENERATE_FAILED)]);
}

#[tokio::test]
async fn test_welcome_message_input_never_exceeds_limit() {
    let backend = FakeBackend {
        fetched: Some(server_settings()),
        save_ok: true,
        ..Default::default()
    };
    let saved = backend.saved.clone();
    let (mut m, _rx) = manager(backend, DashboardStore::new());
    m.load().await.unwrap();

    let typed = "x".repeat(501);
    m.update_field(WidgetField::WelcomeMessage(cap_welcome_message(&typed)));
    assert_eq!(m.welcome_counter(), "500 / 500 characters");

    m.save().await.unwrap();
    assert_eq!(saved.lock().unwrap()[0].welcome_message.chars().count(), 500);
}

#[test]
fn test_default_tab_is_installation() {
    let (mut m, _rx) = manager(FakeBackend::default(), DashboardStore::new());
    assert_eq!(m.tab(), SettingsTab::Installation);
    m.set_tab(SettingsTab::Customization);
    assert_eq!(m.tab(), SettingsTab::Customization);
}
