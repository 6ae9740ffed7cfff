//! Widget settings view controller.
//!
//! Drives one editing session: `loading` until the first fetch settles, then
//! `ready` with a draft the user edits. Every backend failure is reported
//! as a toast and leaves committed state as it was.
//!
//! Requests are neither de-duplicated nor cancelled. The exclusive borrow
//! serializes calls made through one manager; separate managers sharing a
//! store may still interleave, which stays safe only because save and token
//! regeneration write disjoint fields.

use dashboard_client::{ClientError, WidgetSettings};

use super::backend::WidgetBackend;
use super::draft::{SettingsDraft, WidgetField};
use super::input::welcome_message_counter;
use super::snippet::compose_install_snippet;
use crate::notification::Notifier;
use crate::store::DashboardStore;

pub const LOAD_FAILED: &str = "Failed to load widget settings";
pub const SAVE_SUCCEEDED: &str = "Settings saved successfully!";
pub const SAVE_FAILED: &str = "Failed to save settings";
pub const TOKEN_REGENERATED: &str = "Token regenerated successfully!";
pub const TOKEN_REGENERATE_FAILED: &str = "Failed to regenerate token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Installation,
    Customization,
}

pub struct WidgetSettingsManager<B> {
    backend: B,
    state: SettingsDraft,
    notifier: Notifier,
    script_base: String,
    phase: ViewPhase,
    tab: SettingsTab,
}

impl<B: WidgetBackend> WidgetSettingsManager<B> {
    /// `script_base` is the externally reachable URL embedded in the install snippet.
    pub fn new(
        backend: B,
        store: DashboardStore,
        notifier: Notifier,
        script_base: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            state: SettingsDraft::new(store),
            notifier,
            script_base: script_base.into(),
            phase: ViewPhase::Loading,
            tab: SettingsTab::default(),
        }
    }

    /// Fetch the configuration; on success it replaces draft and committed copy.
    ///
    /// The view is `ready` afterwards whatever the outcome.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let result = self.backend.fetch_settings().await;
        self.phase = ViewPhase::Ready;

        match result {
            Ok(settings) => {
                tracing::debug!(position = %settings.position, "Widget settings loaded");
                self.state.apply_loaded(settings);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Widget settings load failed: {e}");
                self.notifier.error(LOAD_FAILED);
                Err(e)
            }
        }
    }

    pub fn update_field(&mut self, field: WidgetField) {
        self.state.update_field(field);
    }

    /// Send the five editable fields; on success they become the committed copy.
    ///
    /// A failed save keeps the draft as edited so the user can retry.
    pub async fn save(&mut self) -> Result<(), ClientError> {
        let update = self.state.pending_update();
        match self.backend.save_settings(&update).await {
            Ok(()) => {
                self.state.commit_saved(&update);
                tracing::info!("Widget settings saved");
                self.notifier.success(SAVE_SUCCEEDED);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Widget settings save failed: {e}");
                self.notifier.error(SAVE_FAILED);
                Err(e)
            }
        }
    }

    /// Rotate the bot token. Takes effect on the server immediately; only the
    /// draft token changes locally.
    pub async fn regenerate_token(&mut self) -> Result<(), ClientError> {
        match self.backend.regenerate_token().await {
            Ok(token) => {
                self.state.replace_token(token);
                tracing::info!("Widget bot token regenerated");
                self.notifier.success(TOKEN_REGENERATED);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Widget token regeneration failed: {e}");
                self.notifier.error(TOKEN_REGENERATE_FAILED);
                Err(e)
            }
        }
    }

    /// Install script for the token currently shown.
    pub fn install_snippet(&self) -> String {
        compose_install_snippet(&self.state.draft().bot_token, &self.script_base)
    }

    pub fn welcome_counter(&self) -> String {
        welcome_message_counter(&self.state.draft().welcome_message)
    }

    pub fn draft(&self) -> &WidgetSettings {
        self.state.draft()
    }

    pub fn committed(&self) -> Option<WidgetSettings> {
        self.state.committed()
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ViewPhase::Loading
    }

    pub fn tab(&self) -> SettingsTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
    }
}
