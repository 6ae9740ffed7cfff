//! Draft vs committed widget settings.
//!
//! The draft is local to one editor and freely mutable. The committed copy
//! lives in the shared [`DashboardStore`] and only changes through
//! [`SettingsDraft::apply_loaded`] and [`SettingsDraft::commit_saved`].
//! The bot token is outside [`WidgetField`]: only token regeneration writes
//! it into the draft, and a save never writes it into the committed copy.

use dashboard_client::{WidgetPosition, WidgetSettings, WidgetSettingsUpdate};

use crate::store::DashboardStore;

/// One editable widget field with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetField {
    PrimaryColor(String),
    TextColor(String),
    FontFamily(String),
    Position(WidgetPosition),
    WelcomeMessage(String),
}

/// Local draft paired with the shared committed copy.
#[derive(Debug, Clone)]
pub struct SettingsDraft {
    draft: WidgetSettings,
    committed: DashboardStore,
}

impl SettingsDraft {
    /// Start from the built-in defaults; the committed copy is whatever the store holds.
    pub fn new(committed: DashboardStore) -> Self {
        Self {
            draft: WidgetSettings::default(),
            committed,
        }
    }

    pub fn draft(&self) -> &WidgetSettings {
        &self.draft
    }

    pub fn committed(&self) -> Option<WidgetSettings> {
        self.committed.widget_settings()
    }

    /// Replace one field of the draft. No validation happens here.
    pub fn update_field(&mut self, field: WidgetField) {
        match field {
            WidgetField::PrimaryColor(v) => self.draft.primary_color = v,
            WidgetField::TextColor(v) => self.draft.text_color = v,
            WidgetField::FontFamily(v) => self.draft.font_family = v,
            WidgetField::Position(v) => self.draft.position = v,
            WidgetField::WelcomeMessage(v) => self.draft.welcome_message = v,
        }
    }

    /// The form body a save would send right now.
    pub fn pending_update(&self) -> WidgetSettingsUpdate {
        WidgetSettingsUpdate::from(&self.draft)
    }

    /// A fresh server copy replaces both draft and committed state.
    pub fn apply_loaded(&mut self, settings: WidgetSettings) {
        self.draft = settings.clone();
        self.committed.set_widget_settings(settings);
    }

    /// Promote the saved fields into the committed copy.
    ///
    /// The committed token is kept; before any load the draft's token is used.
    pub fn commit_saved(&self, saved: &WidgetSettingsUpdate) {
        let bot_token = self
            .committed
            .widget_settings()
            .map(|c| c.bot_token)
            .unwrap_or_else(|| self.draft.bot_token.clone());

        self.committed.set_widget_settings(WidgetSettings {
            bot_token,
            primary_color: saved.primary_color.clone(),
            text_color: saved.text_color.clone(),
            font_family: saved.font_family.clone(),
            position: saved.position,
            welcome_message: saved.welcome_message.clone(),
        });
    }

    /// Overwrite the draft token with a freshly issued one.
    pub fn replace_token(&mut self, token: String) {
        self.draft.bot_token = token;
    }

    /// Whether any editable field differs from the committed copy.
    ///
    /// Before the first successful load the built-in defaults stand in for it.
    pub fn is_dirty(&self) -> bool {
        let baseline = self.committed.widget_settings().unwrap_or_default();
        WidgetSettingsUpdate::from(&baseline) != self.pending_update()
    }
}
