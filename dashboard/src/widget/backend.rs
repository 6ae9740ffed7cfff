//! Backend seam for the widget settings flow.

use std::future::Future;

use dashboard_client::{ClientError, DashboardClient, WidgetSettings, WidgetSettingsUpdate};

/// The three backend actions the widget settings view relies on.
pub trait WidgetBackend {
    fn fetch_settings(&self) -> impl Future<Output = Result<WidgetSettings, ClientError>> + Send;

    fn save_settings(
        &self,
        update: &WidgetSettingsUpdate,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Returns the newly issued bot token.
    fn regenerate_token(&self) -> impl Future<Output = Result<String, ClientError>> + Send;
}

impl WidgetBackend for DashboardClient {
    async fn fetch_settings(&self) -> Result<WidgetSettings, ClientError> {
        self.get_widget_settings().await
    }

    async fn save_settings(&self, update: &WidgetSettingsUpdate) -> Result<(), ClientError> {
        self.update_widget_settings(update).await
    }

    async fn regenerate_token(&self) -> Result<String, ClientError> {
        self.regenerate_widget_token().await
    }
}
