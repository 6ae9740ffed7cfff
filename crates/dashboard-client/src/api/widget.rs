use super::*;

impl DashboardClient {
    /// Fetch the account's widget configuration.
    pub async fn get_widget_settings(&self) -> Result<WidgetSettings, ClientError> {
        self.get_json("/widget/settings").await
    }

    /// Persist the five customizable widget fields. The bot token is never sent.
    pub async fn update_widget_settings(
        &self,
        update: &WidgetSettingsUpdate,
    ) -> Result<(), ClientError> {
        self.post_form("/widget/customize", update).await?;
        Ok(())
    }

    /// Issue a new bot token. The server invalidates the previous one immediately.
    pub async fn regenerate_widget_token(&self) -> Result<String, ClientError> {
        let body = self.post_empty("/widget/regenerate-token").await?;
        let resp: RegenerateTokenResponse = serde_json::from_str(&body)?;
        Ok(resp.bot_token)
    }
}
