use super::*;

impl DashboardClient {
    pub async fn list_tickets(&self) -> Result<serde_json::Value, ClientError> {
        self.get_json("/tickets/list").await
    }
}
