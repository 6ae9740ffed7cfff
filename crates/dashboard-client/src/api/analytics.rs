use super::*;

/// Window used by the dashboard overview when none is given.
pub const DEFAULT_ANALYTICS_DAYS: u32 = 7;

impl DashboardClient {
    /// Overview metrics for the last `days` days. The payload shape is backend-defined.
    pub async fn analytics_dashboard(&self, days: u32) -> Result<serde_json::Value, ClientError> {
        self.get_json(&format!("/analytics/dashboard?days={days}"))
            .await
    }
}
