use serde_json::json;

use super::*;

impl DashboardClient {
    pub async fn list_websites(&self) -> Result<serde_json::Value, ClientError> {
        self.get_json("/website").await
    }

    /// Ask the backend to crawl `url` into the knowledge base.
    pub async fn load_website(&self, url: &str) -> Result<serde_json::Value, ClientError> {
        let body = self.post_json("/website", &json!({ "url": url })).await?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn delete_website(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/website/{id}")).await
    }
}
