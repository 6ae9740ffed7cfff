use super::*;

impl DashboardClient {
    pub async fn list_audio(&self) -> Result<serde_json::Value, ClientError> {
        self.get_json("/audio").await
    }

    pub async fn upload_audio(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<serde_json::Value, ClientError> {
        let body = self.post_file("/audio", file_name, bytes).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn delete_audio(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/audio/{id}")).await
    }
}
