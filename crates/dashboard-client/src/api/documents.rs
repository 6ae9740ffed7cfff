use super::*;

impl DashboardClient {
    pub async fn list_documents(&self) -> Result<Vec<Document>, ClientError> {
        self.get_json("/documents").await
    }

    /// Upload a knowledge-base document as multipart field `file`.
    pub async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Document, ClientError> {
        let body = self.post_file("/documents/upload", file_name, bytes).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn delete_document(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/documents/{id}")).await
    }
}
