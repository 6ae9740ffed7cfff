use super::*;

impl DashboardClient {
    pub async fn list_sessions(&self) -> Result<Vec<ChatSession>, ClientError> {
        self.get_json("/sessions").await
    }

    pub async fn get_session(&self, id: &str) -> Result<ChatSession, ClientError> {
        self.get_json(&format!("/sessions/{id}")).await
    }

    /// Messages of one chat session, oldest first as returned by the backend.
    pub async fn session_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, ClientError> {
        self.get_json(&format!("/sessions/{session_id}/messages"))
            .await
    }
}
