use super::*;

impl DashboardClient {
    pub async fn list_visitors(&self) -> Result<Vec<Visitor>, ClientError> {
        self.get_json("/visitors").await
    }

    pub async fn get_visitor(&self, id: &str) -> Result<Visitor, ClientError> {
        self.get_json(&format!("/visitors/{id}")).await
    }
}
