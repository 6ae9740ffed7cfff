use super::*;

impl DashboardClient {
    /// Log in with email and password. The session cookie lands in the jar.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let body = self
            .post_json("/auth/login", &LoginRequest { email, password })
            .await?;
        parse_auth_response(&body)
    }

    /// Create an account. No session is started; the caller logs in afterwards.
    pub async fn signup(
        &self,
        full_name: &str,
        email: &str,
        company_name: &str,
        password: &str,
    ) -> Result<AuthResponse, ClientError> {
        let req = SignupRequest {
            full_name,
            email,
            company_name,
            password,
        };
        let body = self.post_json("/auth/signup", &req).await?;
        parse_auth_response(&body)
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        self.post_empty("/auth/logout").await?;
        Ok(())
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ClientError> {
        self.put_json("/auth/profile", update).await?;
        Ok(())
    }
}

/// An empty body decodes as a response without a user.
fn parse_auth_response(body: &str) -> Result<AuthResponse, ClientError> {
    if body.trim().is_empty() {
        return Ok(AuthResponse { user: None });
    }
    Ok(serde_json::from_str(body)?)
}
