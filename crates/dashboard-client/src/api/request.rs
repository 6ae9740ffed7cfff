use reqwest::cookie::CookieStore;
use reqwest::header::HeaderValue;
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::*;

impl DashboardClient {
    /// Create a client for an absolute base URL such as `https://api.example.com`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_jar(base_url, Arc::new(Jar::default()))
    }

    /// Create a client sharing an existing cookie jar.
    pub fn with_jar(base_url: &str, jar: Arc<Jar>) -> Result<Self, ClientError> {
        let base_url = url::Url::parse(base_url.trim_end_matches('/'))?;
        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .build()?;
        Ok(Self {
            http,
            jar,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }

    /// Cookies the jar would send to the API origin, as a `Cookie` header value.
    pub fn session_cookies(&self) -> Option<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|v: HeaderValue| v.to_str().ok().map(str::to_string))
    }

    /// Seed the jar from a previously saved `Cookie` header value.
    pub fn restore_session_cookies(&self, header: &str) {
        for pair in header.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            self.jar.add_cookie_str(pair, &self.base_url);
        }
    }

    /// Expire every cookie the jar holds for the API origin.
    pub fn clear_session_cookies(&self) {
        let Some(header) = self.session_cookies() else {
            return;
        };
        for name in header.split(';').filter_map(|p| p.trim().split('=').next()) {
            if name.is_empty() {
                continue;
            }
            // Restored cookies carry the default path, server-set ones usually `/`.
            self.jar.add_cookie_str(&format!("{name}=; Max-Age=0"), &self.base_url);
            self.jar
                .add_cookie_str(&format!("{name}=; Max-Age=0; Path=/"), &self.base_url);
        }
    }

    /// Send a request and return the body, mapping non-2xx to [`ClientError::Api`].
    pub(super) async fn send(&self, req: RequestBuilder) -> Result<String, ClientError> {
        let resp: Response = req.send().await?;
        let status = resp.status();
        let url = resp.url().path().to_string();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(path = %url, status = status.as_u16(), "Dashboard API request failed");
            return Err(ClientError::from_response(status.as_u16(), body));
        }

        tracing::debug!(path = %url, status = status.as_u16(), "Dashboard API request ok");
        Ok(body)
    }

    /// GET and decode a JSON body.
    pub(super) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let body = self.send(self.http.get(self.url(path))).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST a JSON body and return the raw response body.
    pub(super) async fn post_json(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<String, ClientError> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub(super) async fn post_form(
        &self,
        path: &str,
        form: &impl Serialize,
    ) -> Result<String, ClientError> {
        self.send(self.http.post(self.url(path)).form(form)).await
    }

    /// POST with no body.
    pub(super) async fn post_empty(&self, path: &str) -> Result<String, ClientError> {
        self.send(self.http.post(self.url(path))).await
    }

    /// PUT a JSON body.
    pub(super) async fn put_json(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<String, ClientError> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    /// DELETE a resource.
    pub(super) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    /// POST a single-file multipart form under the field name `file`.
    pub(super) async fn post_file(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ClientError> {
        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime.as_ref())?;
        let form = reqwest::multipart::Form::new().part("file", part);
        self.send(self.http.post(self.url(path)).multipart(form)).await
    }
}
