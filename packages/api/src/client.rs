//! HTTP plumbing for the BizLedger backend.

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;

use store::AppConfig;

use crate::error::{self, ApiError};

/// Thin client over the backend REST API.
///
/// Holds the base URL, a shared `reqwest` client and the current bearer
/// token. Cloning is cheap and clones share the token slot, so setting the
/// token after login is visible to every view holding a clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api.base_url)
    }

    /// Set or clear the bearer token used on subsequent requests.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap() = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Build a request with the bearer header when a token is present.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, &url);
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "backend returned an error body");
            return Err(error::from_status_body(status.as_u16(), &body));
        }
        Ok(response.json().await?)
    }

    async fn check(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "backend returned an error body");
            return Err(error::from_status_body(status.as_u16(), &body));
        }
        Ok(())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::decode(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST where the response body is irrelevant.
    pub async fn post_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::check(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::check(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let api = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(api.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_token_slot_is_shared_across_clones() {
        let api = ApiClient::new("http://localhost:8000/api");
        let clone = api.clone();

        api.set_token(Some("tok-1".to_string()));
        assert_eq!(clone.token().as_deref(), Some("tok-1"));

        clone.set_token(None);
        assert!(api.token().is_none());
    }
}
