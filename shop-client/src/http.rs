//! HTTP client for network-based API calls

use crate::session::AuthWatch;
use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::response::ApiResponse;

/// HTTP client for making network requests to the storefront backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    auth_watch: Option<AuthWatch>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            auth_watch: None,
        })
    }

    /// Report 401 responses to this watch (wakes the session refresh loop)
    pub fn set_auth_watch(&mut self, watch: AuthWatch) {
        self.auth_watch = Some(watch);
    }

    /// Set the authentication token
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Clear the authentication token
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, &url);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        request
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(reqwest::Method::POST, path).send().await?;
        self.handle_response(response).await
    }

    /// Make a PUT request without body
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(reqwest::Method::PUT, path).send().await?;
        self.handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Non-2xx responses are mapped to the error taxonomy; the response body
    /// envelope (if it parses) supplies the user-facing message, so a 422
    /// names the state/action pair the backend rejected. 401s additionally
    /// wake the session refresh loop through the auth watch.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                if let Some(watch) = &self.auth_watch {
                    watch.report_unauthorized();
                }
            }
            let text = response.text().await.unwrap_or_default();
            return Err(Self::error_from(status, text));
        }

        response.json().await.map_err(Into::into)
    }

    pub(crate) fn error_from(status: StatusCode, body: String) -> ClientError {
        // Prefer the envelope's message over raw body text.
        let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
            .map(|envelope| envelope.message)
            .unwrap_or(body);

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            StatusCode::CONFLICT => ClientError::Conflict(message),
            StatusCode::UNPROCESSABLE_ENTITY => ClientError::InvalidTransition(message),
            _ => ClientError::Internal(message),
        }
    }

    /// Unwrap the standard response envelope, requiring a data payload
    pub(crate) fn expect_data<T>(response: ApiResponse<T>, context: &str) -> ClientResult<T> {
        response
            .data
            .ok_or_else(|| ClientError::InvalidResponse(format!("missing {} data", context)))
    }
}
