use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, utils::storage};

/// Single outbound request pipeline. Every API call in the application goes
/// through one of the endpoint methods in this crate's `api` modules, all of
/// which funnel into [`ApiClient::send_with_refresh`]. Credential issuance,
/// renewal and registration are the exception: they stay unauthenticated.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Bearer header for the current access token. Empty when no token is
    /// stored, so unauthenticated browsing still works.
    pub(crate) fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = storage::access_token() {
            headers.insert(
                AUTHORIZATION,
                format!("Bearer {}", token)
                    .parse()
                    .map_err(|_| ApiError::unknown("Invalid token format"))?,
            );
        }
        Ok(headers)
    }

    /// Sends the built request with the current credential attached. On a
    /// 401 with a stored refresh token, renews the access token once and
    /// re-issues the original request exactly once; the straight-line flow
    /// is the per-request retry flag. Without a refresh token the 401
    /// response is handed back untouched, and a failing renewal propagates
    /// its own error.
    pub(crate) async fn send_with_refresh<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> Result<RequestBuilder, ApiError>,
    {
        let headers = self.auth_headers()?;
        let response = build()?
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }
        if storage::refresh_token().is_none() {
            return Ok(response);
        }

        self.refresh_access_token().await?;

        let headers = self.auth_headers()?;
        build()?
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    /// Maps a response to its JSON body on 2xx, or to an [`ApiError`]
    /// carrying the server's error body and HTTP status otherwise.
    pub(crate) async fn map_json_response<T>(response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub(crate) async fn error_from_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiError>(&body) {
            Ok(error) => error.with_status(status),
            Err(_) => {
                let message = if body.trim().is_empty() {
                    format!("Request failed with status {}", status)
                } else {
                    body
                };
                ApiError {
                    error: message,
                    code: "HTTP_ERROR".to_string(),
                    details: None,
                    status: Some(status),
                }
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn auth_headers_empty_without_token() {
        storage::clear_tokens();
        let client = ApiClient::new_with_base_url("http://localhost/api");
        let headers = client.auth_headers().unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn auth_headers_carry_bearer_token() {
        storage::store_access_token("token-123").unwrap();
        let client = ApiClient::new_with_base_url("http://localhost/api");
        let headers = client.auth_headers().unwrap();
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer token-123"
        );
        storage::clear_tokens();
    }
}
