use serde_json::{json, Value};

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, RefreshResponse, RegisterRequest, TokenPair},
};
use crate::utils::storage;

impl ApiClient {
    /// Credential issuance. Deliberately bypasses `send_with_refresh`: the
    /// issuance endpoint must never carry the credential it establishes.
    pub async fn login(&self, request: LoginRequest) -> Result<TokenPair, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/token/", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let pair: TokenPair = Self::map_json_response(response).await?;
        storage::store_token_pair(&pair.access, &pair.refresh).map_err(ApiError::unknown)?;
        Ok(pair)
    }

    /// Credential renewal. Submits the stored refresh token, persists the
    /// renewed access token. Unauthenticated for the same reason as `login`.
    pub async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let refresh = storage::refresh_token()
            .ok_or_else(|| ApiError::unknown("No refresh token").with_status(401))?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/token/refresh/", base_url))
            .json(&json!({ "refresh": refresh }))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let renewed: RefreshResponse = Self::map_json_response(response).await?;
        storage::store_access_token(&renewed.access).map_err(ApiError::unknown)?;
        Ok(renewed.access)
    }

    /// Account registration, also excluded from credential attachment.
    pub async fn register(&self, request: RegisterRequest) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/register/", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::map_json_response(response).await
    }
}
