use serde_json::Value;

use super::{
    client::ApiClient,
    types::{AcceptInvitationRequest, ApiError, CompanySignupRequest, InvitationRequest},
};

impl ApiClient {
    pub async fn signup_company(&self, request: CompanySignupRequest) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/companies/signup/", base_url))
                    .json(&request))
            })
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn invite_employee(&self, email: &str) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let payload = InvitationRequest {
            email: email.to_string(),
        };
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/invitations/", base_url))
                    .json(&payload))
            })
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn accept_invitation(
        &self,
        request: AcceptInvitationRequest,
    ) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/accept-invite/", base_url))
                    .json(&request))
            })
            .await?;
        Self::map_json_response(response).await
    }
}
