use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, Plan, SubscriptionRequest},
};

impl ApiClient {
    pub async fn fetch_plans(&self) -> Result<Vec<Plan>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| Ok(self.http_client().get(format!("{}/plans/", base_url))))
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn create_subscription(
        &self,
        request: SubscriptionRequest,
    ) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/subscriptions/", base_url))
                    .json(&request))
            })
            .await?;
        Self::map_json_response(response).await
    }
}
