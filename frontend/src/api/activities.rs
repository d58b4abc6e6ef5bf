use serde_json::Value;

use super::{
    client::ApiClient,
    types::{Activity, ApiError, CreateActivityRequest},
};

impl ApiClient {
    /// Full catalogue; search/filtering/pagination happen client-side.
    pub async fn list_activities(&self) -> Result<Vec<Activity>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| Ok(self.http_client().get(format!("{}/activities/", base_url))))
            .await?;
        Self::map_json_response(response).await
    }

    /// Activities the current user registered for.
    pub async fn my_activities(&self) -> Result<Vec<Activity>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .get(format!("{}/activities/my-activities/", base_url)))
            })
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn create_activity(
        &self,
        request: CreateActivityRequest,
    ) -> Result<Activity, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/activities/", base_url))
                    .json(&request))
            })
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn register_for_activity(&self, id: i64) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/activities/{}/register/", base_url, id)))
            })
            .await?;
        Self::map_json_response(response).await
    }
}
