use reqwest::multipart;
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, User},
};

impl ApiClient {
    pub async fn get_me(&self) -> Result<User, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| Ok(self.http_client().get(format!("{}/me/", base_url))))
            .await?;
        Self::map_json_response(response).await
    }

    /// Partial profile update. The server echoes the updated fields; the
    /// session store merges them into the current user.
    pub async fn update_me(&self, fields: Value) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .patch(format!("{}/me/", base_url))
                    .json(&fields))
            })
            .await?;
        Self::map_json_response(response).await
    }

    /// Avatar upload variant of the profile update, as multipart form data.
    pub async fn upload_avatar(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                let part = multipart::Part::bytes(bytes.clone()).file_name(file_name.clone());
                let form = multipart::Form::new().part("avatar", part);
                Ok(self
                    .http_client()
                    .patch(format!("{}/me/", base_url))
                    .multipart(form))
            })
            .await?;
        Self::map_json_response(response).await
    }
}
