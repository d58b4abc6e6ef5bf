use crate::api::{Activity, ApiClient, ApiError};
use serde_json::Value;

pub async fn load_activities(api: &ApiClient) -> Result<Vec<Activity>, ApiError> {
    api.list_activities().await
}

pub async fn register_for_activity(api: &ApiClient, id: i64) -> Result<Value, ApiError> {
    api.register_for_activity(id).await
}
