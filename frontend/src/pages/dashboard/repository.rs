use crate::api::{Activity, ApiClient, ApiError};

pub async fn load_my_activities(api: &ApiClient) -> Result<Vec<Activity>, ApiError> {
    api.my_activities().await
}
