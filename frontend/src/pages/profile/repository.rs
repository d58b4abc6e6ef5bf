use crate::api::{ApiClient, ApiError};
use crate::state::auth::{self, AuthState};
use leptos::WriteSignal;

/// Multipart avatar upload, then a full profile re-fetch so the session
/// reflects the stored file reference.
pub async fn upload_avatar(
    api: &ApiClient,
    set_auth: WriteSignal<AuthState>,
    file_name: String,
    bytes: Vec<u8>,
) -> Result<(), ApiError> {
    api.upload_avatar(file_name, bytes).await?;
    auth::fetch_current_user(api, set_auth).await
}
