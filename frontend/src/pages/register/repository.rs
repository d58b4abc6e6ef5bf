use crate::api::{ApiClient, ApiError, LoginRequest, RegisterRequest};
use crate::state::auth::{self, AuthState};
use leptos::WriteSignal;

/// Creates the account, then opens a session with the same credentials so
/// the new user lands signed in.
pub async fn register_and_login(
    api: &ApiClient,
    set_auth: WriteSignal<AuthState>,
    request: RegisterRequest,
) -> Result<(), ApiError> {
    let credentials = LoginRequest {
        email: request.email.clone(),
        password: request.password.clone(),
    };
    api.register(request).await?;
    auth::login(api, set_auth, credentials).await
}
