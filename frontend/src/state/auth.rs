//! Session store: the single source of truth for "who is logged in".
//! `AuthProvider` owns the state and is its only writer; everything else
//! reads through `use_auth`.

use crate::api::{ApiClient, ApiError, LoginRequest, User};
use crate::utils::storage;
use leptos::*;
use serde_json::Value;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[cfg(target_arch = "wasm32")]
const RENEWAL_TICK_MS: u32 = 4 * 60 * 1000;

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    fn logged_out() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: false,
        }
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    let api_client = use_context::<ApiClient>().unwrap_or_default();

    // Restore a persisted session: hydrate the profile when an access token
    // survived the last page load. The UI renders as unauthenticated
    // (loading) until the fetch resolves.
    if storage::access_token().is_some() {
        set_auth_state.update(|state| state.loading = true);
        let api = api_client.clone();
        spawn_local(async move {
            let _ = fetch_current_user(&api, set_auth_state).await;
        });
    }

    #[cfg(target_arch = "wasm32")]
    spawn_renewal_tick(api_client, set_auth_state);

    (auth_state, set_auth_state)
}

#[cfg(target_arch = "wasm32")]
fn spawn_renewal_tick(api: ApiClient, set_auth_state: WriteSignal<AuthState>) {
    use gloo_timers::future::TimeoutFuture;

    spawn_local(async move {
        loop {
            TimeoutFuture::new(RENEWAL_TICK_MS).await;
            if storage::access_token().is_none() {
                continue;
            }
            if storage::refresh_token().is_none() {
                logout(set_auth_state);
                continue;
            }
            match api.refresh_access_token().await {
                Ok(_) => {
                    let _ = fetch_current_user(&api, set_auth_state).await;
                }
                Err(err) => {
                    log::warn!("Renouvellement de session échoué: {}", err);
                    logout(set_auth_state);
                }
            }
        }
    });
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Issues credentials, then hydrates the profile. Issuance failure leaves
/// the session unauthenticated and surfaces the error to the login form; a
/// failing profile fetch degrades to a clean logout.
pub async fn login(
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
    request: LoginRequest,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    if let Err(error) = api.login(request).await {
        set_auth_state.update(|state| state.loading = false);
        return Err(error);
    }

    fetch_current_user(api, set_auth_state).await
}

/// Clears both persisted tokens and the in-memory user. Synchronous,
/// idempotent, safe to call when already logged out.
pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::logged_out());
}

/// Replaces `user` wholesale on success. Any failure, including a renewal
/// failure bubbling up from the gateway, degrades to logout rather than a
/// partially authenticated limbo.
pub async fn fetch_current_user(
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    match api.get_me().await {
        Ok(user) => {
            set_auth_state.set(AuthState::authenticated(user));
            Ok(())
        }
        Err(error) => {
            logout(set_auth_state);
            Err(error)
        }
    }
}

/// Submits a partial profile update and shallow-merges the returned fields
/// into the current user. On failure the error propagates and the session
/// state is left untouched.
pub async fn update_user(
    api: &ApiClient,
    (auth_state, set_auth_state): AuthContext,
    fields: Value,
) -> Result<(), ApiError> {
    let returned = api.update_me(fields).await?;

    let current = auth_state
        .get_untracked()
        .user
        .ok_or_else(|| ApiError::unknown("Aucune session active"))?;
    let merged = merge_user_fields(&current, &returned)?;
    set_auth_state.set(AuthState::authenticated(merged));
    Ok(())
}

/// Top-level shallow merge: returned fields win, absent fields keep their
/// current value.
pub fn merge_user_fields(current: &User, returned: &Value) -> Result<User, ApiError> {
    let mut base = serde_json::to_value(current)
        .map_err(|e| ApiError::unknown(format!("Failed to serialize user: {}", e)))?;

    if let (Value::Object(base_map), Value::Object(patch)) = (&mut base, returned) {
        for (key, value) in patch {
            base_map.insert(key.clone(), value.clone());
        }
    }

    serde_json::from_value(base)
        .map_err(|e| ApiError::unknown(format!("Failed to merge user fields: {}", e)))
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_action(move |request: &LoginRequest| {
        let api = api.clone();
        let payload = request.clone();
        async move { login(&api, set_auth, payload).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    Callback::new(move |_| logout(set_auth))
}

pub fn use_update_user_action() -> Action<Value, Result<(), ApiError>> {
    let ctx = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_action(move |fields: &Value| {
        let api = api.clone();
        let fields = fields.clone();
        async move { update_user(&api, ctx, fields).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use crate::utils::storage;
    use httpmock::prelude::*;
    use serde_json::json;

    fn user_json() -> serde_json::Value {
        json!({
            "id": 7,
            "username": "claire",
            "email": "claire@example.fr",
            "type": "personal",
            "is_staff": false,
            "preferences": {
                "activities": ["yoga"],
                "location": "Paris",
                "level": "débutant",
                "objectives": []
            },
            "avatar": "default"
        })
    }

    fn login_request() -> LoginRequest {
        LoginRequest {
            email: "claire@example.fr".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn login_then_logout_round_trip() {
        storage::clear_tokens();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/token/");
            then.status(200)
                .json_body(json!({ "access": "acc-1", "refresh": "ref-1" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/me/");
            then.status(200).json_body(user_json());
        });

        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        login(&api, set_auth, login_request()).await.unwrap();

        let snapshot = auth.get_untracked();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.user.as_ref().unwrap().username, "claire");
        assert_eq!(storage::access_token().as_deref(), Some("acc-1"));

        logout(set_auth);
        let snapshot = auth.get_untracked();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(storage::access_token().is_none());
        assert!(storage::refresh_token().is_none());

        // Idempotent: a second logout leaves the same final state.
        logout(set_auth);
        let snapshot = auth.get_untracked();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());

        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_profile_fetch_degrades_login_to_logout() {
        storage::clear_tokens();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/token/");
            then.status(200)
                .json_body(json!({ "access": "acc-1", "refresh": "ref-1" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/me/");
            then.status(500).json_body(json!({}));
        });

        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let error = login(&api, set_auth, login_request())
            .await
            .expect_err("must fail");
        assert_eq!(error.status, Some(500));

        let snapshot = auth.get_untracked();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(storage::access_token().is_none());

        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_issuance_leaves_session_unauthenticated() {
        storage::clear_tokens();
        let server = MockServer::start_async().await;
        let me = server.mock(|when, then| {
            when.method(GET).path("/api/me/");
            then.status(200).json_body(user_json());
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/token/");
            then.status(401)
                .json_body(json!({ "error": "Identifiants invalides", "code": "INVALID_CREDENTIALS" }));
        });

        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let error = login(&api, set_auth, login_request())
            .await
            .expect_err("must fail");
        assert_eq!(error.code, "INVALID_CREDENTIALS");
        assert!(!auth.get_untracked().is_authenticated);
        assert_eq!(me.hits(), 0);

        runtime.dispose();
    }

    #[tokio::test]
    async fn renewal_failure_during_fetch_clears_the_session() {
        storage::clear_tokens();
        storage::store_token_pair("stale", "ref-dead").unwrap();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/me/");
            then.status(401)
                .json_body(json!({ "error": "Token expired", "code": "TOKEN_EXPIRED" }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/token/refresh/");
            then.status(401)
                .json_body(json!({ "error": "Refresh token invalid", "code": "TOKEN_INVALID" }));
        });

        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState {
            user: None,
            is_authenticated: false,
            loading: true,
        });
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let error = fetch_current_user(&api, set_auth)
            .await
            .expect_err("must fail");
        assert_eq!(error.code, "TOKEN_INVALID");

        let snapshot = auth.get_untracked();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(storage::access_token().is_none());
        assert!(storage::refresh_token().is_none());

        runtime.dispose();
    }

    #[tokio::test]
    async fn update_user_merges_response_into_current_user() {
        storage::clear_tokens();
        storage::store_token_pair("acc-1", "ref-1").unwrap();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(httpmock::Method::PATCH).path("/api/me/");
            then.status(200).json_body(json!({
                "preferences": {
                    "activities": ["yoga"],
                    "location": "Lyon",
                    "level": "débutant",
                    "objectives": []
                }
            }));
        });

        let runtime = create_runtime();
        let initial: User = serde_json::from_value(user_json()).unwrap();
        let (auth, set_auth) = create_signal(AuthState::authenticated(initial));
        let api = ApiClient::new_with_base_url(server.url("/api"));

        update_user(
            &api,
            (auth, set_auth),
            json!({ "preferences": { "location": "Lyon" } }),
        )
        .await
        .unwrap();

        let user = auth.get_untracked().user.unwrap();
        let prefs = user.preferences.unwrap();
        assert_eq!(prefs.location, "Lyon");
        assert_eq!(prefs.level, "débutant");
        assert_eq!(user.avatar.as_deref(), Some("default"));

        storage::clear_tokens();
        runtime.dispose();
    }

    #[tokio::test]
    async fn update_user_failure_leaves_state_untouched() {
        storage::clear_tokens();
        storage::store_token_pair("acc-1", "ref-1").unwrap();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(httpmock::Method::PATCH).path("/api/me/");
            then.status(422)
                .json_body(json!({ "error": "Localisation invalide", "code": "VALIDATION_ERROR" }));
        });

        let runtime = create_runtime();
        let initial: User = serde_json::from_value(user_json()).unwrap();
        let (auth, set_auth) = create_signal(AuthState::authenticated(initial.clone()));
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let error = update_user(&api, (auth, set_auth), json!({ "preferences": {} }))
            .await
            .expect_err("must fail");
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(auth.get_untracked().user, Some(initial));

        storage::clear_tokens();
        runtime.dispose();
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get_untracked();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }
}
