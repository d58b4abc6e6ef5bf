use super::repository;
use crate::api::{AccountType, ApiClient, ApiError, RegisterRequest};
use crate::state::auth::use_auth;
use leptos::*;
use leptos_router::use_navigate;

#[derive(Clone)]
pub struct RegisterViewModel {
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm: RwSignal<String>,
    pub account_type: RwSignal<AccountType>,
    pub error: RwSignal<Option<ApiError>>,
    pub register_action: Action<RegisterRequest, Result<(), ApiError>>,
}

pub fn use_register_view_model() -> RegisterViewModel {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    let error = create_rw_signal(None::<ApiError>);
    let register_action = create_action(move |request: &RegisterRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { repository::register_and_login(&api, set_auth, request).await }
    });

    let navigate = use_navigate();
    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    navigate("/dashboard", Default::default());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    RegisterViewModel {
        username: create_rw_signal(String::new()),
        email: create_rw_signal(String::new()),
        password: create_rw_signal(String::new()),
        confirm: create_rw_signal(String::new()),
        account_type: create_rw_signal(AccountType::Personal),
        error,
        register_action,
    }
}
