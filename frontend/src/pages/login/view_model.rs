use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use leptos::*;
use leptos_router::use_navigate;

#[derive(Clone)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    let navigate = use_navigate();
    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    password.set(String::new());
                    navigate("/dashboard", Default::default());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}
