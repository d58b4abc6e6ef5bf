use crate::{
    api::{ApiError, LoginRequest},
    components::layout::Layout,
    pages::login::{components::form::LoginForm, utils, view_model::use_login_view_model},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let email = vm.email;
    let password = vm.password;
    let error = vm.error;
    let login_action = vm.login_action;

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        if let Err(msg) = utils::validate_credentials(&email_value, &password_value) {
            error.set(Some(ApiError::validation(msg)));
            return;
        }

        error.set(None);
        login_action.dispatch(LoginRequest {
            email: email_value.trim().to_string(),
            password: password_value,
        });
    });

    view! {
        <Layout>
            <LoginForm
                email=email
                password=password
                error=error
                pending=pending
                on_email_input=Callback::new(move |value: String| email.set(value))
                on_password_input=Callback::new(move |value: String| password.set(value))
                on_submit=handle_submit
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_with_router;

    #[test]
    fn login_panel_renders_credentials_form() {
        let html = render_with_router("/login", move || {
            provide_auth(None);
            view! { <LoginPanel/> }
        });
        assert!(html.contains("Connexion"));
        assert!(html.contains("Mot de passe"));
        assert!(html.contains("Se connecter"));
        assert!(html.contains("Créer un compte"));
    }
}
