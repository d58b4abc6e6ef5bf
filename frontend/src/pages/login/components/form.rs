use crate::api::ApiError;
use crate::components::{error::InlineErrorMessage, forms::TextField};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    #[prop(into)] email: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_email_input: Callback<String>,
    #[prop(into)] on_password_input: Callback<String>,
    #[prop(into)] on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form
            class="max-w-md mx-auto bg-surface-elevated rounded-2xl shadow-lg p-8 space-y-4"
            on:submit=move |ev| on_submit.call(ev)
        >
            <h1 class="text-2xl font-bold text-fg">"Connexion"</h1>
            <TextField
                label="Email"
                value=email
                input_type="email"
                required=true
                on_input=on_email_input
            />
            <TextField
                label="Mot de passe"
                value=password
                input_type="password"
                required=true
                on_input=on_password_input
            />
            <InlineErrorMessage error=error/>
            <button
                type="submit"
                class="w-full px-4 py-2 rounded-lg bg-action-primary-bg text-action-primary-text font-medium disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Connexion..." } else { "Se connecter" }}
            </button>
            <p class="text-sm text-fg-muted">
                "Pas encore de compte ? "
                <a href="/register" class="text-action-primary-bg hover:underline">"Créer un compte"</a>
            </p>
        </form>
    }
}
