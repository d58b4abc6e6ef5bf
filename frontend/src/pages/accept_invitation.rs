use crate::{
    api::{AcceptInvitationRequest, ApiClient, ApiError},
    components::{error::InlineErrorMessage, forms::TextField, layout::Layout},
    pages::register::utils::validate_registration,
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, use_query_map};

/// Invitation landing: the emailed link carries a `token` query parameter;
/// the invitee picks a username and password to join their company space.
#[component]
pub fn AcceptInvitationPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let query = use_query_map();

    let token = create_rw_signal(
        query.with_untracked(|q| q.get("token").cloned().unwrap_or_default()),
    );
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let accept_action = create_action(move |request: &AcceptInvitationRequest| {
        let api = api.clone();
        let request = request.clone();
        async move {
            api.accept_invitation(request).await?;
            Ok(())
        }
    });
    let pending = accept_action.pending();

    let navigate = use_navigate();
    create_effect(move |_| {
        if let Some(result) = accept_action.value().get() {
            match result {
                Ok(()) => navigate("/login", Default::default()),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let token_value = token.get_untracked();
        if token_value.trim().is_empty() {
            error.set(Some(ApiError::validation("Le lien d'invitation est invalide.")));
            return;
        }
        // The invitation already carries the email; validate the rest with a
        // placeholder address.
        if let Err(msg) = validate_registration(
            &username.get_untracked(),
            "invite@example.fr",
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            error.set(Some(ApiError::validation(msg)));
            return;
        }
        error.set(None);
        accept_action.dispatch(AcceptInvitationRequest {
            token: token_value.trim().to_string(),
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        });
    };

    view! {
        <Layout>
            <form
                class="max-w-md mx-auto bg-surface-elevated rounded-2xl shadow-lg p-8 space-y-4"
                on:submit=handle_submit
            >
                <h1 class="text-2xl font-bold text-fg">"Rejoindre mon entreprise"</h1>
                <TextField
                    label="Nom d'utilisateur"
                    value=Signal::derive(move || username.get())
                    required=true
                    on_input=Callback::new(move |value: String| username.set(value))
                />
                <TextField
                    label="Mot de passe"
                    value=Signal::derive(move || password.get())
                    input_type="password"
                    required=true
                    on_input=Callback::new(move |value: String| password.set(value))
                />
                <TextField
                    label="Confirmer le mot de passe"
                    value=Signal::derive(move || confirm.get())
                    input_type="password"
                    required=true
                    on_input=Callback::new(move |value: String| confirm.set(value))
                />
                <InlineErrorMessage error=Signal::derive(move || error.get())/>
                <button
                    type="submit"
                    class="w-full px-4 py-2 rounded-lg bg-action-primary-bg text-action-primary-text font-medium disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Validation..." } else { "Rejoindre" }}
                </button>
            </form>
        </Layout>
    }
}
