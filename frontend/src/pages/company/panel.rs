use crate::{
    api::{ApiClient, ApiError},
    components::{
        error::InlineErrorMessage,
        forms::TextField,
        layout::{Layout, SuccessMessage},
    },
    pages::{company::repository, login::utils::is_valid_email},
    state::auth::use_auth,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn CompanyPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    let company_name = move || {
        auth.get()
            .user
            .and_then(|user| user.company)
            .map(|company| company.name)
            .unwrap_or_else(|| "Mon entreprise".to_string())
    };
    let plan_line = move || {
        auth.get()
            .user
            .and_then(|user| user.company)
            .and_then(|company| company.plan)
            .map(|plan| format!("Offre actuelle : {}", plan))
    };

    let invite_email = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let invite_action = create_action(move |email: &String| {
        let api = api.clone();
        let email = email.clone();
        async move {
            repository::invite_employee(&api, &email).await?;
            Ok(())
        }
    });
    let pending = invite_action.pending();

    create_effect(move |_| {
        if let Some(result) = invite_action.value().get() {
            match result {
                Ok(()) => {
                    success.set(Some("Invitation envoyée.".to_string()));
                    error.set(None);
                    invite_email.set(String::new());
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err));
                }
            }
        }
    });

    let handle_invite = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = invite_email.get_untracked();
        if !is_valid_email(&email) {
            error.set(Some(ApiError::validation("Adresse email invalide.")));
            return;
        }
        error.set(None);
        invite_action.dispatch(email.trim().to_string());
    };

    view! {
        <Layout>
            <div class="px-4 max-w-2xl mx-auto space-y-6">
                <h1 class="text-3xl font-bold text-fg">{company_name}</h1>
                {move || plan_line().map(|line| view! { <p class="text-fg-muted">{line}</p> })}

                <form
                    class="bg-surface-elevated rounded-2xl shadow p-6 space-y-4"
                    on:submit=handle_invite
                >
                    <h2 class="text-lg font-semibold text-fg">"Inviter un collaborateur"</h2>
                    <TextField
                        label="Email du collaborateur"
                        value=Signal::derive(move || invite_email.get())
                        input_type="email"
                        required=true
                        on_input=Callback::new(move |value: String| invite_email.set(value))
                    />
                    <InlineErrorMessage error=Signal::derive(move || error.get())/>
                    <SuccessMessage message=Signal::derive(move || success.get())/>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded-lg bg-action-primary-bg text-action-primary-text font-medium disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Envoi..." } else { "Envoyer l'invitation" }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}
