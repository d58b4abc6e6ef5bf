use crate::api::{ApiError, CompanySignupRequest, Plan};
use crate::components::{
    error::InlineErrorMessage,
    forms::{SelectField, TextField},
    layout::SuccessMessage,
};
use crate::pages::login::utils::is_valid_email;
use leptos::{ev::SubmitEvent, *};

/// Standalone business-account creation: company name, contact email,
/// password and a plan choice.
#[component]
pub fn CompanySignupForm(
    #[prop(into)] plans: Signal<Vec<Plan>>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] success: Signal<Option<String>>,
    #[prop(into)] on_submit: Callback<CompanySignupRequest>,
) -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let plan_choice = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let plan_names = Signal::derive(move || {
        plans.get().into_iter().map(|p| p.name).collect::<Vec<_>>()
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let name_value = name.get_untracked();
        let email_value = email.get_untracked();
        if name_value.trim().is_empty() || !is_valid_email(&email_value) {
            error.set(Some(ApiError::validation(
                "Nom de l'entreprise et email valide sont obligatoires.",
            )));
            return;
        }
        let selected = plans
            .get_untracked()
            .into_iter()
            .find(|p| p.name == plan_choice.get_untracked())
            .map(|p| p.id);
        error.set(None);
        on_submit.call(CompanySignupRequest {
            name: name_value.trim().to_string(),
            email: email_value.trim().to_string(),
            password: password.get_untracked(),
            plan_id: selected,
        });
    };

    view! {
        <form
            class="bg-surface-elevated rounded-2xl shadow-lg p-6 space-y-4"
            on:submit=handle_submit
        >
            <h3 class="text-lg font-semibold text-fg">"Créer un compte entreprise"</h3>
            <TextField
                label="Nom de l'entreprise"
                value=Signal::derive(move || name.get())
                required=true
                on_input=Callback::new(move |value: String| name.set(value))
            />
            <TextField
                label="Email"
                value=Signal::derive(move || email.get())
                input_type="email"
                required=true
                on_input=Callback::new(move |value: String| email.set(value))
            />
            <TextField
                label="Mot de passe"
                value=Signal::derive(move || password.get())
                input_type="password"
                required=true
                on_input=Callback::new(move |value: String| password.set(value))
            />
            <SelectField
                label="Offre"
                value=Signal::derive(move || plan_choice.get())
                options=MaybeSignal::derive(move || plan_names.get())
                empty_label="Choisir une offre"
                on_change=Callback::new(move |value: String| plan_choice.set(value))
            />
            <InlineErrorMessage error=Signal::derive(move || error.get())/>
            <SuccessMessage message=success/>
            <button
                type="submit"
                class="w-full px-4 py-2 rounded-lg bg-action-primary-bg text-action-primary-text font-medium disabled:opacity-50"
                disabled=move || pending.get()
            >
                "Créer le compte"
            </button>
        </form>
    }
}
