use crate::{
    api::{AccountType, ApiError, RegisterRequest},
    components::{
        error::InlineErrorMessage,
        forms::{SelectField, TextField},
        layout::Layout,
    },
    pages::register::{utils, view_model::use_register_view_model},
};
use leptos::{ev::SubmitEvent, *};

fn account_type_from_label(label: &str) -> AccountType {
    if label == "Entreprise" {
        AccountType::Business
    } else {
        AccountType::Personal
    }
}

fn account_type_label(account_type: AccountType) -> &'static str {
    match account_type {
        AccountType::Personal => "Particulier",
        AccountType::Business => "Entreprise",
    }
}

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let pending = vm.register_action.pending();

    let username = vm.username;
    let email = vm.email;
    let password = vm.password;
    let confirm = vm.confirm;
    let account_type = vm.account_type;
    let error = vm.error;
    let register_action = vm.register_action;

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let username_value = username.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();

        if let Err(msg) = utils::validate_registration(
            &username_value,
            &email_value,
            &password_value,
            &confirm_value,
        ) {
            error.set(Some(ApiError::validation(msg)));
            return;
        }

        error.set(None);
        register_action.dispatch(RegisterRequest {
            username: username_value.trim().to_string(),
            email: email_value.trim().to_string(),
            password: password_value,
            account_type: account_type.get_untracked(),
        });
    });

    view! {
        <Layout>
            <form
                class="max-w-md mx-auto bg-surface-elevated rounded-2xl shadow-lg p-8 space-y-4"
                on:submit=move |ev| handle_submit.call(ev)
            >
                <h1 class="text-2xl font-bold text-fg">"Créer un compte"</h1>
                <TextField
                    label="Nom d'utilisateur"
                    value=username
                    required=true
                    on_input=Callback::new(move |value: String| username.set(value))
                />
                <TextField
                    label="Email"
                    value=email
                    input_type="email"
                    required=true
                    on_input=Callback::new(move |value: String| email.set(value))
                />
                <SelectField
                    label="Type de compte"
                    value=Signal::derive(move || account_type_label(account_type.get()).to_string())
                    options=vec!["Particulier".to_string(), "Entreprise".to_string()]
                    on_change=Callback::new(move |value: String| {
                        account_type.set(account_type_from_label(&value))
                    })
                />
                <TextField
                    label="Mot de passe"
                    value=password
                    input_type="password"
                    required=true
                    on_input=Callback::new(move |value: String| password.set(value))
                />
                <TextField
                    label="Confirmer le mot de passe"
                    value=confirm
                    input_type="password"
                    required=true
                    on_input=Callback::new(move |value: String| confirm.set(value))
                />
                <InlineErrorMessage error=error/>
                <button
                    type="submit"
                    class="w-full px-4 py-2 rounded-lg bg-action-primary-bg text-action-primary-text font-medium disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Création..." } else { "Créer mon compte" }}
                </button>
            </form>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_type_labels_round_trip() {
        assert_eq!(account_type_from_label("Entreprise"), AccountType::Business);
        assert_eq!(account_type_from_label("Particulier"), AccountType::Personal);
        assert_eq!(account_type_from_label("autre"), AccountType::Personal);
        assert_eq!(account_type_label(AccountType::Business), "Entreprise");
    }
}
