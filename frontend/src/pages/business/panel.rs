use crate::{
    api::{ApiError, SubscriptionRequest},
    components::{
        error::InlineErrorMessage,
        forms::{TextAreaField, TextField},
        layout::{Layout, SuccessMessage},
    },
    pages::business::{
        components::{plan_card::PlanCard, signup_form::CompanySignupForm},
        utils,
        view_model::use_business_view_model,
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn BusinessPanel() -> impl IntoView {
    let vm = use_business_view_model();

    let plans_resource = vm.plans_resource;
    let plans = Signal::derive(move || {
        plans_resource.get().unwrap_or_else(utils::fallback_plans)
    });
    let selected_plan = vm.selected_plan;
    let subscribe_message = vm.subscribe_message;
    let signup_message = vm.signup_message;

    let company_name = create_rw_signal(String::new());
    let admin_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let form_error = create_rw_signal(None::<ApiError>);

    let subscribe_action = vm.subscribe_action;
    let subscribe_pending = subscribe_action.pending();
    let subscribe_error =
        Signal::derive(move || subscribe_action.value().get().and_then(Result::err));

    let handle_subscribe = move |ev: SubmitEvent| {
        ev.prevent_default();
        if subscribe_pending.get_untracked() {
            return;
        }
        let request = SubscriptionRequest {
            plan: selected_plan.get_untracked(),
            company_name: company_name.get_untracked(),
            admin_name: admin_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(msg) = utils::validate_subscription(&request) {
            form_error.set(Some(ApiError::validation(msg)));
            return;
        }
        form_error.set(None);
        subscribe_action.dispatch(request);
    };

    let signup_action = vm.signup_action;

    view! {
        <Layout>
            <div class="px-4 space-y-10">
                <section class="text-center">
                    <h1 class="text-4xl font-bold text-fg">"SportRadar pour les entreprises"</h1>
                    <p class="mt-3 text-fg-muted max-w-2xl mx-auto">
                        "Offrez à vos collaborateurs un accès à toutes les activités bien-être et sportives de la plateforme."
                    </p>
                </section>

                <section>
                    <h2 class="text-2xl font-semibold text-fg mb-4">"Nos offres"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <For
                            each=move || plans.get()
                            key=|plan| plan.id.clone()
                            children=move |plan| view! {
                                <PlanCard
                                    plan=plan
                                    selected=Signal::derive(move || selected_plan.get())
                                    on_select=Callback::new(move |id: String| selected_plan.set(id))
                                />
                            }
                        />
                    </div>
                </section>

                <section class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <form
                        class="bg-surface-elevated rounded-2xl shadow-lg p-6 space-y-4"
                        on:submit=handle_subscribe
                    >
                        <h3 class="text-lg font-semibold text-fg">"Demande d'abonnement"</h3>
                        <TextField
                            label="Nom de l'entreprise"
                            value=Signal::derive(move || company_name.get())
                            required=true
                            on_input=Callback::new(move |value: String| company_name.set(value))
                        />
                        <TextField
                            label="Nom du contact"
                            value=Signal::derive(move || admin_name.get())
                            required=true
                            on_input=Callback::new(move |value: String| admin_name.set(value))
                        />
                        <TextField
                            label="Email"
                            value=Signal::derive(move || email.get())
                            input_type="email"
                            required=true
                            on_input=Callback::new(move |value: String| email.set(value))
                        />
                        <TextField
                            label="Téléphone"
                            value=Signal::derive(move || phone.get())
                            input_type="tel"
                            required=true
                            on_input=Callback::new(move |value: String| phone.set(value))
                        />
                        <TextAreaField
                            label="Message"
                            value=Signal::derive(move || message.get())
                            on_input=Callback::new(move |value: String| message.set(value))
                        />
                        <InlineErrorMessage error=Signal::derive(move || form_error.get())/>
                        <InlineErrorMessage error=subscribe_error/>
                        <SuccessMessage message=Signal::derive(move || subscribe_message.get())/>
                        <button
                            type="submit"
                            class="w-full px-4 py-2 rounded-lg bg-action-primary-bg text-action-primary-text font-medium disabled:opacity-50"
                            disabled=move || subscribe_pending.get()
                        >
                            {move || if subscribe_pending.get() { "Envoi..." } else { "Envoyer la demande" }}
                        </button>
                    </form>

                    <CompanySignupForm
                        plans=plans
                        pending=signup_action.pending()
                        success=Signal::derive(move || signup_message.get())
                        on_submit=Callback::new(move |request| signup_action.dispatch(request))
                    />
                </section>
            </div>
        </Layout>
    }
}
