use super::repository;
use crate::api::{ApiClient, ApiError, CompanySignupRequest, Plan, SubscriptionRequest};
use leptos::*;

#[derive(Clone)]
pub struct BusinessViewModel {
    pub plans_resource: Resource<(), Vec<Plan>>,
    pub selected_plan: RwSignal<String>,
    pub subscribe_action: Action<SubscriptionRequest, Result<(), ApiError>>,
    pub subscribe_message: RwSignal<Option<String>>,
    pub signup_action: Action<CompanySignupRequest, Result<(), ApiError>>,
    pub signup_message: RwSignal<Option<String>>,
}

pub fn use_business_view_model() -> BusinessViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let plans_api = api.clone();
    let plans_resource = create_resource(
        || (),
        move |_| {
            let api = plans_api.clone();
            async move { repository::load_plans(&api).await }
        },
    );

    let subscribe_message = create_rw_signal(None::<String>);
    let subscribe_api = api.clone();
    let subscribe_action = create_action(move |request: &SubscriptionRequest| {
        let api = subscribe_api.clone();
        let request = request.clone();
        async move {
            repository::subscribe(&api, request).await?;
            subscribe_message.set(Some("Votre demande a bien été envoyée !".to_string()));
            Ok(())
        }
    });

    let signup_message = create_rw_signal(None::<String>);
    let signup_api = api.clone();
    let signup_action = create_action(move |request: &CompanySignupRequest| {
        let api = signup_api.clone();
        let request = request.clone();
        async move {
            repository::signup_company(&api, request).await?;
            signup_message.set(Some(
                "Compte entreprise créé, vous pouvez vous connecter.".to_string(),
            ));
            Ok(())
        }
    });

    BusinessViewModel {
        plans_resource,
        selected_plan: create_rw_signal("basic".to_string()),
        subscribe_action,
        subscribe_message,
        signup_action,
        signup_message,
    }
}
