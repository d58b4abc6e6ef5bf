use super::utils::fallback_plans;
use crate::api::{ApiClient, ApiError, CompanySignupRequest, Plan, SubscriptionRequest};
use serde_json::Value;

/// The plans endpoint is best-effort: the static offer is shown when it is
/// unreachable so the page never renders empty.
pub async fn load_plans(api: &ApiClient) -> Vec<Plan> {
    match api.fetch_plans().await {
        Ok(plans) if !plans.is_empty() => plans,
        Ok(_) => fallback_plans(),
        Err(err) => {
            log::warn!("Chargement des offres impossible: {}", err);
            fallback_plans()
        }
    }
}

pub async fn subscribe(api: &ApiClient, request: SubscriptionRequest) -> Result<Value, ApiError> {
    api.create_subscription(request).await
}

pub async fn signup_company(
    api: &ApiClient,
    request: CompanySignupRequest,
) -> Result<Value, ApiError> {
    api.signup_company(request).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn load_plans_prefers_the_server_catalogue() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/plans/");
            then.status(200).json_body(json!([
                { "id": "basic", "name": "Abonnement de base", "price": "39€", "billing_period": "mois" }
            ]));
        });

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let plans = load_plans(&api).await;
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].price, "39€");
    }

    #[tokio::test]
    async fn load_plans_falls_back_when_endpoint_fails() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/plans/");
            then.status(500).json_body(json!({}));
        });

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let plans = load_plans(&api).await;
        assert_eq!(plans.len(), 3);
    }

    #[tokio::test]
    async fn subscribe_posts_the_request() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/subscriptions/")
                .json_body_partial(r#"{ "plan": "basic" }"#);
            then.status(201).json_body(json!({ "status": "pending" }));
        });

        let api = ApiClient::new_with_base_url(server.url("/api"));
        subscribe(
            &api,
            SubscriptionRequest {
                plan: "basic".into(),
                company_name: "Acme".into(),
                admin_name: "Jeanne".into(),
                email: "jeanne@acme.fr".into(),
                phone: "0601020304".into(),
                message: String::new(),
            },
        )
        .await
        .expect("subscribe");
        mock.assert();
    }
}
