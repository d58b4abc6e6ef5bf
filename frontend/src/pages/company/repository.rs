use crate::api::{ApiClient, ApiError};
use serde_json::Value;

pub async fn invite_employee(api: &ApiClient, email: &str) -> Result<Value, ApiError> {
    api.invite_employee(email).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn invite_posts_the_email() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/invitations/")
                .json_body(json!({ "email": "paul@acme.fr" }));
            then.status(201).json_body(json!({ "status": "sent" }));
        });

        let api = ApiClient::new_with_base_url(server.url("/api"));
        invite_employee(&api, "paul@acme.fr").await.expect("invite");
        mock.assert();
    }
}
