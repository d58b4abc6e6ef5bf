use crate::api::{Activity, ApiClient, ApiError, CreateActivityRequest};

pub async fn create_activity(
    api: &ApiClient,
    request: CreateActivityRequest,
) -> Result<Activity, ApiError> {
    api.create_activity(request).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn create_activity_posts_the_payload() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/activities/")
                .json_body_partial(r#"{ "name": "Escalade bloc", "category": "escalade" }"#);
            then.status(201).json_body(json!({
                "id": 42,
                "name": "Escalade bloc",
                "description": "",
                "category": "escalade",
                "location": "Villeurbanne",
                "date": "2026-05-01",
                "time": "18:30",
                "duration": "2h",
                "max_participants": 12,
                "price": "15€",
                "level": "Intermédiaire"
            }));
        });

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let created = create_activity(
            &api,
            CreateActivityRequest {
                name: "Escalade bloc".into(),
                description: String::new(),
                category: "escalade".into(),
                location: "Villeurbanne".into(),
                date: "2026-05-01".parse().unwrap(),
                time: "18:30".into(),
                duration: "2h".into(),
                max_participants: 12,
                price: "15€".into(),
                level: "Intermédiaire".into(),
                sport_zen: false,
                image: String::new(),
                instructor: String::new(),
            },
        )
        .await
        .expect("create");
        assert_eq!(created.id, 42);
        mock.assert();
    }
}
