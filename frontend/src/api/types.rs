use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Personal,
    Business,
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Personal
    }
}

/// Current-user profile as served by `GET /me/`. Replaced wholesale on every
/// fetch; partial updates are merged by the session store, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(rename = "type", default)]
    pub account_type: AccountType,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

impl User {
    pub fn is_business(&self) -> bool {
        self.account_type == AccountType::Business
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub objectives: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: String,
    #[serde(default)]
    pub participants: i32,
    pub max_participants: i32,
    pub price: String,
    pub level: String,
    #[serde(default)]
    pub sport_zen: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: String,
    pub max_participants: i32,
    pub price: String,
    pub level: String,
    pub sport_zen: bool,
    pub image: String,
    pub instructor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price: String,
    pub billing_period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub plan: String,
    pub company_name: String,
    pub admin_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptInvitationRequest {
    pub token: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

use leptos::*;

/// Error shape shared by every API call. `error`/`code`/`details` mirror the
/// server's error body; `status` carries the HTTP status when one was
/// received so callers can distinguish application errors from transport
/// failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(default, skip_serializing)]
    pub status: Option<u16>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
            status: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
            status: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn deserialize_user_with_nested_preferences() {
        let raw = r#"{
            "id": 7,
            "username": "claire",
            "email": "claire@example.fr",
            "type": "personal",
            "is_staff": false,
            "preferences": {
                "activities": ["yoga", "escalade"],
                "location": "Lyon",
                "level": "débutant",
                "objectives": ["bien-être"]
            },
            "avatar": "zen"
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.account_type, AccountType::Personal);
        let prefs = user.preferences.unwrap();
        assert_eq!(prefs.location, "Lyon");
        assert_eq!(prefs.activities, vec!["yoga", "escalade"]);
    }

    #[wasm_bindgen_test]
    fn serialize_register_request_uses_type_key() {
        let req = RegisterRequest {
            username: "marc".into(),
            email: "marc@example.fr".into(),
            password: "secret".into(),
            account_type: AccountType::Business,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["type"], serde_json::json!("business"));
    }

    #[wasm_bindgen_test]
    fn deserialize_activity_defaults() {
        let raw = r#"{
            "id": 1,
            "name": "Yoga du matin",
            "description": "Séance douce",
            "category": "yoga",
            "location": "Parc de la Tête d'Or",
            "date": "2026-04-02",
            "time": "09:00",
            "duration": "1h",
            "max_participants": 20,
            "price": "Gratuit",
            "level": "Tous niveaux"
        }"#;
        let activity: Activity = serde_json::from_str(raw).unwrap();
        assert_eq!(activity.participants, 0);
        assert!(!activity.sport_zen);
        assert!(activity.instructor.is_none());
        assert_eq!(activity.date, NaiveDate::from_ymd_opt(2026, 4, 2).unwrap());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert!(validation.details.is_none());
        assert!(validation.status.is_none());

        let unknown = ApiError::unknown("something failed");
        assert_eq!(unknown.code, "UNKNOWN");

        let request_failed = ApiError::request_failed("network error").with_status(502);
        assert_eq!(request_failed.code, "REQUEST_FAILED");
        assert_eq!(request_failed.status, Some(502));
        assert!(!request_failed.is_unauthorized());
        assert!(ApiError::unknown("x").with_status(401).is_unauthorized());
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_status_is_not_serialized() {
        let error = ApiError::unknown("boom").with_status(500);
        let v = serde_json::to_value(&error).unwrap();
        assert!(v.get("status").is_none());
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        crate::test_support::ssr::with_runtime(|| {
            let _: View = ApiError::request_failed("request failed").into_view();
        });
    }

    #[test]
    fn user_account_kind_and_staff_are_orthogonal() {
        let raw = serde_json::json!({
            "id": 3,
            "username": "studio-zen",
            "email": "contact@studiozen.fr",
            "type": "business",
            "is_staff": true,
            "company": { "id": 12, "name": "Studio Zen" }
        });
        let user: User = serde_json::from_value(raw).unwrap();
        assert!(user.is_business());
        assert!(user.is_staff);
        assert_eq!(user.company.as_ref().unwrap().name, "Studio Zen");

        let minimal: User = serde_json::from_value(serde_json::json!({
            "id": 4,
            "username": "paul",
            "email": "paul@example.fr"
        }))
        .unwrap();
        assert!(!minimal.is_business());
        assert!(!minimal.is_staff);
        assert!(minimal.preferences.is_none());
    }

    #[test]
    fn deserialize_plan_list() {
        let plans: Vec<Plan> = serde_json::from_value(serde_json::json!([
            { "id": "basic", "name": "Abonnement de base", "price": "40€", "billing_period": "mois" }
        ]))
        .unwrap();
        assert_eq!(plans[0].id, "basic");
        assert_eq!(plans[0].billing_period, "mois");
    }

    #[test]
    fn serialize_subscription_request_keeps_all_fields() {
        let req = SubscriptionRequest {
            plan: "basic".into(),
            company_name: "Acme".into(),
            admin_name: "Jeanne".into(),
            email: "jeanne@acme.fr".into(),
            phone: "0601020304".into(),
            message: "15 salariés".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["plan"], serde_json::json!("basic"));
        assert_eq!(v["company_name"], serde_json::json!("Acme"));
        assert_eq!(v["message"], serde_json::json!("15 salariés"));
    }
}
