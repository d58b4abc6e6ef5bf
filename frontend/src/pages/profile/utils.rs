use crate::api::Preferences;
use serde_json::{json, Value};

/// Named avatars shipped with the application.
pub const AVATAR_OPTIONS: &[&str] = &["default", "zen", "runner", "climber", "swimmer"];

pub const LEVEL_OPTIONS: &[&str] = &["débutant", "intermédiaire", "avancé"];

pub const ACTIVITY_OPTIONS: &[&str] = &[
    "yoga",
    "escalade",
    "running",
    "natation",
    "pilates",
    "musculation",
];

pub const OBJECTIVE_OPTIONS: &[&str] = &[
    "bien-être",
    "perte de poids",
    "performance",
    "cohésion d'équipe",
];

/// Check/uncheck semantics for the tag lists.
pub fn toggle_value(list: &mut Vec<String>, value: &str) {
    if let Some(index) = list.iter().position(|v| v == value) {
        list.remove(index);
    } else {
        list.push(value.to_string());
    }
}

/// The profile form submits the whole preferences object, which the server
/// echoes back for the session store to merge.
pub fn preferences_patch(preferences: &Preferences) -> Value {
    json!({ "preferences": preferences })
}

pub fn avatar_patch(avatar: &str) -> Value {
    json!({ "avatar": avatar })
}
