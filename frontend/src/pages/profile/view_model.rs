use super::repository;
use crate::api::{ApiClient, ApiError, Preferences};
use crate::state::auth::{self, use_auth};
use leptos::*;
use serde_json::Value;

#[derive(Clone)]
pub struct ProfileViewModel {
    pub location: RwSignal<String>,
    pub level: RwSignal<String>,
    pub activities: RwSignal<Vec<String>>,
    pub objectives: RwSignal<Vec<String>>,
    pub update_action: Action<Value, Result<(), ApiError>>,
    pub upload_action: Action<(String, Vec<u8>), Result<(), ApiError>>,
    pub status: RwSignal<Option<String>>,
    pub error: RwSignal<Option<ApiError>>,
}

impl ProfileViewModel {
    pub fn current_preferences(&self) -> Preferences {
        Preferences {
            activities: self.activities.get_untracked(),
            location: self.location.get_untracked(),
            level: self.level.get_untracked(),
            objectives: self.objectives.get_untracked(),
        }
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let (auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    let location = create_rw_signal(String::new());
    let level = create_rw_signal(String::new());
    let activities = create_rw_signal(Vec::<String>::new());
    let objectives = create_rw_signal(Vec::<String>::new());

    // The form mirrors the session user; it re-syncs whenever the profile
    // is replaced (hydration, merge after update).
    create_effect(move |_| {
        if let Some(prefs) = auth.get().user.and_then(|u| u.preferences) {
            location.set(prefs.location);
            level.set(prefs.level);
            activities.set(prefs.activities);
            objectives.set(prefs.objectives);
        }
    });

    let status = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<ApiError>);

    let update_action = auth::use_update_user_action();
    create_effect(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => {
                    status.set(Some("Profil mis à jour.".to_string()));
                    error.set(None);
                }
                Err(err) => {
                    status.set(None);
                    error.set(Some(err));
                }
            }
        }
    });

    let upload_action = create_action(move |(file_name, bytes): &(String, Vec<u8>)| {
        let api = api.clone();
        let file_name = file_name.clone();
        let bytes = bytes.clone();
        async move { repository::upload_avatar(&api, set_auth, file_name, bytes).await }
    });
    create_effect(move |_| {
        if let Some(result) = upload_action.value().get() {
            match result {
                Ok(_) => {
                    status.set(Some("Avatar mis à jour.".to_string()));
                    error.set(None);
                }
                Err(err) => {
                    status.set(None);
                    error.set(Some(err));
                }
            }
        }
    });

    ProfileViewModel {
        location,
        level,
        activities,
        objectives,
        update_action,
        upload_action,
        status,
        error,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn profile_view_model_starts_empty_without_user() {
        with_runtime(|| {
            let vm = use_profile_view_model();
            assert!(vm.location.get_untracked().is_empty());
            assert!(vm.activities.get_untracked().is_empty());
            assert!(vm.status.get_untracked().is_none());
        });
    }
}
