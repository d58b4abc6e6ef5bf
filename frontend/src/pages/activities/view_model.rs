use super::{repository, utils::ActivityFilters};
use crate::api::{Activity, ApiClient, ApiError};
use leptos::*;

#[derive(Clone)]
pub struct ActivitiesViewModel {
    pub activities_resource: Resource<u32, Result<Vec<Activity>, ApiError>>,
    pub reload: RwSignal<u32>,
    pub filters: RwSignal<ActivityFilters>,
    pub show_all: RwSignal<bool>,
    pub current_page: RwSignal<usize>,
    pub selected_level: RwSignal<String>,
    pub register_action: Action<i64, Result<(), ApiError>>,
    pub register_message: RwSignal<Option<String>>,
}

pub fn use_activities_view_model() -> ActivitiesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let reload = create_rw_signal(0u32);
    let list_api = api.clone();
    let activities_resource = create_resource(
        move || reload.get(),
        move |_| {
            let api = list_api.clone();
            async move { repository::load_activities(&api).await }
        },
    );

    let register_message = create_rw_signal(None::<String>);
    let register_api = api.clone();
    let register_action = create_action(move |id: &i64| {
        let api = register_api.clone();
        let id = *id;
        async move {
            repository::register_for_activity(&api, id).await?;
            register_message.set(Some("Inscription confirmée !".to_string()));
            reload.update(|n| *n += 1);
            Ok(())
        }
    });

    ActivitiesViewModel {
        activities_resource,
        reload,
        filters: create_rw_signal(ActivityFilters::default()),
        show_all: create_rw_signal(false),
        current_page: create_rw_signal(1),
        selected_level: create_rw_signal(String::new()),
        register_action,
        register_message,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_starts_collapsed_on_first_page() {
        with_runtime(|| {
            let vm = use_activities_view_model();
            assert!(vm.filters.get_untracked().is_empty());
            assert!(!vm.show_all.get_untracked());
            assert_eq!(vm.current_page.get_untracked(), 1);
            assert!(vm.register_message.get_untracked().is_none());
        });
    }
}
