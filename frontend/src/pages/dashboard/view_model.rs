use super::repository;
use crate::api::{Activity, ApiClient, ApiError};
use leptos::*;

#[derive(Clone)]
pub struct DashboardViewModel {
    pub my_activities_resource: Resource<u32, Result<Vec<Activity>, ApiError>>,
    pub reload: RwSignal<u32>,
    pub category_filter: RwSignal<String>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let reload = create_rw_signal(0u32);
    let list_api = api.clone();
    let my_activities_resource = create_resource(
        move || reload.get(),
        move |_| {
            let api = list_api.clone();
            async move { repository::load_my_activities(&api).await }
        },
    );

    DashboardViewModel {
        my_activities_resource,
        reload,
        category_filter: create_rw_signal(String::new()),
    }
}
