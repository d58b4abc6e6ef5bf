use super::{repository, utils::ActivityForm};
use crate::api::{ApiClient, ApiError, CreateActivityRequest};
use leptos::*;
use leptos_router::use_navigate;

#[derive(Clone)]
pub struct AdminActivitiesViewModel {
    pub form: RwSignal<ActivityForm>,
    pub error: RwSignal<Option<ApiError>>,
    pub create_action: Action<CreateActivityRequest, Result<(), ApiError>>,
}

pub fn use_admin_activities_view_model() -> AdminActivitiesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let form = create_rw_signal(ActivityForm::default());
    let error = create_rw_signal(None::<ApiError>);

    let create_action = create_action(move |request: &CreateActivityRequest| {
        let api = api.clone();
        let request = request.clone();
        async move {
            repository::create_activity(&api, request).await?;
            Ok(())
        }
    });

    let navigate = use_navigate();
    create_effect(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    form.set(ActivityForm::default());
                    navigate("/activities", Default::default());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    AdminActivitiesViewModel {
        form,
        error,
        create_action,
    }
}
