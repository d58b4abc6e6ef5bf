use crate::{
    api::ApiError,
    components::{
        error::InlineErrorMessage,
        forms::{CheckboxField, SelectField, TextAreaField, TextField},
        layout::Layout,
    },
    pages::admin_activities::{utils, view_model::use_admin_activities_view_model},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AdminActivitiesPanel() -> impl IntoView {
    let vm = use_admin_activities_view_model();
    let form = vm.form;
    let error = vm.error;
    let create_action = vm.create_action;
    let pending = create_action.pending();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.get_untracked().to_request() {
            Ok(request) => {
                error.set(None);
                create_action.dispatch(request);
            }
            Err(msg) => error.set(Some(ApiError::validation(msg))),
        }
    };

    view! {
        <Layout>
            <form
                class="max-w-3xl mx-auto bg-surface-elevated rounded-2xl shadow-lg p-6 space-y-4"
                on:submit=handle_submit
            >
                <h1 class="text-2xl font-bold text-fg">"Créer une activité"</h1>
                <TextField
                    label="Nom"
                    value=Signal::derive(move || form.get().name)
                    required=true
                    on_input=Callback::new(move |value: String| form.update(|f| f.name = value))
                />
                <TextAreaField
                    label="Description"
                    value=Signal::derive(move || form.get().description)
                    on_input=Callback::new(move |value: String| {
                        form.update(|f| f.description = value)
                    })
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <SelectField
                        label="Catégorie"
                        value=Signal::derive(move || form.get().category)
                        options=utils::CATEGORY_OPTIONS
                            .iter()
                            .map(|s| s.to_string())
                            .collect::<Vec<_>>()
                        on_change=Callback::new(move |value: String| {
                            form.update(|f| f.category = value)
                        })
                    />
                    <SelectField
                        label="Niveau"
                        value=Signal::derive(move || form.get().level)
                        options=utils::LEVEL_OPTIONS
                            .iter()
                            .map(|s| s.to_string())
                            .collect::<Vec<_>>()
                        on_change=Callback::new(move |value: String| {
                            form.update(|f| f.level = value)
                        })
                    />
                    <TextField
                        label="Lieu"
                        value=Signal::derive(move || form.get().location)
                        required=true
                        on_input=Callback::new(move |value: String| {
                            form.update(|f| f.location = value)
                        })
                    />
                    <TextField
                        label="Animateur"
                        value=Signal::derive(move || form.get().instructor)
                        on_input=Callback::new(move |value: String| {
                            form.update(|f| f.instructor = value)
                        })
                    />
                    <TextField
                        label="Date"
                        value=Signal::derive(move || form.get().date)
                        input_type="date"
                        required=true
                        on_input=Callback::new(move |value: String| form.update(|f| f.date = value))
                    />
                    <TextField
                        label="Heure"
                        value=Signal::derive(move || form.get().time)
                        input_type="time"
                        required=true
                        on_input=Callback::new(move |value: String| form.update(|f| f.time = value))
                    />
                    <TextField
                        label="Durée"
                        value=Signal::derive(move || form.get().duration)
                        on_input=Callback::new(move |value: String| {
                            form.update(|f| f.duration = value)
                        })
                    />
                    <TextField
                        label="Nombre de places"
                        value=Signal::derive(move || form.get().max_participants)
                        input_type="number"
                        on_input=Callback::new(move |value: String| {
                            form.update(|f| f.max_participants = value)
                        })
                    />
                    <TextField
                        label="Prix"
                        value=Signal::derive(move || form.get().price)
                        on_input=Callback::new(move |value: String| form.update(|f| f.price = value))
                    />
                    <TextField
                        label="Image (URL)"
                        value=Signal::derive(move || form.get().image)
                        on_input=Callback::new(move |value: String| form.update(|f| f.image = value))
                    />
                </div>
                <CheckboxField
                    label="Activité Sport Zen"
                    checked=Signal::derive(move || form.get().sport_zen)
                    on_toggle=Callback::new(move |checked: bool| {
                        form.update(|f| f.sport_zen = checked)
                    })
                />
                <InlineErrorMessage error=Signal::derive(move || error.get())/>
                <button
                    type="submit"
                    class="px-4 py-2 rounded-lg bg-action-primary-bg text-action-primary-text font-medium disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Création..." } else { "Créer l'activité" }}
                </button>
            </form>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, staff_user};
    use crate::test_support::ssr::render_with_router;

    #[test]
    fn admin_panel_renders_creation_form() {
        let html = render_with_router("/admin/activities", move || {
            provide_auth(Some(staff_user()));
            view! { <AdminActivitiesPanel/> }
        });
        assert!(html.contains("Créer une activité"));
        assert!(html.contains("Nombre de places"));
        assert!(html.contains("Sport Zen"));
    }
}
