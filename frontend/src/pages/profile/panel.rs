use crate::{
    api::ApiError,
    components::{
        error::InlineErrorMessage,
        forms::{CheckboxField, SelectField, TextField},
        layout::{Layout, SuccessMessage},
    },
    pages::profile::{utils, view_model::use_profile_view_model},
    state::auth::use_auth,
};
use leptos::{ev::SubmitEvent, *};

fn handle_avatar_file(
    ev: leptos::ev::Event,
    upload_action: Action<(String, Vec<u8>), Result<(), ApiError>>,
) {
    #[cfg(target_arch = "wasm32")]
    {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            spawn_local(async move {
                match read_file_bytes(&file).await {
                    Ok(bytes) => {
                        upload_action.dispatch((file.name(), bytes));
                    }
                    Err(err) => log::warn!("Lecture du fichier impossible: {}", err),
                }
            });
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (ev, upload_action);
}

#[cfg(target_arch = "wasm32")]
async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::unknown("Lecture du fichier impossible"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = use_profile_view_model();
    let (auth, _) = use_auth();

    let email = move || {
        auth.get()
            .user
            .map(|user| user.email)
            .unwrap_or_default()
    };
    let current_avatar = Signal::derive(move || {
        auth.get()
            .user
            .and_then(|user| user.avatar)
            .unwrap_or_else(|| "default".to_string())
    });

    let location = vm.location;
    let level = vm.level;
    let activities = vm.activities;
    let objectives = vm.objectives;

    let update_action = vm.update_action;
    let update_pending = update_action.pending();
    let upload_action = vm.upload_action;
    let upload_pending = upload_action.pending();
    let status = vm.status;
    let error = vm.error;

    let vm_for_submit = vm.clone();
    let handle_save = move |ev: SubmitEvent| {
        ev.prevent_default();
        if update_pending.get_untracked() {
            return;
        }
        let patch = utils::preferences_patch(&vm_for_submit.current_preferences());
        update_action.dispatch(patch);
    };

    view! {
        <Layout>
            <div class="px-4 max-w-3xl mx-auto space-y-8">
                <h1 class="text-3xl font-bold text-fg">"Mon profil"</h1>
                <p class="text-fg-muted">{email}</p>

                <SuccessMessage message=Signal::derive(move || status.get())/>
                <InlineErrorMessage error=Signal::derive(move || error.get())/>

                <section class="bg-surface-elevated rounded-2xl shadow p-6 space-y-4">
                    <h2 class="text-lg font-semibold text-fg">"Avatar"</h2>
                    <div class="flex items-center gap-3">
                        <For
                            each=|| utils::AVATAR_OPTIONS.iter().copied()
                            key=|name| name.to_string()
                            children=move |name| {
                                let is_current = move || current_avatar.get() == name;
                                view! {
                                    <button
                                        class=move || {
                                            if is_current() {
                                                "w-12 h-12 rounded-full border-2 border-action-primary-bg text-xs"
                                            } else {
                                                "w-12 h-12 rounded-full border-2 border-transparent text-xs"
                                            }
                                        }
                                        title=name
                                        on:click=move |_| {
                                            update_action.dispatch(utils::avatar_patch(name))
                                        }
                                    >
                                        {name}
                                    </button>
                                }
                            }
                        />
                    </div>
                    <label class="block">
                        <span class="block text-sm font-medium text-fg">
                            {move || if upload_pending.get() { "Envoi de l'avatar..." } else { "Ou importer une image" }}
                        </span>
                        <input
                            type="file"
                            accept="image/*"
                            class="mt-1 text-sm"
                            on:change=move |ev| handle_avatar_file(ev, upload_action)
                        />
                    </label>
                </section>

                <form
                    class="bg-surface-elevated rounded-2xl shadow p-6 space-y-4"
                    on:submit=handle_save
                >
                    <h2 class="text-lg font-semibold text-fg">"Mes préférences"</h2>
                    <TextField
                        label="Localisation"
                        value=Signal::derive(move || location.get())
                        placeholder="Lyon"
                        on_input=Callback::new(move |value: String| location.set(value))
                    />
                    <SelectField
                        label="Niveau"
                        value=Signal::derive(move || level.get())
                        options=utils::LEVEL_OPTIONS
                            .iter()
                            .map(|s| s.to_string())
                            .collect::<Vec<_>>()
                        empty_label="Choisir un niveau"
                        on_change=Callback::new(move |value: String| level.set(value))
                    />
                    <fieldset>
                        <legend class="text-sm font-medium text-fg mb-1">"Activités favorites"</legend>
                        <div class="grid grid-cols-2 gap-2">
                            <For
                                each=|| utils::ACTIVITY_OPTIONS.iter().copied()
                                key=|name| name.to_string()
                                children=move |name| {
                                    view! {
                                        <CheckboxField
                                            label=name
                                            checked=Signal::derive(move || {
                                                activities.get().iter().any(|a| a == name)
                                            })
                                            on_toggle=Callback::new(move |_checked: bool| {
                                                activities.update(|list| utils::toggle_value(list, name))
                                            })
                                        />
                                    }
                                }
                            />
                        </div>
                    </fieldset>
                    <fieldset>
                        <legend class="text-sm font-medium text-fg mb-1">"Objectifs"</legend>
                        <div class="grid grid-cols-2 gap-2">
                            <For
                                each=|| utils::OBJECTIVE_OPTIONS.iter().copied()
                                key=|name| name.to_string()
                                children=move |name| {
                                    view! {
                                        <CheckboxField
                                            label=name
                                            checked=Signal::derive(move || {
                                                objectives.get().iter().any(|o| o == name)
                                            })
                                            on_toggle=Callback::new(move |_checked: bool| {
                                                objectives.update(|list| utils::toggle_value(list, name))
                                            })
                                        />
                                    }
                                }
                            />
                        </div>
                    </fieldset>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded-lg bg-action-primary-bg text-action-primary-text font-medium disabled:opacity-50"
                        disabled=move || update_pending.get()
                    >
                        {move || if update_pending.get() { "Enregistrement..." } else { "Enregistrer" }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}
