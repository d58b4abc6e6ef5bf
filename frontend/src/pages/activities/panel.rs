use crate::{
    components::{
        error::InlineErrorMessage,
        forms::{SelectField, TextField},
        layout::{Layout, LoadingSpinner, SuccessMessage},
    },
    pages::activities::{
        components::{card::ActivityCard, stats::ActivityStats},
        utils,
        view_model::use_activities_view_model,
    },
    state::auth::use_auth,
};
use leptos::*;

#[component]
pub fn ActivitiesPanel() -> impl IntoView {
    let vm = use_activities_view_model();
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);

    let activities_resource = vm.activities_resource;
    let activities = Signal::derive(move || {
        activities_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    let load_error = Signal::derive(move || activities_resource.get().and_then(Result::err));
    let loading = move || activities_resource.loading().get();

    let filters = vm.filters;
    let show_all = vm.show_all;
    let current_page = vm.current_page;
    let selected_level = vm.selected_level;
    let register_message = vm.register_message;

    let filtered = create_memo(move |_| utils::filter_activities(&activities.get(), &filters.get()));
    let displayed =
        create_memo(move |_| utils::paginate(&filtered.get(), show_all.get(), current_page.get()));
    let page_count = create_memo(move |_| utils::page_count(filtered.get().len()));

    // Changing any filter goes back to the first page.
    create_effect(move |_| {
        filters.track();
        current_page.set(1);
    });

    let categories = Signal::derive(move || utils::unique_categories(&activities.get()));
    let locations = Signal::derive(move || utils::unique_locations(&activities.get()));

    let register_action = vm.register_action;
    let on_register = Callback::new(move |id: i64| register_action.dispatch(id));
    let register_error =
        Signal::derive(move || register_action.value().get().and_then(Result::err));

    let search = Signal::derive(move || filters.get().search);
    let category = Signal::derive(move || filters.get().category);
    let location = Signal::derive(move || filters.get().location);
    let date = Signal::derive(move || filters.get().date);

    view! {
        <Layout>
            <div class="px-4">
                <h1 class="text-4xl font-bold text-fg mb-6">"Activités"</h1>

                <ActivityStats activities=activities selected_level=selected_level/>

                <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-6">
                    <TextField
                        label="Recherche"
                        value=search
                        placeholder="Recherche libre..."
                        on_input=Callback::new(move |value: String| {
                            filters.update(|f| f.search = value)
                        })
                    />
                    <SelectField
                        label="Catégorie"
                        value=category
                        options=MaybeSignal::derive(move || categories.get())
                        empty_label="Toutes catégories"
                        on_change=Callback::new(move |value: String| {
                            filters.update(|f| f.category = value)
                        })
                    />
                    <SelectField
                        label="Lieu"
                        value=location
                        options=MaybeSignal::derive(move || locations.get())
                        empty_label="Tous lieux"
                        on_change=Callback::new(move |value: String| {
                            filters.update(|f| f.location = value)
                        })
                    />
                    <TextField
                        label="Date"
                        value=date
                        input_type="date"
                        on_input=Callback::new(move |value: String| {
                            filters.update(|f| f.date = value)
                        })
                    />
                </div>

                <SuccessMessage message=Signal::derive(move || register_message.get())/>
                <InlineErrorMessage error=register_error/>
                <InlineErrorMessage error=load_error/>

                <Show when=move || !loading() fallback=LoadingSpinner>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-6">
                        <For
                            each=move || displayed.get()
                            key=|activity| activity.id
                            children=move |activity| {
                                let on_register = is_authenticated.get().then_some(on_register);
                                view! { <ActivityCard activity=activity on_register=on_register/> }
                            }
                        />
                    </div>

                    <Show
                        when=move || show_all.get()
                        fallback=move || view! {
                            <button
                                class="px-4 py-2 rounded-lg border border-border text-fg hover:bg-action-ghost-bg-hover"
                                on:click=move |_| show_all.set(true)
                            >
                                "Voir toutes les activités"
                            </button>
                        }
                    >
                        <div class="flex items-center gap-4">
                            <button
                                class="px-3 py-2 rounded-lg border border-border disabled:opacity-50"
                                disabled=move || current_page.get() <= 1
                                on:click=move |_| current_page.update(|p| *p = p.saturating_sub(1).max(1))
                            >
                                "Précédent"
                            </button>
                            <span class="text-sm text-fg-muted">
                                {move || format!("Page {} / {}", current_page.get(), page_count.get().max(1))}
                            </span>
                            <button
                                class="px-3 py-2 rounded-lg border border-border disabled:opacity-50"
                                disabled=move || current_page.get() >= page_count.get()
                                on:click=move |_| current_page.update(|p| *p += 1)
                            >
                                "Suivant"
                            </button>
                        </div>
                    </Show>
                </Show>
            </div>
        </Layout>
    }
}
