use crate::{
    components::{
        error::InlineErrorMessage,
        forms::SelectField,
        layout::{Layout, LoadingSpinner},
    },
    pages::{
        activities::components::card::ActivityCard,
        activities::utils::unique_categories,
        dashboard::{utils, view_model::use_dashboard_view_model},
    },
    state::auth::use_auth,
    utils::format::display_date,
};
use leptos::*;

const UPCOMING_LIMIT: usize = 5;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let (auth, _) = use_auth();

    let username = move || {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };
    let preferences_line = move || {
        utils::preferences_summary(auth.get().user.as_ref().and_then(|u| u.preferences.as_ref()))
    };
    let location_line = move || {
        auth.get()
            .user
            .and_then(|u| u.preferences)
            .map(|p| p.location)
            .filter(|l| !l.is_empty())
    };

    let resource = vm.my_activities_resource;
    let activities = Signal::derive(move || {
        resource.get().and_then(Result::ok).unwrap_or_default()
    });
    let load_error = Signal::derive(move || resource.get().and_then(Result::err));
    let loading = move || resource.loading().get();

    let category_filter = vm.category_filter;
    let categories = Signal::derive(move || unique_categories(&activities.get()));
    let filtered = create_memo(move |_| {
        utils::filter_by_category(&activities.get(), &category_filter.get())
    });
    let upcoming = create_memo(move |_| {
        let today = chrono::Utc::now().date_naive();
        utils::upcoming(&activities.get(), today, UPCOMING_LIMIT)
    });

    view! {
        <Layout>
            <div class="px-4 space-y-6">
                <h1 class="text-3xl font-bold text-fg">
                    {move || format!("Bonjour {} !", username())}
                </h1>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="bg-surface-elevated rounded-2xl shadow p-4">
                        <h2 class="font-semibold text-fg mb-2">"Mes préférences"</h2>
                        <p class="text-sm text-fg-muted">{preferences_line}</p>
                        {move || location_line().map(|location| view! {
                            <p class="text-sm text-fg-muted">{"Autour de "}{location}</p>
                        })}
                        <a href="/profile" class="text-sm text-action-primary-bg hover:underline">
                            "Modifier mon profil"
                        </a>
                    </div>
                    <div class="bg-surface-elevated rounded-2xl shadow p-4">
                        <h2 class="font-semibold text-fg mb-2">"Prochaines séances"</h2>
                        <Show
                            when=move || !upcoming.get().is_empty()
                            fallback=|| view! {
                                <p class="text-sm text-fg-muted">"Aucune séance à venir."</p>
                            }
                        >
                            <ul class="text-sm space-y-1">
                                <For
                                    each=move || upcoming.get()
                                    key=|activity| activity.id
                                    children=|activity| view! {
                                        <li class="flex justify-between">
                                            <span class="text-fg">{activity.name}</span>
                                            <span class="text-fg-muted">
                                                {display_date(&activity.date)}
                                                " "
                                                {activity.time}
                                            </span>
                                        </li>
                                    }
                                />
                            </ul>
                        </Show>
                    </div>
                </div>

                <div class="flex items-center justify-between">
                    <h2 class="text-xl font-semibold text-fg">"Mes activités"</h2>
                    <div class="w-64">
                        <SelectField
                            label="Catégorie"
                            value=Signal::derive(move || category_filter.get())
                            options=MaybeSignal::derive(move || categories.get())
                            empty_label="Toutes catégories"
                            on_change=Callback::new(move |value: String| category_filter.set(value))
                        />
                    </div>
                </div>

                <InlineErrorMessage error=load_error/>

                <Show when=move || !loading() fallback=LoadingSpinner>
                    <Show
                        when=move || !filtered.get().is_empty()
                        fallback=|| view! {
                            <p class="text-fg-muted">
                                "Vous n'êtes inscrit à aucune activité pour le moment. "
                                <a href="/activities" class="text-action-primary-bg hover:underline">
                                    "Découvrir les activités"
                                </a>
                            </p>
                        }
                    >
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            <For
                                each=move || filtered.get()
                                key=|activity| activity.id
                                children=|activity| view! {
                                    <ActivityCard activity=activity on_register=None/>
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </div>
        </Layout>
    }
}
