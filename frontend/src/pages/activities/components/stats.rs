use crate::api::Activity;
use crate::components::forms::SelectField;
use crate::pages::activities::utils::{monthly_counts, podium_for_level, unique_levels};
use leptos::*;

/// Aggregate figures over the full (unfiltered) catalogue: total count,
/// sessions per month and a top-3 podium for a chosen level. Rendered as
/// plain markup; no charting widget.
#[component]
pub fn ActivityStats(
    #[prop(into)] activities: Signal<Vec<Activity>>,
    selected_level: RwSignal<String>,
) -> impl IntoView {
    let total = move || activities.get().len();
    let months = move || monthly_counts(&activities.get());
    let max_month_count = move || months().iter().map(|(_, n)| *n).max().unwrap_or(1);
    let levels = move || unique_levels(&activities.get());

    // Default the podium to the first level once the catalogue arrives.
    create_effect(move |_| {
        if selected_level.get_untracked().is_empty() {
            if let Some(first) = unique_levels(&activities.get()).first() {
                selected_level.set(first.clone());
            }
        }
    });
    let podium = move || podium_for_level(&activities.get(), &selected_level.get());

    view! {
        <section class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-6">
            <div class="bg-surface-elevated rounded-2xl shadow p-4">
                <p class="text-sm text-fg-muted">"Activités proposées"</p>
                <p class="text-3xl font-bold text-fg">{total}</p>
            </div>
            <div class="bg-surface-elevated rounded-2xl shadow p-4">
                <p class="text-sm text-fg-muted mb-2">"Séances par mois"</p>
                <ul class="space-y-1">
                    <For
                        each=months
                        key=|(month, _)| month.clone()
                        children=move |(month, count)| {
                            let width = (count * 100 / max_month_count()).max(4);
                            view! {
                                <li class="flex items-center gap-2 text-sm">
                                    <span class="w-16 text-fg-muted">{month}</span>
                                    <span
                                        class="h-2 rounded bg-action-primary-bg"
                                        style=format!("width: {}%", width)
                                    ></span>
                                    <span class="text-fg">{count}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
            <div class="bg-surface-elevated rounded-2xl shadow p-4 space-y-2">
                <SelectField
                    label="Podium par niveau"
                    value=Signal::derive(move || selected_level.get())
                    options=MaybeSignal::derive(levels)
                    on_change=Callback::new(move |value: String| selected_level.set(value))
                />
                <ol class="list-decimal list-inside text-sm space-y-1">
                    <For
                        each=podium
                        key=|(name, _)| name.clone()
                        children=|(name, count)| view! {
                            <li class="text-fg">
                                {name}
                                <span class="text-fg-muted">{format!(" ({} séances)", count)}</span>
                            </li>
                        }
                    />
                </ol>
            </div>
        </section>
    }
}
