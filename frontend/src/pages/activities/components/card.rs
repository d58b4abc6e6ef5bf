use crate::api::Activity;
use crate::utils::format::{display_date, display_price, is_full, occupancy_label};
use leptos::*;

#[component]
pub fn ActivityCard(activity: Activity, on_register: Option<Callback<i64>>) -> impl IntoView {
    let id = activity.id;
    let full = is_full(activity.participants, activity.max_participants);
    let sport_zen = activity.sport_zen;
    let has_image = !activity.image.is_empty();
    let image = activity.image;
    let alt = activity.name.clone();
    let date_label = display_date(&activity.date);
    let price_label = display_price(&activity.price);
    let occupancy = occupancy_label(activity.participants, activity.max_participants);

    view! {
        <div class="bg-surface-elevated rounded-2xl shadow-lg overflow-hidden flex flex-col">
            <Show when=move || has_image>
                <img src=image.clone() alt=alt.clone() class="w-full h-48 object-cover"/>
            </Show>
            <div class="p-4 flex-1 flex flex-col gap-2">
                <div class="flex items-center justify-between">
                    <h3 class="text-lg font-semibold text-fg">{activity.name}</h3>
                    <Show when=move || sport_zen>
                        <span class="text-xs px-2 py-1 rounded-full bg-status-success-bg text-status-success-text">
                            "Sport Zen"
                        </span>
                    </Show>
                </div>
                <p class="text-sm text-fg-muted">{activity.description}</p>
                <div class="text-sm text-fg-muted space-y-1">
                    <div>{activity.location}</div>
                    <div>
                        {date_label}
                        " à "
                        {activity.time}
                        " · "
                        {activity.duration}
                    </div>
                    <div>{occupancy}</div>
                    {activity
                        .instructor
                        .map(|instructor| view! { <div>{"Animé par "}{instructor}</div> })}
                </div>
                <div class="mt-auto flex items-center justify-between pt-2">
                    <span class="font-semibold text-fg">{price_label}</span>
                    {on_register.map(|callback| view! {
                        <button
                            class="px-4 py-2 rounded-lg bg-action-primary-bg text-action-primary-text text-sm font-medium disabled:opacity-50"
                            disabled=full
                            on:click=move |_| callback.call(id)
                        >
                            {if full { "Complet" } else { "S'inscrire" }}
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    fn sample_activity(participants: i32) -> Activity {
        Activity {
            id: 1,
            name: "Yoga du matin".into(),
            description: "Séance douce en plein air".into(),
            category: "yoga".into(),
            location: "Parc de la Tête d'Or".into(),
            date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
            time: "09:00".into(),
            duration: "1h".into(),
            participants,
            max_participants: 20,
            price: "".into(),
            level: "Tous niveaux".into(),
            sport_zen: true,
            rating: 4.5,
            instructor: Some("Claire".into()),
            image: String::new(),
        }
    }

    #[test]
    fn card_renders_core_fields() {
        let html = render_to_string(move || {
            view! { <ActivityCard activity=sample_activity(5) on_register=None/> }
        });
        assert!(html.contains("Yoga du matin"));
        assert!(html.contains("02/04/2026"));
        assert!(html.contains("5/20 places"));
        assert!(html.contains("Gratuit"));
        assert!(html.contains("Sport Zen"));
        assert!(html.contains("Animé par"));
        // No registration callback, no button.
        assert!(!html.contains("S'inscrire"));
    }

    #[test]
    fn card_register_button_disabled_when_full() {
        let html = render_to_string(move || {
            view! {
                <ActivityCard
                    activity=sample_activity(20)
                    on_register=Some(Callback::new(|_id: i64| {}))
                />
            }
        });
        assert!(html.contains("Complet"));
    }
}
