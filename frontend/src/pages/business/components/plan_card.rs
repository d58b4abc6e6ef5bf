use crate::api::Plan;
use leptos::*;

#[component]
pub fn PlanCard(
    plan: Plan,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let id = plan.id.clone();
    let id_for_class = plan.id.clone();
    let is_selected = move || selected.get() == id_for_class;

    view! {
        <div class=move || {
            if is_selected() {
                "bg-surface-elevated rounded-2xl shadow-lg p-6 border-2 border-action-primary-bg"
            } else {
                "bg-surface-elevated rounded-2xl shadow-lg p-6 border-2 border-transparent"
            }
        }>
            <h3 class="text-lg font-semibold text-fg">{plan.name}</h3>
            <p class="text-3xl font-bold text-fg mt-2">
                {plan.price}
                <span class="text-base font-normal text-fg-muted">{format!("/{}", plan.billing_period)}</span>
            </p>
            <button
                class="mt-4 w-full px-4 py-2 rounded-lg bg-action-primary-bg text-action-primary-text text-sm font-medium"
                on:click=move |_| on_select.call(id.clone())
            >
                "Choisir cette offre"
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn plan_card_shows_price_per_period() {
        let html = render_to_string(move || {
            let (selected, _) = create_signal("basic".to_string());
            view! {
                <PlanCard
                    plan=Plan {
                        id: "basic".into(),
                        name: "Abonnement de base".into(),
                        price: "40€".into(),
                        billing_period: "mois".into(),
                    }
                    selected=selected
                    on_select=Callback::new(|_plan: String| {})
                />
            }
        });
        assert!(html.contains("Abonnement de base"));
        assert!(html.contains("40€"));
        assert!(html.contains("/mois"));
    }
}
