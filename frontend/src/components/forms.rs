use leptos::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-fg">{label}</span>
            <input
                type=input_type
                class="mt-1 w-full p-2 rounded-lg border border-border bg-surface-elevated"
                prop:value=move || value.get()
                placeholder=placeholder.unwrap_or_default()
                required=required
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-fg">{label}</span>
            <textarea
                class="mt-1 w-full p-2 rounded-lg border border-border bg-surface-elevated"
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: MaybeSignal<Vec<String>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] empty_label: Option<String>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-fg">{label}</span>
            <select
                class="mt-1 w-full p-2 rounded-lg border border-border bg-surface-elevated"
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                {empty_label.map(|label| view! { <option value="">{label}</option> })}
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let is_selected = option == selected;
                            view! {
                                <option value=option.clone() selected=is_selected>{option}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.call(event_target_checked(&ev))
            />
            <span class="text-sm text-fg">{label}</span>
        </label>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_renders_label_and_value() {
        let html = render_to_string(move || {
            let (value, _) = create_signal("claire@example.fr".to_string());
            view! {
                <TextField
                    label="Email"
                    value=value
                    on_input=Callback::new(|_value: String| {})
                    input_type="email"
                    required=true
                />
            }
        });
        assert!(html.contains("Email"));
        assert!(html.contains("type=\"email\""));
    }

    #[test]
    fn select_field_marks_current_value_as_selected() {
        let html = render_to_string(move || {
            let (value, _) = create_signal("yoga".to_string());
            view! {
                <SelectField
                    label="Catégorie"
                    value=value
                    options=vec!["yoga".to_string(), "escalade".to_string()]
                    on_change=Callback::new(|_value: String| {})
                    empty_label="Toutes catégories"
                />
            }
        });
        assert!(html.contains("Toutes catégories"));
        assert!(html.contains("escalade"));
    }
}
