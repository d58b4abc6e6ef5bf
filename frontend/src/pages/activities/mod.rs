use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::ActivitiesPanel;

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    view! { <ActivitiesPanel /> }
}
