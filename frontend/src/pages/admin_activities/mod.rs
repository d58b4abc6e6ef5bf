use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::AdminActivitiesPanel;

#[component]
pub fn AdminActivitiesPage() -> impl IntoView {
    view! { <AdminActivitiesPanel /> }
}
