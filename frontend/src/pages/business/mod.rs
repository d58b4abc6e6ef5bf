use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::BusinessPanel;

#[component]
pub fn BusinessPage() -> impl IntoView {
    view! { <BusinessPanel /> }
}
