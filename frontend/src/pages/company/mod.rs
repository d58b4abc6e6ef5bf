use leptos::*;

pub mod repository;

mod panel;

pub use panel::CompanyPanel;

#[component]
pub fn CompanyPage() -> impl IntoView {
    view! { <CompanyPanel /> }
}
