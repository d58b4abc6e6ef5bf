use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Like [`render_to_string`] but inside a `<Router/>` backed by a server
/// integration, so components using `<Redirect/>` or navigation hooks can
/// render on the host.
pub fn render_with_router<F, N>(path: &'static str, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};
    use std::sync::Arc;

    render_to_string(move || {
        provide_context(RouterIntegrationContext(Arc::new(ServerIntegration {
            path: format!("http://localhost{}", path),
        })));
        leptos::view! { <Router>{view()}</Router> }
    })
}
