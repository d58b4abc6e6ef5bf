//! Route guards: predicates over the session state that render either the
//! wrapped view or a redirect, evaluated before any of the protected view's
//! own effects run.

use crate::{
    api::User,
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
};
use leptos::*;
use leptos_router::Redirect;

/// Passes iff the session is authenticated; otherwise redirects to the
/// login view.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    view! { <Redirect path="/login" /> }.into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Passes iff the session belongs to a business account. Authenticated
/// personal accounts land on the default dashboard, not on the login view:
/// they are signed in, just insufficiently privileged.
#[component]
pub fn RequireBusiness(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_loading = create_memo(move |_| auth.get().loading);
    let authorized = create_memo(move |_| {
        let state = auth.get();
        should_render_business_children(
            state.is_authenticated,
            state.loading,
            is_business_user(state.user.as_ref()),
        )
    });
    view! {
        <Show
            when=move || authorized.get()
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    let target = business_redirect_target(&auth.get_untracked());
                    view! { <Redirect path=target /> }.into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Passes iff the session belongs to a staff account; everyone else goes
/// back to the home view.
#[component]
pub fn RequireStaff(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_loading = create_memo(move |_| auth.get().loading);
    let authorized = create_memo(move |_| {
        let state = auth.get();
        should_render_staff_children(
            state.is_authenticated,
            state.loading,
            is_staff_user(state.user.as_ref()),
        )
    });
    view! {
        <Show
            when=move || authorized.get()
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    view! { <Redirect path="/" /> }.into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

fn is_business_user(user: Option<&User>) -> bool {
    user.map(User::is_business).unwrap_or(false)
}

fn is_staff_user(user: Option<&User>) -> bool {
    user.map(|u| u.is_staff).unwrap_or(false)
}

fn should_render_business_children(
    is_authenticated: bool,
    is_loading: bool,
    is_business: bool,
) -> bool {
    is_authenticated && is_business && !is_loading
}

fn should_render_staff_children(is_authenticated: bool, is_loading: bool, is_staff: bool) -> bool {
    is_authenticated && is_staff && !is_loading
}

fn business_redirect_target(state: &AuthState) -> &'static str {
    if state.is_authenticated {
        "/dashboard"
    } else {
        "/login"
    }
}
