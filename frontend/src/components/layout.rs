use crate::state::auth::{use_auth, use_logout};
use leptos::*;
use leptos_router::use_navigate;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let is_authenticated = move || auth.get().is_authenticated;
    let is_business = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.is_business())
            .unwrap_or(false)
    };
    let is_staff = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.is_staff)
            .unwrap_or(false)
    };

    let logout = use_logout();
    let navigate = use_navigate();
    let on_logout = move |_| {
        logout.call(());
        navigate("/", Default::default());
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">
                        "SportRadar"
                    </a>
                    <nav class="flex items-center space-x-4">
                        <a href="/activities" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                            "Activités"
                        </a>
                        <a href="/business" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                            "Entreprises"
                        </a>
                        <Show when=is_authenticated>
                            <a href="/dashboard" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                "Tableau de bord"
                            </a>
                            <a href="/profile" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                "Profil"
                            </a>
                        </Show>
                        <Show when=is_business>
                            <a href="/company" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                "Mon entreprise"
                            </a>
                        </Show>
                        <Show when=is_staff>
                            <a href="/admin/activities" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                "Administration"
                            </a>
                        </Show>
                        <Show
                            when=is_authenticated
                            fallback=|| view! {
                                <a href="/login" class="text-fg px-3 py-2 rounded-md text-sm font-medium border border-border hover:bg-action-ghost-bg-hover">
                                    "Connexion"
                                </a>
                            }
                        >
                            <button
                                on:click=on_logout
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium"
                            >
                                "Déconnexion"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-12">
            <div class="animate-spin rounded-full h-10 w-10 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded my-2">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
