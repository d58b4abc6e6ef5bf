use crate::{components::layout::Layout, state::auth::use_auth};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = move || auth.get().is_authenticated;

    view! {
        <Layout>
            <div class="text-center py-12 px-4">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                    "SportRadar"
                </h1>
                <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                    "Trouvez et réservez vos activités sportives et bien-être, près de chez vous."
                </p>
                <div class="mt-8 flex justify-center gap-4">
                    <a
                        href="/activities"
                        class="px-8 py-3 rounded-md text-base font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                    >
                        "Découvrir les activités"
                    </a>
                    <Show
                        when=is_authenticated
                        fallback=|| view! {
                            <a
                                href="/login"
                                class="px-8 py-3 rounded-md text-base font-medium text-fg border border-border hover:bg-action-ghost-bg-hover"
                            >
                                "Connexion"
                            </a>
                        }
                    >
                        <a
                            href="/dashboard"
                            class="px-8 py-3 rounded-md text-base font-medium text-fg border border-border hover:bg-action-ghost-bg-hover"
                        >
                            "Mon tableau de bord"
                        </a>
                    </Show>
                </div>
                <p class="mt-6 text-sm text-fg-muted">
                    "Vous êtes une entreprise ? "
                    <a href="/business" class="text-action-primary-bg hover:underline">
                        "Découvrez nos offres bien-être"
                    </a>
                </p>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{personal_user, provide_auth};
    use crate::test_support::ssr::render_with_router;

    #[test]
    fn home_offers_login_when_logged_out() {
        let html = render_with_router("/", move || {
            provide_auth(None);
            view! { <HomePage/> }
        });
        assert!(html.contains("SportRadar"));
        assert!(html.contains("Connexion"));
    }

    #[test]
    fn home_links_to_dashboard_when_authenticated() {
        let html = render_with_router("/", move || {
            provide_auth(Some(personal_user()));
            view! { <HomePage/> }
        });
        assert!(html.contains("Mon tableau de bord"));
    }
}
