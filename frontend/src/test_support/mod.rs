#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AccountType, Company, Preferences, User};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn personal_user() -> User {
        User {
            id: 1,
            username: "claire".into(),
            email: "claire@example.fr".into(),
            account_type: AccountType::Personal,
            is_staff: false,
            preferences: Some(Preferences {
                activities: vec!["yoga".into(), "escalade".into()],
                location: "Lyon".into(),
                level: "débutant".into(),
                objectives: vec!["bien-être".into()],
            }),
            avatar: None,
            company: None,
        }
    }

    pub fn business_user() -> User {
        User {
            id: 2,
            username: "studio-zen".into(),
            email: "contact@studiozen.fr".into(),
            account_type: AccountType::Business,
            is_staff: false,
            preferences: None,
            avatar: None,
            company: Some(Company {
                id: 12,
                name: "Studio Zen".into(),
                plan: Some("basic".into()),
            }),
        }
    }

    pub fn staff_user() -> User {
        User {
            is_staff: true,
            ..personal_user()
        }
    }

    pub fn provide_auth(
        user: Option<User>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let is_authenticated = user.is_some();
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
