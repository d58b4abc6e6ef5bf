//! Persisted client-side state. Two string values live under well-known
//! keys: the access token and the refresh token. On WASM they sit in
//! `localStorage` so a session survives page reloads; on the host a
//! thread-local map backs the same API so the gateway code runs unchanged
//! under native tests.

pub const ACCESS_TOKEN_KEY: &str = "access";
pub const REFRESH_TOKEN_KEY: &str = "refresh";

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to persist {}", key))
    }

    pub fn remove_item(key: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

pub use backend::{get_item, remove_item, set_item};

pub fn access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY)
}

pub fn refresh_token() -> Option<String> {
    get_item(REFRESH_TOKEN_KEY)
}

pub fn store_access_token(token: &str) -> Result<(), String> {
    set_item(ACCESS_TOKEN_KEY, token)
}

pub fn store_token_pair(access: &str, refresh: &str) -> Result<(), String> {
    set_item(ACCESS_TOKEN_KEY, access)?;
    set_item(REFRESH_TOKEN_KEY, refresh)
}

pub fn clear_tokens() {
    remove_item(ACCESS_TOKEN_KEY);
    remove_item(REFRESH_TOKEN_KEY);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn token_pair_round_trip() {
        store_token_pair("acc-1", "ref-1").unwrap();
        assert_eq!(access_token().as_deref(), Some("acc-1"));
        assert_eq!(refresh_token().as_deref(), Some("ref-1"));

        store_access_token("acc-2").unwrap();
        assert_eq!(access_token().as_deref(), Some("acc-2"));
        assert_eq!(refresh_token().as_deref(), Some("ref-1"));

        clear_tokens();
        assert!(access_token().is_none());
        assert!(refresh_token().is_none());
    }

    #[test]
    fn clear_tokens_is_idempotent() {
        clear_tokens();
        clear_tokens();
        assert!(access_token().is_none());
    }
}
