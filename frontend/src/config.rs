use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::{RuntimeConfig, DEFAULT_API_BASE_URL};
    use std::sync::OnceLock;

    static API_BASE_URL: OnceLock<String> = OnceLock::new();

    fn window() -> web_sys::Window {
        web_sys::window().expect("no global `window` exists")
    }

    fn get_from_env_js() -> Option<String> {
        // Expect optional global object: window.__SPORTRADAR_ENV = { API_BASE_URL: "..." }
        let w = window();
        let any = js_sys::Reflect::get(&w, &"__SPORTRADAR_ENV".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
        val.and_then(|v| v.as_string())
    }

    fn get_from_window_config() -> Option<String> {
        // Expect optional global object: window.__SPORTRADAR_CONFIG = { api_base_url: "..." }
        let w = window();
        let any = js_sys::Reflect::get(&w, &"__SPORTRADAR_CONFIG".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        let val = js_sys::Reflect::get(&obj, &"api_base_url".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &"API_BASE_URL".into()).ok());
        val.and_then(|v| v.as_string())
    }

    fn snapshot_from_globals() -> Option<String> {
        if let Some(env_url) = get_from_env_js() {
            return Some(env_url);
        }
        get_from_window_config()
    }

    fn cache_base_url(value: &str) -> String {
        let value = value.to_string();
        let _ = API_BASE_URL.set(value.clone());
        value
    }

    fn write_window_config(cfg: &RuntimeConfig) {
        if cfg.api_base_url.is_none() {
            return;
        }
        let w = match web_sys::window() {
            Some(win) => win,
            None => return,
        };
        let obj = js_sys::Object::new();
        if let Some(url) = &cfg.api_base_url {
            let _ = js_sys::Reflect::set(
                &obj,
                &"api_base_url".into(),
                &wasm_bindgen::JsValue::from_str(url),
            );
        }
        let _ = js_sys::Reflect::set(&w, &"__SPORTRADAR_CONFIG".into(), &obj);
    }

    async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let resp = reqwest::get("./config.json").await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }

    pub async fn await_api_base_url() -> String {
        if let Some(cached) = API_BASE_URL.get() {
            return cached.clone();
        }
        if let Some(existing) = snapshot_from_globals() {
            return cache_base_url(&existing);
        }
        if let Some(cfg) = fetch_runtime_config().await {
            write_window_config(&cfg);
            if let Some(url) = cfg.api_base_url {
                return cache_base_url(&url);
            }
        }
        cache_base_url(DEFAULT_API_BASE_URL)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::await_api_base_url;

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    // Host builds (tests) inject the base URL through ApiClient::new_with_base_url.
    DEFAULT_API_BASE_URL.to_string()
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL resolved: {}", base);
}
