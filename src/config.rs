//! Build-time configuration for the auth API endpoint with an optional
//! runtime override.
//!
//! The override is read from `window.AUTH_PORTAL_CONFIG` (if present) so a
//! static deployment can point at a different API without rebuilding. Values
//! here are public; never put secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base URL used when `AUTH_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7243";

/// Frontend configuration provided to pages through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("AUTH_API_BASE_URL")
            .and_then(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());

        let mut config = Self { api_base_url };
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        log::debug!("auth api base url: {}", config.api_base_url);
        config
    }

    /// Join `path` onto the configured base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(feature = "csr")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("AUTH_PORTAL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let api_base_url = Reflect::get(&config, &JsValue::from_str("api_base_url"))
        .ok()
        .and_then(|value| value.as_string())
        .and_then(|value| normalize_base_url(&value));

    Some(RuntimeConfig { api_base_url })
}

#[cfg(not(feature = "csr"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Trim whitespace and trailing slashes; blank input yields `None`.
fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
