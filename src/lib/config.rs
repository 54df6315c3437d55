//! Build-time configuration for the showcase with an optional runtime override.
//! The runtime config is read from `window.AUTHBOX_CONFIG` (if present) so a
//! static deployment can move the app under a different base path without
//! rebuilding. Configuration values are public; do not store secrets here.

/// Showcase configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base path the app is served under, normalized to `/` or `/name/`.
    pub base_path: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let base_path = option_env!("AUTHBOX_BASE_PATH").unwrap_or("/");

        let mut config = Self {
            base_path: normalize_base_path(base_path),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    base_path: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.base_path {
        config.base_path = normalize_base_path(&value);
    }
}

/// Normalizes a base path so it always starts and ends with a slash,
/// e.g. `/` or `/showcase/`.
pub fn normalize_base_path(value: &str) -> String {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    format!("/{trimmed}/")
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("AUTHBOX_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        base_path: read_runtime_value(&object, "base_path"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

#[cfg(target_arch = "wasm32")]
fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_base_path};

    #[test]
    fn normalize_base_path_handles_root_and_empty() {
        assert_eq!(normalize_base_path("/"), "/");
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("   "), "/");
    }

    #[test]
    fn normalize_base_path_adds_missing_slashes() {
        assert_eq!(normalize_base_path("showcase"), "/showcase/");
        assert_eq!(normalize_base_path("/showcase"), "/showcase/");
        assert_eq!(normalize_base_path("showcase/"), "/showcase/");
        assert_eq!(normalize_base_path("/showcase/"), "/showcase/");
    }

    #[test]
    fn apply_runtime_overrides_replaces_base_path() {
        let mut config = AppConfig {
            base_path: "/".to_string(),
        };
        let runtime = RuntimeConfig {
            base_path: Some("demo".to_string()),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.base_path, "/demo/");
    }

    #[test]
    fn apply_runtime_overrides_keeps_default_when_absent() {
        let mut config = AppConfig {
            base_path: "/showcase/".to_string(),
        };

        apply_runtime_overrides(&mut config, RuntimeConfig::default());

        assert_eq!(config.base_path, "/showcase/");
    }
}
