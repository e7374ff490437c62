//! Build-time configuration with optional runtime overrides read from
//! `window.DOCTOPROCHE_CONFIG`, so a statically hosted bundle can re-point
//! the API or swap the CAPTCHA site key without rebuilding. Everything in
//! here is public deployment data; secrets never belong in this config.

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
/// Site key registered with the CAPTCHA provider. Site keys identify the
/// deployment to the widget and are not secrets.
const DEFAULT_RECAPTCHA_SITE_KEY: &str = "6LenfZgqAAAAANsipaE9JAhm7A72mXHjkElh5bhj";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub recaptcha_site_key: String,
}

impl AppConfig {
    /// Loads configuration from build-time environment variables, then
    /// applies any runtime overrides found on the window object.
    pub fn load() -> Self {
        let api_base_url =
            option_env!("DOCTOPROCHE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL);
        let recaptcha_site_key =
            option_env!("DOCTOPROCHE_RECAPTCHA_SITE_KEY").unwrap_or(DEFAULT_RECAPTCHA_SITE_KEY);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            recaptcha_site_key: recaptcha_site_key.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    recaptcha_site_key: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(api_base_url) = runtime.api_base_url {
        config.api_base_url = api_base_url;
    }

    if let Some(recaptcha_site_key) = runtime.recaptcha_site_key {
        config.recaptcha_site_key = recaptcha_site_key;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("DOCTOPROCHE_CONFIG")).ok()?;

    if config.is_null() || config.is_undefined() {
        return None;
    }

    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        recaptcha_site_key: read_runtime_value(&object, "recaptcha_site_key"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
        .and_then(|value| normalize_runtime_value(&value))
}

/// Runtime values come from hand-edited JavaScript; trim them and treat
/// empty strings as absent.
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
    use super::{apply_runtime_overrides, normalize_runtime_value, AppConfig, RuntimeConfig};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(
            normalize_runtime_value("  http://api.example.com  "),
            Some("http://api.example.com".to_string())
        );
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(normalize_runtime_value(""), None);
    }

    #[test]
    fn overrides_replace_only_provided_values() {
        let mut config = AppConfig {
            api_base_url: "http://localhost:5000".to_string(),
            recaptcha_site_key: "build-key".to_string(),
        };

        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                api_base_url: Some("https://api.doctoproche.example".to_string()),
                recaptcha_site_key: None,
            },
        );

        assert_eq!(config.api_base_url, "https://api.doctoproche.example");
        assert_eq!(config.recaptcha_site_key, "build-key");
    }

    #[test]
    fn empty_overrides_leave_config_unchanged() {
        let mut config = AppConfig {
            api_base_url: "http://localhost:5000".to_string(),
            recaptcha_site_key: "build-key".to_string(),
        };

        apply_runtime_overrides(&mut config, RuntimeConfig::default());

        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.recaptcha_site_key, "build-key");
    }
}
