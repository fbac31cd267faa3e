use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use crate::{i18n::Locale, pages::reset_password::utils::ValidationPolicy};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_LOGIN_URL: &str = "/login";
pub const DEFAULT_FORGOT_PASSWORD_URL: &str = "/forgot-password";

/// Raw runtime configuration as found in `config.json` or on `window`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub locale: Option<String>,
    pub brand_name: Option<String>,
    pub brand_tagline: Option<String>,
    pub logo_url: Option<String>,
    pub login_url: Option<String>,
    pub forgot_password_url: Option<String>,
    pub validation: Option<String>,
}

impl RuntimeConfig {
    /// Fills every unset key from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            locale: self.locale.or(fallback.locale),
            brand_name: self.brand_name.or(fallback.brand_name),
            brand_tagline: self.brand_tagline.or(fallback.brand_tagline),
            logo_url: self.logo_url.or(fallback.logo_url),
            login_url: self.login_url.or(fallback.login_url),
            forgot_password_url: self.forgot_password_url.or(fallback.forgot_password_url),
            validation: self.validation.or(fallback.validation),
        }
    }
}

/// Configuration with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetConfig {
    pub api_base_url: String,
    pub locale: Locale,
    pub brand_name: Option<String>,
    pub brand_tagline: Option<String>,
    pub logo_url: Option<String>,
    pub login_url: String,
    pub forgot_password_url: String,
    pub policy: ValidationPolicy,
}

impl Default for ResetConfig {
    fn default() -> Self {
        ResetConfig::from(RuntimeConfig::default())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<RuntimeConfig> for ResetConfig {
    fn from(raw: RuntimeConfig) -> Self {
        let locale = non_blank(raw.locale)
            .and_then(|code| match code.parse::<Locale>() {
                Ok(locale) => Some(locale),
                Err(err) => {
                    log::warn!("{}", err);
                    None
                }
            })
            .unwrap_or_default();
        let policy = non_blank(raw.validation)
            .and_then(|value| match value.parse::<ValidationPolicy>() {
                Ok(policy) => Some(policy),
                Err(err) => {
                    log::warn!("{}", err);
                    None
                }
            })
            .unwrap_or_default();

        ResetConfig {
            api_base_url: non_blank(raw.api_base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            locale,
            brand_name: non_blank(raw.brand_name),
            brand_tagline: non_blank(raw.brand_tagline),
            logo_url: non_blank(raw.logo_url),
            login_url: non_blank(raw.login_url).unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string()),
            forgot_password_url: non_blank(raw.forgot_password_url)
                .unwrap_or_else(|| DEFAULT_FORGOT_PASSWORD_URL.to_string()),
            policy,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to fetch runtime config: {0}")]
    Fetch(String),
    #[error("runtime config request returned status {0}")]
    Status(u16),
    #[error("failed to parse runtime config: {0}")]
    Parse(String),
}

static RESET_CONFIG: OnceLock<ResetConfig> = OnceLock::new();

const CONFIG_KEYS: &[&str] = &[
    "api_base_url",
    "locale",
    "brand_name",
    "brand_tagline",
    "logo_url",
    "login_url",
    "forgot_password_url",
    "validation",
];

fn read_global(name: &str) -> Option<RuntimeConfig> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    // Keys may be written in lower or upper case
    let lookup = |key: &str| {
        js_sys::Reflect::get(&obj, &key.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &key.to_uppercase().into()).ok())
            .and_then(|v| v.as_string())
    };

    let mut map = serde_json::Map::new();
    for key in CONFIG_KEYS {
        if let Some(value) = lookup(key) {
            map.insert((*key).to_string(), serde_json::Value::String(value));
        }
    }
    serde_json::from_value(serde_json::Value::Object(map)).ok()
}

fn snapshot_from_globals() -> RuntimeConfig {
    // window.__RESET_ENV (env.js) wins over window.__RESET_CONFIG
    let env = read_global("__RESET_ENV").unwrap_or_default();
    env.or(read_global("__RESET_CONFIG").unwrap_or_default())
}

async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    let origin = web_sys::window()
        .ok_or(ConfigError::NoWindow)?
        .location()
        .origin()
        .map_err(|_| ConfigError::NoWindow)?;
    let resp = reqwest::get(format!("{}/config.json", origin))
        .await
        .map_err(|e| ConfigError::Fetch(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(ConfigError::Status(resp.status().as_u16()));
    }
    resp.json::<RuntimeConfig>()
        .await
        .map_err(|e| ConfigError::Parse(e.to_string()))
}

fn cache(config: ResetConfig) -> ResetConfig {
    RESET_CONFIG.get_or_init(|| config).clone()
}

pub async fn load() -> ResetConfig {
    if let Some(cached) = RESET_CONFIG.get() {
        return cached.clone();
    }
    let from_globals = snapshot_from_globals();
    let from_file = match fetch_runtime_config().await {
        Ok(cfg) => cfg,
        Err(err) => {
            log::info!("using built-in config defaults: {}", err);
            RuntimeConfig::default()
        }
    };
    cache(ResetConfig::from(from_globals.or(from_file)))
}

/// Config resolved so far, or defaults when [`load`] has not finished.
pub fn current() -> ResetConfig {
    RESET_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn await_api_base_url() -> String {
    load().await.api_base_url
}
