//! Runtime configuration, read from the environment once at startup.

use std::env;
use std::fmt;

/// Environment variable holding the API credential.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Environment variable enabling debug output (`true` to enable).
pub const DEBUG_ENV_VAR: &str = "DEBUG";

/// Environment variable overriding the model.
pub const MODEL_ENV_VAR: &str = "OPENAI_MODEL";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV_VAR: &str = "OPENAI_BASE_URL";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration shared by the generator and the setup/check flows.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub debug: bool,
    pub model: String,
    pub api_base_url: String,
}

impl Config {
    /// Build the configuration from the current process environment.
    ///
    /// A blank `OPENAI_API_KEY` counts as unset. `DEBUG` is enabled only by
    /// the exact value `true`.
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_var(API_KEY_ENV_VAR),
            debug: env::var(DEBUG_ENV_VAR).is_ok_and(|v| v == "true"),
            model: non_empty_var(MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base_url: non_empty_var(BASE_URL_ENV_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            debug: false,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

// Keeps the key out of debug logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("debug", &self.debug)
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
