//! Process configuration, read from the environment at startup

use std::time::Duration;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_PRESET_DELAY_MS: u64 = 600;
const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 512;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Configuration for the text-generation provider
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    /// Gateway base URL; when set, the key is left to the gateway
    pub gateway: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            gateway: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
        }
    }
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_key: lookup("GEMINI_API_KEY")
                .or_else(|| lookup("API_KEY"))
                .filter(|k| !k.trim().is_empty()),
            gateway: lookup("LLM_GATEWAY").filter(|g| !g.trim().is_empty()),
            model: lookup("FANWELCOME_MODEL").unwrap_or(defaults.model),
            temperature: parse_or(lookup("FANWELCOME_TEMPERATURE"), defaults.temperature),
            max_output_tokens: parse_or(
                lookup("FANWELCOME_MAX_OUTPUT_TOKENS"),
                defaults.max_output_tokens,
            ),
            timeout: Duration::from_secs(parse_or(
                lookup("FANWELCOME_LLM_TIMEOUT_SECS"),
                DEFAULT_LLM_TIMEOUT_SECS,
            )),
        }
    }

    /// Whether a provider can be reached at all
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() || self.gateway.is_some()
    }
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Simulated latency before a preset answer appears
    pub preset_delay: Duration,
    /// How long an unwatched session may sit without events before it is closed
    pub session_idle_timeout: Duration,
    pub llm: LlmConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            preset_delay: Duration::from_millis(DEFAULT_PRESET_DELAY_MS),
            session_idle_timeout: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
            llm: LlmConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: parse_or(lookup("FANWELCOME_PORT"), DEFAULT_PORT),
            preset_delay: Duration::from_millis(parse_or(
                lookup("FANWELCOME_PRESET_DELAY_MS"),
                DEFAULT_PRESET_DELAY_MS,
            )),
            session_idle_timeout: Duration::from_secs(parse_or(
                lookup("FANWELCOME_SESSION_IDLE_SECS"),
                DEFAULT_SESSION_IDLE_SECS,
            )),
            llm: LlmConfig::from_lookup(&lookup),
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
