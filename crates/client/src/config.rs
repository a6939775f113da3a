use shared_types::{AppConfig, SubmissionConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<SubmissionConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

const ENDPOINT_VAR: &str = "SUBMISSION_ENDPOINT";
const API_KEY_VAR: &str = "SUBMISSION_API_KEY";

/// Read `.env` and `config.toml`, apply environment overrides, and store
/// the result in the global `OnceLock`. Safe to call multiple times, only
/// the first call has effect.
///
/// If the file is missing or unparseable the defaults are used.
pub fn load_config() -> &'static SubmissionConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let file = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                eprintln!("[config] {CONFIG_PATH} not found ({e}), using defaults");
                AppConfig::default()
            }
        };
        let config = apply_env_overrides(file.submission, |key| std::env::var(key).ok());
        eprintln!("[config] Submitting to {}", config.endpoint);
        config
    })
}

fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

/// Non-empty environment values win over the file.
fn apply_env_overrides(
    mut config: SubmissionConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> SubmissionConfig {
    if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.is_empty()) {
        config.endpoint = endpoint;
    }
    if let Some(key) = lookup(API_KEY_VAR).filter(|v| !v.is_empty()) {
        config.api_key = Some(key);
    }
    config
}
