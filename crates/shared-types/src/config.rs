use serde::{Deserialize, Serialize};

/// Endpoint the form posts to when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/users/";

/// Where and how the form submits.
///
/// Every field has a default so that a missing or partial config file
/// still yields a working client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Sent as the `x-api-key` header when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub submission: SubmissionConfig,
}
