use shared_types::{AppError, SubmissionConfig, SubmittedUser, UserFormValues};

use crate::config;

/// Posts user form submissions to the configured endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    config: SubmissionConfig,
}

impl UsersClient {
    pub fn new(config: SubmissionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Build a client from `config.toml` and the environment.
    pub fn from_config() -> Self {
        Self::new(config::load_config().clone())
    }

    /// Send one `POST` with `values` as the JSON body and decode the created
    /// user record. No retry.
    #[tracing::instrument(skip(self, values), fields(endpoint = %self.config.endpoint))]
    pub async fn create_user(&self, values: &UserFormValues) -> Result<SubmittedUser, AppError> {
        let mut request = self.http.post(&self.config.endpoint).json(values);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::network(format!("User submission request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::server(
                status.as_u16(),
                format!("Users API error ({}): {}", status, body),
            ));
        }

        let user = response.json::<SubmittedUser>().await.map_err(|e| {
            if e.is_decode() {
                AppError::decode(format!("Unexpected users API response: {}", e))
            } else {
                AppError::network(format!("Failed to read users API response: {}", e))
            }
        })?;

        tracing::info!(id = %user.id, "User submitted successfully");
        Ok(user)
    }
}
