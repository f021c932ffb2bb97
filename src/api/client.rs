//! HTTP client for the settings GraphQL endpoint.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::graphql::{
    self, GraphQlRequest, GraphQlResponse, SETTINGS_QUERY_NAME, SettingsQueryData,
    UPDATE_SETTINGS_NAME, UpdateSettingsData,
};
use super::{ApiError, SettingsSource};
use crate::config::ApiSettings;
use crate::domain::SettingsRecord;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking GraphQL client for `SettingsQuery` and `updateSettings`
#[derive(Clone)]
pub struct GraphQlClient {
    endpoint: String,
    /// (header name, token)
    auth: Option<(String, String)>,
    agent: ureq::Agent,
}

impl GraphQlClient {
    /// Create a client for `endpoint` with default timeouts and no token
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, DEFAULT_READ_TIMEOUT)
    }

    fn with_timeout(endpoint: impl Into<String>, read_timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(read_timeout)
            .user_agent(concat!("reviews-admin/", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            endpoint: endpoint.into(),
            auth: None,
            agent,
        }
    }

    /// Create a client from the `[api]` config section
    pub fn from_settings(settings: &ApiSettings) -> Self {
        let client = Self::with_timeout(settings.endpoint.clone(), settings.timeout());
        match settings.token() {
            Some(token) => client.with_token(settings.access_token_header.clone(), token),
            None => client,
        }
    }

    /// Send `token` in `header` with every request
    #[must_use]
    pub fn with_token(mut self, header: impl Into<String>, token: impl Into<String>) -> Self {
        self.auth = Some((header.into(), token.into()));
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn execute<V, T>(&self, request: &GraphQlRequest<'static, V>) -> Result<T, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        debug!(
            "[reviews-admin:api] POST {} ({})",
            self.endpoint, request.operation_name
        );

        let mut req = self
            .agent
            .post(&self.endpoint)
            .set("Accept", "application/json");
        if let Some((header, token)) = &self.auth {
            req = req.set(header, token);
        }

        let response = req.send_json(request)?;

        let envelope: GraphQlResponse<T> = response
            .into_json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        envelope.into_data(request.operation_name)
    }
}

impl SettingsSource for GraphQlClient {
    fn fetch_settings(&self) -> Result<SettingsRecord, ApiError> {
        let data: SettingsQueryData = self.execute(&graphql::settings_query())?;
        let settings = data
            .settings
            .ok_or(ApiError::MissingData(SETTINGS_QUERY_NAME))?;
        info!("[reviews-admin:api] Fetched settings from {}", self.endpoint);
        Ok(settings)
    }

    fn update_settings(&self, settings: &SettingsRecord) -> Result<SettingsRecord, ApiError> {
        let data: UpdateSettingsData =
            self.execute(&graphql::update_settings_mutation(settings))?;
        let saved = data
            .update_settings
            .ok_or(ApiError::MissingData(UPDATE_SETTINGS_NAME))?;
        if saved != *settings {
            warn!(
                "[reviews-admin:api] Server stored different settings than submitted: {:?}",
                saved
            );
        }
        info!("[reviews-admin:api] Updated settings at {}", self.endpoint);
        Ok(saved)
    }
}
