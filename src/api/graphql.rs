//! GraphQL documents and wire envelope for the settings operations

use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::domain::SettingsRecord;

pub const SETTINGS_QUERY_NAME: &str = "SettingsQuery";

pub const SETTINGS_QUERY: &str = r#"query SettingsQuery {
  settings {
    autoPublish
    emailNotifications
    email
  }
}"#;

pub const UPDATE_SETTINGS_NAME: &str = "updateSettings";

pub const UPDATE_SETTINGS_MUTATION: &str = r#"mutation updateSettings(
  $autoPublish: Boolean
  $emailNotifications: Boolean
  $email: String
) {
  updateSettings(
    autoPublish: $autoPublish
    emailNotifications: $emailNotifications
    email: $email
  ) {
    autoPublish
    emailNotifications
    email
  }
}"#;

/// Body of a GraphQL POST
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub operation_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// `SettingsQuery` with no variables
pub fn settings_query() -> GraphQlRequest<'static, ()> {
    GraphQlRequest {
        query: SETTINGS_QUERY,
        operation_name: SETTINGS_QUERY_NAME,
        variables: None,
    }
}

/// `updateSettings` carrying the full replacement record as variables
pub fn update_settings_mutation(settings: &SettingsRecord) -> GraphQlRequest<'static, &SettingsRecord> {
    GraphQlRequest {
        query: UPDATE_SETTINGS_MUTATION,
        operation_name: UPDATE_SETTINGS_NAME,
        variables: Some(settings),
    }
}

/// One entry of a response's `errors` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl GraphQlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Standard `{ data, errors }` response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl<T> GraphQlResponse<T> {
    /// Unwrap the payload. Any reported error wins over partial data.
    pub fn into_data(self, operation: &'static str) -> Result<T, ApiError> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            return Err(ApiError::GraphQl(errors));
        }
        self.data.ok_or(ApiError::MissingData(operation))
    }
}

#[derive(Debug, Deserialize)]
pub struct SettingsQueryData {
    pub settings: Option<SettingsRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsData {
    pub update_settings: Option<SettingsRecord>,
}
