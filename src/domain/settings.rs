use serde::{Deserialize, Deserializer, Serialize};

/// Merchant settings for the product reviews app.
///
/// Field names follow the GraphQL schema (`autoPublish`, `emailNotifications`,
/// `email`), so the same struct is the query result and the mutation variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    /// Check new reviews for spam and publish them without manual approval
    #[serde(default, deserialize_with = "null_as_default")]
    pub auto_publish: bool,
    /// Send an email for each new review
    #[serde(default, deserialize_with = "null_as_default")]
    pub email_notifications: bool,
    /// Address that receives review notifications
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

impl SettingsRecord {
    pub fn new(auto_publish: bool, email_notifications: bool, email: impl Into<String>) -> Self {
        Self {
            auto_publish,
            email_notifications,
            email: email.into(),
        }
    }
}

/// The schema declares every field nullable; treat `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
