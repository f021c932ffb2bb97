//! Update command implementation
//!
//! Goes through the same form as the settings window, so an invalid email is
//! rejected here before anything is sent.

use anyhow::{Context, Result, bail};

use reviews_admin::api::{GraphQlClient, SettingsSource};
use reviews_admin::config::Config;
use reviews_admin::{SettingsForm, SubmitOutcome};

use super::show::print_settings;

/// Field values given on the command line
#[derive(Debug, Default)]
pub struct SettingsChanges {
    pub auto_publish: Option<bool>,
    pub email_notifications: Option<bool>,
    pub email: Option<String>,
}

impl SettingsChanges {
    pub fn is_empty(&self) -> bool {
        self.auto_publish.is_none() && self.email_notifications.is_none() && self.email.is_none()
    }

    /// Apply the given fields, leaving the others as fetched
    pub fn apply(self, form: &mut SettingsForm) {
        if let Some(auto_publish) = self.auto_publish {
            form.set_auto_publish(auto_publish);
        }
        if let Some(email_notifications) = self.email_notifications {
            form.set_email_notifications(email_notifications);
        }
        if let Some(email) = self.email {
            form.set_email(email);
        }
    }
}

/// Fetch the settings, apply `changes` and submit the result
pub async fn update_command(config: &Config, changes: SettingsChanges) -> Result<()> {
    if changes.is_empty() {
        println!("Nothing to update.");
        return Ok(());
    }

    let client = GraphQlClient::from_settings(&config.api);

    let fetch_client = client.clone();
    let current = tokio::task::spawn_blocking(move || fetch_client.fetch_settings())
        .await
        .context("Settings request was cancelled")??;

    let mut form = SettingsForm::from_record(current);
    changes.apply(&mut form);

    if !form.is_dirty() {
        println!("Settings already up to date.");
        return Ok(());
    }

    let mut payload = None;
    if let SubmitOutcome::Blocked(error) = form.submit(|record| payload = Some(record)) {
        bail!("Settings not saved: {}", error);
    }

    if let Some(record) = payload {
        let saved = tokio::task::spawn_blocking(move || client.update_settings(&record))
            .await
            .context("Settings request was cancelled")??;

        println!("Settings saved:\n");
        print_settings(&saved);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviews_admin::{EmailError, SettingsRecord};
    use std::io::Read;
    use std::thread::{self, JoinHandle};
    use std::time::Duration;

    /// Answers scripted JSON bodies in order and returns the operation names it saw.
    /// Stops when the script runs out or no request arrives for a second.
    fn scripted_endpoint(responses: Vec<serde_json::Value>) -> (Config, JoinHandle<Vec<String>>) {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();

        let handle = thread::spawn(move || {
            let mut operations = Vec::new();
            for body in responses {
                let Ok(Some(mut request)) = server.recv_timeout(Duration::from_secs(1)) else {
                    break;
                };
                let mut raw = String::new();
                request.as_reader().read_to_string(&mut raw).unwrap();
                let sent: serde_json::Value = serde_json::from_str(&raw).unwrap();
                operations.push(sent["operationName"].as_str().unwrap_or_default().to_string());

                let header =
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .unwrap();
                request
                    .respond(tiny_http::Response::from_string(body.to_string()).with_header(header))
                    .unwrap();
            }
            operations
        });

        let mut config = Config::default();
        config.api.endpoint = format!("http://{}/graphql", addr);
        (config, handle)
    }

    fn settings_response(
        field: &str,
        auto_publish: bool,
        notifications: bool,
        email: &str,
    ) -> serde_json::Value {
        serde_json::json!({
            "data": {
                field: {
                    "autoPublish": auto_publish,
                    "emailNotifications": notifications,
                    "email": email
                }
            }
        })
    }

    #[tokio::test]
    async fn test_update_without_changes_sends_nothing() {
        let (config, handle) =
            scripted_endpoint(vec![settings_response("settings", false, false, "")]);

        update_command(&config, SettingsChanges::default()).await.unwrap();

        assert!(handle.join().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_blocked_by_missing_email_only_fetches() {
        let (config, handle) = scripted_endpoint(vec![
            settings_response("settings", false, false, ""),
            settings_response("updateSettings", false, true, ""),
        ]);

        let err = update_command(
            &config,
            SettingsChanges {
                email_notifications: Some(true),
                ..SettingsChanges::default()
            },
        )
        .await
        .unwrap_err();

        assert!(err.to_string().starts_with("Settings not saved"));
        assert_eq!(handle.join().unwrap(), vec!["SettingsQuery"]);
    }

    #[tokio::test]
    async fn test_update_sends_changed_settings() {
        let (config, handle) = scripted_endpoint(vec![
            settings_response("settings", false, false, ""),
            settings_response("updateSettings", true, true, "owner@shop.example"),
        ]);

        update_command(
            &config,
            SettingsChanges {
                auto_publish: Some(true),
                email_notifications: Some(true),
                email: Some("owner@shop.example".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(
            handle.join().unwrap(),
            vec!["SettingsQuery", "updateSettings"]
        );
    }

    #[test]
    fn test_apply_only_touches_given_fields() {
        let mut form = SettingsForm::from_record(SettingsRecord::new(true, true, "a@b.com"));

        SettingsChanges {
            auto_publish: Some(false),
            ..SettingsChanges::default()
        }
        .apply(&mut form);

        assert_eq!(form.values(), &SettingsRecord::new(false, true, "a@b.com"));
    }

    #[test]
    fn test_apply_revalidates_email() {
        let mut form = SettingsForm::from_record(SettingsRecord::default());

        SettingsChanges {
            email_notifications: Some(true),
            ..SettingsChanges::default()
        }
        .apply(&mut form);

        assert_eq!(form.email_error(), Some(EmailError::Required));
    }

    #[test]
    fn test_empty_changes() {
        assert!(SettingsChanges::default().is_empty());
        assert!(
            !SettingsChanges {
                email: Some(String::new()),
                ..SettingsChanges::default()
            }
            .is_empty()
        );
    }
}
