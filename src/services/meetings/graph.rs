use async_trait::async_trait;
use serde_json::json;

use super::MeetingProvider;
use crate::errors::AppError;
use crate::models::MeetingRecord;

/// Microsoft Teams meetings via the Graph API.
///
/// Uses the client-credentials flow and books on behalf of a configured
/// organizer (`/users/{id}/onlineMeetings`), since a daemon process has no
/// signed-in user for `/me`.
pub struct GraphMeetingProvider {
    client_id: String,
    client_secret: String,
    tenant_id: String,
    organizer_id: String,
    client: reqwest::Client,
}

impl GraphMeetingProvider {
    pub fn new(
        client_id: String,
        client_secret: String,
        tenant_id: String,
        organizer_id: String,
        client: reqwest::Client,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            tenant_id,
            organizer_id,
            client,
        }
    }

    async fn access_token(&self) -> Result<String, AppError> {
        let url = format!(
            "https://login.microsoftonline.com/{}/oauth2/v2.0/token",
            self.tenant_id
        );

        let resp = self
            .client
            .post(&url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("scope", "https://graph.microsoft.com/.default"),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Authentication(format!(
                "could not obtain Graph access token ({status}): {body}"
            )));
        }

        let data: serde_json::Value = resp.json().await?;
        data["access_token"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                AppError::Authentication("missing access_token in token response".to_string())
            })
    }
}

#[async_trait]
impl MeetingProvider for GraphMeetingProvider {
    async fn create_meeting(&self, record: &MeetingRecord) -> Result<String, AppError> {
        let token = self.access_token().await?;

        let attendees: Vec<serde_json::Value> = record
            .participants_emails
            .iter()
            .map(|email| json!({ "upn": email }))
            .collect();

        let body = json!({
            "subject": record.topic,
            "participants": { "attendees": attendees },
        });

        let url = format!(
            "https://graph.microsoft.com/v1.0/users/{}/onlineMeetings",
            self.organizer_id
        );

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if status.as_u16() != 201 {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let data: serde_json::Value = resp.json().await?;
        data["joinUrl"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                AppError::UnexpectedResponse("missing joinUrl in Graph response".to_string())
            })
    }
}
