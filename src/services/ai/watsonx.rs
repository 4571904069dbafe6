use async_trait::async_trait;
use serde_json::json;

use super::TextGenerator;
use crate::errors::AppError;

const GENERATION_VERSION: &str = "2023-05-29";

pub struct WatsonxProvider {
    api_key: String,
    project_id: String,
    model_id: String,
    base_url: String,
    iam_token_url: String,
    client: reqwest::Client,
}

impl WatsonxProvider {
    pub fn new(
        api_key: String,
        project_id: String,
        model_id: String,
        base_url: String,
        iam_token_url: String,
        client: reqwest::Client,
    ) -> Self {
        Self {
            api_key,
            project_id,
            model_id,
            base_url,
            iam_token_url,
            client,
        }
    }

    /// Exchange the API key for a short-lived IAM bearer token.
    async fn iam_token(&self) -> Result<String, AppError> {
        let resp = self
            .client
            .post(&self.iam_token_url)
            .form(&[
                ("grant_type", "urn:ibm:params:oauth:grant-type:apikey"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Authentication(format!(
                "failed to obtain IAM token ({status}): {body}"
            )));
        }

        let data: serde_json::Value = resp.json().await?;
        data["access_token"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                AppError::Authentication("missing access_token in IAM response".to_string())
            })
    }
}

#[async_trait]
impl TextGenerator for WatsonxProvider {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let token = self.iam_token().await?;

        let body = json!({
            "input": prompt,
            "parameters": {
                "decoding_method": "greedy",
                "max_new_tokens": 200,
                "min_new_tokens": 0,
                "repetition_penalty": 1,
            },
            "model_id": self.model_id,
            "project_id": self.project_id,
            "moderations": {
                "hap": {
                    "input": { "enabled": true, "threshold": 0.5, "mask": { "remove_entity_value": true } },
                    "output": { "enabled": true, "threshold": 0.5, "mask": { "remove_entity_value": true } },
                },
                "pii": {
                    "input": { "enabled": true, "threshold": 0.5, "mask": { "remove_entity_value": true } },
                    "output": { "enabled": true, "threshold": 0.5, "mask": { "remove_entity_value": true } },
                },
                "granite_guardian": {
                    "input": { "threshold": 1 },
                },
            },
        });

        let url = format!(
            "{}/ml/v1/text/generation?version={GENERATION_VERSION}",
            self.base_url
        );

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let data: serde_json::Value = resp.json().await?;
        data["results"][0]["generated_text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                AppError::UnexpectedResponse(
                    "missing generated_text in watsonx response".to_string(),
                )
            })
    }
}
