use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub slack_bot_token: String,
    pub slack_signing_secret: String,
    pub watsonx_api_key: String,
    pub watsonx_project_id: String,
    pub watsonx_url: String,
    pub watsonx_model_id: String,
    pub iam_token_url: String,
    pub azure_client_id: String,
    pub azure_client_secret: String,
    pub azure_tenant_id: String,
    pub graph_organizer_id: String,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            slack_bot_token: env::var("SLACK_BOT_TOKEN").unwrap_or_default(),
            slack_signing_secret: env::var("SLACK_SIGNING_SECRET").unwrap_or_default(),
            watsonx_api_key: env::var("WATSONX_API_KEY").unwrap_or_default(),
            watsonx_project_id: env::var("WATSONX_PROJECT_ID").unwrap_or_default(),
            watsonx_url: env::var("WATSONX_URL")
                .unwrap_or_else(|_| "https://us-south.ml.cloud.ibm.com".to_string()),
            watsonx_model_id: env::var("WATSONX_MODEL_ID")
                .unwrap_or_else(|_| "ibm/granite-3-8b-instruct".to_string()),
            iam_token_url: env::var("IAM_TOKEN_URL")
                .unwrap_or_else(|_| "https://iam.cloud.ibm.com/identity/token".to_string()),
            azure_client_id: env::var("AZURE_CLIENT_ID").unwrap_or_default(),
            azure_client_secret: env::var("AZURE_CLIENT_SECRET").unwrap_or_default(),
            azure_tenant_id: env::var("AZURE_TENANT_ID").unwrap_or_default(),
            graph_organizer_id: env::var("GRAPH_ORGANIZER_ID").unwrap_or_default(),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}
