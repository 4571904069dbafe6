use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use taskmind::config::AppConfig;
use taskmind::handlers;
use taskmind::services::ai::watsonx::WatsonxProvider;
use taskmind::services::chat::slack::SlackChatProvider;
use taskmind::services::meetings::graph::GraphMeetingProvider;
use taskmind::sessions::SessionStore;
use taskmind::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    anyhow::ensure!(
        !config.slack_bot_token.is_empty(),
        "SLACK_BOT_TOKEN must be set"
    );
    anyhow::ensure!(
        !config.watsonx_api_key.is_empty(),
        "WATSONX_API_KEY must be set"
    );

    // One bounded-timeout client per upstream so a hung provider can't
    // wedge a handler forever
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;

    let generator = WatsonxProvider::new(
        config.watsonx_api_key.clone(),
        config.watsonx_project_id.clone(),
        config.watsonx_model_id.clone(),
        config.watsonx_url.clone(),
        config.iam_token_url.clone(),
        http.clone(),
    );
    tracing::info!(model = %config.watsonx_model_id, "using watsonx extraction provider");

    let meetings = GraphMeetingProvider::new(
        config.azure_client_id.clone(),
        config.azure_client_secret.clone(),
        config.azure_tenant_id.clone(),
        config.graph_organizer_id.clone(),
        http.clone(),
    );

    let chat = SlackChatProvider::new(config.slack_bot_token.clone(), http);

    let state = Arc::new(AppState {
        config: config.clone(),
        generator: Box::new(generator),
        meetings: Box::new(meetings),
        chat: Box::new(chat),
        sessions: SessionStore::new(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/webhook/slack/events", post(handlers::webhook::slack_events))
        .route("/api/dev/message", post(handlers::dev::send_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
