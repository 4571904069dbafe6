#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("upstream call failed ({status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("missing key: {0}")]
    MissingField(&'static str),

    #[error("extraction error: {0}")]
    Extraction(String),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat error: {0}")]
    Chat(String),
}
