pub mod slack;

use async_trait::async_trait;

use crate::errors::AppError;

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Post a reply into the thread of the triggering message.
    async fn post_message(
        &self,
        channel: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<(), AppError>;
}
