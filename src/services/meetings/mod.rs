pub mod graph;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::MeetingRecord;

#[async_trait]
pub trait MeetingProvider: Send + Sync {
    /// Create an online meeting and return its join URL.
    ///
    /// Every call creates a new meeting resource; there is no idempotency
    /// key, so calling twice with the same record books two meetings.
    async fn create_meeting(&self, record: &MeetingRecord) -> Result<String, AppError>;
}
