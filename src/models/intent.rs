use serde::{Deserialize, Serialize};

/// Structured meeting details pulled out of a free-text request.
///
/// All four fields are required: the extractor rejects model output that
/// omits any of them rather than returning a partial intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingIntent {
    /// Display names exactly as mentioned in the request, order preserved.
    pub participants: Vec<String>,
    /// YYYY-MM-DD, as instructed in the prompt.
    pub date: String,
    /// HH:MM 24-hour, UTC preferred.
    pub time: String,
    pub topic: String,
}
