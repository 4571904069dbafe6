use super::MeetingIntent;

/// An in-flight meeting request waiting for attendee emails.
#[derive(Debug, Clone)]
pub struct PendingSession {
    pub topic: String,
    pub names: Vec<String>,
    pub date: String,
    pub time: String,
}

impl From<MeetingIntent> for PendingSession {
    fn from(intent: MeetingIntent) -> Self {
        Self {
            topic: intent.topic,
            names: intent.participants,
            date: intent.date,
            time: intent.time,
        }
    }
}

/// A completed session ready for booking. Not retained after the
/// provisioning call returns.
#[derive(Debug, Clone)]
pub struct MeetingRecord {
    pub topic: String,
    pub names: Vec<String>,
    pub date: String,
    pub time: String,
    pub participants_emails: Vec<String>,
}

impl MeetingRecord {
    pub fn from_session(session: PendingSession, emails: Vec<String>) -> Self {
        Self {
            topic: session.topic,
            names: session.names,
            date: session.date,
            time: session.time,
            participants_emails: emails,
        }
    }
}
