pub mod intent;
pub mod session;

pub use intent::MeetingIntent;
pub use session::{MeetingRecord, PendingSession};
