use crate::models::{MeetingRecord, PendingSession};
use crate::services::ai::extract::extract_meeting;
use crate::state::AppState;

const GREETINGS: [&str; 3] = ["hi", "hello", "hey"];

/// Route one inbound message through the two-phase protocol.
///
/// Classification runs on a lower-cased copy, in priority order: greeting,
/// new scheduling request (phase 1), email completion (phase 2), otherwise
/// silence (`None` — no outbound message at all). Extraction and the email
/// split both see the original-case text.
///
/// Failures never propagate out of here; they come back as the reply text
/// so the dispatch path cannot crash on a bad turn.
pub async fn process_message(state: &AppState, user_id: &str, text: &str) -> Option<String> {
    let trimmed = text.trim();
    let lowered = trimmed.to_lowercase();

    if is_greeting(&lowered) {
        return Some(help_message(user_id));
    }

    if is_scheduling_request(&lowered) {
        return Some(handle_scheduling_request(state, user_id, trimmed).await);
    }

    // A comma-bearing message enters phase 2 even with no pending session;
    // handle_email_reply answers the no-session case explicitly.
    if state.sessions.contains(user_id) || lowered.contains(',') {
        return Some(handle_email_reply(state, user_id, trimmed).await);
    }

    None
}

fn is_greeting(lowered: &str) -> bool {
    lowered
        .split_whitespace()
        .next()
        .map(|first| GREETINGS.contains(&first.trim_end_matches(['!', ',', '.', '?'])))
        .unwrap_or(false)
}

/// Matches "schedule ... meeting", "set ... call" and friends: a verb with
/// either noun somewhere after it, anywhere in the text.
fn is_scheduling_request(lowered: &str) -> bool {
    let verb_pos = ["schedule", "set"]
        .iter()
        .filter_map(|v| lowered.find(v))
        .min();

    match verb_pos {
        Some(pos) => {
            let rest = &lowered[pos..];
            rest.contains("meeting") || rest.contains("call")
        }
        None => false,
    }
}

/// Phase 1: extract structured intent and park it until emails arrive.
async fn handle_scheduling_request(state: &AppState, user_id: &str, text: &str) -> String {
    match extract_meeting(state.generator.as_ref(), text).await {
        Ok(intent) => {
            let session = PendingSession::from(intent);
            tracing::info!(user = %user_id, topic = %session.topic, "storing pending session");
            let reply = summary_message(&session);
            // Overwrites any earlier request from this user
            state.sessions.put(user_id, session);
            reply
        }
        Err(e) => {
            tracing::warn!(user = %user_id, error = %e, "meeting extraction failed");
            format!("Failed to parse meeting: {e}, please enter details correctly.")
        }
    }
}

/// Phase 2: consume the pending session and book the meeting.
async fn handle_email_reply(state: &AppState, user_id: &str, text: &str) -> String {
    let emails: Vec<String> = text.split(',').map(|e| e.trim().to_string()).collect();

    let Some(session) = state.sessions.take(user_id) else {
        return "I don't have a meeting waiting for email addresses. Start with something like `schedule a meeting on Wednesday at 3pm with Sai to discuss Q2 sales`.".to_string();
    };

    let topic = session.topic.clone();
    let names = session.names.clone();
    let record = MeetingRecord::from_session(session, emails);

    match state.meetings.create_meeting(&record).await {
        Ok(join_url) => {
            tracing::info!(user = %user_id, topic = %topic, "meeting booked");
            confirmation_message(&topic, &names, &join_url)
        }
        Err(e) => {
            // The session is already consumed; the user restarts from a
            // fresh scheduling request.
            tracing::error!(user = %user_id, error = %e, "meeting creation failed");
            format!("❌ Meeting creation failed: {e}")
        }
    }
}

fn help_message(user_id: &str) -> String {
    format!(
        "👋 Hello <@{user_id}>!\n\
         I'm *TaskMind AI* – your virtual assistant.\n\
         I can help you with:\n\
         • `Scheduling meetings`\n\
         • `Parsing natural language into actions`\n\n\
         Just type something like:\n\
         `schedule a meeting on Wednesday at 3pm with Sai to discuss Q2 sales`"
    )
}

fn summary_message(session: &PendingSession) -> String {
    format!(
        "*Meeting Request:*\n\
         • *Topic:* {}\n\
         • *Participants:* {}\n\
         • *Schedule on:* {}, {}\n\n\
         📨 *Please reply with participants' email addresses (comma-separated) to proceed.*\n\
         ➡️ Example: `taskmindai@support.com, team@taskmindai.com`",
        session.topic,
        session.names.join(", "),
        session.date,
        session.time,
    )
}

fn confirmation_message(topic: &str, names: &[String], join_url: &str) -> String {
    format!(
        "✅ *Meeting Scheduled!*\n\
         • *Topic:* {topic}\n\
         • *Participants:* {}\n\
         🔗 <{join_url}|Join Meeting>",
        names.join(", ")
    )
}
