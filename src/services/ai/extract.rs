use serde_json::{Map, Value};

use super::TextGenerator;
use crate::errors::AppError;
use crate::models::MeetingIntent;

/// Required fields, checked in this order so the error always names the
/// first one missing.
const REQUIRED_KEYS: [&str; 4] = ["participants", "date", "time", "topic"];

fn meeting_prompt(request: &str) -> String {
    format!(
        r#"You are an AI assistant that extracts meeting details only from valid meeting requests.
Extract only structured details from this meeting request. Output as JSON:
{{
  "participants": [...] only take names from input don't add extra names,
  "date": "..." (Convert text to date format: DD-MM-YYYY)),
  "time": "...",
  "topic": "..."
}}
Use explicit formats:
- Date: YYYY-MM-DD use default year as 2025
- Time: HH:MM in 24-hr format (UTC preferred)
Meeting request: "Set a meeting with Alice and Bob next Tuesday at 11am to discuss Q2 hiring."Only return the final JSON. **Do not include any explanation, examples, or extra responses.**
Request: "{request}"
Return as JSON.
"#
    )
}

/// Carve the first JSON object out of free-form model output.
///
/// Scans from the first `{` to the first `}` after it, so an object with a
/// nested object value mis-extracts. That limitation is intentional and
/// pinned by a test below. Anything that doesn't yield parseable JSON
/// degrades to an empty map; the required-key check downstream turns that
/// into the actual user-facing error.
fn extract_first_json(text: &str) -> Map<String, Value> {
    let Some(start) = text.find('{') else {
        tracing::warn!("no JSON object found in model output");
        return Map::new();
    };
    let Some(offset) = text[start..].find('}') else {
        tracing::warn!("no JSON object found in model output");
        return Map::new();
    };

    let candidate = &text[start..=start + offset];
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => map,
        _ => {
            tracing::warn!(candidate, "JSON found but invalid");
            Map::new()
        }
    }
}

fn intent_from_output(output: &str) -> Result<MeetingIntent, AppError> {
    let parsed = extract_first_json(output);

    for key in REQUIRED_KEYS {
        if !parsed.contains_key(key) {
            return Err(AppError::MissingField(key));
        }
    }

    serde_json::from_value(Value::Object(parsed)).map_err(|e| AppError::Extraction(e.to_string()))
}

/// Turn a natural-language request into a structured [`MeetingIntent`].
pub async fn extract_meeting(
    generator: &dyn TextGenerator,
    utterance: &str,
) -> Result<MeetingIntent, AppError> {
    let prompt = meeting_prompt(utterance);
    let output = generator.generate(&prompt).await?;
    intent_from_output(&output)
}
