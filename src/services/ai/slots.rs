use serde::Deserialize;

use crate::models::{BookingSlots, ModelReply};

const CLERK_INSTRUCTIONS: &str = r#"
You are a polite Train Ticket Clerk for 'EasyRail'.
Your goal is to collect: Origin, Destination, Date, Class.

Rules:
1. If information is missing, ask for it politely (one question at a time).
2. If ALL information is present, output ONLY this JSON format:
   {"status": "COMPLETE", "origin": "...", "dest": "...", "date": "...", "class": "..."}
"#;

const COMPLETE_MARKER: &str = "COMPLETE";

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("completion is missing slots: {}", .0.join(", "))]
    MissingSlots(Vec<&'static str>),
}

/// Only the slots are read; the `status` field the prompt asks for is not
/// checked, so variants like `COMPLETED` still go through.
#[derive(Debug, Deserialize)]
struct CompletionPayload {
    origin: Option<String>,
    dest: Option<String>,
    date: Option<String>,
    #[serde(rename = "class")]
    travel_class: Option<String>,
}

pub fn build_prompt(user_text: &str) -> String {
    format!("User Message: \"{user_text}\"\n{CLERK_INSTRUCTIONS}")
}

/// The model is trusted to emit the JSON template only once every slot is known,
/// so the marker plus an opening brace is what separates a completion from a question.
pub fn looks_complete(reply: &str) -> bool {
    reply.contains(COMPLETE_MARKER) && reply.contains('{')
}

pub fn classify_reply(reply: &str) -> Result<ModelReply, CompletionError> {
    if looks_complete(reply) {
        decode_completion(reply).map(ModelReply::Completion)
    } else {
        Ok(ModelReply::Question(reply.to_string()))
    }
}

fn decode_completion(reply: &str) -> Result<BookingSlots, CompletionError> {
    let cleaned = reply.replace("```json", "").replace("```", "");
    let payload: CompletionPayload = serde_json::from_str(cleaned.trim())?;

    let slots = BookingSlots {
        origin: payload.origin,
        destination: payload.dest,
        date: payload.date,
        travel_class: payload.travel_class,
    };

    if !slots.is_complete() {
        return Err(CompletionError::MissingSlots(slots.missing()));
    }

    Ok(slots)
}
