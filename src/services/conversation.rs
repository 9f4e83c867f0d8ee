use crate::models::{BookingRecord, ModelReply};
use crate::services::ai::slots::{build_prompt, classify_reply};
use crate::state::AppState;

pub const CONFIRMATION_MESSAGE: &str =
    "✅ Great! I have received your request. Our agent will message you shortly for payment.";
pub const SAVE_FAILED_MESSAGE: &str = "⚠️ Error saving data. Please try again.";

/// What a turn did, for logging and tests. The webhook does not look at it.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Asked(String),
    Booked(BookingRecord),
    SaveFailed(BookingRecord),
}

/// Runs one stateless slot-filling turn: prompt the model with this message
/// only, then either relay its question or persist the finished booking.
///
/// An error means the model could not be reached or broke the completion
/// contract. Nothing has been sent or written in that case.
pub async fn process_turn(state: &AppState, phone: &str, text: &str) -> anyhow::Result<TurnOutcome> {
    let prompt = build_prompt(text);
    let reply = state.llm.generate(&prompt).await?;
    let reply = reply.trim();

    let outcome = match classify_reply(reply)? {
        ModelReply::Question(question) => {
            tracing::info!(phone = %phone, "model asked a follow-up question");
            notify(state, phone, &question).await;
            TurnOutcome::Asked(question)
        }
        ModelReply::Completion(slots) => {
            let record = BookingRecord::from_slots(phone, slots)
                .ok_or_else(|| anyhow::anyhow!("completion slots are incomplete"))?;

            tracing::info!(
                phone = %phone,
                origin = %record.origin,
                destination = %record.destination,
                date = %record.date,
                class = %record.travel_class,
                "booking complete"
            );

            if state.records.append(&record).await {
                notify(state, phone, CONFIRMATION_MESSAGE).await;
                TurnOutcome::Booked(record)
            } else {
                notify(state, phone, SAVE_FAILED_MESSAGE).await;
                TurnOutcome::SaveFailed(record)
            }
        }
    };

    Ok(outcome)
}

async fn notify(state: &AppState, to: &str, body: &str) {
    if let Err(e) = state.messaging.send_message(to, body).await {
        tracing::error!(error = %e, to = %to, "failed to send reply");
    }
}
