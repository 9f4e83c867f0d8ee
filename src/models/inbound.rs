use serde_json::Value;

/// A user text message pulled out of a transport webhook envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    pub sender_phone: String,
    pub text: String,
}

impl InboundMessage {
    /// Looks for `entry[0].changes[0].value.messages[0]` with `from` and `text.body`.
    /// Status callbacks and non-text messages have no such path and yield `None`.
    pub fn from_envelope(envelope: &Value) -> Option<Self> {
        let message = &envelope["entry"][0]["changes"][0]["value"]["messages"][0];
        let text = message["text"]["body"].as_str()?;
        let from = message["from"].as_str()?;

        Some(Self {
            sender_phone: from.to_string(),
            text: text.to_string(),
        })
    }
}
