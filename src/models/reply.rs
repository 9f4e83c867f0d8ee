use super::BookingSlots;

/// What the model said this turn.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelReply {
    /// Still gathering slots; the text goes back to the user verbatim.
    Question(String),
    Completion(BookingSlots),
}
