pub mod booking;
pub mod inbound;
pub mod reply;

pub use booking::{BookingRecord, BookingSlots, BookingStatus};
pub use inbound::InboundMessage;
pub use reply::ModelReply;
