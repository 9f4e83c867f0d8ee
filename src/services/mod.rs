pub mod ai;
pub mod conversation;
pub mod messaging;
pub mod records;
