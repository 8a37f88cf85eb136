pub mod brief;
pub mod chat;
pub mod error;
pub mod events;
pub mod stamp;
