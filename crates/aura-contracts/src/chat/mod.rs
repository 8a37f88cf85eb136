mod envelope;
mod turn;

pub use envelope::{ChatResponse, CreativeSuggestion, MoodboardItem, StructuredBrief};
pub use turn::{ChatRequest, IncomingTurn, Role, Turn};
