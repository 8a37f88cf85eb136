use aura_contracts::chat::{ChatResponse, Role, StructuredBrief, Turn};
use aura_contracts::stamp::Stamper;

use crate::synth::Synthesis;

/// Shapes a synthesis into the response contract: the reply becomes an
/// agent-authored turn with a fresh id and timestamp so the caller can
/// append it to its conversation log; the arrays pass through and stay
/// empty rather than null when there is no content yet.
pub fn build_response(synthesis: Synthesis, stamper: &dyn Stamper) -> ChatResponse {
    ChatResponse {
        message: Turn {
            id: stamper.next_id(),
            role: Role::Agent,
            content: synthesis.reply,
            created_at: stamper.now_millis(),
        },
        structured: StructuredBrief {
            suggestions: synthesis.suggestions,
            moodboard: synthesis.moodboard,
            next_actions: synthesis.next_actions,
            deliverables: synthesis.deliverables,
        },
    }
}

#[cfg(test)]
mod tests {
    use aura_contracts::chat::Role;
    use aura_contracts::stamp::FixedStamper;

    use super::build_response;
    use crate::synth::Synthesis;

    #[test]
    fn reply_turn_is_agent_authored_with_fresh_stamp() {
        let stamper = FixedStamper::new("reply", 777);
        let synthesis = Synthesis {
            reply: "تمام".to_string(),
            suggestions: Vec::new(),
            moodboard: Vec::new(),
            next_actions: Vec::new(),
            deliverables: Vec::new(),
        };

        let response = build_response(synthesis, &stamper);
        assert_eq!(response.message.id, "reply-00");
        assert_eq!(response.message.role, Role::Agent);
        assert_eq!(response.message.created_at, 777);
        assert!(response.structured.suggestions.is_empty());
        assert!(response.structured.next_actions.is_empty());
    }
}
