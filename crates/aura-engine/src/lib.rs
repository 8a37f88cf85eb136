pub mod envelope;
pub mod extract;
pub mod intake;
pub mod synth;

use aura_contracts::chat::{ChatResponse, IncomingTurn, Role, Turn};
use aura_contracts::error::EngineError;
use aura_contracts::stamp::Stamper;

const SYSTEM_PERSONA: &str = "أنتِ Aura، شريكة إبداعية لوكالة تصميم: بتحللي العلامة والجمهور، وبتجهزي اقتراحات، moodboard، وخطة تنفيذ واضحة بالعربي.";

/// The full engine pipeline: intake validation, context extraction,
/// synthesis, envelope shaping. Stateless; the caller resubmits the
/// complete history on every call.
pub fn generate_agent_response(
    messages: Vec<IncomingTurn>,
    stamper: &dyn Stamper,
) -> Result<ChatResponse, EngineError> {
    let turns = intake::normalize_conversation(messages, stamper)?;
    let profile = extract::extract_profile(&turns);
    let synthesis = synth::synthesize(&profile)?;
    Ok(envelope::build_response(synthesis, stamper))
}

/// Seed system turn for a fresh conversation log on the caller side.
pub fn bootstrap_system_message(stamper: &dyn Stamper) -> Turn {
    Turn {
        id: stamper.next_id(),
        role: Role::SystemNote,
        content: SYSTEM_PERSONA.to_string(),
        created_at: stamper.now_millis(),
    }
}

#[cfg(test)]
mod tests {
    use aura_contracts::chat::{IncomingTurn, Role};
    use aura_contracts::stamp::FixedStamper;

    use super::{bootstrap_system_message, generate_agent_response};

    fn request(content: &str) -> Vec<IncomingTurn> {
        vec![IncomingTurn::new(Role::Requester, content)]
    }

    #[test]
    fn instagram_campaign_request_yields_campaign_deliverable() -> anyhow::Result<()> {
        let stamper = FixedStamper::new("turn", 1_000);
        let response =
            generate_agent_response(request("عايزة حملة انستجرام لإطلاق منتج جديد"), &stamper)?;

        assert_eq!(response.message.role, Role::Agent);
        assert_eq!(response.message.id, "turn-01");
        assert_eq!(response.message.created_at, 1_000);
        assert!(response
            .structured
            .deliverables
            .iter()
            .any(|entry| entry.contains("حملة")));
        assert!(!response.structured.next_actions.is_empty());
        assert!(!response.structured.suggestions.is_empty());
        Ok(())
    }

    #[test]
    fn greeting_without_signal_takes_the_clarifying_branch() -> anyhow::Result<()> {
        let stamper = FixedStamper::new("turn", 1_000);
        let response = generate_agent_response(request("مرحبا"), &stamper)?;

        assert!(response.structured.suggestions.is_empty());
        assert!(response.structured.moodboard.is_empty());
        assert!(response.structured.next_actions.is_empty());
        assert!(response.structured.deliverables.is_empty());
        assert!(response.message.content.contains('؟'));
        // A greeting carries no tone signal, so the reply asks the
        // full question instead of acknowledging a caught preference.
        assert!(response.message.content.contains("المنصات المستهدفة"));
        Ok(())
    }

    #[test]
    fn resubmitting_the_same_history_is_deterministic() -> anyhow::Result<()> {
        let history = vec![
            IncomingTurn::new(Role::Requester, "محتاجة لوجو لمتجر عطور"),
            IncomingTurn::new(Role::Agent, "تمام، احكيلي عن الذوق"),
            IncomingTurn::new(Role::Requester, "ستايل فخم وألوان داكنة، وكمان هوية كاملة"),
        ];

        let first = generate_agent_response(history.clone(), &FixedStamper::new("t", 5))?;
        let second = generate_agent_response(history, &FixedStamper::new("t", 5))?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn earlier_preferences_persist_in_later_requests() -> anyhow::Result<()> {
        let stamper = FixedStamper::new("turn", 1_000);
        let history = vec![
            IncomingTurn::new(Role::Requester, "عايزة لوجو لكافيه"),
            IncomingTurn::new(Role::Agent, "تمام"),
            IncomingTurn::new(Role::Requester, "وممكن كمان ريلز للافتتاح؟"),
        ];
        let response = generate_agent_response(history, &stamper)?;

        assert!(response
            .structured
            .deliverables
            .iter()
            .any(|entry| entry.contains("لوجو")));
        assert!(response
            .structured
            .deliverables
            .iter()
            .any(|entry| entry.contains("فيديو")));
        Ok(())
    }

    #[test]
    fn invalid_conversations_never_reach_synthesis() {
        let stamper = FixedStamper::new("turn", 1_000);

        let err = generate_agent_response(Vec::new(), &stamper).unwrap_err();
        assert!(err.is_validation());

        let err = generate_agent_response(
            vec![IncomingTurn::new(Role::Agent, "أهلاً بيك")],
            &stamper,
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn bootstrap_message_is_a_system_note() {
        let stamper = FixedStamper::new("seed", 9);
        let turn = bootstrap_system_message(&stamper);
        assert_eq!(turn.role, Role::SystemNote);
        assert_eq!(turn.id, "seed-00");
        assert_eq!(turn.created_at, 9);
        assert!(!turn.content.is_empty());
    }
}
