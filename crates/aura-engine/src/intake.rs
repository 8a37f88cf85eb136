use aura_contracts::chat::{IncomingTurn, Role, Turn};
use aura_contracts::error::EngineError;
use aura_contracts::stamp::Stamper;

const EMPTY_CONVERSATION: &str = "المحادثة مطلوبة.";
const BLANK_CONTENT: &str = "الرسالة لا يمكن أن تكون فارغة.";
const LAST_TURN_NOT_REQUESTER: &str = "آخر رسالة يجب أن تكون من المستخدم.";

/// Validates and normalizes the submitted conversation: non-empty,
/// last turn authored by the requester, every turn carrying text.
/// Missing ids and timestamps are filled from the stamper; order is
/// preserved and no turn is dropped.
pub fn normalize_conversation(
    messages: Vec<IncomingTurn>,
    stamper: &dyn Stamper,
) -> Result<Vec<Turn>, EngineError> {
    let Some(last) = messages.last() else {
        return Err(EngineError::Validation(EMPTY_CONVERSATION.to_string()));
    };
    if last.role != Role::Requester {
        return Err(EngineError::Validation(LAST_TURN_NOT_REQUESTER.to_string()));
    }

    messages
        .into_iter()
        .map(|incoming| {
            if incoming.content.trim().is_empty() {
                return Err(EngineError::Validation(BLANK_CONTENT.to_string()));
            }
            Ok(Turn {
                id: incoming
                    .id
                    .filter(|id| !id.trim().is_empty())
                    .unwrap_or_else(|| stamper.next_id()),
                role: incoming.role,
                content: incoming.content,
                created_at: incoming
                    .created_at
                    .unwrap_or_else(|| stamper.now_millis()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use aura_contracts::chat::{IncomingTurn, Role};
    use aura_contracts::stamp::FixedStamper;

    use super::normalize_conversation;

    #[test]
    fn rejects_an_empty_conversation() {
        let stamper = FixedStamper::new("t", 10);
        let err = normalize_conversation(Vec::new(), &stamper).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn rejects_when_last_turn_is_not_from_the_requester() {
        let stamper = FixedStamper::new("t", 10);
        for role in [Role::Agent, Role::SystemNote] {
            let messages = vec![
                IncomingTurn::new(Role::Requester, "عايزة لوجو"),
                IncomingTurn::new(role, "تمام"),
            ];
            let err = normalize_conversation(messages, &stamper).unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn rejects_blank_content() {
        let stamper = FixedStamper::new("t", 10);
        let messages = vec![
            IncomingTurn::new(Role::Requester, "   "),
            IncomingTurn::new(Role::Requester, "عايزة لوجو"),
        ];
        let err = normalize_conversation(messages, &stamper).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn fills_missing_ids_and_timestamps_preserving_order() -> anyhow::Result<()> {
        let stamper = FixedStamper::new("turn", 99);
        let mut second = IncomingTurn::new(Role::Requester, "عايزة لوجو");
        second.id = Some("keep-me".to_string());
        second.created_at = Some(5);
        let messages = vec![IncomingTurn::new(Role::Requester, "أهلاً"), second];

        let turns = normalize_conversation(messages, &stamper)?;
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].id, "turn-00");
        assert_eq!(turns[0].created_at, 99);
        assert_eq!(turns[0].content, "أهلاً");
        assert_eq!(turns[1].id, "keep-me");
        assert_eq!(turns[1].created_at, 5);
        Ok(())
    }
}
