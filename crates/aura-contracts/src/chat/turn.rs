use serde::{Deserialize, Serialize};

/// Author of a conversation turn. Wire names are the short
/// `user` / `assistant` / `system` strings; the long-form aliases
/// are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user", alias = "requester")]
    Requester,
    #[serde(rename = "assistant", alias = "agent")]
    Agent,
    #[serde(rename = "system", alias = "system-note")]
    SystemNote,
}

/// One normalized message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at: i64,
}

/// A turn as submitted by the caller; `id` and `createdAt` are filled
/// during intake when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingTurn {
    #[serde(default)]
    pub id: Option<String>,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl IncomingTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: None,
            role,
            content: content.into(),
            created_at: None,
        }
    }
}

/// The request body the calling layer marshals over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<IncomingTurn>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{IncomingTurn, Role, Turn};

    #[test]
    fn role_accepts_wire_names_and_aliases() -> anyhow::Result<()> {
        assert_eq!(serde_json::from_value::<Role>(json!("user"))?, Role::Requester);
        assert_eq!(
            serde_json::from_value::<Role>(json!("requester"))?,
            Role::Requester
        );
        assert_eq!(
            serde_json::from_value::<Role>(json!("assistant"))?,
            Role::Agent
        );
        assert_eq!(
            serde_json::from_value::<Role>(json!("system-note"))?,
            Role::SystemNote
        );
        assert_eq!(serde_json::to_value(Role::Agent)?, json!("assistant"));
        Ok(())
    }

    #[test]
    fn incoming_turn_allows_missing_id_and_timestamp() -> anyhow::Result<()> {
        let turn: IncomingTurn =
            serde_json::from_value(json!({ "role": "user", "content": "مرحبا" }))?;
        assert_eq!(turn.role, Role::Requester);
        assert!(turn.id.is_none());
        assert!(turn.created_at.is_none());
        Ok(())
    }

    #[test]
    fn turn_serializes_created_at_as_camel_case() -> anyhow::Result<()> {
        let turn = Turn {
            id: "t-1".to_string(),
            role: Role::Agent,
            content: "أهلاً".to_string(),
            created_at: 42,
        };
        let value = serde_json::to_value(&turn)?;
        assert_eq!(value["createdAt"], json!(42));
        assert!(value.get("created_at").is_none());
        Ok(())
    }
}
