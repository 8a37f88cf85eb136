use serde::{Deserialize, Serialize};

use super::turn::Turn;

/// One ideation card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeSuggestion {
    pub title: String,
    pub description: String,
    pub palette: Vec<String>,
    pub typography: Vec<String>,
    pub assets: Vec<String>,
}

/// One visual-direction reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodboardItem {
    pub label: String,
    pub description: String,
    pub colors: Vec<String>,
    pub keywords: Vec<String>,
}

/// The structured half of an engine response. Every field defaults to
/// an empty sequence so callers can render "no content yet" states
/// uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredBrief {
    #[serde(default)]
    pub suggestions: Vec<CreativeSuggestion>,
    #[serde(default)]
    pub moodboard: Vec<MoodboardItem>,
    #[serde(default)]
    pub next_actions: Vec<String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

/// The complete unit returned to the caller: an agent-authored reply
/// turn plus the structured brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: Turn,
    pub structured: StructuredBrief,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::StructuredBrief;

    #[test]
    fn brief_defaults_to_empty_arrays() -> anyhow::Result<()> {
        let brief: StructuredBrief = serde_json::from_value(json!({}))?;
        assert!(brief.suggestions.is_empty());
        assert!(brief.moodboard.is_empty());
        assert!(brief.next_actions.is_empty());
        assert!(brief.deliverables.is_empty());
        Ok(())
    }

    #[test]
    fn next_actions_uses_camel_case_on_the_wire() -> anyhow::Result<()> {
        let brief = StructuredBrief {
            next_actions: vec!["نراجع الاتجاه".to_string()],
            ..StructuredBrief::default()
        };
        let value = serde_json::to_value(&brief)?;
        assert_eq!(value["nextActions"], json!(["نراجع الاتجاه"]));
        Ok(())
    }
}
