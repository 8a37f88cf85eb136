use indexmap::IndexSet;

use super::vocabulary::{Category, ColorMood, Platform, Tone};

/// Creative signals accumulated from every requester turn in the
/// conversation. Built fresh per invocation; insertion order is
/// preserved so output stays deterministic for the same history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentProfile {
    pub deliverables: IndexSet<Category>,
    pub platforms: IndexSet<Platform>,
    pub tones: IndexSet<Tone>,
    pub moods: IndexSet<ColorMood>,
    pub brand_hints: IndexSet<&'static str>,
    /// Category weighted toward the most recent requester turn; drives
    /// the primary focus of the reply.
    pub focus: Option<Category>,
}

impl IntentProfile {
    /// Suggestions and moodboard entries need at least one deliverable
    /// category to be grounded in.
    pub fn has_deliverable_signal(&self) -> bool {
        !self.deliverables.is_empty()
    }

    /// Any recognized signal at all, deliverable or secondary.
    pub fn has_any_signal(&self) -> bool {
        self.has_deliverable_signal()
            || !self.platforms.is_empty()
            || !self.tones.is_empty()
            || !self.moods.is_empty()
            || !self.brand_hints.is_empty()
    }

    /// Matched categories in a stable order with the focus first.
    pub fn ordered_categories(&self) -> Vec<Category> {
        let mut ordered: Vec<Category> = Vec::with_capacity(self.deliverables.len());
        if let Some(focus) = self.focus {
            if self.deliverables.contains(&focus) {
                ordered.push(focus);
            }
        }
        for category in &self.deliverables {
            if !ordered.contains(category) {
                ordered.push(*category);
            }
        }
        ordered
    }
}
