use aura_contracts::brief::{
    normalize_text, Category, IntentProfile, BRAND_TRIGGERS, CATEGORY_TRIGGERS, MOOD_TRIGGERS,
    NEGATION_MARKERS, PLATFORM_TRIGGERS, TONE_TRIGGERS,
};
use aura_contracts::chat::{Role, Turn};

/// Builds the intent profile from every requester turn. Matches are
/// cumulative across the conversation; a later turn can add signals or
/// explicitly negate a deliverable category, but never silently erases
/// earlier preferences. Unrecognized text contributes nothing, so this
/// never fails.
pub fn extract_profile(turns: &[Turn]) -> IntentProfile {
    let mut profile = IntentProfile::default();
    let mut last_requester_text: Option<String> = None;

    for turn in turns.iter().filter(|turn| turn.role == Role::Requester) {
        let text = normalize_text(&turn.content);
        apply_category_mentions(&text, &mut profile);
        for spec in PLATFORM_TRIGGERS {
            if matches_any(&text, spec.triggers) {
                profile.platforms.insert(spec.value);
            }
        }
        for spec in TONE_TRIGGERS {
            if matches_any(&text, spec.triggers) {
                profile.tones.insert(spec.value);
            }
        }
        for spec in MOOD_TRIGGERS {
            if matches_any(&text, spec.triggers) {
                profile.moods.insert(spec.value);
            }
        }
        for hint in BRAND_TRIGGERS {
            if !trigger_offsets(&text, hint.trigger).is_empty() {
                profile.brand_hints.insert(hint.label);
            }
        }
        last_requester_text = Some(text);
    }

    // The most recent turn picks the primary focus of the reply.
    profile.focus = last_requester_text
        .as_deref()
        .and_then(focus_category)
        .filter(|category| profile.deliverables.contains(category))
        .or_else(|| profile.deliverables.first().copied());

    profile
}

/// Arabic attaches articles and prepositions to the front of a word,
/// so a trigger may begin mid-token, but the character after a match
/// must end the word or be a common inflection suffix. Keeps stems
/// like "مرح" from firing inside unrelated words like "مرحبا".
const SUFFIX_CONTINUATIONS: &[char] = &['ة', 'ه', 'ا', 'ت', 'ي', 's'];

fn trigger_offsets(text: &str, trigger: &str) -> Vec<usize> {
    text.match_indices(trigger)
        .filter(|(offset, matched)| {
            text[offset + matched.len()..]
                .chars()
                .next()
                .map_or(true, |ch| {
                    !ch.is_alphanumeric() || SUFFIX_CONTINUATIONS.contains(&ch)
                })
        })
        .map(|(offset, _)| offset)
        .collect()
}

fn matches_any(text: &str, triggers: &[&str]) -> bool {
    triggers
        .iter()
        .any(|trigger| !trigger_offsets(text, trigger).is_empty())
}

struct Mention {
    category: Category,
    offset: usize,
    negated: bool,
}

fn category_mentions(text: &str) -> Vec<Mention> {
    let mut mentions = Vec::new();
    for spec in CATEGORY_TRIGGERS {
        for trigger in spec.triggers {
            for offset in trigger_offsets(text, trigger) {
                mentions.push(Mention {
                    category: spec.value,
                    offset,
                    negated: negated_before(text, offset),
                });
            }
        }
    }
    mentions
}

/// A mention is negated when a negation marker appears within the 20
/// characters preceding the trigger. The English markers must start a
/// word; "piano" and "cannot" are not negations. Arabic markers may
/// carry an attached conjunction ("وبدون"), so only a preceding ASCII
/// letter or digit blocks a match.
fn negated_before(text: &str, trigger_start: usize) -> bool {
    let prefix = &text[..trigger_start];
    let window_start = prefix
        .char_indices()
        .rev()
        .nth(19)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    let window = &prefix[window_start..];
    NEGATION_MARKERS.iter().any(|marker| {
        window.match_indices(marker).any(|(offset, _)| {
            window[..offset]
                .chars()
                .next_back()
                .map_or(true, |ch| !ch.is_ascii_alphanumeric())
        })
    })
}

fn apply_category_mentions(text: &str, profile: &mut IntentProfile) {
    let mentions = category_mentions(text);
    for category in Category::ALL {
        let mut affirmed = false;
        let mut negated = false;
        for mention in mentions.iter().filter(|m| m.category == *category) {
            if mention.negated {
                negated = true;
            } else {
                affirmed = true;
            }
        }
        if affirmed {
            profile.deliverables.insert(*category);
        } else if negated {
            profile.deliverables.shift_remove(category);
        }
    }
}

/// Earliest non-negated category mention in the turn.
fn focus_category(text: &str) -> Option<Category> {
    category_mentions(text)
        .into_iter()
        .filter(|mention| !mention.negated)
        .min_by_key(|mention| mention.offset)
        .map(|mention| mention.category)
}
