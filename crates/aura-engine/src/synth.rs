use aura_contracts::brief::{kit_for, mood_accents_for, palette_spec_for, Category, IntentProfile};
use aura_contracts::chat::{CreativeSuggestion, MoodboardItem};
use aura_contracts::error::EngineError;

pub const MAX_SUGGESTIONS: usize = 4;
pub const MAX_MOODBOARD_ITEMS: usize = 3;
const MAX_NEXT_ACTIONS: usize = 5;

const CLARIFYING_REPLY: &str = "أهلاً بيكي! علشان أجهز اقتراحات مظبوطة، احكيلي أكتر: إيه نوع العلامة أو المشروع؟ إيه المنصات المستهدفة؟ وإيه الستايل اللي حابة تشوفيه؟";

/// Reply text plus the four structured artifacts, before envelope
/// shaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub reply: String,
    pub suggestions: Vec<CreativeSuggestion>,
    pub moodboard: Vec<MoodboardItem>,
    pub next_actions: Vec<String>,
    pub deliverables: Vec<String>,
}

/// Renders the profile through the category kits. Identical profiles
/// yield identical output; a profile without a deliverable category
/// takes the clarifying-question branch with all arrays empty.
pub fn synthesize(profile: &IntentProfile) -> Result<Synthesis, EngineError> {
    if !profile.has_deliverable_signal() {
        return Ok(Synthesis {
            reply: clarifying_reply(profile),
            suggestions: Vec::new(),
            moodboard: Vec::new(),
            next_actions: Vec::new(),
            deliverables: Vec::new(),
        });
    }

    let categories = profile.ordered_categories();
    let mut suggestions = Vec::new();
    let mut moodboard = Vec::new();
    let mut deliverables = Vec::new();

    for category in &categories {
        let kit = kit_for(*category).ok_or_else(|| {
            EngineError::Internal(format!("missing template kit for {category:?}"))
        })?;
        let palette = palette_for(*category, profile)?;

        if suggestions.len() < MAX_SUGGESTIONS {
            suggestions.push(CreativeSuggestion {
                title: kit.suggestion_title.to_string(),
                description: suggestion_description(kit.suggestion_description, profile),
                palette: palette.clone(),
                typography: to_strings(kit.typography),
                assets: to_strings(kit.assets),
            });
        }
        if moodboard.len() < MAX_MOODBOARD_ITEMS {
            moodboard.push(MoodboardItem {
                label: kit.moodboard_label.to_string(),
                description: kit.moodboard_description.to_string(),
                colors: palette,
                keywords: moodboard_keywords(kit.moodboard_keywords, profile),
            });
        }
        deliverables.push(kit.deliverable.to_string());
    }

    Ok(Synthesis {
        reply: compose_reply(profile, &categories)?,
        suggestions,
        moodboard,
        next_actions: build_next_actions(&categories)?,
        deliverables,
    })
}

/// Category palette plus the accent colors of any stated color mood.
/// Suggestions and moodboard entries for the same category share the
/// result.
fn palette_for(category: Category, profile: &IntentProfile) -> Result<Vec<String>, EngineError> {
    let spec = palette_spec_for(category)
        .ok_or_else(|| EngineError::Internal(format!("missing palette for {category:?}")))?;
    let mut colors: Vec<String> = spec.colors.iter().map(|color| color.to_string()).collect();
    for mood in &profile.moods {
        for accent in mood_accents_for(*mood) {
            if !colors.iter().any(|existing| existing == accent) {
                colors.push(accent.to_string());
            }
        }
    }
    Ok(colors)
}

fn suggestion_description(base: &str, profile: &IntentProfile) -> String {
    let mut description = base.to_string();
    if !profile.platforms.is_empty() {
        description.push_str(&format!(" مخصوصة لمنصات {}.", platform_list(profile)));
    }
    if let Some(tone) = profile.tones.first() {
        description.push_str(&format!(" النبرة {}.", tone.label()));
    }
    description
}

fn moodboard_keywords(base: &[&str], profile: &IntentProfile) -> Vec<String> {
    let mut keywords: Vec<String> = base.iter().map(|keyword| keyword.to_string()).collect();
    let extra = profile
        .tones
        .iter()
        .map(|tone| tone.label())
        .chain(profile.moods.iter().map(|mood| mood.label()));
    for label in extra {
        if !keywords.iter().any(|existing| existing == label) {
            keywords.push(label.to_string());
        }
    }
    keywords
}

fn build_next_actions(categories: &[Category]) -> Result<Vec<String>, EngineError> {
    let mut actions = vec![
        "نثبت تفاصيل العلامة: الاسم، الجمهور، والهدف من المرحلة الجاية.".to_string(),
        "نعتمد اتجاه الألوان والخطوط من الـ moodboard.".to_string(),
    ];
    for category in categories {
        if actions.len() >= MAX_NEXT_ACTIONS - 1 {
            break;
        }
        let kit = kit_for(*category).ok_or_else(|| {
            EngineError::Internal(format!("missing template kit for {category:?}"))
        })?;
        actions.push(kit.next_action.to_string());
    }
    actions.push("نراجع أول نسخة مع بعض ونعدل قبل التسليم النهائي.".to_string());
    Ok(actions)
}

fn compose_reply(
    profile: &IntentProfile,
    categories: &[Category],
) -> Result<String, EngineError> {
    let focus = profile
        .focus
        .or_else(|| categories.first().copied())
        .ok_or_else(|| EngineError::Internal("reply requested without categories".to_string()))?;
    let kit = kit_for(focus)
        .ok_or_else(|| EngineError::Internal(format!("missing template kit for {focus:?}")))?;

    let mut reply = format!("تمام، فهمت المطلوب! بدأت أجهز {}", kit.reply_fragment);
    if let Some(hint) = profile.brand_hints.first() {
        reply.push_str(&format!(" لمجال {hint}"));
    }
    reply.push('.');
    if !profile.platforms.is_empty() {
        reply.push_str(&format!(" هنركز على {}.", platform_list(profile)));
    }
    if let Some(tone) = profile.tones.first() {
        reply.push_str(&format!(" النبرة العامة {}.", tone.label()));
    }
    reply.push_str(" تلاقي تحت الاقتراحات والـ moodboard وخطة التنفيذ، قوليلي رأيك ونعدل على طول.");
    Ok(reply)
}

/// Sparse-input branch: ask for the missing detail instead of
/// fabricating content. A partial profile gets a pointed question
/// about the deliverable type.
fn clarifying_reply(profile: &IntentProfile) -> String {
    let hint = profile
        .platforms
        .first()
        .map(|platform| platform.label())
        .or_else(|| profile.tones.first().map(|tone| tone.label()))
        .or_else(|| profile.moods.first().map(|mood| mood.label()))
        .or_else(|| profile.brand_hints.first().copied());
    match hint {
        Some(hint) => format!(
            "تمام، واصلني اهتمامك بـ{hint}. فاضل أعرف المخرج الأساسي اللي محتاجاه: حملة، لوجو، هوية، فيديو، ولا خطة محتوى؟"
        ),
        None => CLARIFYING_REPLY.to_string(),
    }
}

fn platform_list(profile: &IntentProfile) -> String {
    profile
        .platforms
        .iter()
        .map(|platform| platform.label())
        .collect::<Vec<_>>()
        .join(" و")
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
