mod profile;
mod vocabulary;

pub use profile::IntentProfile;
pub use vocabulary::{
    kit_for, mood_accents_for, normalize_text, palette_spec_for, BrandHint, Category, CategoryKit,
    ColorMood, MoodAccent, PaletteSpec, Platform, Tone, TriggerSpec, BRAND_TRIGGERS,
    CATEGORY_KITS, CATEGORY_PALETTES, CATEGORY_TRIGGERS, MOOD_ACCENTS, MOOD_TRIGGERS,
    NEGATION_MARKERS, PLATFORM_TRIGGERS, TONE_TRIGGERS,
};
