//! Declarative vocabulary shared by the context extractor and the
//! content synthesizer: trigger phrases per category, the per-category
//! palette table, and the template kits the synthesizer renders from.
//! Matching runs against `normalize_text` output, so every trigger is
//! stored lowercase with Arabic diacritics and tatweel removed.

/// A creative deliverable category the engagement can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Campaign,
    Logo,
    Identity,
    Video,
    SocialContent,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Campaign,
        Category::Logo,
        Category::Identity,
        Category::Video,
        Category::SocialContent,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Campaign => "campaign",
            Category::Logo => "logo",
            Category::Identity => "identity",
            Category::Video => "video",
            Category::SocialContent => "social_content",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    Tiktok,
    Facebook,
    Youtube,
    Linkedin,
    X,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "انستجرام",
            Platform::Tiktok => "تيك توك",
            Platform::Facebook => "فيسبوك",
            Platform::Youtube => "يوتيوب",
            Platform::Linkedin => "لينكدإن",
            Platform::X => "تويتر",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Luxury,
    Playful,
    Minimal,
    Bold,
    Classic,
}

impl Tone {
    pub fn label(self) -> &'static str {
        match self {
            Tone::Luxury => "فخمة",
            Tone::Playful => "مرحة",
            Tone::Minimal => "بسيطة",
            Tone::Bold => "جريئة",
            Tone::Classic => "كلاسيكية",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMood {
    Warm,
    Cool,
    Dark,
    Pastel,
}

impl ColorMood {
    pub fn label(self) -> &'static str {
        match self {
            ColorMood::Warm => "ألوان دافئة",
            ColorMood::Cool => "ألوان هادئة",
            ColorMood::Dark => "ألوان داكنة",
            ColorMood::Pastel => "باستيل",
        }
    }
}

/// Trigger phrases that map matched text to one vocabulary value.
#[derive(Debug, Clone, Copy)]
pub struct TriggerSpec<T: 'static> {
    pub value: T,
    pub triggers: &'static [&'static str],
}

pub const CATEGORY_TRIGGERS: &[TriggerSpec<Category>] = &[
    TriggerSpec {
        value: Category::Campaign,
        triggers: &[
            "حملة", "حمله", "كامبين", "اعلان", "إعلان", "اطلاق", "إطلاق", "campaign", "launch",
        ],
    },
    TriggerSpec {
        value: Category::Logo,
        triggers: &["لوجو", "لوغو", "شعار", "logo"],
    },
    TriggerSpec {
        value: Category::Identity,
        triggers: &[
            "هوية", "هويه", "براندينج", "علامة تجارية", "identity", "branding",
        ],
    },
    TriggerSpec {
        value: Category::Video,
        triggers: &[
            "فيديو", "ريلز", "موشن", "ستوري بورد", "video", "reels", "motion",
        ],
    },
    TriggerSpec {
        value: Category::SocialContent,
        triggers: &[
            "محتوى", "بوستات", "بوست", "خطة محتوى", "سوشيال", "content plan", "posts",
        ],
    },
];

pub const PLATFORM_TRIGGERS: &[TriggerSpec<Platform>] = &[
    TriggerSpec {
        value: Platform::Instagram,
        triggers: &["انستجرام", "انستقرام", "انستا", "instagram", "insta"],
    },
    TriggerSpec {
        value: Platform::Tiktok,
        triggers: &["تيك توك", "تيكتوك", "tiktok"],
    },
    TriggerSpec {
        value: Platform::Facebook,
        triggers: &["فيسبوك", "فيس بوك", "facebook"],
    },
    TriggerSpec {
        value: Platform::Youtube,
        triggers: &["يوتيوب", "youtube"],
    },
    TriggerSpec {
        value: Platform::Linkedin,
        triggers: &["لينكد", "linkedin"],
    },
    TriggerSpec {
        value: Platform::X,
        triggers: &["تويتر", "twitter"],
    },
];

pub const TONE_TRIGGERS: &[TriggerSpec<Tone>] = &[
    TriggerSpec {
        value: Tone::Luxury,
        triggers: &["فخم", "فاخر", "راقي", "luxury", "elegant"],
    },
    TriggerSpec {
        value: Tone::Playful,
        triggers: &["مرح", "شبابي", "لعوب", "playful", "fun"],
    },
    TriggerSpec {
        value: Tone::Minimal,
        triggers: &["بسيط", "مينيمال", "هادي", "minimal", "clean"],
    },
    TriggerSpec {
        value: Tone::Bold,
        triggers: &["جريء", "جريئ", "صارخ", "bold"],
    },
    TriggerSpec {
        value: Tone::Classic,
        triggers: &["كلاسيك", "تراثي", "classic", "vintage"],
    },
];

pub const MOOD_TRIGGERS: &[TriggerSpec<ColorMood>] = &[
    TriggerSpec {
        value: ColorMood::Warm,
        triggers: &["دافئة", "دافي", "برتقالي", "ذهبي", "warm", "gold"],
    },
    TriggerSpec {
        value: ColorMood::Cool,
        triggers: &["هادئة", "باردة", "ازرق", "أزرق", "cool tones", "blue"],
    },
    TriggerSpec {
        value: ColorMood::Dark,
        triggers: &["داكن", "غامق", "dark"],
    },
    TriggerSpec {
        value: ColorMood::Pastel,
        triggers: &["باستيل", "ناعمة", "فاتحة", "pastel"],
    },
];

/// Brand/domain keywords; the label feeds the reply text, not the
/// structured arrays.
#[derive(Debug, Clone, Copy)]
pub struct BrandHint {
    pub trigger: &'static str,
    pub label: &'static str,
}

pub const BRAND_TRIGGERS: &[BrandHint] = &[
    BrandHint { trigger: "مطعم", label: "مطاعم وأكل" },
    BrandHint { trigger: "كافيه", label: "قهوة وكافيهات" },
    BrandHint { trigger: "قهوة", label: "قهوة وكافيهات" },
    BrandHint { trigger: "عيادة", label: "صحة وعيادات" },
    BrandHint { trigger: "متجر", label: "متاجر وتسوق" },
    BrandHint { trigger: "ملابس", label: "موضة وملابس" },
    BrandHint { trigger: "عطور", label: "عطور وتجميل" },
    BrandHint { trigger: "تجميل", label: "عطور وتجميل" },
    BrandHint { trigger: "مجوهرات", label: "مجوهرات" },
    BrandHint { trigger: "تقنية", label: "تقنية" },
    BrandHint { trigger: "تعليم", label: "تعليم" },
    BrandHint { trigger: "عقارات", label: "عقارات" },
    BrandHint { trigger: "restaurant", label: "مطاعم وأكل" },
    BrandHint { trigger: "cafe", label: "قهوة وكافيهات" },
    BrandHint { trigger: "clinic", label: "صحة وعيادات" },
    BrandHint { trigger: "fashion", label: "موضة وملابس" },
    BrandHint { trigger: "beauty", label: "عطور وتجميل" },
    BrandHint { trigger: "tech", label: "تقنية" },
];

/// Markers that negate a deliverable mention when they appear just
/// before the trigger phrase.
pub const NEGATION_MARKERS: &[&str] = &[
    "بدون",
    "من غير",
    "مش عايز",
    "مش عايزة",
    "مش محتاج",
    "مش محتاجة",
    "لا اريد",
    "لا أريد",
    "without",
    "no ",
    "not ",
];

/// Ordered color tokens per category. Suggestions and moodboard items
/// for the same category draw from the same entry so the visual
/// narrative stays coherent.
#[derive(Debug, Clone, Copy)]
pub struct PaletteSpec {
    pub category: Category,
    pub colors: &'static [&'static str],
}

pub const CATEGORY_PALETTES: &[PaletteSpec] = &[
    PaletteSpec {
        category: Category::Campaign,
        colors: &["#FF5E5B", "#FFB400", "#1F1F3D", "#F7F4EF"],
    },
    PaletteSpec {
        category: Category::Logo,
        colors: &["#0F172A", "#C9A227", "#F5F1E8"],
    },
    PaletteSpec {
        category: Category::Identity,
        colors: &["#14532D", "#D4AF37", "#FAF7F0", "#1C1917"],
    },
    PaletteSpec {
        category: Category::Video,
        colors: &["#7C3AED", "#22D3EE", "#0B1020", "#F8FAFC"],
    },
    PaletteSpec {
        category: Category::SocialContent,
        colors: &["#FF7AC6", "#FFD166", "#118AB2", "#073B4C"],
    },
];

/// Accent colors appended to a category palette when the conversation
/// states a color mood. Applied identically to suggestions and
/// moodboard items.
#[derive(Debug, Clone, Copy)]
pub struct MoodAccent {
    pub mood: ColorMood,
    pub colors: &'static [&'static str],
}

pub const MOOD_ACCENTS: &[MoodAccent] = &[
    MoodAccent {
        mood: ColorMood::Warm,
        colors: &["#E76F51"],
    },
    MoodAccent {
        mood: ColorMood::Cool,
        colors: &["#457B9D"],
    },
    MoodAccent {
        mood: ColorMood::Dark,
        colors: &["#111827"],
    },
    MoodAccent {
        mood: ColorMood::Pastel,
        colors: &["#FDE2E4"],
    },
];

/// Template fragments the synthesizer renders for one category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryKit {
    pub category: Category,
    pub deliverable: &'static str,
    pub suggestion_title: &'static str,
    pub suggestion_description: &'static str,
    pub typography: &'static [&'static str],
    pub assets: &'static [&'static str],
    pub moodboard_label: &'static str,
    pub moodboard_description: &'static str,
    pub moodboard_keywords: &'static [&'static str],
    pub reply_fragment: &'static str,
    pub next_action: &'static str,
}

pub const CATEGORY_KITS: &[CategoryKit] = &[
    CategoryKit {
        category: Category::Campaign,
        deliverable: "حملة إطلاق متكاملة",
        suggestion_title: "حملة إطلاق بضجة حقيقية",
        suggestion_description: "خطة حملة من التشويق للإطلاق: رسائل رئيسية، عد تنازلي، ومحتوى يومي جاهز للنشر.",
        typography: &["Cairo Bold", "Tajawal"],
        assets: &["بوستات تشويقية", "ستوري عد تنازلي", "إعلان إطلاق"],
        moodboard_label: "طاقة الإطلاق",
        moodboard_description: "مزيج ألوان حيوي يليق بلحظة الإطلاق.",
        moodboard_keywords: &["اطلاق", "حماس", "جرأة"],
        reply_fragment: "حملة إطلاق متكاملة",
        next_action: "نجهز الرسائل الرئيسية وجدول نشر الحملة.",
    },
    CategoryKit {
        category: Category::Logo,
        deliverable: "تصميم لوجو أساسي مع نسخ ملونة",
        suggestion_title: "شعار بسيط يعلق في الذاكرة",
        suggestion_description: "اتجاه لوجو مرن يشتغل على البروفايل والتغليف، مع نسخة أحادية ونسخة ملونة.",
        typography: &["Lama Sans", "GE SS Two"],
        assets: &["لوجو أساسي", "نسخة أحادية", "أيقونة مختصرة"],
        moodboard_label: "حضور العلامة",
        moodboard_description: "خطوط نظيفة ومساحات مريحة للعين.",
        moodboard_keywords: &["شعار", "بساطة", "تميز"],
        reply_fragment: "اتجاهات لوجو ومعالم الهوية",
        next_action: "نختار اتجاه اللوجو المفضل من الاقتراحات.",
    },
    CategoryKit {
        category: Category::Identity,
        deliverable: "دليل هوية بصرية كامل",
        suggestion_title: "هوية متكاملة بشخصية واضحة",
        suggestion_description: "نظام ألوان وخطوط وتطبيقات جاهزة: كروت، تغليف، وقوالب سوشيال بنفس الروح.",
        typography: &["Almarai", "Cairo"],
        assets: &["دليل الهوية", "قوالب سوشيال", "كروت وورق رسمي"],
        moodboard_label: "روح العلامة",
        moodboard_description: "تدرجات تعكس شخصية العلامة وتطبيقاتها.",
        moodboard_keywords: &["هوية", "تناسق", "ثبات"],
        reply_fragment: "هوية بصرية كاملة",
        next_action: "نراجع نظام الألوان والخطوط قبل التطبيقات.",
    },
    CategoryKit {
        category: Category::Video,
        deliverable: "سكريبت وستوري بورد فيديو",
        suggestion_title: "فيديو قصير بإيقاع سريع",
        suggestion_description: "سكريبت ٣٠ ثانية مع ستوري بورد ولقطات موشن تناسب الريلز والإعلانات.",
        typography: &["Tajawal", "Changa"],
        assets: &["سكريبت", "ستوري بورد", "عناصر موشن"],
        moodboard_label: "حركة وإيقاع",
        moodboard_description: "لقطات سريعة وانتقالات نظيفة بألوان جذابة.",
        moodboard_keywords: &["موشن", "ريلز", "إيقاع"],
        reply_fragment: "تصور فيديو جاهز للتنفيذ",
        next_action: "نثبت السكريبت ونختار ستايل الموشن.",
    },
    CategoryKit {
        category: Category::SocialContent,
        deliverable: "خطة محتوى شهرية",
        suggestion_title: "محتوى سوشيال بإيقاع ثابت",
        suggestion_description: "تقويم محتوى أسبوعي: أفكار بوستات، ستوريز تفاعلية، وCTA واضحة لكل منشور.",
        typography: &["Cairo", "Noto Kufi Arabic"],
        assets: &["تقويم محتوى", "قوالب بوستات", "أفكار ستوريز"],
        moodboard_label: "نبض السوشيال",
        moodboard_description: "شبكة ألوان مرنة تناسب النشر اليومي.",
        moodboard_keywords: &["محتوى", "تفاعل", "استمرارية"],
        reply_fragment: "خطة محتوى سوشيال",
        next_action: "نعتمد أعمدة المحتوى وجدول النشر.",
    },
];

pub fn kit_for(category: Category) -> Option<&'static CategoryKit> {
    CATEGORY_KITS.iter().find(|kit| kit.category == category)
}

pub fn palette_spec_for(category: Category) -> Option<&'static PaletteSpec> {
    CATEGORY_PALETTES
        .iter()
        .find(|palette| palette.category == category)
}

pub fn mood_accents_for(mood: ColorMood) -> &'static [&'static str] {
    MOOD_ACCENTS
        .iter()
        .find(|accent| accent.mood == mood)
        .map(|accent| accent.colors)
        .unwrap_or(&[])
}

/// Lowercases and strips Arabic diacritics and tatweel so trigger
/// matching survives common spelling variation.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .filter(|ch| !matches!(ch, '\u{064B}'..='\u{0652}' | '\u{0640}'))
        .flat_map(char::to_lowercase)
        .collect()
}
