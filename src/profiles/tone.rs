use serde::Serialize;

use crate::profiles::normalize_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Motivational,
    Humorous,
    Educational,
    Inspirational,
    Bold,
    Friendly,
}

impl Tone {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_key(value).as_str() {
            "professional" | "formal" => Some(Tone::Professional),
            "casual" | "relaxed" => Some(Tone::Casual),
            "motivational" | "hype" => Some(Tone::Motivational),
            "humorous" | "funny" | "witty" => Some(Tone::Humorous),
            "educational" | "informative" => Some(Tone::Educational),
            "inspirational" | "uplifting" => Some(Tone::Inspirational),
            "bold" | "edgy" | "provocative" => Some(Tone::Bold),
            "friendly" | "warm" => Some(Tone::Friendly),
            _ => None,
        }
    }

    pub fn from_key(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Motivational => "motivational",
            Tone::Humorous => "humorous",
            Tone::Educational => "educational",
            Tone::Inspirational => "inspirational",
            Tone::Bold => "bold",
            Tone::Friendly => "friendly",
        }
    }

    pub fn profile(self) -> &'static ToneProfile {
        match self {
            Tone::Professional => &PROFESSIONAL,
            Tone::Casual => &CASUAL,
            Tone::Motivational => &MOTIVATIONAL,
            Tone::Humorous => &HUMOROUS,
            Tone::Educational => &EDUCATIONAL,
            Tone::Inspirational => &INSPIRATIONAL,
            Tone::Bold => &BOLD,
            Tone::Friendly => &FRIENDLY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToneProfile {
    pub power_words: &'static [&'static str],
    /// Single adjective used in section headings.
    pub framework_label: &'static str,
    /// Additive viral-score bonus for how strongly the tone pulls emotion.
    pub emotional_appeal: f64,
    pub signature: &'static str,
}

static PROFESSIONAL: ToneProfile = ToneProfile {
    power_words: &["proven", "strategic", "measurable"],
    framework_label: "proven",
    emotional_appeal: 0.0,
    signature: "Execution beats intention. Start with one step today.",
};

static CASUAL: ToneProfile = ToneProfile {
    power_words: &["honestly", "simple", "real talk"],
    framework_label: "simple",
    emotional_appeal: 1.0,
    signature: "Real talk: you've got this, just start.",
};

static MOTIVATIONAL: ToneProfile = ToneProfile {
    power_words: &["unstoppable", "relentless", "breakthrough"],
    framework_label: "unstoppable",
    emotional_appeal: 3.0,
    signature: "Your future self is counting on what you do today. Go.",
};

static HUMOROUS: ToneProfile = ToneProfile {
    power_words: &["plot twist", "spoiler", "no cap"],
    framework_label: "no-nonsense",
    emotional_appeal: 2.5,
    signature: "Plot twist: the hardest part was clicking post.",
};

static EDUCATIONAL: ToneProfile = ToneProfile {
    power_words: &["framework", "step-by-step", "fundamentals"],
    framework_label: "step-by-step",
    emotional_appeal: 0.5,
    signature: "Learn it once, apply it forever.",
};

static INSPIRATIONAL: ToneProfile = ToneProfile {
    power_words: &["possible", "purpose", "limitless"],
    framework_label: "purpose-driven",
    emotional_appeal: 3.5,
    signature: "Everything you want is on the other side of starting.",
};

static BOLD: ToneProfile = ToneProfile {
    power_words: &["brutal truth", "nobody tells you", "stop"],
    framework_label: "uncompromising",
    emotional_appeal: 4.0,
    signature: "Comfort is expensive. Stop paying for it.",
};

static FRIENDLY: ToneProfile = ToneProfile {
    power_words: &["together", "you deserve", "gentle reminder"],
    framework_label: "gentle",
    emotional_appeal: 1.5,
    signature: "Gentle reminder: small steps still move you forward.",
};
