use serde::Serialize;

use crate::profiles::normalize_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    General,
    GenZ,
    Millennials,
    Professionals,
    Entrepreneurs,
    Creators,
    Parents,
    Students,
}

impl Audience {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_key(value).as_str() {
            "general" | "everyone" | "all" => Some(Audience::General),
            "gen_z" | "genz" | "gen_zers" => Some(Audience::GenZ),
            "millennials" | "millennial" => Some(Audience::Millennials),
            "professionals" | "professional" | "b2b" => Some(Audience::Professionals),
            "entrepreneurs" | "entrepreneur" | "founders" => Some(Audience::Entrepreneurs),
            "creators" | "creator" | "influencers" => Some(Audience::Creators),
            "parents" | "parent" | "moms" | "dads" => Some(Audience::Parents),
            "students" | "student" => Some(Audience::Students),
            _ => None,
        }
    }

    pub fn from_key(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        match self {
            Audience::General => "general",
            Audience::GenZ => "gen_z",
            Audience::Millennials => "millennials",
            Audience::Professionals => "professionals",
            Audience::Entrepreneurs => "entrepreneurs",
            Audience::Creators => "creators",
            Audience::Parents => "parents",
            Audience::Students => "students",
        }
    }

    pub fn profile(self) -> &'static AudienceProfile {
        match self {
            Audience::General => &GENERAL,
            Audience::GenZ => &GEN_Z,
            Audience::Millennials => &MILLENNIALS,
            Audience::Professionals => &PROFESSIONALS,
            Audience::Entrepreneurs => &ENTREPRENEURS,
            Audience::Creators => &CREATORS,
            Audience::Parents => &PARENTS,
            Audience::Students => &STUDENTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementStyle {
    Passive,
    Reactive,
    Conversational,
    Analytical,
    Community,
}

impl EngagementStyle {
    pub fn score_bonus(self) -> f64 {
        match self {
            EngagementStyle::Passive => 0.0,
            EngagementStyle::Analytical => 1.0,
            EngagementStyle::Community => 2.0,
            EngagementStyle::Conversational => 3.0,
            EngagementStyle::Reactive => 4.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AudienceProfile {
    pub label: &'static str,
    pub age_range: &'static str,
    pub engagement_style: EngagementStyle,
    pub engagement_multiplier: f64,
    pub preferred_formats: &'static [&'static str],
    pub core_motivation: &'static str,
}

static GENERAL: AudienceProfile = AudienceProfile {
    label: "everyday people",
    age_range: "18-65",
    engagement_style: EngagementStyle::Passive,
    engagement_multiplier: 1.0,
    preferred_formats: &["short video", "image posts"],
    core_motivation: "a better life with less stress",
};

static GEN_Z: AudienceProfile = AudienceProfile {
    label: "Gen Z",
    age_range: "16-27",
    engagement_style: EngagementStyle::Reactive,
    engagement_multiplier: 1.3,
    preferred_formats: &["short video", "memes", "duets"],
    core_motivation: "authenticity and independence",
};

static MILLENNIALS: AudienceProfile = AudienceProfile {
    label: "millennials",
    age_range: "28-43",
    engagement_style: EngagementStyle::Conversational,
    engagement_multiplier: 1.1,
    preferred_formats: &["carousels", "stories", "podcasts"],
    core_motivation: "financial freedom and balance",
};

static PROFESSIONALS: AudienceProfile = AudienceProfile {
    label: "working professionals",
    age_range: "25-55",
    engagement_style: EngagementStyle::Analytical,
    engagement_multiplier: 0.9,
    preferred_formats: &["articles", "data posts", "case studies"],
    core_motivation: "career growth and recognition",
};

static ENTREPRENEURS: AudienceProfile = AudienceProfile {
    label: "entrepreneurs",
    age_range: "22-55",
    engagement_style: EngagementStyle::Conversational,
    engagement_multiplier: 1.15,
    preferred_formats: &["threads", "case studies", "behind the scenes"],
    core_motivation: "revenue, leverage and time back",
};

static CREATORS: AudienceProfile = AudienceProfile {
    label: "content creators",
    age_range: "18-40",
    engagement_style: EngagementStyle::Community,
    engagement_multiplier: 1.2,
    preferred_formats: &["reels", "tutorials", "breakdowns"],
    core_motivation: "growth and a loyal community",
};

static PARENTS: AudienceProfile = AudienceProfile {
    label: "busy parents",
    age_range: "28-50",
    engagement_style: EngagementStyle::Community,
    engagement_multiplier: 1.05,
    preferred_formats: &["quick tips", "stories", "checklists"],
    core_motivation: "a calmer home and more family time",
};

static STUDENTS: AudienceProfile = AudienceProfile {
    label: "students",
    age_range: "16-25",
    engagement_style: EngagementStyle::Reactive,
    engagement_multiplier: 1.2,
    preferred_formats: &["short video", "study guides", "carousels"],
    core_motivation: "better grades with less effort",
};
