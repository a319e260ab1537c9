use serde::Serialize;

use crate::profiles::{normalize_key, ContentType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[default]
    Instagram,
    Tiktok,
    Youtube,
    X,
    Linkedin,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Youtube,
        Platform::X,
        Platform::Linkedin,
        Platform::Facebook,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match normalize_key(value).as_str() {
            "instagram" | "ig" | "insta" => Some(Platform::Instagram),
            "tiktok" | "tik_tok" => Some(Platform::Tiktok),
            "youtube" | "yt" => Some(Platform::Youtube),
            "x" | "twitter" => Some(Platform::X),
            "linkedin" | "linked_in" => Some(Platform::Linkedin),
            "facebook" | "fb" => Some(Platform::Facebook),
            _ => None,
        }
    }

    pub fn from_key(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::X => "x",
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
        }
    }

    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Platform::Instagram => &INSTAGRAM,
            Platform::Tiktok => &TIKTOK,
            Platform::Youtube => &YOUTUBE,
            Platform::X => &X,
            Platform::Linkedin => &LINKEDIN,
            Platform::Facebook => &FACEBOOK,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlatformProfile {
    pub name: &'static str,
    pub max_length: usize,
    pub hashtag_limit: usize,
    /// Percent of viewers who engage at the reference score.
    pub base_engagement_rate: f64,
    pub viral_multiplier: f64,
    pub supported_content_types: &'static [ContentType],
    pub best_posting_windows: &'static [&'static str],
    pub default_hashtags: &'static [&'static str],
    pub community: &'static str,
    pub like_rate: f64,
    pub comment_rate: f64,
    pub share_rate: f64,
    pub save_rate: f64,
}

impl PlatformProfile {
    pub fn supports(&self, content_type: ContentType) -> bool {
        self.supported_content_types.contains(&content_type)
    }
}

static INSTAGRAM: PlatformProfile = PlatformProfile {
    name: "Instagram",
    max_length: 2200,
    hashtag_limit: 30,
    base_engagement_rate: 4.5,
    viral_multiplier: 1.0,
    supported_content_types: &[
        ContentType::Post,
        ContentType::Reel,
        ContentType::Story,
        ContentType::Carousel,
        ContentType::Video,
        ContentType::Live,
    ],
    best_posting_windows: &["Tue-Fri 11:00-13:00", "Mon-Thu 19:00-21:00"],
    default_hashtags: &["instagood", "viral", "trending", "explorepage", "reels"],
    community: "creators on Instagram",
    like_rate: 0.78,
    comment_rate: 0.06,
    share_rate: 0.08,
    save_rate: 0.12,
};

static TIKTOK: PlatformProfile = PlatformProfile {
    name: "TikTok",
    max_length: 2200,
    hashtag_limit: 10,
    base_engagement_rate: 5.9,
    viral_multiplier: 1.25,
    supported_content_types: &[
        ContentType::Video,
        ContentType::Short,
        ContentType::Reel,
        ContentType::Story,
        ContentType::Live,
        ContentType::Carousel,
    ],
    best_posting_windows: &["Tue-Thu 09:00-11:00", "Daily 19:00-23:00"],
    default_hashtags: &["fyp", "foryou", "viral", "trending", "tiktoktips"],
    community: "viewers on TikTok",
    like_rate: 0.82,
    comment_rate: 0.05,
    share_rate: 0.11,
    save_rate: 0.07,
};

static YOUTUBE: PlatformProfile = PlatformProfile {
    name: "YouTube",
    max_length: 5000,
    hashtag_limit: 15,
    base_engagement_rate: 3.8,
    viral_multiplier: 1.1,
    supported_content_types: &[
        ContentType::Video,
        ContentType::Short,
        ContentType::Live,
        ContentType::Post,
    ],
    best_posting_windows: &["Thu-Fri 14:00-16:00", "Sat-Sun 09:00-11:00"],
    default_hashtags: &["youtube", "shorts", "subscribe", "tutorial"],
    community: "subscribers on YouTube",
    like_rate: 0.74,
    comment_rate: 0.09,
    share_rate: 0.06,
    save_rate: 0.05,
};

static X: PlatformProfile = PlatformProfile {
    name: "X",
    max_length: 280,
    hashtag_limit: 3,
    base_engagement_rate: 2.2,
    viral_multiplier: 1.05,
    supported_content_types: &[
        ContentType::Post,
        ContentType::Thread,
        ContentType::Video,
        ContentType::Live,
    ],
    best_posting_windows: &["Mon-Fri 08:00-10:00", "Wed 12:00-13:00"],
    default_hashtags: &["thread", "buildinpublic", "trending"],
    community: "people on X",
    like_rate: 0.7,
    comment_rate: 0.1,
    share_rate: 0.15,
    save_rate: 0.05,
};

static LINKEDIN: PlatformProfile = PlatformProfile {
    name: "LinkedIn",
    max_length: 3000,
    hashtag_limit: 5,
    base_engagement_rate: 3.1,
    viral_multiplier: 0.85,
    supported_content_types: &[
        ContentType::Post,
        ContentType::Article,
        ContentType::Carousel,
        ContentType::Video,
        ContentType::Live,
    ],
    best_posting_windows: &["Tue-Thu 07:30-09:00", "Tue-Wed 12:00-13:00"],
    default_hashtags: &["leadership", "careergrowth", "business", "linkedin"],
    community: "professionals on LinkedIn",
    like_rate: 0.76,
    comment_rate: 0.11,
    share_rate: 0.07,
    save_rate: 0.06,
};

static FACEBOOK: PlatformProfile = PlatformProfile {
    name: "Facebook",
    max_length: 63206,
    hashtag_limit: 10,
    base_engagement_rate: 2.6,
    viral_multiplier: 0.95,
    supported_content_types: &[
        ContentType::Post,
        ContentType::Video,
        ContentType::Reel,
        ContentType::Story,
        ContentType::Live,
        ContentType::Carousel,
    ],
    best_posting_windows: &["Wed-Fri 09:00-12:00", "Sun 12:00-14:00"],
    default_hashtags: &["community", "viral", "trending", "facebookreels"],
    community: "members on Facebook",
    like_rate: 0.8,
    comment_rate: 0.08,
    share_rate: 0.09,
    save_rate: 0.03,
};
