use serde::Serialize;

use crate::profiles::normalize_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Post,
    Reel,
    Story,
    Carousel,
    Video,
    Short,
    Thread,
    Article,
    Live,
}

impl ContentType {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_key(value).as_str() {
            "post" | "image" | "photo" => Some(ContentType::Post),
            "reel" | "reels" => Some(ContentType::Reel),
            "story" | "stories" => Some(ContentType::Story),
            "carousel" | "slides" => Some(ContentType::Carousel),
            "video" | "long_video" => Some(ContentType::Video),
            "short" | "shorts" => Some(ContentType::Short),
            "thread" => Some(ContentType::Thread),
            "article" | "blog" => Some(ContentType::Article),
            "live" | "livestream" => Some(ContentType::Live),
            _ => None,
        }
    }

    pub fn from_key(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        match self {
            ContentType::Post => "post",
            ContentType::Reel => "reel",
            ContentType::Story => "story",
            ContentType::Carousel => "carousel",
            ContentType::Video => "video",
            ContentType::Short => "short",
            ContentType::Thread => "thread",
            ContentType::Article => "article",
            ContentType::Live => "live",
        }
    }

    /// Relative distribution a format gets from platform feeds.
    pub fn reach_multiplier(self) -> f64 {
        match self {
            ContentType::Reel | ContentType::Short => 1.25,
            ContentType::Video => 1.15,
            ContentType::Carousel => 1.1,
            ContentType::Live => 1.05,
            ContentType::Post => 1.0,
            ContentType::Thread => 0.95,
            ContentType::Article => 0.85,
            ContentType::Story => 0.7,
        }
    }

    pub fn is_video(self) -> bool {
        matches!(
            self,
            ContentType::Reel | ContentType::Video | ContentType::Short | ContentType::Live
        )
    }
}
