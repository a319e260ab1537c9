use std::collections::HashSet;

use crate::analysis::Intent;
use crate::profiles::Platform;

pub const DEFAULT_HASHTAG_CAP: usize = 10;

const GENERIC_TAGS: [&str; 2] = ["success", "motivation"];

pub fn intent_hashtags(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Educational => &["learn", "tips", "howto", "education"],
        Intent::Storytelling => &["mystory", "journey", "storytime", "reallife"],
        Intent::Conversion => &["linkinbio", "limitedoffer", "smallbusiness", "shopnow"],
        Intent::Inspirational => &["inspiration", "mindset", "believe", "goals"],
        Intent::Entertainment => &["funny", "relatable", "comedy", "lol"],
        Intent::Controversial => &["unpopularopinion", "hottake", "debate", "truth"],
        Intent::Revelation => &["secrets", "hiddentruth", "mindblown", "didyouknow"],
        Intent::Transformation => &["transformation", "beforeandafter", "glowup", "progress"],
        Intent::ValueProviding => &["valuebomb", "protips", "growth", "lifehacks"],
    }
}

/// Topic slug first, then the generic tags, platform defaults and intent
/// defaults. Duplicates are dropped and the list is cut to
/// `min(cap, platform hashtag limit)`.
pub fn synthesize(platform: Platform, intent: Intent, topic: &str, cap: usize) -> Vec<String> {
    let limit = cap.min(platform.profile().hashtag_limit);
    let slug = slugify(topic);

    let candidates = std::iter::once(slug.as_str())
        .chain(GENERIC_TAGS.iter().copied())
        .chain(platform.profile().default_hashtags.iter().copied())
        .chain(intent_hashtags(intent).iter().copied());

    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for tag in candidates {
        if tags.len() >= limit {
            break;
        }
        if tag.is_empty() || !seen.insert(tag.to_string()) {
            continue;
        }
        tags.push(tag.to_string());
    }
    tags
}

/// Lowercase alphanumerics of the topic, concatenated. Falls back to
/// `success` when nothing usable remains.
pub fn slugify(topic: &str) -> String {
    let slug: String = topic
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    if slug.is_empty() {
        GENERIC_TAGS[0].to_string()
    } else {
        slug
    }
}

pub fn render(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ")
}
