use std::collections::HashSet;

use crate::analysis::{Analysis, Potential, Urgency};
use crate::assembly::AssembledCopy;
use crate::profiles::{Audience, ContentType, Platform, Tone};

const MAX_RECOMMENDATIONS: usize = 8;

pub struct RecommendationInputs<'a> {
    pub analysis: &'a Analysis,
    pub copy: &'a AssembledCopy,
    pub platform: Platform,
    pub content_type: ContentType,
    pub audience: Audience,
    pub tone: Tone,
    pub follower_count: Option<u64>,
    pub viral_score: u8,
}

pub fn build_recommendations(inputs: &RecommendationInputs<'_>) -> Vec<String> {
    let platform = inputs.platform.profile();
    let audience = inputs.audience.profile();
    let mut recommendations = Vec::new();

    let caption_len = inputs.copy.caption.chars().count();
    if caption_len > platform.max_length {
        recommendations.push(format!(
            "Caption is {} characters; {} allows {}. Trim it or move the story into a thread.",
            caption_len, platform.name, platform.max_length
        ));
    }
    if !platform.supports(inputs.content_type) {
        let suggested = platform
            .supported_content_types
            .first()
            .copied()
            .unwrap_or_default();
        recommendations.push(format!(
            "{} doesn't support the {} format; publish it as a {} instead.",
            platform.name,
            inputs.content_type.key(),
            suggested.key()
        ));
    }
    if let Some(window) = platform.best_posting_windows.first() {
        recommendations.push(format!("Post on {} during {} for the strongest early velocity.", platform.name, window));
    }
    if inputs.follower_count.is_none() {
        recommendations.push(
            "Connect your account so forecasts use your real follower count instead of a placeholder."
                .to_string(),
        );
    }
    if inputs.analysis.urgency == Urgency::Low {
        recommendations.push("Add a time hook (today, this week) to lift urgency and early engagement.".to_string());
    }
    if inputs.analysis.monetized && inputs.analysis.conversion_potential < Potential::High {
        recommendations.push(
            "Pair the offer with a deadline or limited spots to raise conversion potential.".to_string(),
        );
    }
    if inputs.viral_score < 75 {
        recommendations.push(
            "Sharpen the angle: a contrarian take or a hidden insight scores higher than general advice."
                .to_string(),
        );
    }
    if let Some(format) = audience.preferred_formats.first() {
        recommendations.push(format!(
            "Your audience ({}, {}) responds best to {}.",
            audience.label, audience.age_range, format
        ));
    }

    let vocabulary = inputs.tone.profile().power_words;
    if !vocabulary.is_empty() {
        recommendations.push(format!(
            "Open with {} vocabulary such as {} so the voice stays consistent.",
            inputs.tone.key(),
            vocabulary.join(", ")
        ));
    }

    dedupe(&mut recommendations);
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

fn dedupe(values: &mut Vec<String>) {
    let mut seen = HashSet::new();
    values.retain(|value| seen.insert(normalize_text(value)));
}

fn normalize_text(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
