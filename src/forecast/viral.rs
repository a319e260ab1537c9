use serde::{Deserialize, Serialize};

use crate::analysis::{Analysis, Intent, Sentiment, Urgency};
use crate::config::ForecastConfig;
use crate::profiles::{AudienceProfile, PlatformProfile, ToneProfile};
use crate::random::RandomSource;
use crate::strategy::StrategyDescriptor;

/// Each additive term that went into the viral score, kept for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub intent: f64,
    pub platform: f64,
    pub strategy: f64,
    pub audience: f64,
    pub tone: f64,
    pub urgency: f64,
    pub sentiment: f64,
    pub jitter: f64,
    pub raw: f64,
}

pub fn intent_bonus(intent: Intent) -> f64 {
    match intent {
        Intent::Conversion => 6.0,
        Intent::ValueProviding => 7.0,
        Intent::Educational => 8.0,
        Intent::Inspirational => 9.0,
        Intent::Storytelling => 10.0,
        Intent::Transformation => 11.0,
        Intent::Entertainment => 12.0,
        Intent::Revelation => 13.0,
        Intent::Controversial => 15.0,
    }
}

/// Turns a platform's multiplicative reach factor into score points:
/// 1.25 (TikTok) is +5, 0.85 (LinkedIn) is -3.
pub fn platform_adjustment(platform: &PlatformProfile) -> f64 {
    (platform.viral_multiplier - 1.0) * 20.0
}

fn urgency_bonus(urgency: Urgency) -> f64 {
    match urgency {
        Urgency::High => 3.0,
        Urgency::Medium => 1.0,
        Urgency::Low => 0.0,
    }
}

fn sentiment_bonus(sentiment: Sentiment) -> f64 {
    match sentiment {
        Sentiment::Positive => 2.0,
        Sentiment::Negative => 1.0,
        Sentiment::Neutral => 0.0,
    }
}

/// Consumes exactly one draw from `rng`.
pub fn score_breakdown(
    analysis: &Analysis,
    strategy: &StrategyDescriptor,
    platform: &PlatformProfile,
    audience: &AudienceProfile,
    tone: &ToneProfile,
    config: &ForecastConfig,
    rng: &mut dyn RandomSource,
) -> ScoreBreakdown {
    let jitter = (rng.next() * 2.0 - 1.0) * config.jitter;

    let mut breakdown = ScoreBreakdown {
        base: config.base_score,
        intent: intent_bonus(analysis.intent),
        platform: platform_adjustment(platform),
        strategy: strategy.score_bonus,
        audience: audience.engagement_style.score_bonus(),
        tone: tone.emotional_appeal,
        urgency: urgency_bonus(analysis.urgency),
        sentiment: sentiment_bonus(analysis.sentiment),
        jitter,
        raw: 0.0,
    };
    breakdown.raw = breakdown.base
        + breakdown.intent
        + breakdown.platform
        + breakdown.strategy
        + breakdown.audience
        + breakdown.tone
        + breakdown.urgency
        + breakdown.sentiment
        + breakdown.jitter;
    breakdown
}

/// Rounds and clamps into the configured inclusive integer range.
pub fn clamp_score(raw: f64, config: &ForecastConfig) -> u8 {
    let low = config.min_score.ceil();
    let high = config.max_score.floor();
    let value = if raw.is_nan() { config.base_score } else { raw };
    value.round().max(low).min(high).max(0.0).min(100.0) as u8
}
