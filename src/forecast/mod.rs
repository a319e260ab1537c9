//! Synthetic performance forecast: a bounded viral score and the audience
//! metrics that cascade from it.
//!
//! Randomness enters in exactly two places, the score jitter and the views
//! factor, both drawn from the caller's [`RandomSource`] in that order.

pub mod reach;
pub mod viral;

use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::config::ForecastConfig;
use crate::profiles::{Audience, ContentType, Platform, Tone};
use crate::random::RandomSource;
use crate::strategy::StrategyDescriptor;

pub use reach::{cascade, AudienceMetrics, ReachInputs};
pub use viral::{clamp_score, intent_bonus, platform_adjustment, score_breakdown, ScoreBreakdown};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceTier {
    Low,
    Moderate,
    High,
    VeryHigh,
    Breakout,
}

impl PerformanceTier {
    pub fn from_score(score: u8) -> Self {
        if score < 70 {
            PerformanceTier::Low
        } else if score < 80 {
            PerformanceTier::Moderate
        } else if score < 88 {
            PerformanceTier::High
        } else if score < 94 {
            PerformanceTier::VeryHigh
        } else {
            PerformanceTier::Breakout
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceTier::Low => "Low",
            PerformanceTier::Moderate => "Moderate",
            PerformanceTier::High => "High",
            PerformanceTier::VeryHigh => "Very High",
            PerformanceTier::Breakout => "Breakout",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ForecastRequest<'a> {
    pub analysis: &'a Analysis,
    pub strategy: &'a StrategyDescriptor,
    pub platform: Platform,
    pub content_type: ContentType,
    pub audience: Audience,
    pub tone: Tone,
    pub follower_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub viral_score: u8,
    pub tier: PerformanceTier,
    pub breakdown: ScoreBreakdown,
    pub metrics: AudienceMetrics,
}

pub fn forecast(
    request: &ForecastRequest<'_>,
    config: &ForecastConfig,
    rng: &mut dyn RandomSource,
) -> Forecast {
    let platform = request.platform.profile();
    let audience = request.audience.profile();

    let breakdown = score_breakdown(
        request.analysis,
        request.strategy,
        platform,
        audience,
        request.tone.profile(),
        config,
        rng,
    );
    let viral_score = clamp_score(breakdown.raw, config);

    let metrics = cascade(
        &ReachInputs {
            analysis: request.analysis,
            platform,
            audience,
            content_type: request.content_type,
            viral_score,
            follower_count: request.follower_count,
        },
        config,
        rng,
    );

    Forecast {
        viral_score,
        tier: PerformanceTier::from_score(viral_score),
        breakdown,
        metrics,
    }
}
