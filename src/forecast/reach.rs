use serde::{Deserialize, Serialize};

use crate::analysis::{Analysis, Potential};
use crate::config::ForecastConfig;
use crate::profiles::{AudienceProfile, ContentType, PlatformProfile};
use crate::random::RandomSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceMetrics {
    pub estimated_views: u64,
    /// Percent of viewers expected to engage.
    pub estimated_engagement_rate: f64,
    pub estimated_reach: u64,
    pub estimated_shares: u64,
    pub estimated_comments: u64,
    pub estimated_likes: u64,
    pub estimated_saves: u64,
}

pub struct ReachInputs<'a> {
    pub analysis: &'a Analysis,
    pub platform: &'a PlatformProfile,
    pub audience: &'a AudienceProfile,
    pub content_type: ContentType,
    pub viral_score: u8,
    pub follower_count: Option<u64>,
}

fn analysis_bonus(analysis: &Analysis) -> f64 {
    match analysis.viral_potential {
        Potential::High => 1.3,
        Potential::Medium => 1.15,
        Potential::Low => 1.0,
    }
}

/// Views first, then every other metric derived from views and score.
/// Consumes exactly one draw from `rng`.
pub fn cascade(
    inputs: &ReachInputs<'_>,
    config: &ForecastConfig,
    rng: &mut dyn RandomSource,
) -> AudienceMetrics {
    let score = inputs.viral_score as f64;
    let score_ratio = score / config.reference_score;
    let score_factor = score / 100.0;

    let base_followers = inputs
        .follower_count
        .unwrap_or(config.placeholder_followers)
        .max(1) as f64;
    let random_factor = config.random_factor_min
        + rng.next() * (config.random_factor_max - config.random_factor_min);

    let views = non_negative(
        base_followers
            * inputs.platform.viral_multiplier
            * inputs.content_type.reach_multiplier()
            * score_ratio
            * analysis_bonus(inputs.analysis)
            * random_factor,
    );

    let engagement_rate = round2(
        (inputs.platform.base_engagement_rate * score_ratio * inputs.audience.engagement_multiplier)
            .min(config.max_engagement_rate)
            .max(0.0),
    );
    let engaged = views * engagement_rate / 100.0;

    let reach = views * (0.55 + score / 400.0).min(0.95);
    let likes = engaged * inputs.platform.like_rate;
    let comments = engaged * inputs.platform.comment_rate * (0.5 + score_factor);
    let shares = engaged * inputs.platform.share_rate * (0.5 + score_factor);
    let saves = engaged * inputs.platform.save_rate * (0.5 + score_factor);

    AudienceMetrics {
        estimated_views: to_count(views, views),
        estimated_engagement_rate: engagement_rate,
        estimated_reach: to_count(reach, views),
        estimated_shares: to_count(shares, views),
        estimated_comments: to_count(comments, views),
        estimated_likes: to_count(likes, views),
        estimated_saves: to_count(saves, views),
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() || value.is_sign_negative() {
        0.0
    } else {
        value
    }
}

fn to_count(value: f64, ceiling: f64) -> u64 {
    non_negative(value).min(ceiling).round() as u64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
