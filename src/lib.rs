pub mod analysis;
pub mod assembly;
pub mod config;
pub mod error;
pub mod forecast;
pub mod hashtags;
pub mod profiles;
pub mod random;
pub mod recommendations;
pub mod strategy;

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::analysis::{analyze_text, Analysis, Monetization};
use crate::assembly::{assemble, AssemblyContext, CtaPreference, LengthPreference};
use crate::config::EngineConfig;
use crate::forecast::{forecast, ForecastRequest, PerformanceTier, ScoreBreakdown};
use crate::recommendations::{build_recommendations, RecommendationInputs};
use crate::strategy::{resolve_for, StrategyDescriptor};

pub use crate::error::{ConfigError, GenerateError};
pub use crate::profiles::{Audience, ContentType, Platform, Tone};
pub use crate::random::{RandomSource, SequenceRandom, SystemRandom};

static CONTENT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Option keys deserialize through `from_key`, so an unrecognized string
/// lands on the type's default instead of failing the whole payload.
macro_rules! deserialize_via_from_key {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let value = String::deserialize(deserializer)?;
                    Ok(<$ty>::from_key(&value))
                }
            }
        )+
    };
}

deserialize_via_from_key!(
    Platform,
    ContentType,
    Tone,
    Audience,
    LengthPreference,
    CtaPreference,
    Monetization,
);

/// A creative request: free text plus enumerated options. Unknown option
/// keys are resolved to their defaults when parsed and missing fields take
/// their defaults, so every field here is already concrete.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Brief {
    pub raw_text: String,
    pub platform: Platform,
    pub content_type: ContentType,
    pub tone: Tone,
    pub audience: Audience,
    pub length: LengthPreference,
    pub cta_preference: CtaPreference,
    pub monetization: Option<Monetization>,
    pub follower_count_hint: Option<u64>,
}

impl Brief {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub id: String,
    pub title: String,
    pub body: String,
    pub caption: String,
    pub script: String,
    pub hashtags: Vec<String>,
    pub viral_score: u8,
    pub tier: PerformanceTier,
    pub estimated_views: u64,
    pub estimated_engagement_rate: f64,
    pub estimated_reach: u64,
    pub estimated_shares: u64,
    pub estimated_comments: u64,
    pub estimated_likes: u64,
    pub estimated_saves: u64,
    pub platform: Platform,
    pub content_type: ContentType,
    pub tone: Tone,
    pub audience: Audience,
    pub psychological_triggers: Vec<String>,
    pub best_posting_windows: Vec<String>,
    pub recommendations: Vec<String>,
    pub analysis: Analysis,
    pub strategy: StrategyDescriptor,
    pub score_breakdown: ScoreBreakdown,
    /// Unix milliseconds.
    pub created_at: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ContentEngine {
    config: EngineConfig,
}

impl ContentEngine {
    /// Builds an engine over a validated configuration.
    pub fn try_new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs extraction, classification, strategy resolution, assembly,
    /// forecasting and hashtag synthesis for one brief.
    pub fn generate(
        &self,
        brief: &Brief,
        rng: &mut dyn RandomSource,
    ) -> Result<GeneratedContent, GenerateError> {
        let text = brief.raw_text.trim();
        if text.is_empty() {
            return Err(GenerateError::InvalidBrief);
        }

        let analysis = analyze_text(text, brief.monetization);
        debug!(
            intent = analysis.intent.key(),
            topic = %analysis.core_topic,
            monetized = analysis.monetized,
            "analyzed brief"
        );

        let strategy = resolve_for(&analysis);
        debug!(
            source = ?strategy.source,
            body = ?strategy.body_structure,
            "resolved strategy"
        );

        let copy = assemble(&AssemblyContext {
            analysis: &analysis,
            strategy: &strategy,
            platform: brief.platform,
            content_type: brief.content_type,
            tone: brief.tone,
            audience: brief.audience,
            length: brief.length,
            cta_preference: brief.cta_preference,
        });

        let forecast = forecast(
            &ForecastRequest {
                analysis: &analysis,
                strategy: &strategy,
                platform: brief.platform,
                content_type: brief.content_type,
                audience: brief.audience,
                tone: brief.tone,
                follower_count: brief.follower_count_hint,
            },
            &self.config.forecast,
            rng,
        );
        debug!(
            viral_score = forecast.viral_score,
            views = forecast.metrics.estimated_views,
            "forecast complete"
        );

        let hashtags = hashtags::synthesize(
            brief.platform,
            analysis.intent,
            &analysis.core_topic,
            self.config.hashtags.cap,
        );
        debug!(count = hashtags.len(), "synthesized hashtags");

        let recommendations = build_recommendations(&RecommendationInputs {
            analysis: &analysis,
            copy: &copy,
            platform: brief.platform,
            content_type: brief.content_type,
            audience: brief.audience,
            tone: brief.tone,
            follower_count: brief.follower_count_hint,
            viral_score: forecast.viral_score,
        });

        let created_at = now_ms();
        let metrics = forecast.metrics;

        Ok(GeneratedContent {
            id: derive_content_id(brief, created_at),
            title: copy.title,
            body: copy.body,
            caption: copy.caption,
            script: copy.script,
            hashtags,
            viral_score: forecast.viral_score,
            tier: forecast.tier,
            estimated_views: metrics.estimated_views,
            estimated_engagement_rate: metrics.estimated_engagement_rate,
            estimated_reach: metrics.estimated_reach,
            estimated_shares: metrics.estimated_shares,
            estimated_comments: metrics.estimated_comments,
            estimated_likes: metrics.estimated_likes,
            estimated_saves: metrics.estimated_saves,
            platform: brief.platform,
            content_type: brief.content_type,
            tone: brief.tone,
            audience: brief.audience,
            psychological_triggers: copy.psychological_triggers,
            best_posting_windows: brief
                .platform
                .profile()
                .best_posting_windows
                .iter()
                .map(|window| window.to_string())
                .collect(),
            recommendations,
            analysis,
            strategy,
            score_breakdown: forecast.breakdown,
            created_at,
        })
    }
}

/// Generates with the default configuration and the caller's random source.
pub fn generate_content(
    brief: &Brief,
    rng: &mut dyn RandomSource,
) -> Result<GeneratedContent, GenerateError> {
    ContentEngine::default().generate(brief, rng)
}

pub fn generate_content_with_system_rng(brief: &Brief) -> Result<GeneratedContent, GenerateError> {
    let mut rng = SystemRandom::new();
    generate_content(brief, &mut rng)
}

fn derive_content_id(brief: &Brief, created_at: u64) -> String {
    use sha2::{Digest, Sha256};

    let counter = CONTENT_COUNTER.fetch_add(1, Ordering::Relaxed);
    let payload = format!(
        "{}:{}:{}:{}:{}:{}:{}",
        brief.raw_text,
        brief.platform.key(),
        brief.content_type.key(),
        brief.tone.key(),
        brief.audience.key(),
        created_at,
        counter
    );
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    format!("content_{:x}", u64::from_be_bytes(bytes))
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

pub fn format_number(value: u64) -> String {
    let mut chars: Vec<char> = value.to_string().chars().collect();
    let mut result = String::new();
    let mut count = 0usize;

    while let Some(ch) = chars.pop() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}

/// Formats a value that is already a percentage.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
