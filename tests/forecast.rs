use content_engine::analysis::{analyze, Analysis};
use content_engine::config::ForecastConfig;
use content_engine::forecast::{clamp_score, forecast, Forecast, ForecastRequest, PerformanceTier};
use content_engine::strategy::resolve_for;
use content_engine::{Audience, ContentType, Platform, RandomSource, SequenceRandom, Tone};

const BRIEF: &str = "How to grow an Instagram business from zero followers";

struct Scenario {
    analysis: Analysis,
    platform: Platform,
    content_type: ContentType,
    audience: Audience,
    tone: Tone,
    follower_count: Option<u64>,
}

impl Scenario {
    fn new(text: &str) -> Self {
        Self {
            analysis: analyze(text),
            platform: Platform::Instagram,
            content_type: ContentType::Post,
            audience: Audience::General,
            tone: Tone::Professional,
            follower_count: None,
        }
    }

    fn run(&self, config: &ForecastConfig, rng: &mut dyn RandomSource) -> Forecast {
        let strategy = resolve_for(&self.analysis);
        forecast(
            &ForecastRequest {
                analysis: &self.analysis,
                strategy: &strategy,
                platform: self.platform,
                content_type: self.content_type,
                audience: self.audience,
                tone: self.tone,
                follower_count: self.follower_count,
            },
            config,
            rng,
        )
    }
}

struct CountingRandom {
    draws: usize,
}

impl RandomSource for CountingRandom {
    fn next(&mut self) -> f64 {
        self.draws += 1;
        0.5
    }
}

#[test]
fn neutral_draws_pin_educational_brief() {
    let result = Scenario::new(BRIEF).run(&ForecastConfig::default(), &mut SequenceRandom::neutral());

    assert_eq!(result.breakdown.base, 75.0);
    assert_eq!(result.breakdown.intent, 8.0);
    assert_eq!(result.breakdown.strategy, 1.0);
    assert_eq!(result.breakdown.sentiment, 2.0);
    assert_eq!(result.breakdown.jitter, 0.0);
    assert_eq!(result.viral_score, 86);
    assert_eq!(result.tier, PerformanceTier::High);

    let metrics = &result.metrics;
    assert_eq!(metrics.estimated_views, 1261);
    assert_eq!(metrics.estimated_engagement_rate, 5.16);
    assert_eq!(metrics.estimated_reach, 965);
    assert_eq!(metrics.estimated_likes, 51);
    assert_eq!(metrics.estimated_comments, 5);
    assert_eq!(metrics.estimated_shares, 7);
    assert_eq!(metrics.estimated_saves, 11);
}

#[test]
fn jitter_is_drawn_before_views_factor() {
    let mut rng = SequenceRandom::new(vec![1.0, 0.0]);
    let result = Scenario::new(BRIEF).run(&ForecastConfig::default(), &mut rng);

    assert!((result.breakdown.jitter - 5.0).abs() < 1e-6);
    assert_eq!(result.viral_score, 91);
    assert_eq!(result.metrics.estimated_views, 971);
}

#[test]
fn forecast_consumes_exactly_two_draws() {
    let mut rng = CountingRandom { draws: 0 };
    Scenario::new(BRIEF).run(&ForecastConfig::default(), &mut rng);
    assert_eq!(rng.draws, 2);
}

#[test]
fn score_clamps_to_upper_bound() {
    let mut scenario = Scenario::new("Unpopular opinion: quit your job now");
    scenario.platform = Platform::Tiktok;
    scenario.audience = Audience::GenZ;
    scenario.tone = Tone::Bold;

    let result = scenario.run(
        &ForecastConfig::default(),
        &mut SequenceRandom::new(vec![1.0]),
    );
    assert!(result.breakdown.raw > 98.0);
    assert_eq!(result.viral_score, 98);
    assert_eq!(result.tier, PerformanceTier::Breakout);
}

#[test]
fn score_clamps_to_lower_bound() {
    let config = ForecastConfig {
        base_score: 20.0,
        ..ForecastConfig::default()
    };
    let mut scenario = Scenario::new("Five productivity apps worth using");
    scenario.platform = Platform::Linkedin;

    let result = scenario.run(&config, &mut SequenceRandom::new(vec![0.0]));
    assert!(result.breakdown.raw < 65.0);
    assert_eq!(result.viral_score, 65);
    assert_eq!(result.tier, PerformanceTier::Low);
}

#[test]
fn clamp_score_handles_extremes() {
    let config = ForecastConfig::default();
    assert_eq!(clamp_score(250.0, &config), 98);
    assert_eq!(clamp_score(-40.0, &config), 65);
    assert_eq!(clamp_score(80.4, &config), 80);
    assert_eq!(clamp_score(f64::NAN, &config), 75);
}

#[test]
fn engagement_rate_respects_ceiling() {
    let config = ForecastConfig {
        reference_score: 10.0,
        ..ForecastConfig::default()
    };
    let mut scenario = Scenario::new(BRIEF);
    scenario.platform = Platform::Tiktok;
    scenario.audience = Audience::GenZ;

    let result = scenario.run(&config, &mut SequenceRandom::neutral());
    assert_eq!(result.metrics.estimated_engagement_rate, 18.0);
}

#[test]
fn follower_hint_replaces_placeholder() {
    let mut scenario = Scenario::new(BRIEF);
    scenario.follower_count = Some(10_000);
    let result = scenario.run(&ForecastConfig::default(), &mut SequenceRandom::neutral());
    assert_eq!(result.metrics.estimated_views, 12_613);

    scenario.follower_count = Some(0);
    let floor = scenario.run(&ForecastConfig::default(), &mut SequenceRandom::neutral());
    assert_eq!(floor.metrics.estimated_views, 1);
}

#[test]
fn derived_counts_never_exceed_views() {
    let config = ForecastConfig::default();
    for platform in Platform::ALL {
        let mut scenario = Scenario::new("The secret launch nobody tells you about, act now");
        scenario.platform = platform;
        scenario.audience = Audience::GenZ;
        scenario.content_type = ContentType::Reel;
        let metrics = scenario.run(&config, &mut SequenceRandom::new(vec![1.0])).metrics;
        for count in [
            metrics.estimated_reach,
            metrics.estimated_likes,
            metrics.estimated_comments,
            metrics.estimated_shares,
            metrics.estimated_saves,
        ] {
            assert!(count <= metrics.estimated_views);
        }
        assert!(metrics.estimated_engagement_rate <= config.max_engagement_rate);
    }
}

#[test]
fn tiers_follow_score_bands() {
    let tiers: Vec<PerformanceTier> = [65, 70, 79, 80, 88, 93, 94, 98]
        .into_iter()
        .map(PerformanceTier::from_score)
        .collect();
    assert_eq!(
        tiers,
        vec![
            PerformanceTier::Low,
            PerformanceTier::Moderate,
            PerformanceTier::Moderate,
            PerformanceTier::High,
            PerformanceTier::VeryHigh,
            PerformanceTier::VeryHigh,
            PerformanceTier::Breakout,
            PerformanceTier::Breakout,
        ]
    );
    assert_eq!(PerformanceTier::VeryHigh.label(), "Very High");
}
