use std::collections::HashSet;
use std::path::PathBuf;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use content_engine::analysis::{Intent, Monetization};
use content_engine::assembly::{CtaPreference, LengthPreference};
use content_engine::config::{EngineConfig, ForecastConfig};
use content_engine::forecast::PerformanceTier;
use content_engine::{
    format_number, format_percent, generate_content, Audience, Brief, ConfigError, ContentEngine,
    ContentType, GenerateError, Platform, SequenceRandom, SystemRandom, Tone,
};

const WORDS: [&str; 24] = [
    "how", "to", "grow", "secret", "journey", "sell", "course", "now", "funny", "debate",
    "transform", "my", "business", "zero", "$0", "tips", "hate", "love", "this", "week",
    "unpopular", "opinion", "client", "!!",
];

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("content-engine-{}-{}", std::process::id(), name))
        .join("engine.toml")
}

#[test]
fn blank_briefs_are_rejected() {
    for text in ["", "   ", "\n\t"] {
        let error = generate_content(&Brief::new(text), &mut SequenceRandom::neutral())
            .expect_err("blank brief");
        assert_eq!(error, GenerateError::InvalidBrief);
        assert_eq!(error.to_string(), "description required");
    }
}

#[test]
fn educational_instagram_brief_end_to_end() {
    let brief = Brief::new("How to grow an Instagram business from zero followers");
    let content = generate_content(&brief, &mut SequenceRandom::neutral()).expect("generate");

    assert_eq!(content.analysis.intent, Intent::Educational);
    assert_eq!(content.viral_score, 86);
    assert_eq!(content.tier, PerformanceTier::High);
    assert_eq!(content.estimated_views, 1261);
    assert_eq!(content.estimated_engagement_rate, 5.16);
    assert_eq!(content.platform, Platform::Instagram);
    assert_eq!(content.content_type, ContentType::Post);
    assert_eq!(
        content.hashtags,
        vec![
            "growinstagrambusiness",
            "success",
            "motivation",
            "instagood",
            "viral",
            "trending",
            "explorepage",
            "reels",
            "learn",
            "tips",
        ]
    );
    assert!(content.id.starts_with("content_"));
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or(0);
    assert!(content.created_at > 0);
    assert!(content.created_at <= now);
    assert_eq!(content.best_posting_windows[0], "Tue-Fri 11:00-13:00");
    assert!(content
        .recommendations
        .iter()
        .any(|line| line.contains("real follower count")));
    assert!(content
        .recommendations
        .iter()
        .any(|line| line.starts_with("Open with professional vocabulary such as proven")));
    assert!(content.recommendations.len() <= 8);
}

#[test]
fn story_precedes_revelation_for_secret_journey() {
    let brief = Brief {
        tone: Tone::Motivational,
        ..Brief::new("My secret journey to $0 to $50k")
    };
    let content = generate_content(&brief, &mut SequenceRandom::neutral()).expect("generate");
    assert_eq!(content.analysis.intent, Intent::Storytelling);
    assert_eq!(content.score_breakdown.raw, 90.0);
    assert_eq!(content.viral_score, 90);
    assert!(content.hashtags.contains(&"mystory".to_string()));

    let low = generate_content(&brief, &mut SequenceRandom::new(vec![0.0])).expect("generate");
    assert_eq!(low.viral_score, 85);
    assert!(low.viral_score > 75);
}

#[test]
fn same_draws_give_same_output_apart_from_identity() {
    let brief = Brief {
        platform: Platform::Tiktok,
        content_type: ContentType::Video,
        audience: Audience::GenZ,
        ..Brief::new("Unpopular opinion: nobody needs a morning routine")
    };
    let first = generate_content(&brief, &mut SequenceRandom::new(vec![0.3, 0.7])).expect("first");
    let second = generate_content(&brief, &mut SequenceRandom::new(vec![0.3, 0.7])).expect("second");

    assert_ne!(first.id, second.id);
    assert_eq!(first.body, second.body);
    assert_eq!(first.caption, second.caption);
    assert_eq!(first.script, second.script);
    assert_eq!(first.hashtags, second.hashtags);
    assert_eq!(first.viral_score, second.viral_score);
    assert_eq!(first.estimated_views, second.estimated_views);
    assert_eq!(first.score_breakdown, second.score_breakdown);
}

#[test]
fn unknown_option_keys_fall_back_to_defaults() {
    assert_eq!(Platform::from_key("not-a-real-platform"), Platform::Instagram);
    assert_eq!(ContentType::from_key("hologram"), ContentType::Post);
    assert_eq!(Tone::from_key("sarcastic"), Tone::Professional);
    assert_eq!(Audience::from_key("aliens"), Audience::General);
    assert_eq!(LengthPreference::from_key("epic"), LengthPreference::Medium);
    assert_eq!(CtaPreference::from_key("shout"), CtaPreference::Engage);
    assert_eq!(Monetization::from_key("nft"), Monetization::Course);

    let text = "Five productivity apps worth using";
    let fallback = Brief {
        platform: Platform::from_key("not-a-real-platform"),
        ..Brief::new(text)
    };
    let explicit = Brief {
        platform: Platform::Instagram,
        ..Brief::new(text)
    };
    let fallback = generate_content(&fallback, &mut SequenceRandom::neutral()).expect("fallback");
    let explicit = generate_content(&explicit, &mut SequenceRandom::neutral()).expect("explicit");
    assert_eq!(fallback.body, explicit.body);
    assert_eq!(fallback.viral_score, explicit.viral_score);
}

#[test]
fn brief_json_resolves_unknown_and_missing_keys() {
    let brief: Brief = serde_json::from_str(
        r#"{"raw_text":"Five productivity apps worth using","platform":"not-a-real-platform","tone":"sarcastic","audience":"Gen-Z"}"#,
    )
    .expect("lenient brief");
    assert_eq!(brief.platform, Platform::Instagram);
    assert_eq!(brief.tone, Tone::Professional);
    assert_eq!(brief.audience, Audience::GenZ);

    let sparse: Brief = serde_json::from_str(r#"{"raw_text":"Five apps"}"#).expect("sparse brief");
    assert_eq!(sparse, Brief::new("Five apps"));

    let explicit = Brief {
        platform: Platform::Instagram,
        ..Brief::new("Five productivity apps worth using")
    };
    let from_json = generate_content(&brief, &mut SequenceRandom::neutral()).expect("json");
    let from_value = generate_content(&explicit, &mut SequenceRandom::neutral()).expect("explicit");
    assert_eq!(from_json.body, from_value.body);
    assert_eq!(from_json.viral_score, from_value.viral_score);
}

#[test]
fn serialized_content_reads_back() {
    let brief = Brief {
        platform: Platform::Linkedin,
        content_type: ContentType::Carousel,
        length: LengthPreference::Long,
        cta_preference: CtaPreference::Dm,
        monetization: Some(Monetization::Service),
        ..Brief::new("Consulting tips for new agency owners")
    };
    let content = generate_content(&brief, &mut SequenceRandom::neutral()).expect("generate");
    let payload = serde_json::to_string(&content).expect("serialize");
    let restored: content_engine::GeneratedContent =
        serde_json::from_str(&payload).expect("deserialize");
    assert_eq!(restored.platform, Platform::Linkedin);
    assert_eq!(restored.content_type, ContentType::Carousel);
    assert_eq!(restored.analysis.monetization, Monetization::Service);
    assert_eq!(restored.strategy.source, content.strategy.source);
    assert_eq!(restored.tier, content.tier);
    assert_eq!(restored.body, content.body);
}

#[test]
fn engine_rejects_invalid_config() {
    let mut inverted = EngineConfig::default();
    inverted.forecast.min_score = 99.0;
    inverted.forecast.max_score = 70.0;
    assert!(matches!(
        ContentEngine::try_new(inverted),
        Err(ConfigError::Invalid(_))
    ));

    let mut factor = EngineConfig::default();
    factor.forecast.random_factor_min = 1.5;
    factor.forecast.random_factor_max = 0.9;
    assert!(matches!(
        ContentEngine::try_new(factor),
        Err(ConfigError::Invalid(_))
    ));

    assert!(ContentEngine::try_new(EngineConfig::default()).is_ok());
}

#[test]
fn option_aliases_parse() {
    assert_eq!(Platform::parse("Twitter"), Some(Platform::X));
    assert_eq!(Platform::parse("YouTube"), Some(Platform::Youtube));
    assert_eq!(Audience::parse("gen-z"), Some(Audience::GenZ));
    assert_eq!(ContentType::parse("Reel"), Some(ContentType::Reel));
    assert_eq!(Platform::parse("myspace"), None);
}

#[test]
fn x_briefs_keep_three_hashtags() {
    let brief = Brief {
        platform: Platform::X,
        ..Brief::new("How to grow an Instagram business from zero followers")
    };
    let content = generate_content(&brief, &mut SequenceRandom::neutral()).expect("generate");
    assert_eq!(
        content.hashtags,
        vec!["growinstagrambusiness", "success", "motivation"]
    );
}

#[test]
fn hashtag_cap_comes_from_config() {
    let mut config = EngineConfig::default();
    config.hashtags.cap = 4;
    let engine = ContentEngine::try_new(config).expect("valid config");
    let content = engine
        .generate(
            &Brief::new("Funny things cats do"),
            &mut SequenceRandom::neutral(),
        )
        .expect("generate");
    assert_eq!(content.hashtags.len(), 4);
}

#[test]
fn monetization_override_drives_strategy() {
    let brief = Brief {
        monetization: Some(Monetization::Product),
        ..Brief::new("Five productivity apps worth using")
    };
    let content = generate_content(&brief, &mut SequenceRandom::neutral()).expect("generate");
    assert!(content.analysis.monetized);
    assert!(content.caption.contains("Grab yours"));
    assert!(content
        .recommendations
        .iter()
        .any(|line| line.contains("deadline or limited spots")));
}

#[test]
fn random_briefs_stay_within_bounds() {
    let mut picker = StdRng::seed_from_u64(7);
    let config = ForecastConfig::default();

    for round in 0..10_000u64 {
        let length = picker.gen_range(1..12);
        let text = (0..length)
            .map(|_| *WORDS.choose(&mut picker).unwrap_or(&"grow"))
            .collect::<Vec<_>>()
            .join(" ");
        let brief = Brief {
            platform: *Platform::ALL.choose(&mut picker).unwrap_or(&Platform::Instagram),
            audience: Audience::from_key(
                ["gen_z", "parents", "students", "professionals", "general"][(round % 5) as usize],
            ),
            tone: Tone::from_key(["bold", "casual", "humorous", "educational"][(round % 4) as usize]),
            follower_count_hint: if round % 3 == 0 { Some(round * 17) } else { None },
            ..Brief::new(text)
        };

        let mut rng = SystemRandom::seeded(round);
        let content = generate_content(&brief, &mut rng).expect("generate");
        let limit = content.platform.profile().hashtag_limit.min(10);

        assert!((65..=98).contains(&content.viral_score), "{}", content.viral_score);
        assert!(content.estimated_engagement_rate >= 0.0);
        assert!(content.estimated_engagement_rate <= config.max_engagement_rate);
        assert!(content.hashtags.len() <= limit);
        let unique: HashSet<&String> = content.hashtags.iter().collect();
        assert_eq!(unique.len(), content.hashtags.len());
        assert!(!content.body.is_empty());
        assert!(!content.title.is_empty());
    }
}

#[test]
fn config_round_trips_through_file() {
    let path = scratch_path("roundtrip");
    let mut config = EngineConfig::default();
    config.forecast.base_score = 72.0;
    config.server.port = 9191;
    config.write(&path).expect("write");

    let loaded = EngineConfig::from_file(&path).expect("read");
    assert_eq!(loaded, config);

    if let Some(parent) = path.parent() {
        let _ = std::fs::remove_dir_all(parent);
    }
}

#[test]
fn partial_config_keeps_defaults() {
    let path = scratch_path("partial");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("mkdir");
    }
    std::fs::write(&path, "[forecast]\nmax_score = 95.0\n").expect("write");

    let loaded = EngineConfig::from_file(&path).expect("read");
    assert_eq!(loaded.forecast.max_score, 95.0);
    assert_eq!(loaded.forecast.base_score, 75.0);
    assert_eq!(loaded.hashtags.cap, 10);
    assert_eq!(loaded.server.port, 8787);

    if let Some(parent) = path.parent() {
        let _ = std::fs::remove_dir_all(parent);
    }
}

#[test]
fn invalid_config_is_reported() {
    let mut config = EngineConfig::default();
    config.forecast.min_score = 90.0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = EngineConfig::default();
    config.hashtags.cap = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    assert!(EngineConfig::default().validate().is_ok());

    let path = scratch_path("malformed");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("mkdir");
    }
    std::fs::write(&path, "[forecast\nbase_score = ").expect("write");
    assert!(matches!(EngineConfig::from_file(&path), Err(ConfigError::Parse(_))));
    if let Some(parent) = path.parent() {
        let _ = std::fs::remove_dir_all(parent);
    }
}

#[test]
fn number_formatting() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1261), "1,261");
    assert_eq!(format_number(12_613_000), "12,613,000");
    assert_eq!(format_percent(18.0), "18.0%");
}
