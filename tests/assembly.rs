use content_engine::analysis::{analyze, Analysis};
use content_engine::assembly::{
    assemble, hook, title, triggers_for, AssembledCopy, AssemblyContext, CtaPreference,
    LengthPreference,
};
use content_engine::strategy::{resolve_for, PsychologyFraming, StrategyDescriptor};
use content_engine::{Audience, ContentType, Platform, Tone};

const BRIEF: &str = "How to grow an Instagram business from zero followers";

fn build(
    analysis: &Analysis,
    strategy: &StrategyDescriptor,
    platform: Platform,
    content_type: ContentType,
    length: LengthPreference,
) -> AssembledCopy {
    assemble(&AssemblyContext {
        analysis,
        strategy,
        platform,
        content_type,
        tone: Tone::Professional,
        audience: Audience::General,
        length,
        cta_preference: CtaPreference::Engage,
    })
}

fn insight_bullets(body: &str) -> usize {
    body.split("\n\n")
        .find(|section| section.starts_with("Key insights:"))
        .map(|section| section.lines().filter(|line| line.starts_with("• ")).count())
        .unwrap_or(0)
}

#[test]
fn body_sections_follow_fixed_order() {
    let analysis = analyze(BRIEF);
    let strategy = resolve_for(&analysis);
    let copy = build(
        &analysis,
        &strategy,
        Platform::Instagram,
        ContentType::Post,
        LengthPreference::Medium,
    );

    let sections: Vec<&str> = copy.body.split("\n\n").collect();
    assert_eq!(sections.len(), 7);
    assert_eq!(sections[0], hook(Platform::Instagram, "grow instagram business"));
    assert!(sections[0].contains("GROW INSTAGRAM BUSINESS"));
    assert!(sections[2].starts_with("The proven grow instagram business framework:"));
    assert!(sections[2].contains("\n1. "));
    assert!(sections[3].contains("creators on Instagram"));
    assert!(sections[4].starts_with("Key insights:"));
    assert!(sections[5].starts_with("Why this works:"));
    assert!(sections[6].contains("#growinstagrambusiness"));
    assert!(sections[6].ends_with(CtaPreference::Engage.line()));
}

#[test]
fn identical_inputs_produce_identical_text() {
    let analysis = analyze(BRIEF);
    let strategy = resolve_for(&analysis);
    let first = build(
        &analysis,
        &strategy,
        Platform::Tiktok,
        ContentType::Reel,
        LengthPreference::Long,
    );
    let second = build(
        &analysis,
        &strategy,
        Platform::Tiktok,
        ContentType::Reel,
        LengthPreference::Long,
    );
    assert_eq!(first, second);
}

#[test]
fn script_wraps_hook_story_and_cta() {
    let analysis = analyze(BRIEF);
    let strategy = resolve_for(&analysis);
    let copy = build(
        &analysis,
        &strategy,
        Platform::Youtube,
        ContentType::Video,
        LengthPreference::Medium,
    );

    let markers = ["[HOOK]", "[SETUP]", "[CONTENT]", "[ENGAGEMENT]", "[CALL TO ACTION]"];
    let mut cursor = 0;
    for marker in markers {
        let position = copy.script[cursor..]
            .find(marker)
            .unwrap_or_else(|| panic!("missing {}", marker));
        cursor += position + marker.len();
    }
    assert!(copy.script.starts_with("[HOOK]\n"));
    assert!(copy.script.ends_with("Save this so your grow instagram business plan is always one tap away."));
}

#[test]
fn length_preference_sets_insight_count() {
    let analysis = analyze(BRIEF);
    let strategy = resolve_for(&analysis);
    let counts: Vec<usize> = [
        LengthPreference::Short,
        LengthPreference::Medium,
        LengthPreference::Long,
    ]
    .into_iter()
    .map(|length| {
        let copy = build(&analysis, &strategy, Platform::Instagram, ContentType::Post, length);
        insight_bullets(&copy.body)
    })
    .collect();
    assert_eq!(counts, vec![3, 4, 5]);
}

#[test]
fn video_formats_get_watch_line_in_caption() {
    let analysis = analyze(BRIEF);
    let strategy = resolve_for(&analysis);
    let reel = build(
        &analysis,
        &strategy,
        Platform::Instagram,
        ContentType::Reel,
        LengthPreference::Medium,
    );
    let post = build(
        &analysis,
        &strategy,
        Platform::Instagram,
        ContentType::Post,
        LengthPreference::Medium,
    );
    assert!(reel.caption.contains("Watch to the end"));
    assert!(!post.caption.contains("Watch to the end"));
    assert!(post.caption.starts_with(&hook(Platform::Instagram, "grow instagram business")));
}

#[test]
fn monetized_briefs_use_offer_narrative() {
    let analysis = analyze("Sell my photography course this week");
    let strategy = resolve_for(&analysis);
    let copy = build(
        &analysis,
        &strategy,
        Platform::Instagram,
        ContentType::Post,
        LengthPreference::Medium,
    );
    assert!(copy.body.contains("step-by-step course"));
    assert!(copy.caption.contains("Enrollment is open"));
    assert_eq!(copy.title, "Want to Master Sell Photography Course? Start Here");
}

#[test]
fn triggers_come_from_framing() {
    let names: Vec<&str> = triggers_for(PsychologyFraming::Scarcity)
        .iter()
        .map(|(name, _)| *name)
        .collect();
    assert_eq!(names, vec!["scarcity", "urgency", "FOMO", "social proof"]);

    let analysis = analyze("Sell my photography course");
    let strategy = resolve_for(&analysis);
    let copy = build(
        &analysis,
        &strategy,
        Platform::X,
        ContentType::Post,
        LengthPreference::Short,
    );
    assert_eq!(
        copy.psychological_triggers,
        vec!["authority", "social proof", "commitment"]
    );
}

#[test]
fn titles_title_case_the_topic() {
    use content_engine::strategy::HookStyle;

    assert_eq!(
        title(HookStyle::Contrarian, "cold showers"),
        "Everything You Know About Cold Showers Is Wrong"
    );
}

#[test]
fn framework_heading_uses_tone_adjective() {
    let analysis = analyze(BRIEF);
    let strategy = resolve_for(&analysis);
    let headings: Vec<String> = [Tone::Bold, Tone::Humorous, Tone::Educational]
        .into_iter()
        .map(|tone| {
            let copy = assemble(&AssemblyContext {
                analysis: &analysis,
                strategy: &strategy,
                platform: Platform::Instagram,
                content_type: ContentType::Post,
                tone,
                audience: Audience::General,
                length: LengthPreference::Medium,
                cta_preference: CtaPreference::Engage,
            });
            copy.body
                .split("\n\n")
                .nth(2)
                .and_then(|section| section.lines().next())
                .unwrap_or_default()
                .to_string()
        })
        .collect();

    assert_eq!(
        headings,
        vec![
            "The uncompromising grow instagram business framework:",
            "The no-nonsense grow instagram business framework:",
            "The step-by-step grow instagram business framework:",
        ]
    );
}
