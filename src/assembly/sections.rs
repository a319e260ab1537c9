use crate::analysis::Analysis;
use crate::assembly::{CtaPreference, LengthPreference};
use crate::profiles::{AudienceProfile, Platform, PlatformProfile, ToneProfile};
use crate::strategy::{BodyStructure, CtaStyle, ProofStyle, PsychologyFraming};

pub fn framework(structure: BodyStructure, topic: &str, tone: &ToneProfile) -> String {
    let phases: [&str; 4] = match structure {
        BodyStructure::StepByStep => [
            "Foundation: learn the three core principles before touching any tactic.",
            "Setup: build a simple system you can repeat every single week.",
            "Execution: ship consistently for 30 days and track one metric.",
            "Scale: double down on what worked and cut what didn't.",
        ],
        BodyStructure::HeroJourney => [
            "The struggle: where it all started and why it hurt.",
            "The turning point: the one insight that changed the approach.",
            "The breakthrough: what happened once the new approach stuck.",
            "",
        ],
        BodyStructure::ProblemAgitateSolve => [
            "Problem: name the exact thing holding you back.",
            "Agitate: count what it costs you every month you ignore it.",
            "Solve: apply the fix that removes it for good.",
            "",
        ],
        BodyStructure::BeforeAfter => [
            "Before: guessing, inconsistent, exhausted.",
            "Bridge: one clear plan and a daily non-negotiable.",
            "After: predictable progress and real confidence.",
            "",
        ],
        BodyStructure::ListBreakdown => [
            "Pick one angle you can own.",
            "Package it in a format people already love.",
            "Repeat it until people associate it with you.",
            "Review what resonated and remix it.",
        ],
        BodyStructure::MythBusting => [
            "Myth: you need more time. Truth: you need fewer priorities.",
            "Myth: you need to go viral. Truth: you need to be consistent.",
            "Myth: talent decides it. Truth: systems decide it.",
            "",
        ],
        BodyStructure::ValueStack => [
            "Quick win: something you can apply in the next ten minutes.",
            "Core system: the weekly routine that compounds.",
            "Bonus: the mistake to avoid that saves you months.",
            "",
        ],
    };

    let mut block = format!("The {} {} framework:", tone.framework_label, topic);
    for (index, phase) in phases.iter().filter(|phase| !phase.is_empty()).enumerate() {
        block.push_str(&format!("\n{}. {}", index + 1, phase));
    }
    block
}

pub fn social_proof(
    style: ProofStyle,
    platform: &PlatformProfile,
    analysis: &Analysis,
) -> String {
    let objection = analysis
        .objections
        .first()
        .map(String::as_str)
        .unwrap_or("it won't work for me");
    let evidence = match style {
        ProofStyle::Results => format!(
            "The results speak for themselves: 2,847 {} applied this and saw a 340% jump \
in engagement within 90 days.",
            platform.community
        ),
        ProofStyle::Testimonial => format!(
            "\"I was skeptical, but this changed everything for me.\" That's one of 500+ \
messages from {} who tried it.",
            platform.community
        ),
        ProofStyle::Authority => format!(
            "This comes from 10 years of testing, 1,000+ experiments and work with top \
{}.",
            platform.community
        ),
        ProofStyle::CaseStudy => format!(
            "Case study: one client went from 0 to 12,000 followers and $8,400 in monthly \
revenue in 6 months, using the exact same playbook {} are using now.",
            platform.community
        ),
        ProofStyle::Data => format!(
            "The data: posts built this way earned 3.2x more shares and 47% more saves \
across 10,000 posts from {}.",
            platform.community
        ),
    };
    format!(
        "{}\nThinking \"{}\"? That's exactly what most of them said before they started.",
        evidence, objection
    )
}

pub fn insights(
    structure: BodyStructure,
    topic: &str,
    audience: &AudienceProfile,
    length: LengthPreference,
) -> String {
    let bullets: [String; 5] = match structure {
        BodyStructure::StepByStep | BodyStructure::ValueStack => [
            format!("Consistency beats intensity when it comes to {}.", topic),
            "Small systems compound faster than big bursts of motivation.".to_string(),
            "Track one number weekly; what gets measured gets improved.".to_string(),
            format!("{} respond to clarity, not complexity.", capitalize(audience.label)),
            "Your first version only needs to be done, not perfect.".to_string(),
        ],
        BodyStructure::HeroJourney | BodyStructure::BeforeAfter => [
            "Every breakthrough starts as a breakdown.".to_string(),
            format!("The gap between stuck and thriving with {} is one decision.", topic),
            "Progress hides in the boring middle. Stay there longer.".to_string(),
            format!("What {} really want is {}.", audience.label, audience.core_motivation),
            "Your story is proof someone else needs to hear.".to_string(),
        ],
        BodyStructure::ProblemAgitateSolve => [
            "Ignoring a problem is a decision to keep paying for it.".to_string(),
            format!("The real cost of {} done wrong is time you never get back.", topic),
            "Speed comes from removing steps, not adding them.".to_string(),
            format!("{} buy outcomes, not features.", capitalize(audience.label)),
            "The best time to fix it was last year. The second best is today.".to_string(),
        ],
        BodyStructure::ListBreakdown => [
            format!("People share {} content that makes them look smart.", topic),
            "Familiar formats lower the effort it takes to pay attention.".to_string(),
            "Repetition builds recognition; recognition builds trust.".to_string(),
            format!("{} prefer {}.", capitalize(audience.label), audience.preferred_formats.join(", ")),
            "Remix your winners before inventing something new.".to_string(),
        ],
        BodyStructure::MythBusting => [
            format!("Most advice about {} was written for a different era.", topic),
            "Questioning the default is where every edge starts.".to_string(),
            "Popular is not the same as correct.".to_string(),
            format!("{} can smell recycled advice instantly.", capitalize(audience.label)),
            "Test claims yourself before repeating them.".to_string(),
        ],
    };

    let count = length.insight_count().min(bullets.len());
    let mut block = String::from("Key insights:");
    for bullet in bullets.iter().take(count) {
        block.push_str(&format!("\n• {}", bullet));
    }
    block
}

/// Trigger names paired with the line that applies them.
pub fn triggers_for(framing: PsychologyFraming) -> &'static [(&'static str, &'static str)] {
    match framing {
        PsychologyFraming::Authority => &[
            ("authority", "Built on a method that has been tested again and again."),
            ("social proof", "Thousands already follow this exact path."),
            ("commitment", "Start with one small step and momentum does the rest."),
        ],
        PsychologyFraming::Aspiration => &[
            ("liking", "You're closer than you think, and you're not doing this alone."),
            ("commitment", "Decide today who you're becoming."),
            ("social proof", "People just like you have already made the jump."),
        ],
        PsychologyFraming::Scarcity => &[
            ("scarcity", "Only a limited number of spots are available."),
            ("urgency", "The window closes soon, and it won't reopen at this price."),
            ("FOMO", "Everyone who acts now gets a head start you won't."),
            ("social proof", "Spots are going fast."),
        ],
        PsychologyFraming::Curiosity => &[
            ("FOMO", "The people who know this are quietly pulling ahead."),
            ("authority", "This isn't theory; it's what insiders actually do."),
            ("urgency", "The longer you wait, the more this edge disappears."),
        ],
        PsychologyFraming::Belonging => &[
            ("liking", "If this sounds like you, you're among friends here."),
            ("social proof", "Join the thousands who've shared their own version."),
            ("reciprocity", "Share yours in the comments and I'll reply to every one."),
        ],
        PsychologyFraming::Reciprocity => &[
            ("reciprocity", "Everything here is free. Take it and use it."),
            ("liking", "I'm sharing this because someone once did the same for me."),
            ("commitment", "Save it now so you actually come back to it."),
        ],
    }
}

pub fn trigger_block(framing: PsychologyFraming) -> String {
    let mut block = String::from("Why this works:");
    for (name, line) in triggers_for(framing) {
        block.push_str(&format!("\n• {}: {}", capitalize(name), line));
    }
    block
}

/// Closing call to action for the long-form body, one template per platform.
pub fn platform_cta(platform: Platform, slug: &str, preference: CtaPreference) -> String {
    let base = match platform {
        Platform::Instagram => format!(
            "Double-tap if this hit home, save it for later, and tag someone who needs it. #{}",
            slug
        ),
        Platform::Tiktok => format!(
            "Follow for part 2 and drop a 🔥 if you're starting today. #{}",
            slug
        ),
        Platform::Youtube => format!(
            "Subscribe and hit the bell so you don't miss the next breakdown. #{}",
            slug
        ),
        Platform::X => format!("Repost to help someone else, and follow for more. #{}", slug),
        Platform::Linkedin => format!(
            "What's your take? Share it in the comments and repost to help your network. #{}",
            slug
        ),
        Platform::Facebook => format!(
            "Share this with a friend who needs it and join the conversation below. #{}",
            slug
        ),
    };
    format!("{}\n{}", base, preference.line())
}

/// Short call to action for captions and scripts, keyed by strategy.
pub fn strategy_cta(style: CtaStyle, topic: &str) -> String {
    match style {
        CtaStyle::Save => format!("Save this so your {} plan is always one tap away.", topic),
        CtaStyle::Enroll => format!(
            "Enrollment is open. Tap the link in bio to join the {} course.",
            topic
        ),
        CtaStyle::Buy => "Grab yours through the link in bio before this batch sells out.".to_string(),
        CtaStyle::Book => format!(
            "Book a free strategy call through the link in bio and let's fix your {}.",
            topic
        ),
        CtaStyle::Comment => format!("Comment your own {} story below. I read every one.", topic),
        CtaStyle::Share => "Share this with someone who needs to hear it today.".to_string(),
        CtaStyle::Follow => format!("Follow for more on {}. Part 2 drops soon.", topic),
        CtaStyle::Click => "Tap the link in bio to see exactly what I use.".to_string(),
    }
}

pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
