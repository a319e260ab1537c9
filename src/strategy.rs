//! Intent and monetization strategy catalogs.
//!
//! A strategy descriptor picks the template family for every assembled
//! section. Briefs that sell something read from the monetization table;
//! everything else reads from the intent table.

use serde::{Deserialize, Serialize};

use crate::analysis::{Analysis, Intent, Monetization};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookStyle {
    Question,
    BoldClaim,
    Story,
    Statistic,
    Curiosity,
    Contrarian,
    Challenge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyStructure {
    StepByStep,
    HeroJourney,
    ProblemAgitateSolve,
    BeforeAfter,
    ListBreakdown,
    MythBusting,
    ValueStack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofStyle {
    Results,
    Testimonial,
    Authority,
    CaseStudy,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaStyle {
    Save,
    Enroll,
    Buy,
    Book,
    Comment,
    Share,
    Follow,
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PsychologyFraming {
    Authority,
    Aspiration,
    Scarcity,
    Curiosity,
    Belonging,
    Reciprocity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "key")]
pub enum StrategySource {
    Intent(Intent),
    Monetization(Monetization),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyDescriptor {
    pub source: StrategySource,
    pub hook_style: HookStyle,
    pub body_structure: BodyStructure,
    pub proof_style: ProofStyle,
    pub cta_style: CtaStyle,
    pub psychology_framing: PsychologyFraming,
    /// Additive viral-score bonus the strategy carries.
    pub score_bonus: f64,
}

const fn intent_entry(
    intent: Intent,
    hook_style: HookStyle,
    body_structure: BodyStructure,
    proof_style: ProofStyle,
    cta_style: CtaStyle,
    psychology_framing: PsychologyFraming,
    score_bonus: f64,
) -> StrategyDescriptor {
    StrategyDescriptor {
        source: StrategySource::Intent(intent),
        hook_style,
        body_structure,
        proof_style,
        cta_style,
        psychology_framing,
        score_bonus,
    }
}

const fn monetization_entry(
    monetization: Monetization,
    hook_style: HookStyle,
    body_structure: BodyStructure,
    proof_style: ProofStyle,
    cta_style: CtaStyle,
    psychology_framing: PsychologyFraming,
    score_bonus: f64,
) -> StrategyDescriptor {
    StrategyDescriptor {
        source: StrategySource::Monetization(monetization),
        hook_style,
        body_structure,
        proof_style,
        cta_style,
        psychology_framing,
        score_bonus,
    }
}

/// First entry is the fallback.
static INTENT_STRATEGIES: [StrategyDescriptor; 9] = [
    intent_entry(
        Intent::Educational,
        HookStyle::Question,
        BodyStructure::StepByStep,
        ProofStyle::Results,
        CtaStyle::Save,
        PsychologyFraming::Authority,
        1.0,
    ),
    intent_entry(
        Intent::Storytelling,
        HookStyle::Story,
        BodyStructure::HeroJourney,
        ProofStyle::Testimonial,
        CtaStyle::Comment,
        PsychologyFraming::Belonging,
        2.0,
    ),
    intent_entry(
        Intent::Conversion,
        HookStyle::BoldClaim,
        BodyStructure::ProblemAgitateSolve,
        ProofStyle::CaseStudy,
        CtaStyle::Click,
        PsychologyFraming::Scarcity,
        1.0,
    ),
    intent_entry(
        Intent::Inspirational,
        HookStyle::Challenge,
        BodyStructure::BeforeAfter,
        ProofStyle::Testimonial,
        CtaStyle::Share,
        PsychologyFraming::Aspiration,
        1.0,
    ),
    intent_entry(
        Intent::Entertainment,
        HookStyle::Curiosity,
        BodyStructure::ListBreakdown,
        ProofStyle::Data,
        CtaStyle::Share,
        PsychologyFraming::Belonging,
        2.0,
    ),
    intent_entry(
        Intent::Controversial,
        HookStyle::Contrarian,
        BodyStructure::MythBusting,
        ProofStyle::Data,
        CtaStyle::Comment,
        PsychologyFraming::Curiosity,
        2.0,
    ),
    intent_entry(
        Intent::Revelation,
        HookStyle::Curiosity,
        BodyStructure::MythBusting,
        ProofStyle::Authority,
        CtaStyle::Follow,
        PsychologyFraming::Curiosity,
        2.0,
    ),
    intent_entry(
        Intent::Transformation,
        HookStyle::Statistic,
        BodyStructure::BeforeAfter,
        ProofStyle::Results,
        CtaStyle::Follow,
        PsychologyFraming::Aspiration,
        2.0,
    ),
    intent_entry(
        Intent::ValueProviding,
        HookStyle::Statistic,
        BodyStructure::ValueStack,
        ProofStyle::Results,
        CtaStyle::Save,
        PsychologyFraming::Reciprocity,
        0.0,
    ),
];

/// First entry (course) is the fallback.
static MONETIZATION_STRATEGIES: [StrategyDescriptor; 4] = [
    monetization_entry(
        Monetization::Course,
        HookStyle::Question,
        BodyStructure::StepByStep,
        ProofStyle::Results,
        CtaStyle::Enroll,
        PsychologyFraming::Authority,
        3.0,
    ),
    monetization_entry(
        Monetization::Product,
        HookStyle::BoldClaim,
        BodyStructure::ProblemAgitateSolve,
        ProofStyle::Testimonial,
        CtaStyle::Buy,
        PsychologyFraming::Scarcity,
        2.0,
    ),
    monetization_entry(
        Monetization::Service,
        HookStyle::Statistic,
        BodyStructure::ValueStack,
        ProofStyle::CaseStudy,
        CtaStyle::Book,
        PsychologyFraming::Authority,
        2.0,
    ),
    monetization_entry(
        Monetization::Affiliate,
        HookStyle::Story,
        BodyStructure::ListBreakdown,
        ProofStyle::Testimonial,
        CtaStyle::Click,
        PsychologyFraming::Reciprocity,
        1.0,
    ),
];

pub fn intent_strategy(intent: Intent) -> &'static StrategyDescriptor {
    INTENT_STRATEGIES
        .iter()
        .find(|entry| entry.source == StrategySource::Intent(intent))
        .unwrap_or(&INTENT_STRATEGIES[0])
}

pub fn monetization_strategy(monetization: Monetization) -> &'static StrategyDescriptor {
    MONETIZATION_STRATEGIES
        .iter()
        .find(|entry| entry.source == StrategySource::Monetization(monetization))
        .unwrap_or(&MONETIZATION_STRATEGIES[0])
}

pub fn resolve(intent: Intent, monetization: Option<Monetization>) -> StrategyDescriptor {
    match monetization {
        Some(monetization) => *monetization_strategy(monetization),
        None => *intent_strategy(intent),
    }
}

pub fn resolve_for(analysis: &Analysis) -> StrategyDescriptor {
    let monetization = analysis.monetized.then_some(analysis.monetization);
    resolve(analysis.intent, monetization)
}
