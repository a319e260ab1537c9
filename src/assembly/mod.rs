//! Template-driven copy assembly.
//!
//! Every stage is a pure template fill; identical inputs always produce
//! identical text.

pub mod hooks;
pub mod narrative;
pub mod sections;

use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::hashtags::slugify;
use crate::profiles::{normalize_key, Audience, ContentType, Platform, Tone};
use crate::strategy::StrategyDescriptor;

pub use hooks::{hook, title, title_case};
pub use narrative::narrative;
pub use sections::{
    framework, insights, platform_cta, social_proof, strategy_cta, trigger_block, triggers_for,
};

const VIDEO_CAPTION_LINE: &str = "Watch to the end for the full breakdown.";
const SCRIPT_SETUP_LINE: &str = "Here's what nobody tells you when you're just getting started.";
const SCRIPT_ENGAGEMENT_LINE: &str =
    "If this is already hitting home, stay with me, because the next part matters most.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPreference {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthPreference {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_key(value).as_str() {
            "short" | "brief" => Some(LengthPreference::Short),
            "medium" | "standard" => Some(LengthPreference::Medium),
            "long" | "detailed" => Some(LengthPreference::Long),
            _ => None,
        }
    }

    pub fn from_key(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        match self {
            LengthPreference::Short => "short",
            LengthPreference::Medium => "medium",
            LengthPreference::Long => "long",
        }
    }

    pub fn insight_count(self) -> usize {
        match self {
            LengthPreference::Short => 3,
            LengthPreference::Medium => 4,
            LengthPreference::Long => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaPreference {
    #[default]
    Engage,
    Follow,
    Comment,
    Share,
    Save,
    Link,
    Dm,
}

impl CtaPreference {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_key(value).as_str() {
            "engage" | "engagement" => Some(CtaPreference::Engage),
            "follow" => Some(CtaPreference::Follow),
            "comment" | "comments" => Some(CtaPreference::Comment),
            "share" => Some(CtaPreference::Share),
            "save" => Some(CtaPreference::Save),
            "link" | "link_in_bio" | "click" => Some(CtaPreference::Link),
            "dm" | "message" => Some(CtaPreference::Dm),
            _ => None,
        }
    }

    pub fn from_key(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        match self {
            CtaPreference::Engage => "engage",
            CtaPreference::Follow => "follow",
            CtaPreference::Comment => "comment",
            CtaPreference::Share => "share",
            CtaPreference::Save => "save",
            CtaPreference::Link => "link",
            CtaPreference::Dm => "dm",
        }
    }

    pub fn line(self) -> &'static str {
        match self {
            CtaPreference::Engage => "Like, comment and share if this helped.",
            CtaPreference::Follow => "Follow so you don't miss what's next.",
            CtaPreference::Comment => "Drop a comment: which step are you starting with?",
            CtaPreference::Share => "Share this with one person who needs it.",
            CtaPreference::Save => "Save this post and come back to it tomorrow.",
            CtaPreference::Link => "The full breakdown is waiting at the link in bio.",
            CtaPreference::Dm => "DM me \"START\" and I'll send you the checklist.",
        }
    }
}

/// Everything the assembler reads. Borrowed for the length of one request.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyContext<'a> {
    pub analysis: &'a Analysis,
    pub strategy: &'a StrategyDescriptor,
    pub platform: Platform,
    pub content_type: ContentType,
    pub tone: Tone,
    pub audience: Audience,
    pub length: LengthPreference,
    pub cta_preference: CtaPreference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledCopy {
    pub title: String,
    pub body: String,
    pub caption: String,
    pub script: String,
    pub psychological_triggers: Vec<String>,
}

pub fn assemble(ctx: &AssemblyContext<'_>) -> AssembledCopy {
    let topic = ctx.analysis.core_topic.as_str();
    let slug = slugify(topic);
    let platform = ctx.platform.profile();
    let audience = ctx.audience.profile();
    let tone = ctx.tone.profile();

    let hook_text = hook(ctx.platform, topic);
    let story = narrative(ctx.strategy.source, ctx.analysis, audience);
    let framework_text = framework(ctx.strategy.body_structure, topic, tone);
    let proof = social_proof(ctx.strategy.proof_style, platform, ctx.analysis);
    let insight_text = insights(ctx.strategy.body_structure, topic, audience, ctx.length);
    let triggers = trigger_block(ctx.strategy.psychology_framing);
    let body_cta = platform_cta(ctx.platform, &slug, ctx.cta_preference);
    let short_cta = strategy_cta(ctx.strategy.cta_style, topic);

    let body = [
        hook_text.as_str(),
        story.as_str(),
        framework_text.as_str(),
        proof.as_str(),
        insight_text.as_str(),
        triggers.as_str(),
        body_cta.as_str(),
    ]
    .join("\n\n");

    let mut caption_parts = vec![hook_text.as_str()];
    if ctx.content_type.is_video() {
        caption_parts.push(VIDEO_CAPTION_LINE);
    }
    caption_parts.extend([story.as_str(), tone.signature, short_cta.as_str()]);
    let caption = caption_parts.join("\n\n");

    let script = format!(
        "[HOOK]\n{}\n\n[SETUP]\n{}\n\n[CONTENT]\n{}\n\n[ENGAGEMENT]\n{}\n\n[CALL TO ACTION]\n{}",
        hook_text, SCRIPT_SETUP_LINE, story, SCRIPT_ENGAGEMENT_LINE, short_cta
    );

    let psychological_triggers = triggers_for(ctx.strategy.psychology_framing)
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();

    AssembledCopy {
        title: title(ctx.strategy.hook_style, topic),
        body,
        caption,
        script,
        psychological_triggers,
    }
}
