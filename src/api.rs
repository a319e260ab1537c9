use serde::{Deserialize, Serialize};

use content_engine::analysis::Monetization;
use content_engine::assembly::{CtaPreference, LengthPreference};
use content_engine::{Audience, Brief, ContentType, GenerateError, GeneratedContent, Platform, Tone};

#[derive(Debug, Default, Deserialize)]
pub struct ApiGenerateRequest {
    #[serde(alias = "text", alias = "raw_text")]
    pub description: Option<String>,
    pub request_id: Option<String>,
    pub platform: Option<String>,
    pub content_type: Option<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub length: Option<String>,
    pub cta: Option<String>,
    pub monetization: Option<String>,
    pub follower_count: Option<u64>,
    pub seed: Option<u64>,
}

impl ApiGenerateRequest {
    /// Builds a brief, resolving unknown option keys to their defaults and
    /// reporting each substitution as a warning.
    pub fn into_brief(self) -> Result<(Brief, Vec<String>), GenerateError> {
        let text = self.description.unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return Err(GenerateError::InvalidBrief);
        }

        let mut warnings = Vec::new();
        let mut brief = Brief::new(text);
        brief.platform = resolve_key(
            self.platform.as_deref(),
            "platform",
            Platform::parse,
            Platform::key,
            &mut warnings,
        );
        brief.content_type = resolve_key(
            self.content_type.as_deref(),
            "content type",
            ContentType::parse,
            ContentType::key,
            &mut warnings,
        );
        brief.tone = resolve_key(
            self.tone.as_deref(),
            "tone",
            Tone::parse,
            Tone::key,
            &mut warnings,
        );
        brief.audience = resolve_key(
            self.audience.as_deref(),
            "audience",
            Audience::parse,
            Audience::key,
            &mut warnings,
        );
        brief.length = resolve_key(
            self.length.as_deref(),
            "length",
            LengthPreference::parse,
            LengthPreference::key,
            &mut warnings,
        );
        brief.cta_preference = resolve_key(
            self.cta.as_deref(),
            "cta",
            CtaPreference::parse,
            CtaPreference::key,
            &mut warnings,
        );
        brief.monetization = self
            .monetization
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                resolve_key(
                    Some(value),
                    "monetization",
                    Monetization::parse,
                    Monetization::key,
                    &mut warnings,
                )
            });
        brief.follower_count_hint = self.follower_count;

        Ok((brief, warnings))
    }
}

fn resolve_key<T: Copy + Default>(
    value: Option<&str>,
    label: &str,
    parse: fn(&str) -> Option<T>,
    key: fn(T) -> &'static str,
    warnings: &mut Vec<String>,
) -> T {
    let Some(value) = value.filter(|value| !value.trim().is_empty()) else {
        return T::default();
    };
    match parse(value) {
        Some(parsed) => parsed,
        None => {
            let fallback = T::default();
            warnings.push(format!(
                "unknown {} '{}', using {}",
                label,
                value,
                key(fallback)
            ));
            fallback
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiGenerateResponse {
    pub request_id: String,
    #[serde(flatten)]
    pub content: GeneratedContent,
    pub warnings: Vec<String>,
}
