//! Text feature extraction and intent classification.

pub mod extractor;
pub mod intent;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::profiles::normalize_key;

pub use extractor::analyze_text;
pub use intent::{classify_intent, INTENT_RULES};
pub use rules::{first_match, KeywordRule, TokenizedText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Educational,
    Storytelling,
    Conversion,
    Inspirational,
    Entertainment,
    Controversial,
    Revelation,
    Transformation,
    ValueProviding,
}

impl Intent {
    pub const ALL: [Intent; 9] = [
        Intent::Educational,
        Intent::Storytelling,
        Intent::Conversion,
        Intent::Inspirational,
        Intent::Entertainment,
        Intent::Controversial,
        Intent::Revelation,
        Intent::Transformation,
        Intent::ValueProviding,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Intent::Educational => "educational",
            Intent::Storytelling => "storytelling",
            Intent::Conversion => "conversion",
            Intent::Inspirational => "inspirational",
            Intent::Entertainment => "entertainment",
            Intent::Controversial => "controversial",
            Intent::Revelation => "revelation",
            Intent::Transformation => "transformation",
            Intent::ValueProviding => "value_providing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Monetization {
    #[default]
    Course,
    Product,
    Service,
    Affiliate,
}

impl Monetization {
    pub const ALL: [Monetization; 4] = [
        Monetization::Course,
        Monetization::Product,
        Monetization::Service,
        Monetization::Affiliate,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match normalize_key(value).as_str() {
            "course" | "courses" | "coaching" => Some(Monetization::Course),
            "product" | "products" | "ecommerce" => Some(Monetization::Product),
            "service" | "services" | "consulting" => Some(Monetization::Service),
            "affiliate" | "affiliates" => Some(Monetization::Affiliate),
            _ => None,
        }
    }

    pub fn from_key(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        match self {
            Monetization::Course => "course",
            Monetization::Product => "product",
            Monetization::Service => "service",
            Monetization::Affiliate => "affiliate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Potential {
    Low,
    Medium,
    High,
}

/// Everything the engine reads out of a brief's free text. Built once per
/// brief and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub core_topic: String,
    pub keywords: Vec<String>,
    pub intent: Intent,
    pub sentiment: Sentiment,
    pub urgency: Urgency,
    pub complexity: Complexity,
    pub monetization: Monetization,
    /// True when the brief asks to sell something; only then do the
    /// monetization strategies steer the copy.
    pub monetized: bool,
    pub viral_potential: Potential,
    pub conversion_potential: Potential,
    pub pain_points: Vec<String>,
    pub desires: Vec<String>,
    pub objections: Vec<String>,
}

pub fn analyze(text: &str) -> Analysis {
    analyze_text(text, None)
}
