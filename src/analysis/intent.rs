use crate::analysis::rules::{first_match, KeywordRule, TokenizedText};
use crate::analysis::Intent;

/// Declaration order is precedence: a brief mentioning both a journey and a
/// secret classifies as storytelling.
pub const INTENT_RULES: &[KeywordRule<Intent>] = &[
    KeywordRule::new(
        &["teach", "how to", "how-to", "guide", "tutorial", "learn", "tips", "steps"],
        Intent::Educational,
    ),
    KeywordRule::new(
        &["story", "experience", "journey", "when i", "i was"],
        Intent::Storytelling,
    ),
    KeywordRule::new(
        &["sell", "promote", "convert", "launch", "offer", "discount"],
        Intent::Conversion,
    ),
    KeywordRule::new(
        &["inspire", "motivate", "encourage", "dream", "believe"],
        Intent::Inspirational,
    ),
    KeywordRule::new(
        &["entertain", "funny", "humor", "joke", "meme", "prank"],
        Intent::Entertainment,
    ),
    KeywordRule::new(
        &["controversy", "controversial", "debate", "argument", "unpopular opinion", "hot take"],
        Intent::Controversial,
    ),
    KeywordRule::new(
        &["secret", "hidden", "reveal", "nobody tells", "exposed"],
        Intent::Revelation,
    ),
    KeywordRule::new(
        &["transform", "change", "breakthrough", "before and after", "glow up"],
        Intent::Transformation,
    ),
];

pub fn classify_intent(text: &str) -> Intent {
    classify_tokens(&TokenizedText::new(text))
}

pub(crate) fn classify_tokens(text: &TokenizedText) -> Intent {
    first_match(INTENT_RULES, text, Intent::ValueProviding)
}
