use crate::analysis::intent::classify_tokens;
use crate::analysis::rules::{first_match, KeywordRule, TokenizedText};
use crate::analysis::{Analysis, Complexity, Intent, Monetization, Potential, Sentiment, Urgency};

const FALLBACK_TOPIC: &str = "success";
const TOPIC_WORDS: usize = 3;
const KEYWORD_LIMIT: usize = 5;

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "how", "what", "why", "this", "that", "from", "your", "you",
    "are", "was", "were", "can", "will", "into", "about", "our", "have", "has", "had", "its",
    "it's", "but", "not", "all", "any", "just", "get", "got", "out", "who", "when", "where",
    "them", "they", "their", "then", "than", "too", "very", "over", "also", "been", "being",
    "did", "does", "let", "let's", "i'm", "way", "more", "most", "some",
];

const URGENCY_RULES: &[KeywordRule<Urgency>] = &[
    KeywordRule::new(
        &["now", "immediate", "immediately", "urgent", "today", "asap", "deadline"],
        Urgency::High,
    ),
    KeywordRule::new(&["soon", "quick", "quickly", "fast", "this week"], Urgency::Medium),
];

const SENTIMENT_RULES: &[KeywordRule<Sentiment>] = &[
    KeywordRule::new(
        &["love", "amazing", "great", "best", "success", "win", "happy", "grow", "excited"],
        Sentiment::Positive,
    ),
    KeywordRule::new(
        &["hate", "fail", "worst", "struggle", "problem", "mistake", "broke", "stuck", "angry"],
        Sentiment::Negative,
    ),
];

const MONETIZATION_RULES: &[KeywordRule<Monetization>] = &[
    KeywordRule::new(
        &["course", "masterclass", "workshop", "cohort", "bootcamp"],
        Monetization::Course,
    ),
    KeywordRule::new(
        &["product", "buy", "shop", "merch", "ebook", "template", "preset"],
        Monetization::Product,
    ),
    KeywordRule::new(
        &["service", "consult", "agency", "client", "freelance", "hire"],
        Monetization::Service,
    ),
    KeywordRule::new(
        &["affiliate", "recommend", "commission", "referral", "partner link"],
        Monetization::Affiliate,
    ),
];

const PAIN_POINT_RULES: &[KeywordRule<&str>] = &[
    KeywordRule::new(
        &["time", "busy", "overwhelm", "burnout", "exhausted"],
        "not enough time",
    ),
    KeywordRule::new(
        &["money", "broke", "debt", "afford", "expensive", "$0"],
        "money pressure",
    ),
    KeywordRule::new(
        &["stuck", "plateau", "no growth", "zero", "slow"],
        "stalled growth",
    ),
    KeywordRule::new(
        &["confus", "don't know", "unclear", "lost"],
        "confusion about where to start",
    ),
    KeywordRule::new(
        &["fail", "mistake", "wrong", "struggle"],
        "fear of failing again",
    ),
];

const DESIRE_RULES: &[KeywordRule<&str>] = &[
    KeywordRule::new(
        &["grow", "growth", "followers", "audience", "viral"],
        "faster audience growth",
    ),
    KeywordRule::new(
        &["money", "income", "revenue", "profit", "earn", "rich", "$50k"],
        "more income",
    ),
    KeywordRule::new(&["freedom", "quit", "remote", "travel"], "more freedom"),
    KeywordRule::new(
        &["confidence", "respect", "recognition", "famous"],
        "recognition",
    ),
    KeywordRule::new(&["health", "fit", "weight", "energy"], "better health"),
];

const OBJECTION_RULES: &[KeywordRule<&str>] = &[
    KeywordRule::new(
        &["expensive", "cost", "price", "afford"],
        "it costs too much",
    ),
    KeywordRule::new(&["time", "busy"], "I don't have time"),
    KeywordRule::new(
        &["beginner", "zero", "no experience", "new to"],
        "I'm starting from zero",
    ),
    KeywordRule::new(
        &["scam", "trust", "legit", "fake"],
        "this sounds too good to be true",
    ),
];

/// Derives the full analysis record for a brief. Pure function of its
/// inputs; the caller guarantees `text` is non-blank.
pub fn analyze_text(text: &str, monetization_override: Option<Monetization>) -> Analysis {
    let tokenized = TokenizedText::new(text);

    let core_topic = core_topic(&tokenized);
    let keywords = keywords(&tokenized);
    let intent = classify_tokens(&tokenized);
    let sentiment = first_match(SENTIMENT_RULES, &tokenized, Sentiment::Neutral);
    let urgency = first_match(URGENCY_RULES, &tokenized, Urgency::Low);
    let complexity = complexity_for(tokenized.word_count());

    let detected = MONETIZATION_RULES
        .iter()
        .find(|rule| rule.matches(&tokenized))
        .map(|rule| rule.result);
    let monetized = monetization_override.is_some()
        || detected.is_some()
        || matches!(intent, Intent::Conversion);
    let monetization = monetization_override
        .or(detected)
        .unwrap_or_default();

    let pain_points = vec![first_match(PAIN_POINT_RULES, &tokenized, "lack of a clear plan").to_string()];
    let desires = vec![first_match(DESIRE_RULES, &tokenized, "steady progress").to_string()];
    let objections = vec![first_match(OBJECTION_RULES, &tokenized, "it won't work for me").to_string()];

    let viral_potential = viral_potential(intent, urgency);
    let conversion_potential = conversion_potential(monetized, intent, urgency);

    Analysis {
        core_topic,
        keywords,
        intent,
        sentiment,
        urgency,
        complexity,
        monetization,
        monetized,
        viral_potential,
        conversion_potential,
        pain_points,
        desires,
        objections,
    }
}

fn core_topic(text: &TokenizedText) -> String {
    let important: Vec<&str> = text
        .tokens()
        .iter()
        .map(String::as_str)
        .filter(|token| is_important(token))
        .take(TOPIC_WORDS)
        .collect();
    if important.is_empty() {
        return FALLBACK_TOPIC.to_string();
    }
    important.join(" ")
}

fn is_important(token: &str) -> bool {
    token.chars().count() > 2
        && token.chars().any(char::is_alphanumeric)
        && !STOP_WORDS.contains(&token)
}

fn keywords(text: &TokenizedText) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in text.tokens() {
        if keywords.len() == KEYWORD_LIMIT {
            break;
        }
        if token.chars().count() > 3 && !keywords.contains(token) {
            keywords.push(token.clone());
        }
    }
    keywords
}

fn complexity_for(word_count: usize) -> Complexity {
    if word_count > 50 {
        Complexity::Complex
    } else if word_count > 25 {
        Complexity::Moderate
    } else {
        Complexity::Simple
    }
}

fn viral_potential(intent: Intent, urgency: Urgency) -> Potential {
    match intent {
        Intent::Controversial | Intent::Revelation | Intent::Entertainment => Potential::High,
        Intent::Storytelling | Intent::Transformation | Intent::Inspirational => Potential::Medium,
        _ if urgency == Urgency::High => Potential::Medium,
        _ => Potential::Low,
    }
}

fn conversion_potential(monetized: bool, intent: Intent, urgency: Urgency) -> Potential {
    if monetized && urgency != Urgency::Low {
        Potential::High
    } else if monetized || intent == Intent::Conversion {
        Potential::Medium
    } else {
        Potential::Low
    }
}
