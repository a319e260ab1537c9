/// One entry of an ordered decision list: if any keyword is present in the
/// text, the rule fires and yields `result`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    pub keywords: &'static [&'static str],
    pub result: T,
}

impl<T: Copy> KeywordRule<T> {
    pub const fn new(keywords: &'static [&'static str], result: T) -> Self {
        Self { keywords, result }
    }

    pub fn matches(&self, text: &TokenizedText) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

/// Evaluates rules top to bottom; the first match wins, otherwise `default`.
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], text: &TokenizedText, default: T) -> T {
    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.result)
        .unwrap_or(default)
}

/// Lowercased brief text split into tokens, plus a space-joined form for
/// phrase lookups.
#[derive(Debug, Clone)]
pub struct TokenizedText {
    tokens: Vec<String>,
    joined: String,
}

impl TokenizedText {
    pub fn new(text: &str) -> Self {
        let tokens: Vec<String> = text
            .to_lowercase()
            .split_whitespace()
            .map(trim_token)
            .filter(|token| !token.is_empty())
            .collect();
        let joined = format!(" {} ", tokens.join(" "));
        Self { tokens, joined }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    /// Multi-word keywords match as a phrase. Single words match a whole
    /// token, or a token prefix when the keyword is at least four characters
    /// (`teach` matches `teaching`).
    pub fn contains(&self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return false;
        }
        if keyword.contains(' ') {
            return self.joined.contains(&format!(" {} ", keyword));
        }
        self.tokens.iter().any(|token| {
            token == keyword || (keyword.chars().count() >= 4 && token.starts_with(keyword))
        })
    }
}

fn trim_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !(c.is_alphanumeric() || c == '$' || c == '-' || c == '\''))
        .to_string()
}
