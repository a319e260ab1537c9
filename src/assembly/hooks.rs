use crate::profiles::Platform;
use crate::strategy::HookStyle;

/// Opening line, one template per platform.
pub fn hook(platform: Platform, topic: &str) -> String {
    let topic = topic.to_uppercase();
    match platform {
        Platform::Instagram => format!(
            "STOP SCROLLING if you want to master {}. This changes everything.",
            topic
        ),
        Platform::Tiktok => format!(
            "POV: you finally cracked {} and nobody can stop you now.",
            topic
        ),
        Platform::Youtube => format!(
            "In the next few minutes I'll show you exactly how {} really works.",
            topic
        ),
        Platform::X => format!("{} is misunderstood. Here's what actually works:", topic),
        Platform::Linkedin => format!(
            "I spent years getting {} wrong. Here's what finally changed.",
            topic
        ),
        Platform::Facebook => format!(
            "If {} has ever felt impossible, this post is for you.",
            topic
        ),
    }
}

pub fn title(style: HookStyle, topic: &str) -> String {
    let topic = title_case(topic);
    match style {
        HookStyle::Question => format!("Want to Master {}? Start Here", topic),
        HookStyle::BoldClaim => format!("{}: The Only Playbook You Need", topic),
        HookStyle::Story => format!("How {} Changed Everything for Me", topic),
        HookStyle::Statistic => format!("{}: 5 Numbers That Prove It Works", topic),
        HookStyle::Curiosity => format!("The {} Secret Nobody Talks About", topic),
        HookStyle::Contrarian => format!("Everything You Know About {} Is Wrong", topic),
        HookStyle::Challenge => format!("The 30-Day {} Challenge", topic),
    }
}

pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
