use crate::analysis::{Analysis, Intent, Monetization};
use crate::profiles::AudienceProfile;
use crate::strategy::StrategySource;

/// Story block. Monetized briefs get the template of their monetization
/// type; everything else is keyed by intent.
pub fn narrative(source: StrategySource, analysis: &Analysis, audience: &AudienceProfile) -> String {
    let topic = analysis.core_topic.as_str();
    let pain = first_or(&analysis.pain_points, "lack of a clear plan");
    let desire = first_or(&analysis.desires, "steady progress");
    let people = audience.label;

    match source {
        StrategySource::Monetization(Monetization::Course) => format!(
            "A year ago I was exactly where you are: curious about {topic}, held back by {pain}. \
I tried every free video and scattered tip out there. Nothing stuck until I built a system. \
That system is now a step-by-step course, made for {people} who want {desire} without \
the guesswork."
        ),
        StrategySource::Monetization(Monetization::Product) => format!(
            "Here's the problem with {topic}: {pain} makes everything harder than it should be. \
I got tired of work-arounds, so I built the tool I wished existed. It's simple, it's fast, \
and it gives {people} {desire} from day one."
        ),
        StrategySource::Monetization(Monetization::Service) => format!(
            "Most {people} try to figure out {topic} alone, and {pain} keeps winning. \
I've spent years doing this for clients, and the pattern is always the same: \
the right plan plus expert execution delivers {desire} faster than going solo."
        ),
        StrategySource::Monetization(Monetization::Affiliate) => format!(
            "I've tested dozens of tools for {topic}. Most of them made {pain} worse. \
A few actually delivered {desire}, and those are the only ones I recommend to {people} now."
        ),
        StrategySource::Intent(intent) => intent_narrative(intent, topic, pain, desire, people),
    }
}

fn intent_narrative(intent: Intent, topic: &str, pain: &str, desire: &str, people: &str) -> String {
    match intent {
        Intent::Educational => format!(
            "Most {people} approach {topic} backwards. They chase tactics before they understand \
the fundamentals, and {pain} is the result. Let me break it down so it finally makes sense."
        ),
        Intent::Storytelling => format!(
            "I still remember the moment everything shifted. I was stuck on {topic}, dealing with \
{pain}, and ready to quit. Then one small decision changed the whole journey. \
This is that story."
        ),
        Intent::Conversion => format!(
            "You already know {topic} matters. What's stopping you is {pain}. \
This is the exact shortcut I wish someone had handed me on day one."
        ),
        Intent::Inspirational => format!(
            "Nobody starts {topic} feeling ready. Every person you admire once faced {pain}. \
The only difference is that they kept going until they reached {desire}."
        ),
        Intent::Entertainment => format!(
            "Let's be honest: {topic} is chaos. One minute you're winning, the next you're \
googling how to fix {pain} at 2am. If you've been there, you're in the right place."
        ),
        Intent::Controversial => format!(
            "Unpopular opinion: the popular advice on {topic} is keeping {people} stuck. \
It treats {pain} like a personal flaw instead of a broken playbook."
        ),
        Intent::Revelation => format!(
            "There's a side of {topic} nobody talks about. The people who reach {desire} know it, \
and they rarely share it. Today I'm pulling back the curtain."
        ),
        Intent::Transformation => format!(
            "Before: {pain}, zero momentum, and no idea what to change about {topic}. \
After: {desire} and a routine that runs on autopilot. Here's how the shift happened."
        ),
        Intent::ValueProviding => format!(
            "Here's everything I know about {topic}, packed into one post for {people}. \
No fluff, just what works when {pain} gets in the way."
        ),
    }
}

fn first_or<'a>(values: &'a [String], fallback: &'a str) -> &'a str {
    values.first().map(String::as_str).unwrap_or(fallback)
}
