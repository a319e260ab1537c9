//! Static lookup tables for platforms, content formats, audiences and tones.
//!
//! Every key type resolves unknown input to a documented default, so a lookup
//! never fails.

pub mod audience;
pub mod content;
pub mod platform;
pub mod tone;

pub use audience::{Audience, AudienceProfile, EngagementStyle};
pub use content::ContentType;
pub use platform::{Platform, PlatformProfile};
pub use tone::{Tone, ToneProfile};

/// Lowercases and folds spaces/hyphens to underscores so `"Gen Z"`,
/// `"gen-z"` and `"GEN_Z"` all compare equal.
pub(crate) fn normalize_key(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
