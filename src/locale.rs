//! Locale detection.
//!
//! A one-time, non-reactive startup read: the process locale decides the
//! reported language tag and the table's text direction.

/// Horizontal text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    /// Left-to-right scripts.
    LeftToRight,
    /// Right-to-left scripts.
    RightToLeft,
}

/// Languages rendered right-to-left.
const RTL_LANGS: [&str; 4] = ["ar", "he", "fa", "ur"];

/// The detected locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Language tag, e.g. "de-DE".
    pub tag: String,
    /// Text direction derived from the primary language subtag.
    pub direction: TextDirection,
}

impl Locale {
    /// Build a locale from a language tag.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.replace('_', "-");
        let rtl = RTL_LANGS.iter().any(|l| tag.starts_with(l));
        Self {
            direction: if rtl {
                TextDirection::RightToLeft
            } else {
                TextDirection::LeftToRight
            },
            tag,
        }
    }

    /// Detect the locale from the environment, falling back to German (the
    /// dataset's language) when nothing is set.
    pub fn detect() -> Self {
        let raw = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|v| !v.is_empty() && v != "C" && v != "POSIX")
            .unwrap_or_else(|| "de".to_string());

        // "de_DE.UTF-8" carries an encoding suffix the tag does not.
        let tag = raw
            .split(|c: char| c == '.' || c == '@')
            .next()
            .unwrap_or(&raw);
        Self::from_tag(tag)
    }

    /// Check if the locale renders right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.direction == TextDirection::RightToLeft
    }
}
