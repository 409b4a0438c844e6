use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale tag such as `en` or `fr`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Locales shipped with the bundled catalogs
    pub const KNOWN: [&'static str; 3] = ["en", "fr", "nl"];

    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable name; unknown tags display as themselves
    pub fn display_name(&self) -> &str {
        match self.0.as_str() {
            "en" => "English",
            "fr" => "Français",
            "nl" => "Nederlands",
            other => other,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Locale::new("FR").display_name(), "Français");
        assert_eq!(Locale::new("de").display_name(), "de");
        assert_eq!(Locale::default().as_str(), "en");
    }
}
