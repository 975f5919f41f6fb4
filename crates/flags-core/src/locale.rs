//! Supported locales and locale tag parsing
//!
//! [`Locale`] is the closed set of UI languages the application ships
//! message catalogues for. [`LocaleTag`] is the validated form of an
//! arbitrary BCP 47-shaped tag as accepted by the collator and the
//! region-name resolver.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Speech language used when a locale has no mapping
pub const DEFAULT_SPEECH_LANGUAGE: &str = "en-US";

/// Loose BCP 47 shape: language, optional script, optional region, variants,
/// extensions and private use.
static LOCALE_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^([a-z]{2,3})(?:-([a-z]{4}))?(?:-([a-z]{2}|[0-9]{3}))?(?:-(?:[a-z0-9]{5,8}|[0-9][a-z0-9]{3}))*(?:-[a-wy-z0-9](?:-[a-z0-9]{2,8})+)*(?:-x(?:-[a-z0-9]{1,8})+)?$",
    )
    .expect("Invalid locale tag regex")
});

/// A syntactically valid locale tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag {
    language: String,
}

impl LocaleTag {
    pub fn parse(tag: &str) -> Result<Self> {
        let captures = LOCALE_TAG_PATTERN
            .captures(tag.trim())
            .ok_or_else(|| Error::invalid_locale(tag))?;

        let language = captures
            .get(1)
            .map(|m| m.as_str().to_ascii_lowercase())
            .ok_or_else(|| Error::invalid_locale(tag))?;

        Ok(Self { language })
    }

    /// Lower-cased primary language subtag
    pub fn language(&self) -> &str {
        &self.language
    }
}

/// A UI language with a full message catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Sv,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Sv];

    /// The locale whose message catalogue defines the full key set
    pub const BASE: Locale = Locale::En;

    /// Tag stored in preferences and passed to the resolver
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Sv => "sv",
        }
    }

    /// Language tag handed to the speech engine
    pub fn speech_language(&self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Sv => "sv-SE",
        }
    }

    /// Name of the language in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Sv => "Svenska",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Sv => "Swedish",
        }
    }

    /// Flag shown next to the language in pickers
    pub fn glyph(&self) -> &'static str {
        match self {
            Locale::En => "🇬🇧",
            Locale::Sv => "🇸🇪",
        }
    }

    /// Resolve any valid tag whose language is supported (`sv-FI` → `Sv`)
    pub fn from_tag(tag: &str) -> Option<Self> {
        let parsed = LocaleTag::parse(tag).ok()?;
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag() == parsed.language())
    }
}

/// Strict parse, used for stored preference values
impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag() == s)
            .ok_or_else(|| Error::unsupported_locale(s))
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Speech language for an arbitrary locale tag, defaulting to `en-US`
pub fn speech_language_for(tag: &str) -> &'static str {
    Locale::from_tag(tag)
        .map(|locale| locale.speech_language())
        .unwrap_or(DEFAULT_SPEECH_LANGUAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_tags() {
        let tag = LocaleTag::parse("sv").unwrap();
        assert_eq!(tag.language(), "sv");

        let tag = LocaleTag::parse("en-us").unwrap();
        assert_eq!(tag.language(), "en");
    }

    #[test]
    fn test_parse_script_and_region() {
        let tag = LocaleTag::parse("zh-Hant-TW").unwrap();
        assert_eq!(tag.language(), "zh");
    }

    #[test]
    fn test_parse_rejects_malformed_tags() {
        for tag in ["", "e", "english", "en_US", "en--US", "12", "en-US-"] {
            assert!(
                matches!(LocaleTag::parse(tag), Err(Error::InvalidLocale { .. })),
                "{tag:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_speech_language_mapping() {
        assert_eq!(Locale::En.speech_language(), "en-US");
        assert_eq!(Locale::Sv.speech_language(), "sv-SE");
        assert_eq!(speech_language_for("sv"), "sv-SE");
        assert_eq!(speech_language_for("sv-FI"), "sv-SE");
        assert_eq!(speech_language_for("de"), "en-US");
        assert_eq!(speech_language_for("not a tag"), "en-US");
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("sv".parse::<Locale>().unwrap(), Locale::Sv);
        assert!("sv-SE".parse::<Locale>().is_err());
        assert!("SV".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_from_tag_is_lenient() {
        assert_eq!(Locale::from_tag("SV-se"), Some(Locale::Sv));
        assert_eq!(Locale::from_tag("en-GB"), Some(Locale::En));
        assert_eq!(Locale::from_tag("fr"), None);
    }

    #[test]
    fn test_display_is_tag() {
        assert_eq!(Locale::Sv.to_string(), "sv");
        assert_eq!(Locale::default(), Locale::En);
    }
}
