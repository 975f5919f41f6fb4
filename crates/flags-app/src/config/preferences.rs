//! User preferences: speech rate and UI language
//!
//! Loaded once at startup from a [`PreferenceStore`] and written back
//! immediately whenever the user changes them. Missing keys are the normal
//! first-run state; unparsable values are logged and replaced by defaults.

use flags_core::prelude::*;
use flags_core::Locale;

use super::store::PreferenceStore;

/// Storage key for the stringified speech rate
pub const SPEECH_RATE_KEY: &str = "speechRate";

/// Storage key for the chosen locale tag
pub const LOCALE_KEY: &str = "appLanguage";

pub const DEFAULT_SPEECH_RATE: f32 = 0.9;
pub const MIN_SPEECH_RATE: f32 = 0.1;
pub const MAX_SPEECH_RATE: f32 = 10.0;

/// Speed presets offered in the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechRate {
    Slow,
    Normal,
    Fast,
}

impl SpeechRate {
    pub const ALL: [SpeechRate; 3] = [SpeechRate::Slow, SpeechRate::Normal, SpeechRate::Fast];

    pub fn value(&self) -> f32 {
        match self {
            SpeechRate::Slow => 0.75,
            SpeechRate::Normal => DEFAULT_SPEECH_RATE,
            SpeechRate::Fast => 1.4,
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            SpeechRate::Slow => "settings.slow",
            SpeechRate::Normal => "settings.normal",
            SpeechRate::Fast => "settings.fast",
        }
    }

    /// The preset matching `rate`, if any
    pub fn from_value(rate: f32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| (preset.value() - rate).abs() < 1e-3)
    }
}

/// Parse a stored rate; rejects non-numbers and values outside the bounds
pub fn parse_speech_rate(value: &str) -> Result<f32> {
    match value.trim().parse::<f32>() {
        Ok(rate) if rate.is_finite() && (MIN_SPEECH_RATE..=MAX_SPEECH_RATE).contains(&rate) => {
            Ok(rate)
        }
        _ => Err(Error::invalid_preference(SPEECH_RATE_KEY, value)),
    }
}

/// Clamp a requested rate into the supported range
pub fn clamp_speech_rate(rate: f32) -> f32 {
    if rate.is_finite() {
        rate.clamp(MIN_SPEECH_RATE, MAX_SPEECH_RATE)
    } else {
        DEFAULT_SPEECH_RATE
    }
}

/// The two persisted scalars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub speech_rate: f32,
    /// `None` until the user has picked a language
    pub locale: Option<Locale>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            speech_rate: DEFAULT_SPEECH_RATE,
            locale: None,
        }
    }
}

/// Read preferences from `store`.
///
/// Never fails: absent keys give defaults and invalid values are logged
/// and ignored.
pub fn load_preferences(store: &impl PreferenceStore) -> Preferences {
    let mut prefs = Preferences::default();

    match store.get(SPEECH_RATE_KEY) {
        Some(raw) => match parse_speech_rate(&raw) {
            Ok(rate) => prefs.speech_rate = rate,
            Err(e) => warn!("Ignoring stored speech rate: {}", e),
        },
        None => debug!("No stored speech rate, using {}", DEFAULT_SPEECH_RATE),
    }

    match store.get(LOCALE_KEY) {
        Some(raw) => match raw.parse::<Locale>() {
            Ok(locale) => prefs.locale = Some(locale),
            Err(e) => warn!("Ignoring stored language: {}", e),
        },
        None => debug!("No stored language, the language picker will be shown"),
    }

    debug!("Loaded preferences: {:?}", prefs);
    prefs
}

pub fn save_speech_rate(store: &mut impl PreferenceStore, rate: f32) -> Result<()> {
    store.set(SPEECH_RATE_KEY, &rate.to_string())
}

pub fn save_locale(store: &mut impl PreferenceStore, locale: Locale) -> Result<()> {
    store.set(LOCALE_KEY, locale.tag())
}
