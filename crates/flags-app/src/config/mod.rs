//! Preferences and their storage
//!
//! - `preferences`: the persisted scalars, presets and load/save helpers
//! - `store`: the [`PreferenceStore`] trait and an in-memory implementation

pub mod preferences;
pub mod store;

pub use preferences::{
    clamp_speech_rate, load_preferences, parse_speech_rate, save_locale, save_speech_rate,
    Preferences, SpeechRate, DEFAULT_SPEECH_RATE, LOCALE_KEY, MAX_SPEECH_RATE, MIN_SPEECH_RATE,
    SPEECH_RATE_KEY,
};
pub use store::{MemoryStore, PreferenceStore};
