//! Message types for the application (TEA pattern)

use flags_core::{FilterMode, Locale};

use crate::capability::SpeechEvent;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Preferences
    // ─────────────────────────────────────────────────────────
    /// Language picked in the picker or the settings panel
    ChooseLocale(Locale),
    SetSpeechRate(f32),

    // ─────────────────────────────────────────────────────────
    // Grid
    // ─────────────────────────────────────────────────────────
    SetFilterMode(FilterMode),
    ToggleFilterBar,
    OpenSettings,
    CloseSettings,

    // ─────────────────────────────────────────────────────────
    // Detail
    // ─────────────────────────────────────────────────────────
    /// Open the detail sheet for a region code and narrate it
    SelectCountry(String),
    CloseDetail,
    SpeakAgain,

    /// Escape: close the topmost overlay
    Dismiss,

    // ─────────────────────────────────────────────────────────
    // Platform Notifications
    // ─────────────────────────────────────────────────────────
    Speech(SpeechEvent),
    ToggleFullscreen,
    /// The platform reported a fullscreen change
    FullscreenChanged,
}
