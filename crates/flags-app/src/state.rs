//! Application state (Model in TEA pattern)

use flags_core::{
    localized_name, resolve_message, Catalogue, CountryRecord, FilterMode, Locale,
};

use crate::config::Preferences;

/// Which screen or overlay has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// First run: no language chosen yet
    #[default]
    LanguagePicker,
    Grid,
    /// Detail sheet for the selected country
    Detail,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FullscreenState {
    pub is_fullscreen: bool,
    pub is_supported: bool,
}

/// Complete application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// `None` until the user picks a language
    pub locale: Option<Locale>,
    pub speech_rate: f32,
    pub filter_mode: FilterMode,
    pub filter_bar_visible: bool,
    pub ui_mode: UiMode,
    /// Region code of the country shown in the detail sheet
    pub selected: Option<String>,
    pub speaking: bool,
    pub speech_supported: bool,
    pub fullscreen: FullscreenState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_preferences(&Preferences::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferences(prefs: &Preferences) -> Self {
        Self {
            locale: prefs.locale,
            speech_rate: prefs.speech_rate,
            filter_mode: FilterMode::default(),
            filter_bar_visible: false,
            ui_mode: if prefs.locale.is_some() {
                UiMode::Grid
            } else {
                UiMode::LanguagePicker
            },
            selected: None,
            speaking: false,
            speech_supported: false,
            fullscreen: FullscreenState::default(),
        }
    }

    /// Chosen locale, or English while the picker is still showing
    pub fn effective_locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn selected_record(&self) -> Option<&'static CountryRecord> {
        self.selected
            .as_deref()
            .and_then(|code| Catalogue::builtin().get(code))
    }

    /// Text narrated for `record` in the current locale
    pub fn narration(&self, record: &CountryRecord) -> String {
        let locale = self.effective_locale();
        let name = localized_name(record, locale.tag());
        resolve_message(
            locale,
            "modal.speech.text",
            &[("name", &name), ("capital", record.capital)],
        )
    }

    pub fn is_overlay_open(&self) -> bool {
        matches!(self.ui_mode, UiMode::Detail | UiMode::Settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_shows_language_picker() {
        let state = AppState::new();
        assert_eq!(state.ui_mode, UiMode::LanguagePicker);
        assert_eq!(state.effective_locale(), Locale::En);
        assert_eq!(state.speech_rate, 0.9);
    }

    #[test]
    fn test_stored_locale_skips_picker() {
        let prefs = Preferences {
            speech_rate: 1.4,
            locale: Some(Locale::Sv),
        };
        let state = AppState::with_preferences(&prefs);
        assert_eq!(state.ui_mode, UiMode::Grid);
        assert_eq!(state.speech_rate, 1.4);
    }

    #[test]
    fn test_narration_uses_localized_name() {
        let mut state = AppState::new();
        let sweden = Catalogue::builtin().get("SE").unwrap();

        assert_eq!(
            state.narration(sweden),
            "Country Sweden. Its capital is Stockholm."
        );

        state.locale = Some(Locale::Sv);
        assert_eq!(
            state.narration(sweden),
            "Land Sverige. Dess huvudstad är Stockholm."
        );
    }

    #[test]
    fn test_selected_record_lookup() {
        let mut state = AppState::new();
        assert!(state.selected_record().is_none());

        state.selected = Some("JP".into());
        assert_eq!(state.selected_record().map(|r| r.capital), Some("Tokyo"));
    }
}
