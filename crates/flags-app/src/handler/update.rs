//! Main update function - handles state transitions (TEA pattern)

use flags_core::prelude::*;
use flags_core::Catalogue;

use crate::config::clamp_speech_rate;
use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // Preferences
        // ─────────────────────────────────────────────────────────
        Message::ChooseLocale(locale) => {
            state.locale = Some(locale);
            if state.ui_mode == UiMode::LanguagePicker {
                state.ui_mode = UiMode::Grid;
            }
            UpdateResult::action(UpdateAction::PersistLocale(locale))
        }

        Message::SetSpeechRate(rate) => {
            if !rate.is_finite() {
                warn!("Ignoring non-finite speech rate {}", rate);
                return UpdateResult::none();
            }
            let rate = clamp_speech_rate(rate);
            state.speech_rate = rate;
            UpdateResult::action(UpdateAction::PersistSpeechRate(rate))
        }

        // ─────────────────────────────────────────────────────────
        // Grid
        // ─────────────────────────────────────────────────────────
        Message::SetFilterMode(mode) => {
            state.filter_mode = mode;
            UpdateResult::none()
        }

        Message::ToggleFilterBar => {
            state.filter_bar_visible = !state.filter_bar_visible;
            UpdateResult::none()
        }

        Message::OpenSettings => {
            if state.ui_mode == UiMode::Grid {
                state.ui_mode = UiMode::Settings;
            }
            UpdateResult::none()
        }

        Message::CloseSettings => {
            if state.ui_mode == UiMode::Settings {
                state.ui_mode = UiMode::Grid;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Detail
        // ─────────────────────────────────────────────────────────
        Message::SelectCountry(code) => handle_select_country(state, &code),

        Message::CloseDetail => {
            if state.ui_mode != UiMode::Detail {
                return UpdateResult::none();
            }
            state.ui_mode = UiMode::Grid;
            state.selected = None;
            UpdateResult::action(UpdateAction::CancelSpeech)
        }

        Message::SpeakAgain => match (state.ui_mode, state.selected_record()) {
            (UiMode::Detail, Some(record)) => UpdateResult::action(UpdateAction::Speak {
                text: state.narration(record),
            }),
            _ => UpdateResult::none(),
        },

        Message::Dismiss => match state.ui_mode {
            UiMode::Detail => UpdateResult::message(Message::CloseDetail),
            UiMode::Settings => UpdateResult::message(Message::CloseSettings),
            UiMode::Grid if state.filter_bar_visible => {
                state.filter_bar_visible = false;
                UpdateResult::none()
            }
            UiMode::Grid | UiMode::LanguagePicker => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Platform Notifications
        // ─────────────────────────────────────────────────────────
        Message::Speech(event) => UpdateResult::action(UpdateAction::SpeechNotification(event)),

        Message::ToggleFullscreen => {
            if !state.fullscreen.is_supported {
                debug!("Fullscreen toggle ignored, unsupported");
                return UpdateResult::none();
            }
            UpdateResult::action(UpdateAction::ToggleFullscreen)
        }

        Message::FullscreenChanged => UpdateResult::action(UpdateAction::SyncFullscreen),
    }
}

fn handle_select_country(state: &mut AppState, code: &str) -> UpdateResult {
    if !matches!(state.ui_mode, UiMode::Grid | UiMode::Detail) {
        return UpdateResult::none();
    }

    let Some(record) = Catalogue::builtin().get(code) else {
        warn!("Selected unknown country {:?}", code);
        return UpdateResult::none();
    };

    state.selected = Some(record.code.to_string());
    state.ui_mode = UiMode::Detail;
    UpdateResult::action(UpdateAction::Speak {
        text: state.narration(record),
    })
}
