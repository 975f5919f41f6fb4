//! Engine - owns state, preferences and capabilities
//!
//! The Engine runs messages through the TEA update cycle and performs the
//! resulting [`UpdateAction`]s against the preference store and the speech
//! and fullscreen capabilities. After each message it copies capability
//! state (speaking, fullscreen) back into [`AppState`], which stays the
//! single source of truth for the presentation layer.

use flags_core::prelude::*;
use flags_core::{messages, Catalogue};

use crate::capability::{Fullscreen, FullscreenPlatform, Speech, SpeechPlatform};
use crate::config::{load_preferences, save_locale, save_speech_rate, PreferenceStore};
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::{AppState, FullscreenState};

/// Orchestration engine for World Flags.
pub struct Engine<St, S, F>
where
    St: PreferenceStore,
    S: SpeechPlatform,
    F: FullscreenPlatform,
{
    state: AppState,
    store: St,
    speech: Speech<S>,
    fullscreen: Fullscreen<F>,
}

impl<St, S, F> Engine<St, S, F>
where
    St: PreferenceStore,
    S: SpeechPlatform,
    F: FullscreenPlatform,
{
    /// Load preferences, probe capabilities and check static data.
    pub fn new(store: St, speech: S, fullscreen: F) -> Self {
        check_static_data();

        let prefs = load_preferences(&store);
        let speech = Speech::new(speech);
        let fullscreen = Fullscreen::new(fullscreen);

        let mut state = AppState::with_preferences(&prefs);
        state.speech_supported = speech.is_supported();
        state.fullscreen = FullscreenState {
            is_fullscreen: fullscreen.is_fullscreen(),
            is_supported: fullscreen.is_supported(),
        };

        let mut engine = Self {
            state,
            store,
            speech,
            fullscreen,
        };
        engine.sync_capabilities();

        info!(
            "Engine ready: locale {:?}, speech {}, fullscreen {}",
            engine.state.locale,
            if engine.state.speech_supported { "on" } else { "off" },
            if engine.state.fullscreen.is_supported { "on" } else { "off" },
        );
        engine
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn speech(&self) -> &Speech<S> {
        &self.speech
    }

    pub fn fullscreen(&self) -> &Fullscreen<F> {
        &self.fullscreen
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Follow-up messages are processed in the same call.
    pub fn process_message(&mut self, message: Message) {
        let mut msg = Some(message);
        while let Some(m) = msg {
            trace!("Processing {:?}", m);
            let result = handler::update(&mut self.state, m);

            if let Some(action) = result.action {
                self.handle_action(action);
            }
            msg = result.message;
        }

        self.sync_capabilities();
    }

    fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::Speak { text } => {
                // Rate and language must reflect the latest state
                self.sync_capabilities();
                self.speech.speak(&text);
            }
            UpdateAction::CancelSpeech => self.speech.cancel(),
            UpdateAction::SpeechNotification(event) => {
                self.speech.handle_event(&event);
            }
            UpdateAction::ToggleFullscreen => self.fullscreen.toggle(),
            UpdateAction::SyncFullscreen => {
                self.fullscreen.on_change();
            }
            UpdateAction::PersistLocale(locale) => {
                save_locale(&mut self.store, locale).absorb("Saving language");
            }
            UpdateAction::PersistSpeechRate(rate) => {
                save_speech_rate(&mut self.store, rate).absorb("Saving speech rate");
            }
        }
    }

    /// Push configuration into the capabilities and pull their flags back
    fn sync_capabilities(&mut self) {
        self.speech.set_rate(self.state.speech_rate);
        self.speech
            .set_language(self.state.effective_locale().speech_language());

        self.state.speaking = self.speech.is_speaking();
        self.state.fullscreen.is_fullscreen = self.fullscreen.is_fullscreen();
    }
}

/// Log data-integrity defects once at startup; never fatal
fn check_static_data() {
    Catalogue::builtin()
        .validate()
        .absorb("Checking catalogue");
    messages::validate().absorb("Checking message catalogues");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{
        FullscreenApi, SpeechEvent, SpeechStatus, Utterance, VendorSupport,
    };
    use crate::config::MemoryStore;
    use crate::state::UiMode;
    use flags_core::{FilterMode, Locale};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct SpeechLog {
        spoken: Vec<Utterance>,
        cancels: usize,
    }

    struct FakeSpeech(Rc<RefCell<SpeechLog>>);

    impl SpeechPlatform for FakeSpeech {
        fn is_supported(&self) -> bool {
            true
        }

        fn speak(&mut self, utterance: &Utterance) -> Result<()> {
            self.0.borrow_mut().spoken.push(utterance.clone());
            Ok(())
        }

        fn cancel(&mut self) {
            self.0.borrow_mut().cancels += 1;
        }
    }

    #[derive(Default)]
    struct ScreenLog {
        element: Cell<bool>,
        requests: Cell<usize>,
        exits: Cell<usize>,
    }

    struct FakeScreen(Rc<ScreenLog>);

    impl FullscreenPlatform for FakeScreen {
        fn support(&self) -> VendorSupport {
            VendorSupport {
                standard: true,
                webkit: false,
            }
        }

        fn is_fullscreen(&self) -> bool {
            self.0.element.get()
        }

        fn request(&mut self, _api: FullscreenApi) -> Result<()> {
            self.0.requests.set(self.0.requests.get() + 1);
            Ok(())
        }

        fn exit(&mut self, _api: FullscreenApi) -> Result<()> {
            self.0.exits.set(self.0.exits.get() + 1);
            Ok(())
        }

        fn subscribe(&mut self) -> Result<()> {
            Ok(())
        }

        fn unsubscribe(&mut self) {}
    }

    type TestEngine = Engine<MemoryStore, FakeSpeech, FakeScreen>;

    fn engine_with(store: MemoryStore) -> (TestEngine, Rc<RefCell<SpeechLog>>, Rc<ScreenLog>) {
        let speech = Rc::new(RefCell::new(SpeechLog::default()));
        let screen = Rc::new(ScreenLog::default());
        let engine = Engine::new(
            store,
            FakeSpeech(Rc::clone(&speech)),
            FakeScreen(Rc::clone(&screen)),
        );
        (engine, speech, screen)
    }

    #[test]
    fn test_first_run_then_choose_language() {
        let (mut engine, _, _) = engine_with(MemoryStore::new());
        assert_eq!(engine.state().ui_mode, UiMode::LanguagePicker);
        assert!(engine.state().speech_supported);
        assert!(engine.state().fullscreen.is_supported);

        engine.process_message(Message::ChooseLocale(Locale::Sv));

        assert_eq!(engine.state().ui_mode, UiMode::Grid);
        assert_eq!(engine.store().get("appLanguage").as_deref(), Some("sv"));
        assert_eq!(engine.speech().language(), "sv-SE");
    }

    #[test]
    fn test_stored_preferences_configure_speech() {
        let store = MemoryStore::with_values([("speechRate", "1.4"), ("appLanguage", "sv")]);
        let (mut engine, speech, _) = engine_with(store);

        engine.process_message(Message::SelectCountry("SE".into()));

        let log = speech.borrow();
        assert_eq!(log.spoken.len(), 1);
        assert_eq!(log.spoken[0].rate, 1.4);
        assert_eq!(log.spoken[0].language, "sv-SE");
        assert_eq!(log.spoken[0].text, "Land Sverige. Dess huvudstad är Stockholm.");
    }

    #[test]
    fn test_rate_change_applies_to_next_narration() {
        let store = MemoryStore::with_values([("appLanguage", "en")]);
        let (mut engine, speech, _) = engine_with(store);

        engine.process_message(Message::SetSpeechRate(0.75));
        engine.process_message(Message::SelectCountry("JP".into()));

        assert_eq!(speech.borrow().spoken[0].rate, 0.75);
        assert_eq!(engine.store().get("speechRate").as_deref(), Some("0.75"));
    }

    #[test]
    fn test_speaking_flag_tracks_notifications() {
        let store = MemoryStore::with_values([("appLanguage", "en")]);
        let (mut engine, speech, _) = engine_with(store);

        engine.process_message(Message::SelectCountry("JP".into()));
        let id = speech.borrow().spoken[0].id;
        assert!(!engine.state().speaking);

        engine.process_message(Message::Speech(SpeechEvent::started(id)));
        assert!(engine.state().speaking);

        engine.process_message(Message::Speech(SpeechEvent::ended(id)));
        assert!(!engine.state().speaking);
    }

    #[test]
    fn test_dismiss_detail_cancels_speech() {
        let store = MemoryStore::with_values([("appLanguage", "en")]);
        let (mut engine, speech, _) = engine_with(store);

        engine.process_message(Message::SelectCountry("JP".into()));
        let id = speech.borrow().spoken[0].id;
        engine.process_message(Message::Speech(SpeechEvent::started(id)));
        let cancels = speech.borrow().cancels;

        engine.process_message(Message::Dismiss);

        assert_eq!(engine.state().ui_mode, UiMode::Grid);
        assert!(!engine.state().speaking);
        assert_eq!(engine.speech().status(), SpeechStatus::Idle);
        assert_eq!(speech.borrow().cancels, cancels + 1);
    }

    #[test]
    fn test_stale_notification_does_not_clear_new_narration() {
        let store = MemoryStore::with_values([("appLanguage", "en")]);
        let (mut engine, speech, _) = engine_with(store);

        engine.process_message(Message::SelectCountry("JP".into()));
        engine.process_message(Message::SpeakAgain);
        let (first, second) = {
            let log = speech.borrow();
            (log.spoken[0].id, log.spoken[1].id)
        };

        engine.process_message(Message::Speech(SpeechEvent::started(second)));
        engine.process_message(Message::Speech(SpeechEvent::failed(first, "interrupted")));

        assert!(engine.state().speaking);
        assert_eq!(engine.speech().current(), Some(second));
    }

    #[test]
    fn test_fullscreen_flag_follows_platform_notifications() {
        let store = MemoryStore::with_values([("appLanguage", "en")]);
        let (mut engine, _, screen) = engine_with(store);

        engine.process_message(Message::ToggleFullscreen);
        assert_eq!(screen.requests.get(), 1);
        assert!(!engine.state().fullscreen.is_fullscreen);

        screen.element.set(true);
        engine.process_message(Message::FullscreenChanged);
        assert!(engine.state().fullscreen.is_fullscreen);

        engine.process_message(Message::ToggleFullscreen);
        assert_eq!(screen.exits.get(), 1);
        assert!(engine.state().fullscreen.is_fullscreen);

        screen.element.set(false);
        engine.process_message(Message::FullscreenChanged);
        assert!(!engine.state().fullscreen.is_fullscreen);
    }

    #[test]
    fn test_storage_failure_is_absorbed() {
        let (mut engine, _, _) = engine_with(MemoryStore::read_only());

        engine.process_message(Message::ChooseLocale(Locale::En));
        engine.process_message(Message::SetSpeechRate(1.4));

        assert_eq!(engine.state().locale, Some(Locale::En));
        assert_eq!(engine.state().speech_rate, 1.4);
        assert_eq!(engine.store().get("speechRate"), None);
    }

    #[test]
    fn test_filter_mode_is_not_persisted() {
        let store = MemoryStore::with_values([("appLanguage", "en")]);
        let (mut engine, _, _) = engine_with(store);

        engine.process_message(Message::SetFilterMode(FilterMode::Alphabetical));

        assert_eq!(engine.state().filter_mode, FilterMode::Alphabetical);
        assert_eq!(engine.store().get("filterMode"), None);
    }
}
