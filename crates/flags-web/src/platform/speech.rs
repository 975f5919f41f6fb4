//! Web Speech API adapter

use std::rc::Rc;

use flags_app::{SpeechEvent, SpeechPlatform, Utterance, UtteranceId};
use flags_core::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    SpeechSynthesis, SpeechSynthesisErrorEvent, SpeechSynthesisEvent, SpeechSynthesisUtterance,
};

use super::property;

type SpeechSink = Rc<dyn Fn(SpeechEvent)>;

/// Utterance in flight plus the callbacks attached to it
struct ActiveUtterance {
    utterance: SpeechSynthesisUtterance,
    _on_start: Closure<dyn FnMut(SpeechSynthesisEvent)>,
    _on_end: Closure<dyn FnMut(SpeechSynthesisEvent)>,
    _on_error: Closure<dyn FnMut(SpeechSynthesisErrorEvent)>,
}

impl ActiveUtterance {
    /// Detach the callbacks so the browser never calls into dropped closures
    fn detach(&self) {
        self.utterance.set_onstart(None);
        self.utterance.set_onend(None);
        self.utterance.set_onerror(None);
    }
}

/// `window.speechSynthesis` behind [`SpeechPlatform`].
///
/// Progress callbacks are forwarded to `sink` as [`SpeechEvent`]s.
pub struct WebSpeech {
    synth: Option<SpeechSynthesis>,
    sink: SpeechSink,
    active: Option<ActiveUtterance>,
}

impl WebSpeech {
    pub fn new(sink: impl Fn(SpeechEvent) + 'static) -> Self {
        let synth = web_sys::window()
            .and_then(|window| property(&window, "speechSynthesis"))
            .and_then(|value| value.dyn_into::<SpeechSynthesis>().ok());

        Self {
            synth,
            sink: Rc::new(sink),
            active: None,
        }
    }

    fn release_active(&mut self) {
        if let Some(active) = self.active.take() {
            active.detach();
        }
    }

    fn attach(&self, utterance: SpeechSynthesisUtterance, id: UtteranceId) -> ActiveUtterance {
        let sink = Rc::clone(&self.sink);
        let on_start = Closure::<dyn FnMut(SpeechSynthesisEvent)>::new(move |_| {
            sink(SpeechEvent::started(id));
        });

        let sink = Rc::clone(&self.sink);
        let on_end = Closure::<dyn FnMut(SpeechSynthesisEvent)>::new(move |_| {
            sink(SpeechEvent::ended(id));
        });

        let sink = Rc::clone(&self.sink);
        let on_error = Closure::<dyn FnMut(SpeechSynthesisErrorEvent)>::new(
            move |event: SpeechSynthesisErrorEvent| {
                sink(SpeechEvent::failed(id, format!("{:?}", event.error())));
            },
        );

        utterance.set_onstart(Some(on_start.as_ref().unchecked_ref()));
        utterance.set_onend(Some(on_end.as_ref().unchecked_ref()));
        utterance.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        ActiveUtterance {
            utterance,
            _on_start: on_start,
            _on_end: on_end,
            _on_error: on_error,
        }
    }
}

impl SpeechPlatform for WebSpeech {
    fn is_supported(&self) -> bool {
        self.synth.is_some()
    }

    fn speak(&mut self, request: &Utterance) -> Result<()> {
        let synth = self
            .synth
            .clone()
            .ok_or(Error::unsupported("speech synthesis"))?;

        let utterance = SpeechSynthesisUtterance::new_with_text(&request.text)
            .map_err(|err| Error::speech(format!("creating utterance: {err:?}")))?;
        utterance.set_rate(request.rate);
        utterance.set_pitch(request.pitch);
        utterance.set_lang(&request.language);

        self.release_active();
        let active = self.attach(utterance, request.id);
        synth.speak(&active.utterance);
        self.active = Some(active);

        trace!("Speaking utterance {} ({})", request.id, request.language);
        Ok(())
    }

    fn cancel(&mut self) {
        self.release_active();
        if let Some(synth) = &self.synth {
            synth.cancel();
        }
    }
}

impl Drop for WebSpeech {
    fn drop(&mut self) {
        self.release_active();
    }
}
