//! Message dispatch between the browser and the engine
//!
//! Every input (clicks, key presses, speech and fullscreen notifications)
//! becomes a [`Message`]. Messages are queued and drained one at a time, so
//! a platform callback that fires while the engine is busy is processed
//! after the current message instead of re-entering it. After each drain
//! the state snapshot is published to a reactive signal.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use flags_app::{
    AppState, Engine, FullscreenPlatform, Message, PreferenceStore, SpeechPlatform,
};
use flags_core::prelude::*;
use leptos::prelude::*;

use crate::platform::{LocalStorageStore, WebFullscreen, WebSpeech};

/// Engine slot plus the messages waiting for it
pub struct EngineCell<St, S, F>
where
    St: PreferenceStore,
    S: SpeechPlatform,
    F: FullscreenPlatform,
{
    /// `None` after shutdown
    engine: RefCell<Option<Engine<St, S, F>>>,
    queue: RefCell<VecDeque<Message>>,
}

impl<St, S, F> EngineCell<St, S, F>
where
    St: PreferenceStore,
    S: SpeechPlatform,
    F: FullscreenPlatform,
{
    pub fn new(engine: Engine<St, S, F>) -> Self {
        Self {
            engine: RefCell::new(Some(engine)),
            queue: RefCell::new(VecDeque::new()),
        }
    }

    /// Queue `message` and drain the queue in arrival order.
    ///
    /// Returns the state after the drain. Returns `None` when a drain is
    /// already running further up the stack (it will process the message)
    /// or after shutdown.
    pub fn dispatch(&self, message: Message) -> Option<AppState> {
        self.queue.borrow_mut().push_back(message);

        let Ok(mut slot) = self.engine.try_borrow_mut() else {
            return None;
        };
        let Some(engine) = slot.as_mut() else {
            self.queue.borrow_mut().clear();
            return None;
        };

        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(message) = next else {
                break;
            };
            engine.process_message(message);
        }

        Some(engine.state().clone())
    }

    /// Drop the engine and any queued messages. Returns whether an engine
    /// was running.
    pub fn shutdown(&self) -> bool {
        let engine = match self.engine.try_borrow_mut() {
            Ok(mut slot) => slot.take(),
            Err(_) => {
                warn!("Shutdown requested while a message is in flight");
                return false;
            }
        };
        self.queue.borrow_mut().clear();

        // Dropped here, after the slot is released, so teardown callbacks
        // find the cell empty
        engine.is_some()
    }
}

type WebEngineCell = EngineCell<LocalStorageStore, WebSpeech, WebFullscreen>;

struct Inner {
    cell: WebEngineCell,
    state: RwSignal<AppState>,
}

impl Inner {
    fn dispatch(&self, message: Message) {
        let Some(snapshot) = self.cell.dispatch(message) else {
            return;
        };
        if self.state.with_untracked(|current| *current != snapshot) {
            self.state.set(snapshot);
        }
    }
}

/// Owns the engine; platform callbacks hold weak references back to it
pub struct Dispatcher {
    inner: Rc<Inner>,
}

impl Dispatcher {
    pub fn new() -> Self {
        let inner = Rc::new_cyclic(|weak: &Weak<Inner>| {
            let on_speech = weak.clone();
            let speech = WebSpeech::new(move |event| {
                if let Some(inner) = on_speech.upgrade() {
                    inner.dispatch(Message::Speech(event));
                }
            });

            let on_fullscreen = weak.clone();
            let fullscreen = WebFullscreen::new(move || {
                if let Some(inner) = on_fullscreen.upgrade() {
                    inner.dispatch(Message::FullscreenChanged);
                }
            });

            let engine = Engine::new(LocalStorageStore::new(), speech, fullscreen);
            let state = RwSignal::new(engine.state().clone());

            Inner {
                cell: EngineCell::new(engine),
                state,
            }
        });

        Self { inner }
    }

    pub fn state(&self) -> RwSignal<AppState> {
        self.inner.state
    }

    pub fn dispatch(&self, message: Message) {
        self.inner.dispatch(message);
    }

    /// Drop the engine; cancels speech and detaches fullscreen listeners
    pub fn shutdown(&self) {
        if self.inner.cell.shutdown() {
            info!("Engine shut down");
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Copyable handle to the dispatcher, provided as context
#[derive(Clone, Copy)]
pub struct Dispatch {
    dispatcher: StoredValue<Dispatcher, LocalStorage>,
    state: RwSignal<AppState>,
}

impl Dispatch {
    pub fn new(dispatcher: Dispatcher) -> Self {
        let state = dispatcher.state();
        Self {
            dispatcher: StoredValue::new_local(dispatcher),
            state,
        }
    }

    /// Read-only view of the published state
    pub fn state(&self) -> ReadSignal<AppState> {
        self.state.read_only()
    }

    pub fn send(&self, message: Message) {
        if self
            .dispatcher
            .try_with_value(|dispatcher| dispatcher.dispatch(message))
            .is_none()
        {
            debug!("Message dropped after unmount");
        }
    }

    pub fn shutdown(&self) {
        self.dispatcher.try_with_value(Dispatcher::shutdown);
    }
}

/// The [`Dispatch`] provided by the root component
pub fn use_dispatch() -> Dispatch {
    expect_context::<Dispatch>()
}
