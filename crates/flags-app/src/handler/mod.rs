//! Handler module - TEA update function
//!
//! `update` is pure: it mutates [`AppState`](crate::state::AppState) and
//! describes side effects as [`UpdateAction`]s for the engine to perform.

pub(crate) mod update;


use flags_core::Locale;

use crate::capability::SpeechEvent;
use crate::message::Message;

pub use update::update;

/// Side effects the engine performs after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Cancel any narration, then narrate `text`
    Speak { text: String },

    CancelSpeech,

    /// Route a platform notification to the speech capability
    SpeechNotification(SpeechEvent),

    ToggleFullscreen,

    /// Re-read the fullscreen flag from the platform
    SyncFullscreen,

    PersistLocale(Locale),

    PersistSpeechRate(f32),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the engine to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
