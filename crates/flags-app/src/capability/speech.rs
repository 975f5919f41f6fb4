//! Speech capability
//!
//! [`Speech`] wraps a [`SpeechPlatform`] with the cancel-then-speak rule: at
//! most one utterance is ever active, and every `speak()` cancels whatever
//! came before it. The speaking flag follows platform notifications only.
//!
//! ```text
//! Idle ──speak()──▶ (pending) ──Started──▶ Speaking
//!   ▲                    │                      │
//!   └── Ended / Failed / cancel() / superseded ─┘
//! ```

use std::fmt;

use flags_core::prelude::*;
use flags_core::DEFAULT_SPEECH_LANGUAGE;

use crate::config::{clamp_speech_rate, DEFAULT_SPEECH_RATE};

/// Pitch used for every utterance
pub const SPEECH_PITCH: f32 = 1.1;

/// Identifies one utterance so late notifications can be matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UtteranceId(u64);

impl UtteranceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UtteranceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "utterance-{}", self.0)
    }
}

/// One narration request handed to the platform
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub id: UtteranceId,
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    /// BCP 47 tag such as `sv-SE`
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEventKind {
    Started,
    Ended,
    Failed { error: String },
}

/// Notification from the platform about an utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechEvent {
    pub id: UtteranceId,
    pub kind: SpeechEventKind,
}

impl SpeechEvent {
    pub fn started(id: UtteranceId) -> Self {
        Self {
            id,
            kind: SpeechEventKind::Started,
        }
    }

    pub fn ended(id: UtteranceId) -> Self {
        Self {
            id,
            kind: SpeechEventKind::Ended,
        }
    }

    pub fn failed(id: UtteranceId, error: impl Into<String>) -> Self {
        Self {
            id,
            kind: SpeechEventKind::Failed {
                error: error.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeechStatus {
    #[default]
    Idle,
    Speaking,
}

/// Platform text-to-speech facility.
///
/// `speak` is fire-and-forget; progress arrives later as [`SpeechEvent`]s
/// carrying the utterance id.
#[cfg_attr(test, mockall::automock)]
pub trait SpeechPlatform {
    /// Capability probe; no side effects
    fn is_supported(&self) -> bool;

    fn speak(&mut self, utterance: &Utterance) -> Result<()>;

    /// Stop any in-flight utterance; a no-op when idle
    fn cancel(&mut self);
}

/// Cancel-then-speak wrapper with a speaking/idle flag
pub struct Speech<P: SpeechPlatform> {
    platform: P,
    supported: bool,
    rate: f32,
    language: String,
    status: SpeechStatus,
    current: Option<UtteranceId>,
    next_id: u64,
}

impl<P: SpeechPlatform> Speech<P> {
    pub fn new(platform: P) -> Self {
        let supported = platform.is_supported();
        if !supported {
            info!("Speech synthesis not available, narration disabled");
        }
        Self {
            platform,
            supported,
            rate: DEFAULT_SPEECH_RATE,
            language: DEFAULT_SPEECH_LANGUAGE.to_string(),
            status: SpeechStatus::Idle,
            current: None,
            next_id: 1,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn status(&self) -> SpeechStatus {
        self.status
    }

    pub fn is_speaking(&self) -> bool {
        self.status == SpeechStatus::Speaking
    }

    /// The utterance notifications are currently accepted for
    pub fn current(&self) -> Option<UtteranceId> {
        self.current
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Applies to the next `speak()`
    pub fn set_rate(&mut self, rate: f32) {
        self.rate = clamp_speech_rate(rate);
    }

    /// Applies to the next `speak()`
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Cancel anything in flight, then narrate `text`.
    ///
    /// Returns the new utterance id, or `None` when speech is unavailable
    /// or the platform refused the request.
    pub fn speak(&mut self, text: &str) -> Option<UtteranceId> {
        if !self.supported {
            debug!("Speech unsupported, not speaking {:?}", text);
            return None;
        }

        self.cancel();

        let id = UtteranceId::new(self.next_id);
        self.next_id += 1;

        let utterance = Utterance {
            id,
            text: text.to_string(),
            rate: self.rate,
            pitch: SPEECH_PITCH,
            language: self.language.clone(),
        };

        match self.platform.speak(&utterance) {
            Ok(()) => {
                debug!("Queued {} ({}, rate {})", id, utterance.language, utterance.rate);
                self.current = Some(id);
                Some(id)
            }
            Err(e) => {
                warn!("Speech request failed: {}", e);
                None
            }
        }
    }

    /// Stop any utterance and force Idle. Idempotent.
    pub fn cancel(&mut self) {
        if self.supported {
            self.platform.cancel();
        }
        self.current = None;
        self.status = SpeechStatus::Idle;
    }

    /// Apply a platform notification.
    ///
    /// Returns `false` for notifications about superseded utterances, which
    /// are ignored.
    pub fn handle_event(&mut self, event: &SpeechEvent) -> bool {
        if self.current != Some(event.id) {
            trace!("Ignoring {:?} for stale {}", event.kind, event.id);
            return false;
        }

        match &event.kind {
            SpeechEventKind::Started => {
                self.status = SpeechStatus::Speaking;
            }
            SpeechEventKind::Ended => {
                self.status = SpeechStatus::Idle;
                self.current = None;
            }
            SpeechEventKind::Failed { error } => {
                debug!("{} failed: {}", event.id, error);
                self.status = SpeechStatus::Idle;
                self.current = None;
            }
        }
        true
    }
}

impl<P: SpeechPlatform> Drop for Speech<P> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<P: SpeechPlatform> fmt::Debug for Speech<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speech")
            .field("supported", &self.supported)
            .field("rate", &self.rate)
            .field("language", &self.language)
            .field("status", &self.status)
            .field("current", &self.current)
            .finish()
    }
}
