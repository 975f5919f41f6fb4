//! Platform capabilities
//!
//! Each capability wraps a narrow platform trait (probe support, request an
//! action, observe changes) and degrades gracefully when the platform lacks
//! the facility.

pub mod fullscreen;
pub mod speech;

pub use fullscreen::{Fullscreen, FullscreenApi, FullscreenPlatform, VendorSupport};
pub use speech::{
    Speech, SpeechEvent, SpeechEventKind, SpeechPlatform, SpeechStatus, Utterance, UtteranceId,
    SPEECH_PITCH,
};
