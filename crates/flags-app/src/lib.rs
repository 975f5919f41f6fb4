//! flags-app - Application state and capabilities for World Flags
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine that owns preferences and platform capabilities,
//! and the speech and fullscreen capability wrappers. Platform access goes
//! through traits so the crate runs unchanged in tests and in the browser.

pub mod capability;
pub mod config;
pub mod engine;
pub mod handler;
pub mod message;
pub mod state;

// Re-export primary types
pub use capability::{
    Fullscreen, FullscreenApi, FullscreenPlatform, Speech, SpeechEvent, SpeechEventKind,
    SpeechPlatform, SpeechStatus, Utterance, UtteranceId, VendorSupport,
};
pub use config::{MemoryStore, PreferenceStore, Preferences, SpeechRate};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{AppState, FullscreenState, UiMode};
