//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Broad failure classes.
///
/// None of them is fatal: each is absorbed at the boundary that owns the
/// failing data or platform facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or unsupported input that has a local fallback.
    DegradedData,
    /// The platform does not offer the facility at all.
    CapabilityAbsent,
    /// The platform offers the facility but the operation failed.
    OperationFailed,
    /// Durable preference storage failed.
    Storage,
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Data Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid locale tag: {tag:?}")]
    InvalidLocale { tag: String },

    #[error("Unsupported locale: {tag}")]
    UnsupportedLocale { tag: String },

    #[error("Invalid preference {key}: {value:?}")]
    InvalidPreference { key: String, value: String },

    #[error("Catalogue integrity: {message}")]
    CatalogueIntegrity { message: String },

    #[error("Message catalogue for {locale} is missing {keys:?}")]
    MissingMessages {
        locale: String,
        keys: Vec<&'static str>,
    },

    // ─────────────────────────────────────────────────────────────
    // Platform Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{capability} is not supported on this platform")]
    Unsupported { capability: &'static str },

    #[error("Speech error: {message}")]
    Speech { message: String },

    #[error("Fullscreen error: {message}")]
    Fullscreen { message: String },

    // ─────────────────────────────────────────────────────────────
    // Storage Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Preference storage error: {message}")]
    Storage { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn invalid_locale(tag: impl Into<String>) -> Self {
        Self::InvalidLocale { tag: tag.into() }
    }

    pub fn unsupported_locale(tag: impl Into<String>) -> Self {
        Self::UnsupportedLocale { tag: tag.into() }
    }

    pub fn invalid_preference(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidPreference {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn catalogue_integrity(message: impl Into<String>) -> Self {
        Self::CatalogueIntegrity {
            message: message.into(),
        }
    }

    pub fn unsupported(capability: &'static str) -> Self {
        Self::Unsupported { capability }
    }

    pub fn speech(message: impl Into<String>) -> Self {
        Self::Speech {
            message: message.into(),
        }
    }

    pub fn fullscreen(message: impl Into<String>) -> Self {
        Self::Fullscreen {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidLocale { .. }
            | Error::UnsupportedLocale { .. }
            | Error::InvalidPreference { .. }
            | Error::CatalogueIntegrity { .. }
            | Error::MissingMessages { .. } => ErrorKind::DegradedData,
            Error::Unsupported { .. } => ErrorKind::CapabilityAbsent,
            Error::Speech { .. } | Error::Fullscreen { .. } => ErrorKind::OperationFailed,
            Error::Storage { .. } => ErrorKind::Storage,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for absorbing non-fatal errors at a boundary
pub trait ResultExt<T> {
    /// Log the error with context and discard it
    fn absorb(self, context: &str) -> Option<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn absorb(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                let err = e.into();
                match err.kind() {
                    ErrorKind::CapabilityAbsent => tracing::debug!("{}: {}", context, err),
                    _ => tracing::warn!("{}: {}", context, err),
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::speech("synthesis-failed");
        assert_eq!(err.to_string(), "Speech error: synthesis-failed");

        let err = Error::unsupported("Fullscreen");
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn test_error_kind_taxonomy() {
        assert_eq!(
            Error::invalid_locale("not a locale").kind(),
            ErrorKind::DegradedData
        );
        assert_eq!(
            Error::invalid_preference("speechRate", "fast").kind(),
            ErrorKind::DegradedData
        );
        assert_eq!(
            Error::unsupported("Speech").kind(),
            ErrorKind::CapabilityAbsent
        );
        assert_eq!(
            Error::fullscreen("request denied").kind(),
            ErrorKind::OperationFailed
        );
        assert_eq!(Error::storage("quota").kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_absorb_returns_value_or_none() {
        let ok: std::result::Result<u8, Error> = Ok(3);
        assert_eq!(ok.absorb("ok"), Some(3));

        let err: std::result::Result<u8, Error> = Err(Error::fullscreen("denied"));
        assert_eq!(err.absorb("toggle"), None);
    }

    #[test]
    fn test_missing_messages_lists_keys() {
        let err = Error::MissingMessages {
            locale: "sv".into(),
            keys: vec!["modal.speak"],
        };
        assert_eq!(
            err.to_string(),
            "Message catalogue for sv is missing [\"modal.speak\"]"
        );
        assert_eq!(err.kind(), ErrorKind::DegradedData);
    }
}
