//! # flags-core - Core Domain Types
//!
//! Foundation crate for World Flags. Provides the country catalogue,
//! locales, locale-aware collation, localized names and messages, the
//! grouping engine, and error handling.
//!
//! This crate has **no platform dependencies**; everything here is pure and
//! runs the same natively and in the browser.
//!
//! ## Public API
//!
//! ### Catalogue (`catalogue`, `continent`)
//! - [`Catalogue`] - Country records plus continent assignments
//! - [`CountryRecord`] - Code, default name, capital and flag glyph
//! - [`Continent`] - Continents in canonical display order
//!
//! ### Localization (`locale`, `region_names`, `messages`)
//! - [`Locale`] - Supported UI languages
//! - [`resolve_name()`] - Total, locale-aware country name lookup
//! - [`resolve_message()`] - Message lookup with `{placeholder}` substitution
//!
//! ### Ordering (`collation`, `grouping`)
//! - [`Collator`] - Locale-aware comparison with ordinal fallback
//! - [`group()`] - Partition the catalogue by [`FilterMode`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum classified by [`ErrorKind`]
//! - [`ResultExt`] - Extension trait for logging and absorbing errors
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use flags_core::prelude::*;
//! ```

pub mod catalogue;
pub mod collation;
pub mod continent;
pub mod error;
pub mod grouping;
pub mod locale;
pub mod messages;
pub mod region_names;

/// Prelude for common imports used throughout all World Flags crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalogue::{Catalogue, CountryRecord};
pub use collation::{CollationKey, Collator, Tailoring};
pub use continent::Continent;
pub use error::{Error, ErrorKind, Result, ResultExt};
pub use grouping::{group, localized_name, CountryGroup, FilterMode, GroupLabel};
pub use locale::{speech_language_for, Locale, LocaleTag, DEFAULT_SPEECH_LANGUAGE};
pub use messages::{resolve_message, text};
pub use region_names::resolve_name;
