//! Localized region (country) display names
//!
//! Embedded display-name tables for the supported UI languages. Lookups are
//! total: any failure (malformed tag, language without a table, unknown
//! code) resolves to the caller's fallback.

mod en;
mod sv;

use crate::locale::LocaleTag;

fn table_for(language: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match language {
        "en" => Some(en::NAMES),
        "sv" => Some(sv::NAMES),
        _ => None,
    }
}

/// Display name of `code` in `locale`, if one is known
pub fn lookup(code: &str, locale: &str) -> Option<&'static str> {
    let tag = LocaleTag::parse(locale).ok()?;
    let table = table_for(tag.language())?;

    let code = code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let code = code.to_ascii_uppercase();

    table
        .binary_search_by(|(candidate, _)| (*candidate).cmp(code.as_str()))
        .ok()
        .map(|index| table[index].1)
        .filter(|name| !name.is_empty())
}

/// Localized name of `code` in `locale`, or `fallback` verbatim
pub fn resolve_name(code: &str, locale: &str, fallback: &str) -> String {
    match lookup(code, locale) {
        Some(name) => name.to_string(),
        None => {
            tracing::trace!("No {} name for region {:?}, using fallback", locale, code);
            fallback.to_string()
        }
    }
}
