//! UI message catalogues
//!
//! One flat key → template table per [`Locale`]. Templates may contain
//! `{placeholder}` markers which are substituted in a single pass by
//! [`resolve_message`].
//!
//! The English table is the base key set. Every other table must cover it;
//! [`validate`] reports gaps and runs once at startup.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::locale::Locale;

static EN: &[(&str, &str)] = &[
    ("app.title", "World Flags"),
    ("app.subtitle", "{count} countries to explore"),
    ("filter.all", "🌐 All"),
    ("filter.az", "🔤 A – Z"),
    ("filter.continents", "🌍 Continents"),
    ("header.filter", "Sort and group"),
    ("header.settings", "Settings"),
    ("header.fullscreen.enter", "Enter fullscreen"),
    ("header.fullscreen.exit", "Exit fullscreen"),
    ("modal.country.label", "Country"),
    ("modal.capital.label", "Capital City"),
    ("modal.speak", "Speak again"),
    ("modal.speaking", "Speaking…"),
    ("modal.tap.hint", "Tap outside to close"),
    ("modal.speech.text", "Country {name}. Its capital is {capital}."),
    ("settings.title", "⚙️ Settings"),
    ("settings.speed", "🔊 Speaking Speed"),
    ("settings.slow", "🐢 Slow"),
    ("settings.normal", "🚶 Normal"),
    ("settings.fast", "🐇 Fast"),
    ("settings.done", "Done ✓"),
    ("settings.language", "🌐 Language"),
    ("lang.en", "🇬🇧 English"),
    ("lang.sv", "🇸🇪 Svenska"),
    ("langpicker.title", "Choose your language"),
    ("langpicker.subtitle", "You can change this anytime in Settings"),
    ("continent.Africa", "Africa"),
    ("continent.Asia", "Asia"),
    ("continent.Europe", "Europe"),
    ("continent.North America", "North America"),
    ("continent.South America", "South America"),
    ("continent.Oceania", "Oceania"),
    ("continent.Antarctica", "Antarctica"),
];

static SV: &[(&str, &str)] = &[
    ("app.title", "Världsflaggor"),
    ("app.subtitle", "{count} länder att utforska"),
    ("filter.all", "🌐 Alla"),
    ("filter.az", "🔤 A – Ö"),
    ("filter.continents", "🌍 Kontinenter"),
    ("header.filter", "Sortera och gruppera"),
    ("header.settings", "Inställningar"),
    ("header.fullscreen.enter", "Helskärm"),
    ("header.fullscreen.exit", "Lämna helskärm"),
    ("modal.country.label", "Land"),
    ("modal.capital.label", "Huvudstad"),
    ("modal.speak", "Tala igen"),
    ("modal.speaking", "Talar…"),
    ("modal.tap.hint", "Tryck utanför för att stänga"),
    ("modal.speech.text", "Land {name}. Dess huvudstad är {capital}."),
    ("settings.title", "⚙️ Inställningar"),
    ("settings.speed", "🔊 Talhastighet"),
    ("settings.slow", "🐢 Långsam"),
    ("settings.normal", "🚶 Normal"),
    ("settings.fast", "🐇 Snabb"),
    ("settings.done", "Klar ✓"),
    ("settings.language", "🌐 Språk"),
    ("lang.en", "🇬🇧 English"),
    ("lang.sv", "🇸🇪 Svenska"),
    ("langpicker.title", "Välj ditt språk"),
    ("langpicker.subtitle", "Du kan ändra detta när som helst i Inställningar"),
    ("continent.Africa", "Afrika"),
    ("continent.Asia", "Asien"),
    ("continent.Europe", "Europa"),
    ("continent.North America", "Nordamerika"),
    ("continent.South America", "Sydamerika"),
    ("continent.Oceania", "Oceanien"),
    ("continent.Antarctica", "Antarktis"),
];

static TABLES: LazyLock<HashMap<Locale, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        Locale::ALL
            .into_iter()
            .map(|locale| (locale, entries(locale).iter().copied().collect()))
            .collect()
    });

fn entries(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Sv => SV,
    }
}

fn template(locale: Locale, key: &str) -> Option<&'static str> {
    TABLES.get(&locale).and_then(|table| table.get(key)).copied()
}

/// Keys of the base catalogue, in declaration order
pub fn keys() -> impl Iterator<Item = &'static str> {
    entries(Locale::BASE).iter().map(|(key, _)| *key)
}

/// Look up `key` for `locale` and substitute `params`.
///
/// A key absent from `locale` falls back to the base catalogue; a key
/// absent everywhere yields the key itself.
pub fn resolve_message(locale: Locale, key: &str, params: &[(&str, &str)]) -> String {
    let template = template(locale, key).or_else(|| {
        tracing::warn!("Message {:?} missing for {}", key, locale);
        template(Locale::BASE, key)
    });

    match template {
        Some(template) => substitute(template, params),
        None => {
            tracing::warn!("Unknown message key {:?}", key);
            key.to_string()
        }
    }
}

/// Shorthand for a message without placeholders
pub fn text(locale: Locale, key: &str) -> String {
    resolve_message(locale, key, &[])
}

/// Replace each `{name}` found in `params`; unknown placeholders stay literal.
///
/// Substituted values are never rescanned.
fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match params.iter().find(|(param, _)| *param == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Base keys missing from each non-base locale (only locales with gaps)
fn coverage() -> Vec<(Locale, Vec<&'static str>)> {
    Locale::ALL
        .into_iter()
        .filter(|locale| *locale != Locale::BASE)
        .filter_map(|locale| {
            let missing: Vec<_> = keys()
                .filter(|key| template(locale, key).is_none())
                .collect();
            (!missing.is_empty()).then_some((locale, missing))
        })
        .collect()
}

/// Fail if any supported locale does not cover the base key set
pub fn validate() -> Result<()> {
    match coverage().into_iter().next() {
        None => Ok(()),
        Some((locale, missing)) => Err(Error::MissingMessages {
            locale: locale.to_string(),
            keys: missing,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::continent::Continent;

    #[test]
    fn test_required_keys_present() {
        let required = [
            "app.title",
            "app.subtitle",
            "filter.all",
            "filter.az",
            "filter.continents",
            "modal.country.label",
            "modal.capital.label",
            "modal.speak",
            "modal.speaking",
            "modal.speech.text",
            "settings.title",
            "settings.speed",
            "settings.done",
            "settings.language",
            "lang.en",
            "lang.sv",
            "langpicker.title",
        ];
        for key in required {
            assert!(template(Locale::En, key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_swedish_covers_english() {
        assert!(coverage().is_empty());
        assert!(validate().is_ok());
        for key in keys() {
            assert!(template(Locale::Sv, key).is_some(), "sv missing {key}");
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        for locale in Locale::ALL {
            assert_eq!(entries(locale).len(), TABLES[&locale].len(), "{locale}");
        }
    }

    #[test]
    fn test_translations_differ() {
        assert_ne!(text(Locale::En, "app.title"), text(Locale::Sv, "app.title"));
        assert_ne!(text(Locale::En, "filter.all"), text(Locale::Sv, "filter.all"));
    }

    #[test]
    fn test_continent_titles_exist() {
        for continent in Continent::ALL {
            for locale in Locale::ALL {
                assert!(template(locale, continent.message_key()).is_some());
            }
        }
        assert_eq!(
            text(Locale::Sv, Continent::NorthAmerica.message_key()),
            "Nordamerika"
        );
    }

    #[test]
    fn test_placeholder_substitution() {
        let subtitle = resolve_message(Locale::En, "app.subtitle", &[("count", "197")]);
        assert_eq!(subtitle, "197 countries to explore");

        let narration = resolve_message(
            Locale::Sv,
            "modal.speech.text",
            &[("name", "Sverige"), ("capital", "Stockholm")],
        );
        assert_eq!(narration, "Land Sverige. Dess huvudstad är Stockholm.");
    }

    #[test]
    fn test_substitution_is_single_pass() {
        let out = substitute("{a} and {b}", &[("a", "{b}"), ("b", "x")]);
        assert_eq!(out, "{b} and x");
    }

    #[test]
    fn test_unknown_placeholder_kept_literally() {
        assert_eq!(substitute("Hi {who}", &[]), "Hi {who}");
        assert_eq!(substitute("open { brace", &[]), "open { brace");
        assert_eq!(substitute("{}", &[]), "{}");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(text(Locale::Sv, "no.such.key"), "no.such.key");
    }
}
