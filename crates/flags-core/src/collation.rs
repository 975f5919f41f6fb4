//! Locale-aware string collation
//!
//! A compact three-level collation in the spirit of the Unicode Collation
//! Algorithm, with just enough tailoring for the supported locales:
//!
//! - **primary**: base letters, with spaces and punctuation before digits and
//!   digits before letters
//! - **secondary**: diacritics (`e` < `é`)
//! - **tertiary**: case, lowercase first
//!
//! Equal keys fall back to code-point order of the original text, so the
//! resulting order is total. Swedish places `å`, `ä`, `ö` after `z` and
//! treats `æ`/`ø`/`ü` as variants of `ä`/`ö`/`y`. Unparseable locale tags get
//! a plain ordinal comparison.

use std::cmp::Ordering;

use unicode_normalization::char::{decompose_canonical, is_combining_mark};
use unicode_normalization::UnicodeNormalization;

use crate::locale::LocaleTag;

const SPACE_WEIGHT: u32 = 0x01;
const PUNCTUATION_BASE: u32 = 0x02;
const SYMBOL_WEIGHT: u32 = 0x3F;
const DIGIT_BASE: u32 = 0x40;
const LETTER_BASE: u32 = 0x100;
const LETTER_STEP: u32 = 0x10;
const OTHER_BASE: u32 = 0x1000;

/// Punctuation in primary order
const PUNCTUATION: &str = "_-,;:!?.'’\"()[]{}@*/\\&#%`^+<=>|~$";

// Swedish letters sorted after `z`
const SV_A_RING: u32 = LETTER_BASE + 26 * LETTER_STEP;
const SV_A_DIAERESIS: u32 = SV_A_RING + LETTER_STEP;
const SV_O_DIAERESIS: u32 = SV_A_DIAERESIS + LETTER_STEP;

/// Language-specific adjustments on top of the root order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tailoring {
    Root,
    Swedish,
}

/// Compares strings for display ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collator {
    /// Linguistic comparison for a valid locale
    Linguistic(Tailoring),
    /// Code-point comparison, used when the locale tag is invalid
    Ordinal,
}

/// Precomputed comparison key for one string
///
/// Field order is significant: the derived `Ord` compares level by level.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<u32>,
    secondary: Vec<u16>,
    tertiary: Vec<u8>,
    text: String,
}

impl Collator {
    /// Pick the collator for a locale tag; never fails
    pub fn for_locale(tag: &str) -> Self {
        match LocaleTag::parse(tag) {
            Ok(parsed) => match parsed.language() {
                "sv" => Collator::Linguistic(Tailoring::Swedish),
                _ => Collator::Linguistic(Tailoring::Root),
            },
            Err(e) => {
                tracing::debug!("Falling back to ordinal collation: {}", e);
                Collator::Ordinal
            }
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Collator::Ordinal => a.cmp(b),
            Collator::Linguistic(_) => self.key(a).cmp(&self.key(b)),
        }
    }

    /// Build a reusable key; comparing keys equals [`Collator::compare`]
    pub fn key(&self, text: &str) -> CollationKey {
        let mut builder = KeyBuilder::default();
        if let Collator::Linguistic(tailoring) = self {
            for c in text.nfc() {
                builder.push(c, *tailoring);
            }
        }
        builder.finish(text)
    }
}

#[derive(Default)]
struct KeyBuilder {
    primary: Vec<u32>,
    secondary: Vec<u16>,
    tertiary: Vec<u8>,
}

impl KeyBuilder {
    fn push(&mut self, c: char, tailoring: Tailoring) {
        if is_combining_mark(c) {
            self.attach_mark(c);
            return;
        }

        let upper = c.is_uppercase();
        let lower = c.to_lowercase().next().unwrap_or(c);

        if tailoring == Tailoring::Swedish {
            if let Some((primary, secondary)) = swedish_letter(lower) {
                self.element(primary, secondary, upper);
                return;
            }
        }

        match lower {
            'æ' => {
                self.element(letter_weight('a'), 0, upper);
                self.element(letter_weight('e'), 0, upper);
            }
            'œ' => {
                self.element(letter_weight('o'), 0, upper);
                self.element(letter_weight('e'), 0, upper);
            }
            'ß' => {
                self.element(letter_weight('s'), 0, upper);
                self.element(letter_weight('s'), 0, upper);
            }
            'þ' => {
                self.element(letter_weight('t'), 0, upper);
                self.element(letter_weight('h'), 0, upper);
            }
            'ø' => self.element(letter_weight('o'), 0x80, upper),
            'đ' | 'ð' => self.element(letter_weight('d'), 0x80, upper),
            'ł' => self.element(letter_weight('l'), 0x80, upper),
            'ı' => self.element(letter_weight('i'), 0x80, upper),
            _ => {
                let mut parts = Vec::with_capacity(3);
                decompose_canonical(lower, |d| parts.push(d));
                let mut parts = parts.into_iter();
                if let Some(base) = parts.next() {
                    self.element(primary_weight(base), 0, upper);
                }
                for mark in parts {
                    self.attach_mark(mark);
                }
            }
        }
    }

    fn element(&mut self, primary: u32, secondary: u16, upper: bool) {
        self.primary.push(primary);
        self.secondary.push(secondary);
        self.tertiary.push(u8::from(upper));
    }

    /// Fold a combining mark into the secondary weight of the previous element
    fn attach_mark(&mut self, mark: char) {
        let weight = match mark as u32 {
            m @ 0x0300..=0x036F => (m - 0x02FF) as u16,
            _ => 0x70,
        };
        match self.secondary.last_mut() {
            Some(last) => *last = last.saturating_mul(0x80).saturating_add(weight),
            None => self.element(SPACE_WEIGHT, weight, false),
        }
    }

    fn finish(self, text: &str) -> CollationKey {
        CollationKey {
            primary: self.primary,
            secondary: self.secondary,
            tertiary: self.tertiary,
            text: text.to_string(),
        }
    }
}

fn letter_weight(c: char) -> u32 {
    LETTER_BASE + (c as u32 - 'a' as u32) * LETTER_STEP
}

fn primary_weight(c: char) -> u32 {
    match c {
        'a'..='z' => letter_weight(c),
        '0'..='9' => DIGIT_BASE + (c as u32 - '0' as u32),
        c if c.is_whitespace() => SPACE_WEIGHT,
        c => match PUNCTUATION.chars().position(|p| p == c) {
            Some(index) => PUNCTUATION_BASE + index as u32,
            None if c.is_alphanumeric() => OTHER_BASE + c as u32,
            None => SYMBOL_WEIGHT,
        },
    }
}

fn swedish_letter(lower: char) -> Option<(u32, u16)> {
    match lower {
        'å' => Some((SV_A_RING, 0)),
        'ä' => Some((SV_A_DIAERESIS, 0)),
        'æ' => Some((SV_A_DIAERESIS, 1)),
        'ö' => Some((SV_O_DIAERESIS, 0)),
        'ø' => Some((SV_O_DIAERESIS, 1)),
        'ü' => Some((letter_weight('y'), 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(collator: Collator, words: &[&str]) -> Vec<String> {
        let mut words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        words.sort_by(|a, b| collator.compare(a, b));
        words
    }

    #[test]
    fn test_for_locale_selects_tailoring() {
        assert_eq!(
            Collator::for_locale("sv"),
            Collator::Linguistic(Tailoring::Swedish)
        );
        assert_eq!(
            Collator::for_locale("sv-FI"),
            Collator::Linguistic(Tailoring::Swedish)
        );
        assert_eq!(
            Collator::for_locale("en"),
            Collator::Linguistic(Tailoring::Root)
        );
        assert_eq!(
            Collator::for_locale("de-CH"),
            Collator::Linguistic(Tailoring::Root)
        );
        assert_eq!(Collator::for_locale("en_US"), Collator::Ordinal);
        assert_eq!(Collator::for_locale(""), Collator::Ordinal);
    }

    #[test]
    fn test_accents_sort_next_to_base_letter() {
        let en = Collator::for_locale("en");
        assert_eq!(
            sorted(en, &["Croatia", "Côte d’Ivoire", "Costa Rica"]),
            vec!["Costa Rica", "Côte d’Ivoire", "Croatia"]
        );
        assert_eq!(
            sorted(en, &["Saudi Arabia", "São Tomé & Príncipe", "Samoa"]),
            vec!["Samoa", "São Tomé & Príncipe", "Saudi Arabia"]
        );
    }

    #[test]
    fn test_ordinal_fallback_uses_code_points() {
        let ordinal = Collator::for_locale("not_a_locale");
        assert_eq!(
            sorted(ordinal, &["São Tomé", "Saudi Arabia"]),
            vec!["Saudi Arabia", "São Tomé"]
        );
        assert_eq!(ordinal.compare("B", "a"), Ordering::Less);
        assert_eq!(Collator::for_locale("en").compare("B", "a"), Ordering::Greater);
    }

    #[test]
    fn test_swedish_letters_after_z() {
        let sv = Collator::for_locale("sv");
        assert_eq!(
            sorted(sv, &["Österrike", "Zambia", "Ålesund", "Ärlig", "Oman"]),
            vec!["Oman", "Zambia", "Ålesund", "Ärlig", "Österrike"]
        );

        let en = Collator::for_locale("en");
        assert_eq!(
            sorted(en, &["Österrike", "Zambia", "Oman", "Pakistan"]),
            vec!["Oman", "Österrike", "Pakistan", "Zambia"]
        );
    }

    #[test]
    fn test_swedish_variant_letters() {
        let sv = Collator::for_locale("sv");
        assert_eq!(sv.compare("Æ", "Ä"), Ordering::Greater);
        assert_eq!(sv.compare("Æ", "Ö"), Ordering::Less);
        assert_eq!(sv.compare("ü", "y"), Ordering::Greater);
        assert_eq!(sv.compare("ü", "z"), Ordering::Less);
    }

    #[test]
    fn test_levels() {
        let en = Collator::for_locale("en");
        // primary beats secondary
        assert_eq!(en.compare("côte", "cotf"), Ordering::Less);
        // secondary beats tertiary
        assert_eq!(en.compare("Cote", "côte"), Ordering::Less);
        // lowercase first on tertiary
        assert_eq!(en.compare("côte", "Côte"), Ordering::Less);
        assert_eq!(en.compare("Côte", "Côte"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_and_punctuation() {
        let en = Collator::for_locale("en");
        assert_eq!(
            sorted(en, &["Guinea-Bissau", "Guinea", "Guyana", "Equatorial Guinea"]),
            vec!["Equatorial Guinea", "Guinea", "Guinea-Bissau", "Guyana"]
        );
        assert_eq!(en.compare("St. Lucia", "Sta"), Ordering::Less);
        assert_eq!(en.compare("A1", "Aa"), Ordering::Less);
    }

    #[test]
    fn test_decomposed_input_matches_precomposed() {
        let en = Collator::for_locale("en");
        let precomposed = en.key("Côte");
        let decomposed = en.key("Co\u{0302}te");
        assert_eq!(precomposed.primary, decomposed.primary);
        assert_eq!(precomposed.secondary, decomposed.secondary);
    }

    #[test]
    fn test_expansions() {
        let en = Collator::for_locale("en");
        assert_eq!(en.compare("Straße", "Strasse"), Ordering::Greater);
        assert_eq!(en.compare("Straße", "Strasz"), Ordering::Less);
        assert_eq!(en.compare("Færoe", "Faeroe"), Ordering::Greater);
        assert_eq!(en.compare("Færoe", "Faf"), Ordering::Less);
    }

    #[test]
    fn test_order_is_total_and_antisymmetric() {
        let en = Collator::for_locale("en");
        let words = ["a", "A", "á", "Á", "b", "", " ", "-", "1"];
        for a in words {
            for b in words {
                assert_eq!(en.compare(a, b), en.compare(b, a).reverse());
                assert_eq!(en.compare(a, b) == Ordering::Equal, a == b);
            }
        }
    }
}
