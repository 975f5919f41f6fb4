//! Grouping and sorting of the catalogue
//!
//! [`group`] turns the catalogue, a [`FilterMode`] and a locale tag into an
//! ordered list of [`CountryGroup`]s. Every mode starts from the same
//! locale-aware sort of localized names; the modes only differ in how that
//! sorted sequence is partitioned.

use std::collections::HashMap;
use std::str::FromStr;

use crate::catalogue::{Catalogue, CountryRecord};
use crate::collation::{CollationKey, Collator};
use crate::continent::Continent;
use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::messages;
use crate::region_names::resolve_name;

/// How the card grid is partitioned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    All,
    Alphabetical,
    ByContinent,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [
        FilterMode::All,
        FilterMode::Alphabetical,
        FilterMode::ByContinent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Alphabetical => "alpha",
            FilterMode::ByContinent => "continent",
        }
    }

    /// Message key of the filter button label
    pub fn message_key(&self) -> &'static str {
        match self {
            FilterMode::All => "filter.all",
            FilterMode::Alphabetical => "filter.az",
            FilterMode::ByContinent => "filter.continents",
        }
    }
}

impl FromStr for FilterMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::invalid_preference("filterMode", s))
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header of a non-flat group
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupLabel {
    /// Upper-cased leading character of the localized names in the group
    Letter(String),
    Continent(Continent),
}

impl GroupLabel {
    /// Localized header text
    pub fn title(&self, locale: Locale) -> String {
        match self {
            GroupLabel::Letter(letter) => letter.clone(),
            GroupLabel::Continent(continent) => messages::text(locale, continent.message_key()),
        }
    }
}

impl std::fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupLabel::Letter(letter) => f.write_str(letter),
            GroupLabel::Continent(continent) => f.write_str(continent.name()),
        }
    }
}

/// One labeled slice of the sorted catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryGroup<'a> {
    /// `None` only in [`FilterMode::All`]
    pub label: Option<GroupLabel>,
    pub items: Vec<&'a CountryRecord>,
}

impl CountryGroup<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Display name of `record` in `locale`, falling back to its default name
pub fn localized_name(record: &CountryRecord, locale: &str) -> String {
    resolve_name(record.code, locale, record.name)
}

struct SortEntry<'a> {
    record: &'a CountryRecord,
    name: String,
    key: CollationKey,
}

fn sorted<'a>(catalogue: &'a Catalogue, collator: Collator, locale: &str) -> Vec<SortEntry<'a>> {
    let mut entries: Vec<_> = catalogue
        .records()
        .iter()
        .map(|record| {
            let name = localized_name(record, locale);
            let key = collator.key(&name);
            SortEntry { record, name, key }
        })
        .collect();

    entries.sort_by(|a, b| {
        a.key
            .cmp(&b.key)
            .then_with(|| a.record.code.cmp(b.record.code))
    });
    entries
}

/// Partition the catalogue for display.
///
/// Pure apart from logging; never fails, whatever `locale` contains.
pub fn group<'a>(catalogue: &'a Catalogue, mode: FilterMode, locale: &str) -> Vec<CountryGroup<'a>> {
    let collator = Collator::for_locale(locale);
    let entries = sorted(catalogue, collator, locale);

    match mode {
        FilterMode::All => vec![CountryGroup {
            label: None,
            items: entries.iter().map(|entry| entry.record).collect(),
        }],
        FilterMode::Alphabetical => by_letter(&entries, collator),
        FilterMode::ByContinent => by_continent(catalogue, &entries),
    }
}

fn leading_letter(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn by_letter<'a>(entries: &[SortEntry<'a>], collator: Collator) -> Vec<CountryGroup<'a>> {
    let mut buckets: Vec<(String, Vec<&'a CountryRecord>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let letter = leading_letter(&entry.name);
        let slot = *index.entry(letter.clone()).or_insert_with(|| {
            buckets.push((letter, Vec::new()));
            buckets.len() - 1
        });
        buckets[slot].1.push(entry.record);
    }

    buckets.sort_by_cached_key(|(letter, _)| collator.key(letter));

    buckets
        .into_iter()
        .map(|(letter, items)| CountryGroup {
            label: Some(GroupLabel::Letter(letter)),
            items,
        })
        .collect()
}

fn by_continent<'a>(catalogue: &Catalogue, entries: &[SortEntry<'a>]) -> Vec<CountryGroup<'a>> {
    let unassigned: Vec<_> = entries
        .iter()
        .filter(|entry| catalogue.continent_of(entry.record.code).is_none())
        .map(|entry| entry.record.code)
        .collect();
    if !unassigned.is_empty() {
        tracing::warn!(
            "{} catalogue entries have no continent and are not shown: {:?}",
            unassigned.len(),
            unassigned
        );
    }

    Continent::ALL
        .into_iter()
        .filter_map(|continent| {
            let items: Vec<_> = entries
                .iter()
                .filter(|entry| catalogue.continent_of(entry.record.code) == Some(continent))
                .map(|entry| entry.record)
                .collect();
            (!items.is_empty()).then_some(CountryGroup {
                label: Some(GroupLabel::Continent(continent)),
                items,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use std::collections::HashSet;
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Collects the messages of WARN events
    #[derive(Clone, Default)]
    struct WarnCapture(Arc<Mutex<Vec<String>>>);

    impl WarnCapture {
        fn messages(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for WarnCapture {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                let mut visitor = MessageVisitor(String::new());
                event.record(&mut visitor);
                self.0.lock().unwrap().push(visitor.0);
            }
        }
    }

    fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
        let capture = WarnCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, capture.messages())
    }

    fn sweden_japan() -> Catalogue {
        Catalogue::new(
            vec![
                CountryRecord::new("SE", "Sweden", "Stockholm", "🇸🇪"),
                CountryRecord::new("JP", "Japan", "Tokyo", "🇯🇵"),
            ],
            [("SE", Continent::Europe), ("JP", Continent::Asia)],
        )
    }

    fn codes(group: &CountryGroup<'_>) -> Vec<&'static str> {
        group.items.iter().map(|r| r.code).collect()
    }

    #[test]
    fn test_continent_scenario() {
        let catalogue = sweden_japan();
        let groups = group(&catalogue, FilterMode::ByContinent, "en");

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, Some(GroupLabel::Continent(Continent::Asia)));
        assert_eq!(codes(&groups[0]), vec!["JP"]);
        assert_eq!(groups[1].label, Some(GroupLabel::Continent(Continent::Europe)));
        assert_eq!(codes(&groups[1]), vec!["SE"]);
        assert_eq!(groups[0].label.as_ref().unwrap().to_string(), "Asia");
    }

    #[test]
    fn test_all_mode_is_one_sorted_group() {
        let catalogue = Catalogue::builtin();
        let groups = group(catalogue, FilterMode::All, "en");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, None);
        assert_eq!(groups[0].len(), catalogue.len());

        let collator = Collator::for_locale("en");
        let names: Vec<_> = groups[0].items.iter().map(|r| localized_name(r, "en")).collect();
        for pair in names.windows(2) {
            assert_ne!(collator.compare(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn test_accented_names_sort_with_base_letters() {
        let groups = group(Catalogue::builtin(), FilterMode::All, "en");
        let position = |code: &str| groups[0].items.iter().position(|r| r.code == code).unwrap();

        assert!(position("CR") < position("CI"));
        assert!(position("CI") < position("HR"));
    }

    #[test]
    fn test_partition_is_complete_for_every_mode() {
        let catalogue = Catalogue::builtin();
        let expected: HashSet<_> = catalogue.records().iter().map(|r| r.code).collect();

        for locale in ["en", "sv"] {
            for mode in FilterMode::ALL {
                let groups = group(catalogue, mode, locale);
                let seen: Vec<_> = groups.iter().flat_map(codes).collect();
                let unique: HashSet<_> = seen.iter().copied().collect();

                assert_eq!(seen.len(), catalogue.len(), "{mode} {locale}");
                assert_eq!(unique, expected, "{mode} {locale}");
                assert!(groups.iter().all(|g| !g.is_empty()));
            }
        }
    }

    #[test]
    fn test_alphabetical_groups_match_leading_letter() {
        for locale in ["en", "sv"] {
            let collator = Collator::for_locale(locale);
            let groups = group(Catalogue::builtin(), FilterMode::Alphabetical, locale);

            for g in &groups {
                let Some(GroupLabel::Letter(letter)) = &g.label else {
                    panic!("expected letter label");
                };
                for record in &g.items {
                    assert_eq!(&leading_letter(&localized_name(record, locale)), letter);
                }
            }

            let labels: Vec<_> = groups.iter().map(|g| g.label.clone().unwrap().to_string()).collect();
            for pair in labels.windows(2) {
                assert_eq!(collator.compare(&pair[0], &pair[1]), Ordering::Less);
            }
        }
    }

    #[test]
    fn test_swedish_letters_come_last() {
        let groups = group(Catalogue::builtin(), FilterMode::Alphabetical, "sv");
        let last = groups.last().unwrap();

        assert_eq!(last.label, Some(GroupLabel::Letter("Ö".into())));
        assert!(codes(last).contains(&"AT"));

        let english = group(Catalogue::builtin(), FilterMode::Alphabetical, "en");
        assert_eq!(english.last().unwrap().label, Some(GroupLabel::Letter("Z".into())));
    }

    #[test]
    fn test_continents_follow_canonical_order() {
        let groups = group(Catalogue::builtin(), FilterMode::ByContinent, "sv");
        let continents: Vec<_> = groups
            .iter()
            .map(|g| match g.label {
                Some(GroupLabel::Continent(c)) => c,
                _ => panic!("expected continent label"),
            })
            .collect();

        let mut canonical = continents.clone();
        canonical.sort_by_key(|c| Continent::ALL.iter().position(|x| x == c));
        assert_eq!(continents, canonical);
        assert!(!continents.contains(&Continent::Antarctica));
    }

    #[test]
    fn test_unassigned_records_are_dropped_from_continent_mode() {
        let catalogue = Catalogue::new(
            vec![
                CountryRecord::new("SE", "Sweden", "Stockholm", "🇸🇪"),
                CountryRecord::new("XK", "Kosovo", "Pristina", "🇽🇰"),
            ],
            [("SE", Continent::Europe)],
        );

        let groups = group(&catalogue, FilterMode::ByContinent, "en");
        assert_eq!(groups.len(), 1);
        assert_eq!(codes(&groups[0]), vec!["SE"]);

        let all = group(&catalogue, FilterMode::All, "en");
        assert_eq!(codes(&all[0]), vec!["XK", "SE"]);
    }

    #[test]
    fn test_unassigned_records_log_a_warning() {
        let catalogue = Catalogue::new(
            vec![
                CountryRecord::new("SE", "Sweden", "Stockholm", "🇸🇪"),
                CountryRecord::new("XK", "Kosovo", "Pristina", "🇽🇰"),
            ],
            [("SE", Continent::Europe)],
        );

        let (groups, warnings) =
            capture_warnings(|| group(&catalogue, FilterMode::ByContinent, "en"));
        assert_eq!(groups.len(), 1);
        assert_eq!(warnings.len(), 1, "{warnings:?}");
        assert!(warnings[0].contains("XK"), "{}", warnings[0]);

        let (_, warnings) = capture_warnings(|| group(&catalogue, FilterMode::All, "en"));
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn test_fully_assigned_catalogue_does_not_warn() {
        let catalogue = sweden_japan();
        let (_, warnings) =
            capture_warnings(|| group(&catalogue, FilterMode::ByContinent, "sv"));
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn test_invalid_locale_degrades_to_ordinal() {
        let catalogue = Catalogue::builtin();
        let groups = group(catalogue, FilterMode::All, "not_a_locale");

        assert_eq!(groups[0].len(), catalogue.len());
        let names: Vec<_> = groups[0].items.iter().map(|r| r.name).collect();
        for pair in names.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let catalogue = Catalogue::builtin();
        for mode in FilterMode::ALL {
            assert_eq!(group(catalogue, mode, "sv"), group(catalogue, mode, "sv"));
        }
    }

    #[test]
    fn test_locale_changes_names_and_order() {
        let catalogue = sweden_japan();
        let english = group(&catalogue, FilterMode::Alphabetical, "en");
        let swedish = group(&catalogue, FilterMode::Alphabetical, "sv");

        assert_eq!(english[0].label, Some(GroupLabel::Letter("J".into())));
        assert_eq!(swedish[1].label, Some(GroupLabel::Letter("S".into())));
        assert_eq!(localized_name(&catalogue.records()[0], "sv"), "Sverige");
    }

    #[test]
    fn test_group_label_titles() {
        let label = GroupLabel::Continent(Continent::SouthAmerica);
        assert_eq!(label.title(Locale::Sv), "Sydamerika");
        assert_eq!(label.title(Locale::En), "South America");
        assert_eq!(GroupLabel::Letter("Ö".into()).title(Locale::Sv), "Ö");
    }

    #[test]
    fn test_filter_mode_wire_names() {
        assert_eq!(FilterMode::Alphabetical.as_str(), "alpha");
        assert_eq!(FilterMode::ByContinent.to_string(), "continent");
        assert_eq!("continent".parse::<FilterMode>().unwrap(), FilterMode::ByContinent);
        assert!("az".parse::<FilterMode>().is_err());
    }
}
