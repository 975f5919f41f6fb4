//! Country catalogue
//!
//! The catalogue is the fixed set of [`CountryRecord`]s shown as flag cards,
//! together with the code→continent assignments used by continent grouping.
//! The built-in instance is created once on first access and never mutated.

mod data;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::continent::Continent;
use crate::error::{Error, Result};

/// One country in the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-2 region code (unique key)
    pub code: &'static str,
    /// Default display name, used when no localized name is available
    pub name: &'static str,
    /// Capital city, displayed verbatim in every locale
    pub capital: &'static str,
    /// Flag emoji (regional indicator pair)
    pub glyph: &'static str,
}

impl CountryRecord {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        capital: &'static str,
        glyph: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            capital,
            glyph,
        }
    }
}

/// Data-integrity findings for a catalogue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct IntegrityReport {
    /// Records without a continent assignment
    missing_assignment: Vec<&'static str>,
    /// Codes that appear on more than one record
    duplicate_codes: Vec<&'static str>,
    /// Assignments that point at no record
    orphan_assignments: Vec<&'static str>,
}

impl IntegrityReport {
    fn is_clean(&self) -> bool {
        self.missing_assignment.is_empty()
            && self.duplicate_codes.is_empty()
            && self.orphan_assignments.is_empty()
    }
}

/// Country records plus their continent assignments
#[derive(Debug, Clone)]
pub struct Catalogue {
    records: Vec<CountryRecord>,
    continents: HashMap<&'static str, Continent>,
}

static BUILTIN: LazyLock<Catalogue> = LazyLock::new(|| {
    Catalogue::new(
        data::COUNTRIES.to_vec(),
        data::CONTINENT_ASSIGNMENTS.iter().copied(),
    )
});

impl Catalogue {
    pub fn new(
        records: Vec<CountryRecord>,
        assignments: impl IntoIterator<Item = (&'static str, Continent)>,
    ) -> Self {
        Self {
            records,
            continents: assignments.into_iter().collect(),
        }
    }

    /// The catalogue compiled into the application
    pub fn builtin() -> &'static Catalogue {
        &BUILTIN
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by region code (case-insensitive)
    pub fn get(&self, code: &str) -> Option<&CountryRecord> {
        self.records
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code))
    }

    /// Continent assigned to a region code (case-insensitive)
    pub fn continent_of(&self, code: &str) -> Option<Continent> {
        self.continents.get(code.to_ascii_uppercase().as_str()).copied()
    }

    fn integrity_report(&self) -> IntegrityReport {
        let mut report = IntegrityReport::default();
        let mut seen = HashSet::new();

        for record in &self.records {
            if !seen.insert(record.code) && !report.duplicate_codes.contains(&record.code) {
                report.duplicate_codes.push(record.code);
            }
            if !self.continents.contains_key(record.code) {
                report.missing_assignment.push(record.code);
            }
        }

        let mut orphans: Vec<_> = self
            .continents
            .keys()
            .filter(|code| !seen.contains(*code))
            .copied()
            .collect();
        orphans.sort_unstable();
        report.orphan_assignments = orphans;

        report
    }

    /// Fail if any record lacks a continent, a code repeats, or an
    /// assignment names no record
    pub fn validate(&self) -> Result<()> {
        let report = self.integrity_report();
        if report.is_clean() {
            return Ok(());
        }
        Err(Error::catalogue_integrity(format!(
            "missing continent: {:?}, duplicate codes: {:?}, orphan assignments: {:?}",
            report.missing_assignment, report.duplicate_codes, report.orphan_assignments
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regional_indicators(code: &str) -> String {
        code.chars()
            .map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)).unwrap())
            .collect()
    }

    #[test]
    fn test_builtin_catalogue_is_clean() {
        let catalogue = Catalogue::builtin();
        assert!(catalogue.len() > 190);
        assert_eq!(catalogue.integrity_report(), IntegrityReport::default());
        assert!(catalogue.validate().is_ok());
    }

    #[test]
    fn test_builtin_codes_are_two_uppercase_letters() {
        for record in Catalogue::builtin().records() {
            assert_eq!(record.code.len(), 2, "{}", record.code);
            assert!(record.code.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_glyph_is_flag_of_code() {
        for record in Catalogue::builtin().records() {
            assert_eq!(record.glyph, regional_indicators(record.code));
        }
    }

    #[test]
    fn test_no_empty_fields() {
        for record in Catalogue::builtin().records() {
            assert!(!record.name.is_empty());
            assert!(!record.capital.is_empty());
        }
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let catalogue = Catalogue::builtin();
        assert_eq!(catalogue.get("se").map(|r| r.name), Some("Sweden"));
        assert_eq!(catalogue.get("SE").map(|r| r.capital), Some("Stockholm"));
        assert!(catalogue.get("ZZ").is_none());
    }

    #[test]
    fn test_continent_lookup() {
        let catalogue = Catalogue::builtin();
        assert_eq!(catalogue.continent_of("SE"), Some(Continent::Europe));
        assert_eq!(catalogue.continent_of("JP"), Some(Continent::Asia));
        assert_eq!(catalogue.continent_of("BR"), Some(Continent::SouthAmerica));
        assert_eq!(catalogue.continent_of("ZZ"), None);
    }

    #[test]
    fn test_continent_lookup_matches_get_casing() {
        let catalogue = Catalogue::builtin();
        for code in ["se", "Se", "jp"] {
            let record = catalogue.get(code).unwrap();
            assert_eq!(catalogue.continent_of(code), catalogue.continent_of(record.code));
            assert!(catalogue.continent_of(code).is_some());
        }
    }

    #[test]
    fn test_integrity_report_flags_defects() {
        let catalogue = Catalogue::new(
            vec![
                CountryRecord::new("SE", "Sweden", "Stockholm", "🇸🇪"),
                CountryRecord::new("SE", "Sweden", "Stockholm", "🇸🇪"),
                CountryRecord::new("JP", "Japan", "Tokyo", "🇯🇵"),
            ],
            [("SE", Continent::Europe), ("FR", Continent::Europe)],
        );

        let report = catalogue.integrity_report();
        assert_eq!(report.missing_assignment, vec!["JP"]);
        assert_eq!(report.duplicate_codes, vec!["SE"]);
        assert_eq!(report.orphan_assignments, vec!["FR"]);
        assert!(!report.is_clean());
        assert!(matches!(
            catalogue.validate(),
            Err(Error::CatalogueIntegrity { .. })
        ));
    }
}
