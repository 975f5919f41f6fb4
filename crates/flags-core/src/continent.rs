//! Continent enumeration
//!
//! Continents are listed in a fixed canonical order which drives the order
//! of groups in continent mode.

/// A continent a country is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
}

impl Continent {
    /// All continents in canonical display order.
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Antarctica,
    ];

    /// Canonical English name, also used to build message keys
    pub fn name(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Antarctica => "Antarctica",
        }
    }

    /// Message catalogue key for the localized continent title
    pub fn message_key(&self) -> &'static str {
        match self {
            Continent::Africa => "continent.Africa",
            Continent::Asia => "continent.Asia",
            Continent::Europe => "continent.Europe",
            Continent::NorthAmerica => "continent.North America",
            Continent::SouthAmerica => "continent.South America",
            Continent::Oceania => "continent.Oceania",
            Continent::Antarctica => "continent.Antarctica",
        }
    }

    /// Emoji shown in the continent section header
    pub fn emoji(&self) -> &'static str {
        match self {
            Continent::Africa => "🌍",
            Continent::Asia => "🌏",
            Continent::Europe => "🏰",
            Continent::NorthAmerica => "🗽",
            Continent::SouthAmerica => "🌎",
            Continent::Oceania => "🏝️",
            Continent::Antarctica => "🐧",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
