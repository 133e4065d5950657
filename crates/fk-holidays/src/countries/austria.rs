//! Austrian public holiday registry.
//!
//! Austria observes the same 13 public holidays in every federal state,
//! so the registry is a single national list. The federal states still
//! matter for school holidays (see [`crate::school::austria`]).

use crate::common::{
    ALL_SAINTS_DAY, ASCENSION_DAY, ASSUMPTION_OF_MARY, CORPUS_CHRISTI, EASTER_MONDAY, EPIPHANY,
    IMMACULATE_CONCEPTION, LABOUR_DAY, NEW_YEARS_DAY, WHIT_MONDAY,
};
use crate::definition::{resolve_all, HolidayDefinition, ResolvedHoliday};
use fk_core::errors::{Error, Result};
use fk_time::Month;

/// Nationalfeiertag, October 26 (anniversary of the 1955 neutrality act).
pub const NATIONAL_DAY: HolidayDefinition =
    HolidayDefinition::fixed("Nationalfeiertag", "National Day", Month::October, 26)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Nationalfeiertag_(%C3%96sterreich)",
            "https://en.wikipedia.org/wiki/National_Day_(Austria)",
        );

/// Christtag, December 25 (the Austrian name for Christmas Day).
pub const CHRISTMAS_DAY_AT: HolidayDefinition =
    HolidayDefinition::fixed("Christtag", "Christmas Day", Month::December, 25).with_wikipedia(
        "https://de.wikipedia.org/wiki/Weihnachten",
        "https://en.wikipedia.org/wiki/Christmas",
    );

/// Stefanitag, December 26.
pub const ST_STEPHENS_DAY: HolidayDefinition =
    HolidayDefinition::fixed("Stefanitag", "St. Stephen's Day", Month::December, 26)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Stephanstag",
            "https://en.wikipedia.org/wiki/St._Stephen%27s_Day",
        );

/// The 13 Austrian public holidays, in calendar order.
pub static AUSTRIAN_HOLIDAYS: [HolidayDefinition; 13] = [
    NEW_YEARS_DAY,
    EPIPHANY,
    EASTER_MONDAY,
    LABOUR_DAY,
    ASCENSION_DAY,
    WHIT_MONDAY,
    CORPUS_CHRISTI,
    ASSUMPTION_OF_MARY,
    NATIONAL_DAY,
    ALL_SAINTS_DAY,
    IMMACULATE_CONCEPTION,
    CHRISTMAS_DAY_AT,
    ST_STEPHENS_DAY,
];

/// Resolve all Austrian public holidays for a year. Unsorted; callers
/// sort by date for display.
pub fn holidays(year: u16) -> Result<Vec<ResolvedHoliday>> {
    resolve_all(&AUSTRIAN_HOLIDAYS, year)
}

/// An Austrian federal state (Bundesland).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AustrianRegion {
    /// Burgenland.
    Burgenland,
    /// Kärnten (Carinthia).
    Kaernten,
    /// Niederösterreich (Lower Austria).
    Niederoesterreich,
    /// Oberösterreich (Upper Austria).
    Oberoesterreich,
    /// Salzburg.
    Salzburg,
    /// Steiermark (Styria).
    Steiermark,
    /// Tirol (Tyrol).
    Tirol,
    /// Vorarlberg.
    Vorarlberg,
    /// Wien (Vienna).
    Wien,
}

impl AustrianRegion {
    /// All nine federal states.
    pub const ALL: [AustrianRegion; 9] = [
        AustrianRegion::Burgenland,
        AustrianRegion::Kaernten,
        AustrianRegion::Niederoesterreich,
        AustrianRegion::Oberoesterreich,
        AustrianRegion::Salzburg,
        AustrianRegion::Steiermark,
        AustrianRegion::Tirol,
        AustrianRegion::Vorarlberg,
        AustrianRegion::Wien,
    ];

    /// German display name.
    pub fn name(&self) -> &'static str {
        match self {
            AustrianRegion::Burgenland => "Burgenland",
            AustrianRegion::Kaernten => "Kärnten",
            AustrianRegion::Niederoesterreich => "Niederösterreich",
            AustrianRegion::Oberoesterreich => "Oberösterreich",
            AustrianRegion::Salzburg => "Salzburg",
            AustrianRegion::Steiermark => "Steiermark",
            AustrianRegion::Tirol => "Tirol",
            AustrianRegion::Vorarlberg => "Vorarlberg",
            AustrianRegion::Wien => "Wien",
        }
    }

    /// Filename-safe ASCII identifier (umlauts transliterated).
    pub fn slug(&self) -> &'static str {
        match self {
            AustrianRegion::Burgenland => "burgenland",
            AustrianRegion::Kaernten => "kaernten",
            AustrianRegion::Niederoesterreich => "niederoesterreich",
            AustrianRegion::Oberoesterreich => "oberoesterreich",
            AustrianRegion::Salzburg => "salzburg",
            AustrianRegion::Steiermark => "steiermark",
            AustrianRegion::Tirol => "tirol",
            AustrianRegion::Vorarlberg => "vorarlberg",
            AustrianRegion::Wien => "wien",
        }
    }
}

impl std::str::FromStr for AustrianRegion {
    type Err = Error;

    /// Parse a German display name or its ASCII slug.
    fn from_str(s: &str) -> Result<Self> {
        AustrianRegion::ALL
            .into_iter()
            .find(|r| r.name() == s || r.slug() == s)
            .ok_or_else(|| Error::UnknownRegion(s.to_owned()))
    }
}

impl std::fmt::Display for AustrianRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
