//! Swiss public holiday registry.
//!
//! Only four holidays are national (observed in all 26 cantons); every
//! other holiday is cantonal and varies significantly. The resolved set
//! for a canton is the national list plus the canton's own list.
//!
//! Source for the tables:
//! <https://de.wikipedia.org/wiki/Feiertage_in_der_Schweiz>

use crate::common::{
    ALL_SAINTS_DAY, ASCENSION_DAY, ASSUMPTION_OF_MARY, BOXING_DAY, CHRISTMAS_DAY, CORPUS_CHRISTI,
    EASTER_MONDAY, EPIPHANY, GOOD_FRIDAY, IMMACULATE_CONCEPTION, LABOUR_DAY, NEW_YEARS_DAY,
    WHIT_MONDAY,
};
use crate::definition::{resolve_all, HolidayDefinition, ResolvedHoliday, Scope};
use fk_core::errors::{Error, Result};
use fk_time::Month;

// ── Switzerland-specific definitions ──────────────────────────────────────────

/// Bundesfeiertag, August 1.
pub const SWISS_NATIONAL_DAY: HolidayDefinition =
    HolidayDefinition::fixed("Bundesfeiertag", "Swiss National Day", Month::August, 1)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Bundesfeiertag",
            "https://en.wikipedia.org/wiki/Swiss_National_Day",
        );

/// Berchtoldstag, January 2.
pub const BERCHTOLDSTAG: HolidayDefinition =
    HolidayDefinition::fixed("Berchtoldstag", "Berchtold's Day", Month::January, 2)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Berchtoldstag",
            "https://en.wikipedia.org/wiki/Berchtold%27s_Day",
        );

/// Josefstag, March 19.
pub const JOSEPHS_DAY: HolidayDefinition =
    HolidayDefinition::fixed("Josefstag", "Saint Joseph's Day", Month::March, 19).with_wikipedia(
        "https://de.wikipedia.org/wiki/Josefstag",
        "https://en.wikipedia.org/wiki/Saint_Joseph%27s_Day",
    );

/// Peter und Paul, June 29 (Tessin only).
pub const PETER_AND_PAUL: HolidayDefinition =
    HolidayDefinition::fixed("Peter und Paul", "Saints Peter and Paul", Month::June, 29)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Peter_und_Paul",
            "https://en.wikipedia.org/wiki/Feast_of_Saints_Peter_and_Paul",
        );

/// The four holidays observed in all 26 cantons.
pub static SWISS_NATIONAL_HOLIDAYS: [HolidayDefinition; 4] = [
    NEW_YEARS_DAY.scoped(Scope::National),
    ASCENSION_DAY.scoped(Scope::National),
    SWISS_NATIONAL_DAY.scoped(Scope::National),
    CHRISTMAS_DAY.scoped(Scope::National),
];

// ── Cantons ───────────────────────────────────────────────────────────────────

/// A Swiss canton (German-language names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SwissCanton {
    Zuerich,
    Bern,
    Luzern,
    Uri,
    Schwyz,
    Obwalden,
    Nidwalden,
    Glarus,
    Zug,
    Freiburg,
    Solothurn,
    BaselStadt,
    BaselLandschaft,
    Schaffhausen,
    AppenzellAusserrhoden,
    AppenzellInnerrhoden,
    StGallen,
    Graubuenden,
    Aargau,
    Thurgau,
    Tessin,
    Waadt,
    Wallis,
    Neuenburg,
    Genf,
    Jura,
}

impl SwissCanton {
    /// All 26 cantons, in the canonical display order.
    pub const ALL: [SwissCanton; 26] = [
        SwissCanton::Zuerich,
        SwissCanton::Bern,
        SwissCanton::Luzern,
        SwissCanton::Uri,
        SwissCanton::Schwyz,
        SwissCanton::Obwalden,
        SwissCanton::Nidwalden,
        SwissCanton::Glarus,
        SwissCanton::Zug,
        SwissCanton::Freiburg,
        SwissCanton::Solothurn,
        SwissCanton::BaselStadt,
        SwissCanton::BaselLandschaft,
        SwissCanton::Schaffhausen,
        SwissCanton::AppenzellAusserrhoden,
        SwissCanton::AppenzellInnerrhoden,
        SwissCanton::StGallen,
        SwissCanton::Graubuenden,
        SwissCanton::Aargau,
        SwissCanton::Thurgau,
        SwissCanton::Tessin,
        SwissCanton::Waadt,
        SwissCanton::Wallis,
        SwissCanton::Neuenburg,
        SwissCanton::Genf,
        SwissCanton::Jura,
    ];

    /// German display name.
    pub fn name(&self) -> &'static str {
        match self {
            SwissCanton::Zuerich => "Zürich",
            SwissCanton::Bern => "Bern",
            SwissCanton::Luzern => "Luzern",
            SwissCanton::Uri => "Uri",
            SwissCanton::Schwyz => "Schwyz",
            SwissCanton::Obwalden => "Obwalden",
            SwissCanton::Nidwalden => "Nidwalden",
            SwissCanton::Glarus => "Glarus",
            SwissCanton::Zug => "Zug",
            SwissCanton::Freiburg => "Freiburg",
            SwissCanton::Solothurn => "Solothurn",
            SwissCanton::BaselStadt => "Basel-Stadt",
            SwissCanton::BaselLandschaft => "Basel-Landschaft",
            SwissCanton::Schaffhausen => "Schaffhausen",
            SwissCanton::AppenzellAusserrhoden => "Appenzell Ausserrhoden",
            SwissCanton::AppenzellInnerrhoden => "Appenzell Innerrhoden",
            SwissCanton::StGallen => "St. Gallen",
            SwissCanton::Graubuenden => "Graubünden",
            SwissCanton::Aargau => "Aargau",
            SwissCanton::Thurgau => "Thurgau",
            SwissCanton::Tessin => "Tessin",
            SwissCanton::Waadt => "Waadt",
            SwissCanton::Wallis => "Wallis",
            SwissCanton::Neuenburg => "Neuenburg",
            SwissCanton::Genf => "Genf",
            SwissCanton::Jura => "Jura",
        }
    }

    /// Filename-safe ASCII identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            SwissCanton::Zuerich => "zuerich",
            SwissCanton::Bern => "bern",
            SwissCanton::Luzern => "luzern",
            SwissCanton::Uri => "uri",
            SwissCanton::Schwyz => "schwyz",
            SwissCanton::Obwalden => "obwalden",
            SwissCanton::Nidwalden => "nidwalden",
            SwissCanton::Glarus => "glarus",
            SwissCanton::Zug => "zug",
            SwissCanton::Freiburg => "freiburg",
            SwissCanton::Solothurn => "solothurn",
            SwissCanton::BaselStadt => "basel-stadt",
            SwissCanton::BaselLandschaft => "basel-landschaft",
            SwissCanton::Schaffhausen => "schaffhausen",
            SwissCanton::AppenzellAusserrhoden => "appenzell-ausserrhoden",
            SwissCanton::AppenzellInnerrhoden => "appenzell-innerrhoden",
            SwissCanton::StGallen => "st-gallen",
            SwissCanton::Graubuenden => "graubuenden",
            SwissCanton::Aargau => "aargau",
            SwissCanton::Thurgau => "thurgau",
            SwissCanton::Tessin => "tessin",
            SwissCanton::Waadt => "waadt",
            SwissCanton::Wallis => "wallis",
            SwissCanton::Neuenburg => "neuenburg",
            SwissCanton::Genf => "genf",
            SwissCanton::Jura => "jura",
        }
    }
}

impl std::str::FromStr for SwissCanton {
    type Err = Error;

    /// Parse a German display name or its ASCII slug.
    fn from_str(s: &str) -> Result<Self> {
        SwissCanton::ALL
            .into_iter()
            .find(|c| c.name() == s || c.slug() == s)
            .ok_or_else(|| Error::UnknownRegion(s.to_owned()))
    }
}

impl std::fmt::Display for SwissCanton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Cantonal holidays, on top of [`SWISS_NATIONAL_HOLIDAYS`].
pub fn cantonal_holidays(canton: SwissCanton) -> &'static [HolidayDefinition] {
    match canton {
        SwissCanton::Zuerich => &[
            BERCHTOLDSTAG,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            LABOUR_DAY,
            WHIT_MONDAY,
            BOXING_DAY,
        ],
        SwissCanton::Bern => &[
            BERCHTOLDSTAG,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            BOXING_DAY,
        ],
        SwissCanton::Luzern => &[
            BERCHTOLDSTAG,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            JOSEPHS_DAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::Uri => &[
            EPIPHANY,
            JOSEPHS_DAY,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::Schwyz => &[
            EPIPHANY,
            JOSEPHS_DAY,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::Obwalden => &[
            GOOD_FRIDAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::Nidwalden => &[
            JOSEPHS_DAY,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::Glarus => &[
            BERCHTOLDSTAG,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            ALL_SAINTS_DAY,
            BOXING_DAY,
        ],
        SwissCanton::Zug => &[
            BERCHTOLDSTAG,
            JOSEPHS_DAY,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::Freiburg => &[
            BERCHTOLDSTAG,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            LABOUR_DAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::Solothurn => &[
            BERCHTOLDSTAG,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            LABOUR_DAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::BaselStadt => &[
            GOOD_FRIDAY,
            EASTER_MONDAY,
            LABOUR_DAY,
            WHIT_MONDAY,
            BOXING_DAY,
        ],
        SwissCanton::BaselLandschaft => &[
            GOOD_FRIDAY,
            EASTER_MONDAY,
            LABOUR_DAY,
            WHIT_MONDAY,
            BOXING_DAY,
        ],
        SwissCanton::Schaffhausen => &[
            BERCHTOLDSTAG,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            LABOUR_DAY,
            WHIT_MONDAY,
            BOXING_DAY,
        ],
        SwissCanton::AppenzellAusserrhoden => {
            &[GOOD_FRIDAY, EASTER_MONDAY, WHIT_MONDAY, BOXING_DAY]
        }
        SwissCanton::AppenzellInnerrhoden => &[
            GOOD_FRIDAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::StGallen => &[
            GOOD_FRIDAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::Graubuenden => &[
            EPIPHANY,
            JOSEPHS_DAY,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::Aargau => &[
            BERCHTOLDSTAG,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::Thurgau => &[
            BERCHTOLDSTAG,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            LABOUR_DAY,
            WHIT_MONDAY,
            BOXING_DAY,
        ],
        SwissCanton::Tessin => &[
            EPIPHANY,
            JOSEPHS_DAY,
            EASTER_MONDAY,
            LABOUR_DAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            PETER_AND_PAUL,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::Waadt => &[
            BERCHTOLDSTAG,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            BOXING_DAY,
        ],
        SwissCanton::Wallis => &[
            JOSEPHS_DAY,
            EASTER_MONDAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            IMMACULATE_CONCEPTION,
            BOXING_DAY,
        ],
        SwissCanton::Neuenburg => &[
            BERCHTOLDSTAG,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            LABOUR_DAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            BOXING_DAY,
        ],
        SwissCanton::Genf => &[GOOD_FRIDAY, EASTER_MONDAY, WHIT_MONDAY, BOXING_DAY],
        SwissCanton::Jura => &[
            BERCHTOLDSTAG,
            GOOD_FRIDAY,
            EASTER_MONDAY,
            LABOUR_DAY,
            WHIT_MONDAY,
            CORPUS_CHRISTI,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
            BOXING_DAY,
        ],
    }
}

/// The full definition list for a canton: the four national holidays,
/// then the cantonal list. Pure concatenation, no deduplication.
pub fn definitions(canton: SwissCanton) -> Vec<HolidayDefinition> {
    let mut defs = SWISS_NATIONAL_HOLIDAYS.to_vec();
    defs.extend_from_slice(cantonal_holidays(canton));
    defs
}

/// Resolve all public holidays of a canton for a year. Unsorted.
pub fn holidays(year: u16, canton: SwissCanton) -> Result<Vec<ResolvedHoliday>> {
    resolve_all(&definitions(canton), year)
}
