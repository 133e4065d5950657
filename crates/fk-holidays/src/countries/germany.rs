//! German public holiday registry.
//!
//! Nine holidays are bundesweit (observed in every state); the rest vary
//! by Bundesland. Four extra calendar variants exist because the
//! predominantly Catholic municipalities of Bayern, Sachsen, and
//! Thüringen (and the city of Augsburg) observe additional days. The
//! variants are separate pre-composed lists, not overlays computed at
//! resolution time.

use crate::common::{
    ALL_SAINTS_DAY, ASCENSION_DAY, ASSUMPTION_OF_MARY, BOXING_DAY, CHRISTMAS_DAY, CORPUS_CHRISTI,
    EASTER_MONDAY, EASTER_SUNDAY, EPIPHANY, GOOD_FRIDAY, LABOUR_DAY, NEW_YEARS_DAY, WHIT_MONDAY,
    WHIT_SUNDAY,
};
use crate::definition::{resolve_all, HolidayDefinition, ResolvedHoliday, Scope};
use fk_core::errors::{Error, Result};
use fk_time::{easter, Month};

// ── Germany-specific definitions ──────────────────────────────────────────────

/// Tag der Deutschen Einheit, October 3.
pub const GERMAN_UNITY_DAY: HolidayDefinition = HolidayDefinition::fixed(
    "Tag der Deutschen Einheit",
    "German Unity Day",
    Month::October,
    3,
)
.with_wikipedia(
    "https://de.wikipedia.org/wiki/Tag_der_Deutschen_Einheit",
    "https://en.wikipedia.org/wiki/German_Unity_Day",
)
.scoped(Scope::Bundesweit);

/// Reformationstag, October 31.
pub const REFORMATION_DAY: HolidayDefinition =
    HolidayDefinition::fixed("Reformationstag", "Reformation Day", Month::October, 31)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Reformationstag",
            "https://en.wikipedia.org/wiki/Reformation_Day",
        );

/// Buß- und Bettag, the Wednesday on or before November 23 (Sachsen only).
pub const REPENTANCE_DAY: HolidayDefinition = HolidayDefinition::computed(
    "Buß- und Bettag",
    "Day of Repentance and Prayer",
    easter::repentance_day,
)
.with_wikipedia(
    "https://de.wikipedia.org/wiki/Bu%C3%9F-_und_Bettag",
    "https://en.wikipedia.org/wiki/Repentance_and_Prayer_Day",
);

/// Internationaler Frauentag, March 8 (Berlin, Mecklenburg-Vorpommern).
pub const WOMENS_DAY: HolidayDefinition = HolidayDefinition::fixed(
    "Internationaler Frauentag",
    "International Women's Day",
    Month::March,
    8,
)
.with_wikipedia(
    "https://de.wikipedia.org/wiki/Internationaler_Frauentag",
    "https://en.wikipedia.org/wiki/International_Women%27s_Day",
);

/// Augsburger Friedensfest, August 8 (city of Augsburg only).
pub const AUGSBURG_PEACE_FESTIVAL: HolidayDefinition = HolidayDefinition::fixed(
    "Augsburger Friedensfest",
    "Augsburg Peace Festival",
    Month::August,
    8,
)
.with_wikipedia(
    "https://de.wikipedia.org/wiki/Augsburger_Hohes_Friedensfest",
    "https://en.wikipedia.org/wiki/Augsburger_Hohes_Friedensfest",
);

/// Weltkindertag, September 20 (Thüringen only).
pub const WORLD_CHILDRENS_DAY: HolidayDefinition =
    HolidayDefinition::fixed("Weltkindertag", "World Children's Day", Month::September, 20)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Weltkindertag",
            "https://en.wikipedia.org/wiki/Children%27s_Day",
        );

/// The nine holidays observed in every German state, in calendar order.
pub static GERMAN_COMMON_HOLIDAYS: [HolidayDefinition; 9] = [
    NEW_YEARS_DAY.scoped(Scope::Bundesweit),
    GOOD_FRIDAY.scoped(Scope::Bundesweit),
    EASTER_MONDAY.scoped(Scope::Bundesweit),
    LABOUR_DAY.scoped(Scope::Bundesweit),
    ASCENSION_DAY.scoped(Scope::Bundesweit),
    WHIT_MONDAY.scoped(Scope::Bundesweit),
    GERMAN_UNITY_DAY,
    CHRISTMAS_DAY.scoped(Scope::Bundesweit),
    BOXING_DAY.scoped(Scope::Bundesweit),
];

// ── States and calendar variants ──────────────────────────────────────────────

/// A German federal state (Bundesland). Keys the school-holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum GermanState {
    BadenWuerttemberg,
    Bayern,
    Berlin,
    Brandenburg,
    Bremen,
    Hamburg,
    Hessen,
    MecklenburgVorpommern,
    Niedersachsen,
    NordrheinWestfalen,
    RheinlandPfalz,
    Saarland,
    Sachsen,
    SachsenAnhalt,
    SchleswigHolstein,
    Thueringen,
}

impl GermanState {
    /// All sixteen federal states.
    pub const ALL: [GermanState; 16] = [
        GermanState::BadenWuerttemberg,
        GermanState::Bayern,
        GermanState::Berlin,
        GermanState::Brandenburg,
        GermanState::Bremen,
        GermanState::Hamburg,
        GermanState::Hessen,
        GermanState::MecklenburgVorpommern,
        GermanState::Niedersachsen,
        GermanState::NordrheinWestfalen,
        GermanState::RheinlandPfalz,
        GermanState::Saarland,
        GermanState::Sachsen,
        GermanState::SachsenAnhalt,
        GermanState::SchleswigHolstein,
        GermanState::Thueringen,
    ];

    /// German display name.
    pub fn name(&self) -> &'static str {
        match self {
            GermanState::BadenWuerttemberg => "Baden-Württemberg",
            GermanState::Bayern => "Bayern",
            GermanState::Berlin => "Berlin",
            GermanState::Brandenburg => "Brandenburg",
            GermanState::Bremen => "Bremen",
            GermanState::Hamburg => "Hamburg",
            GermanState::Hessen => "Hessen",
            GermanState::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            GermanState::Niedersachsen => "Niedersachsen",
            GermanState::NordrheinWestfalen => "Nordrhein-Westfalen",
            GermanState::RheinlandPfalz => "Rheinland-Pfalz",
            GermanState::Saarland => "Saarland",
            GermanState::Sachsen => "Sachsen",
            GermanState::SachsenAnhalt => "Sachsen-Anhalt",
            GermanState::SchleswigHolstein => "Schleswig-Holstein",
            GermanState::Thueringen => "Thüringen",
        }
    }

    /// Filename-safe ASCII identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            GermanState::BadenWuerttemberg => "baden-wuerttemberg",
            GermanState::Bayern => "bayern",
            GermanState::Berlin => "berlin",
            GermanState::Brandenburg => "brandenburg",
            GermanState::Bremen => "bremen",
            GermanState::Hamburg => "hamburg",
            GermanState::Hessen => "hessen",
            GermanState::MecklenburgVorpommern => "mecklenburg-vorpommern",
            GermanState::Niedersachsen => "niedersachsen",
            GermanState::NordrheinWestfalen => "nordrhein-westfalen",
            GermanState::RheinlandPfalz => "rheinland-pfalz",
            GermanState::Saarland => "saarland",
            GermanState::Sachsen => "sachsen",
            GermanState::SachsenAnhalt => "sachsen-anhalt",
            GermanState::SchleswigHolstein => "schleswig-holstein",
            GermanState::Thueringen => "thueringen",
        }
    }
}

impl std::str::FromStr for GermanState {
    type Err = Error;

    /// Parse a German display name or its ASCII slug.
    fn from_str(s: &str) -> Result<Self> {
        GermanState::ALL
            .into_iter()
            .find(|r| r.name() == s || r.slug() == s)
            .ok_or_else(|| Error::UnknownRegion(s.to_owned()))
    }
}

impl std::fmt::Display for GermanState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A public-holiday calendar variant: one of the sixteen states or one of
/// the four pre-composed Catholic/city overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum GermanVariant {
    BadenWuerttemberg,
    Bayern,
    BayernKatholisch,
    Augsburg,
    Berlin,
    Brandenburg,
    Bremen,
    Hamburg,
    Hessen,
    MecklenburgVorpommern,
    Niedersachsen,
    NordrheinWestfalen,
    RheinlandPfalz,
    Saarland,
    Sachsen,
    SachsenKatholisch,
    SachsenAnhalt,
    SchleswigHolstein,
    Thueringen,
    ThueringenKatholisch,
}

impl GermanVariant {
    /// All twenty calendar variants, in the canonical display order.
    pub const ALL: [GermanVariant; 20] = [
        GermanVariant::BadenWuerttemberg,
        GermanVariant::Bayern,
        GermanVariant::BayernKatholisch,
        GermanVariant::Augsburg,
        GermanVariant::Berlin,
        GermanVariant::Brandenburg,
        GermanVariant::Bremen,
        GermanVariant::Hamburg,
        GermanVariant::Hessen,
        GermanVariant::MecklenburgVorpommern,
        GermanVariant::Niedersachsen,
        GermanVariant::NordrheinWestfalen,
        GermanVariant::RheinlandPfalz,
        GermanVariant::Saarland,
        GermanVariant::Sachsen,
        GermanVariant::SachsenKatholisch,
        GermanVariant::SachsenAnhalt,
        GermanVariant::SchleswigHolstein,
        GermanVariant::Thueringen,
        GermanVariant::ThueringenKatholisch,
    ];

    /// German display name (the Catholic variants carry a parenthesized
    /// suffix).
    pub fn name(&self) -> &'static str {
        match self {
            GermanVariant::BadenWuerttemberg => "Baden-Württemberg",
            GermanVariant::Bayern => "Bayern",
            GermanVariant::BayernKatholisch => "Bayern (katholisch)",
            GermanVariant::Augsburg => "Augsburg",
            GermanVariant::Berlin => "Berlin",
            GermanVariant::Brandenburg => "Brandenburg",
            GermanVariant::Bremen => "Bremen",
            GermanVariant::Hamburg => "Hamburg",
            GermanVariant::Hessen => "Hessen",
            GermanVariant::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            GermanVariant::Niedersachsen => "Niedersachsen",
            GermanVariant::NordrheinWestfalen => "Nordrhein-Westfalen",
            GermanVariant::RheinlandPfalz => "Rheinland-Pfalz",
            GermanVariant::Saarland => "Saarland",
            GermanVariant::Sachsen => "Sachsen",
            GermanVariant::SachsenKatholisch => "Sachsen (katholisch)",
            GermanVariant::SachsenAnhalt => "Sachsen-Anhalt",
            GermanVariant::SchleswigHolstein => "Schleswig-Holstein",
            GermanVariant::Thueringen => "Thüringen",
            GermanVariant::ThueringenKatholisch => "Thüringen (katholisch)",
        }
    }

    /// Filename-safe ASCII identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            GermanVariant::BadenWuerttemberg => "baden-wuerttemberg",
            GermanVariant::Bayern => "bayern",
            GermanVariant::BayernKatholisch => "bayern-katholisch",
            GermanVariant::Augsburg => "augsburg",
            GermanVariant::Berlin => "berlin",
            GermanVariant::Brandenburg => "brandenburg",
            GermanVariant::Bremen => "bremen",
            GermanVariant::Hamburg => "hamburg",
            GermanVariant::Hessen => "hessen",
            GermanVariant::MecklenburgVorpommern => "mecklenburg-vorpommern",
            GermanVariant::Niedersachsen => "niedersachsen",
            GermanVariant::NordrheinWestfalen => "nordrhein-westfalen",
            GermanVariant::RheinlandPfalz => "rheinland-pfalz",
            GermanVariant::Saarland => "saarland",
            GermanVariant::Sachsen => "sachsen",
            GermanVariant::SachsenKatholisch => "sachsen-katholisch",
            GermanVariant::SachsenAnhalt => "sachsen-anhalt",
            GermanVariant::SchleswigHolstein => "schleswig-holstein",
            GermanVariant::Thueringen => "thueringen",
            GermanVariant::ThueringenKatholisch => "thueringen-katholisch",
        }
    }

    /// The federal state this variant belongs to.
    pub fn state(&self) -> GermanState {
        match self {
            GermanVariant::BadenWuerttemberg => GermanState::BadenWuerttemberg,
            GermanVariant::Bayern | GermanVariant::BayernKatholisch | GermanVariant::Augsburg => {
                GermanState::Bayern
            }
            GermanVariant::Berlin => GermanState::Berlin,
            GermanVariant::Brandenburg => GermanState::Brandenburg,
            GermanVariant::Bremen => GermanState::Bremen,
            GermanVariant::Hamburg => GermanState::Hamburg,
            GermanVariant::Hessen => GermanState::Hessen,
            GermanVariant::MecklenburgVorpommern => GermanState::MecklenburgVorpommern,
            GermanVariant::Niedersachsen => GermanState::Niedersachsen,
            GermanVariant::NordrheinWestfalen => GermanState::NordrheinWestfalen,
            GermanVariant::RheinlandPfalz => GermanState::RheinlandPfalz,
            GermanVariant::Saarland => GermanState::Saarland,
            GermanVariant::Sachsen | GermanVariant::SachsenKatholisch => GermanState::Sachsen,
            GermanVariant::SachsenAnhalt => GermanState::SachsenAnhalt,
            GermanVariant::SchleswigHolstein => GermanState::SchleswigHolstein,
            GermanVariant::Thueringen | GermanVariant::ThueringenKatholisch => {
                GermanState::Thueringen
            }
        }
    }
}

impl std::str::FromStr for GermanVariant {
    type Err = Error;

    /// Parse a German display name or its ASCII slug.
    fn from_str(s: &str) -> Result<Self> {
        GermanVariant::ALL
            .into_iter()
            .find(|v| v.name() == s || v.slug() == s)
            .ok_or_else(|| Error::UnknownRegion(s.to_owned()))
    }
}

impl std::fmt::Display for GermanVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Variant-specific holidays, on top of [`GERMAN_COMMON_HOLIDAYS`].
pub fn variant_holidays(variant: GermanVariant) -> &'static [HolidayDefinition] {
    match variant {
        GermanVariant::BadenWuerttemberg => &[EPIPHANY, CORPUS_CHRISTI, ALL_SAINTS_DAY],
        GermanVariant::Bayern => &[EPIPHANY, CORPUS_CHRISTI, ALL_SAINTS_DAY],
        GermanVariant::BayernKatholisch => {
            &[EPIPHANY, CORPUS_CHRISTI, ASSUMPTION_OF_MARY, ALL_SAINTS_DAY]
        }
        GermanVariant::Augsburg => &[
            EPIPHANY,
            CORPUS_CHRISTI,
            AUGSBURG_PEACE_FESTIVAL,
            ASSUMPTION_OF_MARY,
            ALL_SAINTS_DAY,
        ],
        GermanVariant::Berlin => &[WOMENS_DAY],
        GermanVariant::Brandenburg => &[EASTER_SUNDAY, WHIT_SUNDAY, REFORMATION_DAY],
        GermanVariant::Bremen => &[REFORMATION_DAY],
        GermanVariant::Hamburg => &[REFORMATION_DAY],
        GermanVariant::Hessen => &[CORPUS_CHRISTI],
        GermanVariant::MecklenburgVorpommern => &[WOMENS_DAY, REFORMATION_DAY],
        GermanVariant::Niedersachsen => &[REFORMATION_DAY],
        GermanVariant::NordrheinWestfalen => &[CORPUS_CHRISTI, ALL_SAINTS_DAY],
        GermanVariant::RheinlandPfalz => &[CORPUS_CHRISTI, ALL_SAINTS_DAY],
        GermanVariant::Saarland => &[CORPUS_CHRISTI, ASSUMPTION_OF_MARY, ALL_SAINTS_DAY],
        GermanVariant::Sachsen => &[REFORMATION_DAY, REPENTANCE_DAY],
        GermanVariant::SachsenKatholisch => &[CORPUS_CHRISTI, REFORMATION_DAY, REPENTANCE_DAY],
        GermanVariant::SachsenAnhalt => &[EPIPHANY, REFORMATION_DAY],
        GermanVariant::SchleswigHolstein => &[REFORMATION_DAY],
        GermanVariant::Thueringen => &[WORLD_CHILDRENS_DAY, REFORMATION_DAY],
        GermanVariant::ThueringenKatholisch => {
            &[CORPUS_CHRISTI, WORLD_CHILDRENS_DAY, REFORMATION_DAY]
        }
    }
}

/// The full definition list for a variant: common list, then the
/// variant-specific list. Pure concatenation, no deduplication.
pub fn definitions(variant: GermanVariant) -> Vec<HolidayDefinition> {
    let mut defs = GERMAN_COMMON_HOLIDAYS.to_vec();
    defs.extend_from_slice(variant_holidays(variant));
    defs
}

/// Resolve all public holidays of a variant for a year. Unsorted.
pub fn holidays(year: u16, variant: GermanVariant) -> Result<Vec<ResolvedHoliday>> {
    resolve_all(&definitions(variant), year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fk_time::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn bavaria_catholic_2025_scenario() {
        let plain = holidays(2025, GermanVariant::Bayern).unwrap();
        let catholic = holidays(2025, GermanVariant::BayernKatholisch).unwrap();

        assert_eq!(catholic.len(), plain.len() + 1);
        for h in &plain {
            assert!(
                catholic.contains(h),
                "{} missing from catholic variant",
                h.name_de
            );
        }
        let assumption = catholic
            .iter()
            .find(|h| h.name_de == "Mariä Himmelfahrt")
            .unwrap();
        assert_eq!(assumption.date, date(2025, 8, 15));
        assert!(plain.iter().all(|h| h.name_de != "Mariä Himmelfahrt"));
    }

    #[test]
    fn every_variant_has_the_common_nine() {
        for variant in GermanVariant::ALL {
            let resolved = holidays(2026, variant).unwrap();
            assert!(resolved.len() >= 9, "{variant} too short");
            for name in ["Neujahr", "Karfreitag", "Tag der Deutschen Einheit"] {
                assert!(
                    resolved.iter().any(|h| h.name_de == name),
                    "{name} missing for {variant}"
                );
            }
        }
    }

    #[test]
    fn common_holidays_tagged_bundesweit() {
        for def in &GERMAN_COMMON_HOLIDAYS {
            assert_eq!(def.scope, Some(Scope::Bundesweit), "{}", def.name_de);
        }
    }

    #[test]
    fn repentance_day_only_in_saxony_variants() {
        let with: Vec<_> = GermanVariant::ALL
            .into_iter()
            .filter(|v| {
                variant_holidays(*v)
                    .iter()
                    .any(|d| d.name_de == "Buß- und Bettag")
            })
            .collect();
        assert_eq!(
            with,
            vec![GermanVariant::Sachsen, GermanVariant::SachsenKatholisch]
        );
    }

    #[test]
    fn saxony_repentance_day_2025() {
        let resolved = holidays(2025, GermanVariant::Sachsen).unwrap();
        let repentance = resolved
            .iter()
            .find(|h| h.name_de == "Buß- und Bettag")
            .unwrap();
        assert_eq!(repentance.date, date(2025, 11, 19));
    }

    #[test]
    fn variant_parsing() {
        assert_eq!(
            "Bayern (katholisch)".parse::<GermanVariant>().unwrap(),
            GermanVariant::BayernKatholisch
        );
        assert_eq!(
            "sachsen-katholisch".parse::<GermanVariant>().unwrap(),
            GermanVariant::SachsenKatholisch
        );
        assert!("Preußen".parse::<GermanVariant>().is_err());
    }

    #[test]
    fn variant_state_mapping() {
        assert_eq!(GermanVariant::Augsburg.state(), GermanState::Bayern);
        assert_eq!(
            GermanVariant::ThueringenKatholisch.state(),
            GermanState::Thueringen
        );
    }
}
