//! Holiday definitions shared between the country registries.
//!
//! The country tables compose these constants; whether a given holiday is
//! observed at all, and under which scope tag, is the country's decision.

use crate::definition::HolidayDefinition;
use fk_time::{easter, Month};

/// Neujahr, January 1.
pub const NEW_YEARS_DAY: HolidayDefinition =
    HolidayDefinition::fixed("Neujahr", "New Year's Day", Month::January, 1).with_wikipedia(
        "https://de.wikipedia.org/wiki/Neujahr",
        "https://en.wikipedia.org/wiki/New_Year%27s_Day",
    );

/// Heilige Drei Könige, January 6.
pub const EPIPHANY: HolidayDefinition =
    HolidayDefinition::fixed("Heilige Drei Könige", "Epiphany", Month::January, 6).with_wikipedia(
        "https://de.wikipedia.org/wiki/Erscheinung_des_Herrn",
        "https://en.wikipedia.org/wiki/Epiphany_(holiday)",
    );

/// Karfreitag, two days before Easter.
pub const GOOD_FRIDAY: HolidayDefinition =
    HolidayDefinition::computed("Karfreitag", "Good Friday", easter::good_friday).with_wikipedia(
        "https://de.wikipedia.org/wiki/Karfreitag",
        "https://en.wikipedia.org/wiki/Good_Friday",
    );

/// Ostersonntag, Easter Sunday itself (a public holiday only in
/// Brandenburg).
pub const EASTER_SUNDAY: HolidayDefinition =
    HolidayDefinition::computed("Ostersonntag", "Easter Sunday", easter::easter_sunday)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Ostern",
            "https://en.wikipedia.org/wiki/Easter",
        );

/// Ostermontag, the day after Easter.
pub const EASTER_MONDAY: HolidayDefinition =
    HolidayDefinition::computed("Ostermontag", "Easter Monday", easter::easter_monday)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Ostermontag",
            "https://en.wikipedia.org/wiki/Easter_Monday",
        );

/// Tag der Arbeit, May 1.
pub const LABOUR_DAY: HolidayDefinition =
    HolidayDefinition::fixed("Tag der Arbeit", "Labour Day", Month::May, 1).with_wikipedia(
        "https://de.wikipedia.org/wiki/Tag_der_Arbeit",
        "https://en.wikipedia.org/wiki/International_Workers%27_Day",
    );

/// Christi Himmelfahrt, 39 days after Easter.
pub const ASCENSION_DAY: HolidayDefinition =
    HolidayDefinition::computed("Christi Himmelfahrt", "Ascension Day", easter::ascension_day)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Christi_Himmelfahrt",
            "https://en.wikipedia.org/wiki/Feast_of_the_Ascension",
        );

/// Pfingstsonntag, 49 days after Easter (a public holiday only in
/// Brandenburg and some Swiss cantons).
pub const WHIT_SUNDAY: HolidayDefinition =
    HolidayDefinition::computed("Pfingstsonntag", "Whit Sunday", easter::whit_sunday)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Pfingsten",
            "https://en.wikipedia.org/wiki/Pentecost",
        );

/// Pfingstmontag, 50 days after Easter.
pub const WHIT_MONDAY: HolidayDefinition =
    HolidayDefinition::computed("Pfingstmontag", "Whit Monday", easter::whit_monday)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Pfingstmontag",
            "https://en.wikipedia.org/wiki/Whit_Monday",
        );

/// Fronleichnam, 60 days after Easter.
pub const CORPUS_CHRISTI: HolidayDefinition =
    HolidayDefinition::computed("Fronleichnam", "Corpus Christi", easter::corpus_christi)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Fronleichnam",
            "https://en.wikipedia.org/wiki/Corpus_Christi_(feast)",
        );

/// Mariä Himmelfahrt, August 15.
pub const ASSUMPTION_OF_MARY: HolidayDefinition =
    HolidayDefinition::fixed("Mariä Himmelfahrt", "Assumption of Mary", Month::August, 15)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Mari%C3%A4_Aufnahme_in_den_Himmel",
            "https://en.wikipedia.org/wiki/Assumption_of_Mary",
        );

/// Allerheiligen, November 1.
pub const ALL_SAINTS_DAY: HolidayDefinition =
    HolidayDefinition::fixed("Allerheiligen", "All Saints' Day", Month::November, 1)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Allerheiligen",
            "https://en.wikipedia.org/wiki/All_Saints%27_Day",
        );

/// Mariä Empfängnis, December 8.
pub const IMMACULATE_CONCEPTION: HolidayDefinition = HolidayDefinition::fixed(
    "Mariä Empfängnis",
    "Immaculate Conception",
    Month::December,
    8,
)
.with_wikipedia(
    "https://de.wikipedia.org/wiki/Mari%C3%A4_Empf%C3%A4ngnis",
    "https://en.wikipedia.org/wiki/Immaculate_Conception",
);

/// Erster Weihnachtstag, December 25.
pub const CHRISTMAS_DAY: HolidayDefinition =
    HolidayDefinition::fixed("Erster Weihnachtstag", "Christmas Day", Month::December, 25)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Weihnachten",
            "https://en.wikipedia.org/wiki/Christmas",
        );

/// Zweiter Weihnachtstag, December 26.
pub const BOXING_DAY: HolidayDefinition =
    HolidayDefinition::fixed("Zweiter Weihnachtstag", "Boxing Day", Month::December, 26)
        .with_wikipedia(
            "https://de.wikipedia.org/wiki/Zweiter_Weihnachtsfeiertag",
            "https://en.wikipedia.org/wiki/Boxing_Day",
        );

#[cfg(test)]
mod tests {
    use super::*;
    use fk_time::Date;

    #[test]
    fn fixed_definitions_resolve() {
        let d = NEW_YEARS_DAY.resolve(2025).unwrap();
        assert_eq!(d.date, Date::from_ymd(2025, 1, 1).unwrap());
        let d = BOXING_DAY.resolve(2025).unwrap();
        assert_eq!(d.date, Date::from_ymd(2025, 12, 26).unwrap());
    }

    #[test]
    fn computed_definitions_resolve() {
        let d = WHIT_MONDAY.resolve(2025).unwrap();
        assert_eq!(d.date, Date::from_ymd(2025, 6, 9).unwrap());
        let d = GOOD_FRIDAY.resolve(2024).unwrap();
        assert_eq!(d.date, Date::from_ymd(2024, 3, 29).unwrap());
    }

    #[test]
    fn wikipedia_links_present() {
        assert!(EPIPHANY.wikipedia_de.unwrap().contains("wikipedia.org"));
        assert!(EPIPHANY.wikipedia_en.unwrap().contains("wikipedia.org"));
    }
}
