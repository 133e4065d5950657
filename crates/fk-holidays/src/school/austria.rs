//! Austrian school holiday calculator.
//!
//! All periods follow the Schulzeitgesetz: fixed calendar windows, nth
//! Monday rules keyed on the federal state, and Easter-relative breaks.
//! The federal states fall into fixed groups for the school year start,
//! the semester break, and the summer holiday start.

use crate::countries::austria::AustrianRegion;
use crate::definition::SchoolHolidayPeriod;
use fk_core::errors::Result;
use fk_time::{easter, Date, Weekday};

/// States whose school year starts on the first Monday of September
/// (§ 2 (1)); every other state starts a week later.
const EARLY_START_STATES: [AustrianRegion; 3] = [
    AustrianRegion::Burgenland,
    AustrianRegion::Niederoesterreich,
    AustrianRegion::Wien,
];

/// First day of the school year beginning in autumn of `year` (§ 2 (1)).
pub fn school_year_start(year: u16, region: AustrianRegion) -> Result<Date> {
    let nth = if EARLY_START_STATES.contains(&region) {
        1
    } else {
        2
    };
    Date::nth_weekday(nth, Weekday::Monday, year, 9)
}

/// Semester break (§ 2 (2) 1. b), § 2 (4) 5.): Monday through Saturday
/// of the state's week in February.
pub fn semester_break(year: u16, region: AustrianRegion) -> Result<SchoolHolidayPeriod> {
    let nth = match region {
        AustrianRegion::Niederoesterreich | AustrianRegion::Wien => 1,
        AustrianRegion::Burgenland
        | AustrianRegion::Kaernten
        | AustrianRegion::Salzburg
        | AustrianRegion::Tirol
        | AustrianRegion::Vorarlberg => 2,
        AustrianRegion::Oberoesterreich | AustrianRegion::Steiermark => 3,
    };
    let start = Date::nth_weekday(nth, Weekday::Monday, year, 2)?;
    Ok(SchoolHolidayPeriod {
        name_de: "Semesterferien",
        name_en: "Semester Break",
        start,
        end: start.add_days(5)?,
    })
}

/// Easter break (§ 2 (4) 6.): the Saturday before Palm Sunday through
/// Easter Monday.
pub fn easter_break(year: u16) -> Result<SchoolHolidayPeriod> {
    let easter = easter::easter_sunday(year)?;
    Ok(SchoolHolidayPeriod {
        name_de: "Osterferien",
        name_en: "Easter Break",
        start: easter.add_days(-8)?,
        end: easter.add_days(1)?,
    })
}

/// Whit break (§ 2 (4) 7.): the Saturday before Whit Sunday through
/// Whit Monday.
pub fn whit_break(year: u16) -> Result<SchoolHolidayPeriod> {
    let easter = easter::easter_sunday(year)?;
    Ok(SchoolHolidayPeriod {
        name_de: "Pfingstferien",
        name_en: "Whit Break",
        start: easter.add_days(48)?,
        end: easter.add_days(50)?,
    })
}

/// Summer holidays (§ 2 (2) 2.): start on the first Saturday on or after
/// June 28 (early-start states) or July 5, and end the day before the
/// school year starts.
pub fn summer_holidays(year: u16, region: AustrianRegion) -> Result<SchoolHolidayPeriod> {
    let window_open = if EARLY_START_STATES.contains(&region) {
        Date::from_ymd(year, 6, 28)?
    } else {
        Date::from_ymd(year, 7, 5)?
    };
    let start = window_open.next_or_same(Weekday::Saturday)?;
    let end = school_year_start(year, region)?.add_days(-1)?;
    Ok(SchoolHolidayPeriod {
        name_de: "Sommerferien",
        name_en: "Summer Holidays",
        start,
        end,
    })
}

/// Autumn break (§ 2 (4) 8.): October 27 through October 31.
pub fn autumn_break(year: u16) -> Result<SchoolHolidayPeriod> {
    Ok(SchoolHolidayPeriod {
        name_de: "Herbstferien",
        name_en: "Autumn Break",
        start: Date::from_ymd(year, 10, 27)?,
        end: Date::from_ymd(year, 10, 31)?,
    })
}

/// Christmas break (§ 2 (4) 3.): December 24 through January 6 of the
/// following year.
pub fn christmas_break(year: u16) -> Result<SchoolHolidayPeriod> {
    Ok(SchoolHolidayPeriod {
        name_de: "Weihnachtsferien",
        name_en: "Christmas Break",
        start: Date::from_ymd(year, 12, 24)?,
        end: Date::from_ymd(year + 1, 1, 6)?,
    })
}

/// The state patron saint's day (§ 2 (4) 2.), a single school-free day.
pub fn patron_saint_day(year: u16, region: AustrianRegion) -> Result<SchoolHolidayPeriod> {
    let (month, day, name_de, name_en) = match region {
        AustrianRegion::Kaernten
        | AustrianRegion::Steiermark
        | AustrianRegion::Tirol
        | AustrianRegion::Vorarlberg => (3, 19, "Hl. Josef", "St. Joseph"),
        AustrianRegion::Oberoesterreich => (5, 4, "Hl. Florian", "St. Florian"),
        AustrianRegion::Salzburg => (9, 24, "Hl. Rupert", "St. Rupert"),
        AustrianRegion::Burgenland => (11, 11, "Hl. Martin", "St. Martin"),
        AustrianRegion::Wien | AustrianRegion::Niederoesterreich => {
            (11, 15, "Hl. Leopold", "St. Leopold")
        }
    };
    let date = Date::from_ymd(year, month, day)?;
    Ok(SchoolHolidayPeriod {
        name_de,
        name_en,
        start: date,
        end: date,
    })
}

/// The additional state holiday, observed only in Carinthia (October 10,
/// anniversary of the 1920 plebiscite).
pub fn state_holiday(year: u16, region: AustrianRegion) -> Result<Option<SchoolHolidayPeriod>> {
    if region != AustrianRegion::Kaernten {
        return Ok(None);
    }
    let date = Date::from_ymd(year, 10, 10)?;
    Ok(Some(SchoolHolidayPeriod {
        name_de: "Tag der Volksabstimmung",
        name_en: "Carinthian Plebiscite Day",
        start: date,
        end: date,
    }))
}

/// All school holidays of a calendar year for a federal state.
///
/// Enumeration order is fixed: patron saint day, state holiday (Carinthia
/// only), semester break, Easter break, Whit break, summer holidays,
/// autumn break, Christmas break.
pub fn school_holidays(year: u16, region: AustrianRegion) -> Result<Vec<SchoolHolidayPeriod>> {
    let mut periods = Vec::with_capacity(8);
    periods.push(patron_saint_day(year, region)?);
    if let Some(holiday) = state_holiday(year, region)? {
        periods.push(holiday);
    }
    periods.push(semester_break(year, region)?);
    periods.push(easter_break(year)?);
    periods.push(whit_break(year)?);
    periods.push(summer_holidays(year, region)?);
    periods.push(autumn_break(year)?);
    periods.push(christmas_break(year)?);
    Ok(periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn school_year_start_2025() {
        // First Monday of September 2025 is the 1st.
        assert_eq!(
            school_year_start(2025, AustrianRegion::Wien).unwrap(),
            date(2025, 9, 1)
        );
        assert_eq!(
            school_year_start(2025, AustrianRegion::Tirol).unwrap(),
            date(2025, 9, 8)
        );
    }

    #[test]
    fn semester_break_groups_2025() {
        // First Monday of February 2025 is the 3rd.
        let vienna = semester_break(2025, AustrianRegion::Wien).unwrap();
        assert_eq!(vienna.start, date(2025, 2, 3));
        assert_eq!(vienna.end, date(2025, 2, 8));

        let carinthia = semester_break(2025, AustrianRegion::Kaernten).unwrap();
        assert_eq!(carinthia.start, date(2025, 2, 10));

        let styria = semester_break(2025, AustrianRegion::Steiermark).unwrap();
        assert_eq!(styria.start, date(2025, 2, 17));
    }

    #[test]
    fn easter_break_2025() {
        // Easter 2025 is April 20.
        let p = easter_break(2025).unwrap();
        assert_eq!(p.start, date(2025, 4, 12));
        assert_eq!(p.end, date(2025, 4, 21));
        assert_eq!(p.start.weekday(), Weekday::Saturday);
        assert_eq!(p.end.weekday(), Weekday::Monday);
    }

    #[test]
    fn whit_break_2025() {
        let p = whit_break(2025).unwrap();
        assert_eq!(p.start, date(2025, 6, 7));
        assert_eq!(p.end, date(2025, 6, 9));
    }

    #[test]
    fn summer_holidays_2025() {
        // First Saturday on or after June 28, 2025 is June 28 itself.
        let vienna = summer_holidays(2025, AustrianRegion::Wien).unwrap();
        assert_eq!(vienna.start, date(2025, 6, 28));
        assert_eq!(vienna.end, date(2025, 8, 31));

        let tyrol = summer_holidays(2025, AustrianRegion::Tirol).unwrap();
        assert_eq!(tyrol.start, date(2025, 7, 5));
        assert_eq!(tyrol.end, date(2025, 9, 7));
    }

    #[test]
    fn fixed_breaks() {
        let autumn = autumn_break(2025).unwrap();
        assert_eq!(autumn.start, date(2025, 10, 27));
        assert_eq!(autumn.end, date(2025, 10, 31));
        assert_eq!(autumn.len_days(), 5);

        let christmas = christmas_break(2025).unwrap();
        assert_eq!(christmas.start, date(2025, 12, 24));
        assert_eq!(christmas.end, date(2026, 1, 6));
    }

    #[test]
    fn patron_saints() {
        let carinthia = patron_saint_day(2025, AustrianRegion::Kaernten).unwrap();
        assert_eq!(carinthia.name_de, "Hl. Josef");
        assert_eq!(carinthia.start, date(2025, 3, 19));
        assert!(carinthia.is_single_day());

        let salzburg = patron_saint_day(2025, AustrianRegion::Salzburg).unwrap();
        assert_eq!(salzburg.name_de, "Hl. Rupert");
        assert_eq!(salzburg.start, date(2025, 9, 24));
    }

    #[test]
    fn plebiscite_day_is_carinthia_only() {
        let carinthia = state_holiday(2025, AustrianRegion::Kaernten)
            .unwrap()
            .unwrap();
        assert_eq!(carinthia.name_de, "Tag der Volksabstimmung");
        assert_eq!(carinthia.start, date(2025, 10, 10));

        for region in AustrianRegion::ALL {
            if region != AustrianRegion::Kaernten {
                assert!(state_holiday(2025, region).unwrap().is_none());
            }
        }
    }

    #[test]
    fn carinthia_has_one_extra_period() {
        let carinthia = school_holidays(2025, AustrianRegion::Kaernten).unwrap();
        let vienna = school_holidays(2025, AustrianRegion::Wien).unwrap();
        assert_eq!(carinthia.len(), 8);
        assert_eq!(vienna.len(), 7);
    }

    proptest! {
        #[test]
        fn semester_break_spans_monday_to_saturday(year in 1901u16..=2198) {
            for region in AustrianRegion::ALL {
                let p = semester_break(year, region).unwrap();
                prop_assert_eq!(p.start.weekday(), Weekday::Monday);
                prop_assert_eq!(p.end.weekday(), Weekday::Saturday);
                prop_assert_eq!(p.len_days(), 6);
            }
        }

        #[test]
        fn summer_ends_the_day_before_school_starts(year in 1901u16..=2198) {
            for region in AustrianRegion::ALL {
                let summer = summer_holidays(year, region).unwrap();
                let start = school_year_start(year, region).unwrap();
                prop_assert_eq!(summer.end.add_days(1).unwrap(), start);
                prop_assert_eq!(summer.start.weekday(), Weekday::Saturday);
                prop_assert_eq!(start.weekday(), Weekday::Monday);
            }
        }

        #[test]
        fn easter_break_is_ten_days(year in 1901u16..=2198) {
            let p = easter_break(year).unwrap();
            prop_assert_eq!(p.len_days(), 10);
            let whit = whit_break(year).unwrap();
            prop_assert_eq!(whit.len_days(), 3);
        }
    }
}
