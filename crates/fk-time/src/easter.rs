//! Easter computation and the moveable feasts derived from it.
//!
//! Easter Sunday is computed with the Meeus/Jones/Butcher algorithm,
//! which is valid for all Gregorian years. Every moveable feast is a
//! fixed day offset from that single computation, so the derived dates
//! can never drift apart.

use crate::date::Date;
use crate::weekday::Weekday;
use fk_core::errors::Result;

/// Compute Easter Sunday for a Gregorian year (Meeus/Jones/Butcher).
///
/// # Errors
/// Fails only if `year` is outside the supported [`Date`] range.
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    Date::from_ymd(year, month as u8, day as u8)
}

/// Good Friday: two days before Easter Sunday.
pub fn good_friday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(-2)
}

/// Easter Monday: the day after Easter Sunday.
pub fn easter_monday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(1)
}

/// Ascension Day: 39 days after Easter Sunday.
pub fn ascension_day(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(39)
}

/// Whit Sunday (Pentecost): 49 days after Easter Sunday.
pub fn whit_sunday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(49)
}

/// Whit Monday: 50 days after Easter Sunday.
pub fn whit_monday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(50)
}

/// Corpus Christi: 60 days after Easter Sunday.
pub fn corpus_christi(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(60)
}

/// Repentance and Prayer Day (Germany): the Wednesday on or immediately
/// before November 23. Not Easter-relative.
pub fn repentance_day(year: u16) -> Result<Date> {
    Date::from_ymd(year, 11, 23)?.previous_or_same(Weekday::Wednesday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_reference_years() {
        assert_eq!(easter_sunday(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025).unwrap(), date(2025, 4, 20));
        assert_eq!(easter_sunday(2026).unwrap(), date(2026, 4, 5));
        assert_eq!(easter_sunday(2000).unwrap(), date(2000, 4, 23));
        assert_eq!(easter_sunday(1943).unwrap(), date(1943, 4, 25));
        assert_eq!(easter_sunday(2038).unwrap(), date(2038, 4, 25));
        // March 23 is the earliest Easter within the supported range.
        assert_eq!(easter_sunday(1913).unwrap(), date(1913, 3, 23));
        assert_eq!(easter_sunday(2008).unwrap(), date(2008, 3, 23));
    }

    #[test]
    fn moveable_feasts_2025() {
        assert_eq!(good_friday(2025).unwrap(), date(2025, 4, 18));
        assert_eq!(easter_monday(2025).unwrap(), date(2025, 4, 21));
        assert_eq!(ascension_day(2025).unwrap(), date(2025, 5, 29));
        assert_eq!(whit_sunday(2025).unwrap(), date(2025, 6, 8));
        assert_eq!(whit_monday(2025).unwrap(), date(2025, 6, 9));
        assert_eq!(corpus_christi(2025).unwrap(), date(2025, 6, 19));
    }

    #[test]
    fn repentance_day_reference_years() {
        // 2025: Nov 23 is a Sunday → Wednesday Nov 19
        assert_eq!(repentance_day(2025).unwrap(), date(2025, 11, 19));
        // 2022: Nov 23 is itself a Wednesday
        assert_eq!(repentance_day(2022).unwrap(), date(2022, 11, 23));
        // 2024: Nov 23 is a Saturday → Wednesday Nov 20
        assert_eq!(repentance_day(2024).unwrap(), date(2024, 11, 20));
    }

    proptest! {
        #[test]
        fn offset_consistency(year in 1900u16..=2199) {
            let easter = easter_sunday(year).unwrap();
            prop_assert_eq!(easter.weekday(), Weekday::Sunday);
            prop_assert_eq!(easter_monday(year).unwrap() - easter, 1);
            prop_assert_eq!(good_friday(year).unwrap() - easter, -2);
            prop_assert_eq!(ascension_day(year).unwrap() - easter, 39);
            prop_assert_eq!(whit_sunday(year).unwrap() - easter, 49);
            prop_assert_eq!(
                whit_monday(year).unwrap(),
                whit_sunday(year).unwrap() + 1
            );
            prop_assert_eq!(corpus_christi(year).unwrap() - easter, 60);
        }

        #[test]
        fn easter_in_march_or_april(year in 1900u16..=2199) {
            let easter = easter_sunday(year).unwrap();
            let m = easter.month();
            prop_assert!(m == 3 || m == 4);
            if m == 3 {
                prop_assert!(easter.day_of_month() >= 22);
            } else {
                prop_assert!(easter.day_of_month() <= 25);
            }
        }

        #[test]
        fn repentance_day_invariant(year in 1900u16..=2199) {
            let d = repentance_day(year).unwrap();
            prop_assert_eq!(d.weekday(), Weekday::Wednesday);
            let nov23 = Date::from_ymd(year, 11, 23).unwrap();
            let gap = nov23 - d;
            prop_assert!((0..7).contains(&gap));
        }

        #[test]
        fn idempotent(year in 1900u16..=2199) {
            prop_assert_eq!(easter_sunday(year).unwrap(), easter_sunday(year).unwrap());
            prop_assert_eq!(repentance_day(year).unwrap(), repentance_day(year).unwrap());
        }
    }
}
