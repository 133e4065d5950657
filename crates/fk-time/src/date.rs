//! `Date` — a civil calendar date.
//!
//! Dates are stored as a serial number of days: serial 1 is
//! January 1, 1900, and the supported range runs through
//! December 31, 2199. All dates are timezone-naive; there is no
//! time-of-day component.

use crate::weekday::Weekday;
use fk_core::errors::{Error, Result};

/// A civil calendar date represented as a day serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum supported date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum supported date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year (1900–2199), month (1–12), and
    /// day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (1 = 1900-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (January 1, 1900) is a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` civil days, rolling over month and year boundaries.
    /// Returns an error if the result is out of the supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the *n*-th occurrence of `weekday` in the month of
    /// `year`/`month`.
    ///
    /// For example, `nth_weekday(2, Weekday::Monday, 2025, 9)` returns the
    /// second Monday of September 2025 (2025-09-08).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month, or if the month is invalid.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        // Days from the 1st to the first occurrence of the target weekday
        let skip = (target_wd as i32 - first_wd as i32).rem_euclid(7);
        let day = 1 + skip + 7 * (n as i32 - 1);
        if day > days_in_month(year, month) as i32 {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }

    /// Return the first occurrence of `weekday` on or after `self`.
    ///
    /// If `self` already falls on `weekday`, `self` is returned unchanged.
    pub fn next_or_same(self, weekday: Weekday) -> Result<Self> {
        let skip = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self.add_days(skip)
    }

    /// Return the last occurrence of `weekday` on or before `self`.
    ///
    /// If `self` already falls on `weekday`, `self` is returned unchanged.
    pub fn previous_or_same(self, weekday: Weekday) -> Result<Self> {
        let back = (self.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        self.add_days(-back)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number (1 = 1900-01-01).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in whole years since 1900, counting leap days in [1900, year)
    let mut serial = (y - 1900) * 365;
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    // Days in whole months of the current year
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + d
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d, Date::MIN);
    }

    #[test]
    fn max_date() {
        let d = Date::from_ymd(2199, 12, 31).unwrap();
        assert_eq!(d, Date::MAX);
    }

    #[test]
    fn roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2025, 4, 20),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn invalid_dates_rejected() {
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::from_ymd(2025, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
        assert!(Date::from_ymd(2025, 4, 0).is_err());
    }

    #[test]
    fn weekday() {
        // 2024-01-01 is a Monday
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        // 2025-11-23 is a Sunday
        assert_eq!(
            Date::from_ymd(2025, 11, 23).unwrap().weekday(),
            Weekday::Sunday
        );
    }

    #[test]
    fn arithmetic_rolls_over_year() {
        let d = Date::from_ymd(2025, 12, 24).unwrap();
        let d2 = d + 13;
        assert_eq!(d2, Date::from_ymd(2026, 1, 6).unwrap());
        assert_eq!(d2 - d, 13);
    }

    #[test]
    fn nth_weekday() {
        // First Monday of September 2025 = September 1
        let d = Date::nth_weekday(1, Weekday::Monday, 2025, 9).unwrap();
        assert_eq!(d, Date::from_ymd(2025, 9, 1).unwrap());

        // Second Monday of September 2025 = September 8
        let d2 = Date::nth_weekday(2, Weekday::Monday, 2025, 9).unwrap();
        assert_eq!(d2, Date::from_ymd(2025, 9, 8).unwrap());

        // Third Monday of February 2025 = February 17
        let d3 = Date::nth_weekday(3, Weekday::Monday, 2025, 2).unwrap();
        assert_eq!(d3, Date::from_ymd(2025, 2, 17).unwrap());
    }

    #[test]
    fn nth_weekday_out_of_range() {
        // There is no 5th Wednesday in February 2025
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2025, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2025, 1).is_err());
        // Large n must report the error, not wrap around
        assert!(Date::nth_weekday(38, Weekday::Monday, 2025, 9).is_err());
        assert!(Date::nth_weekday(u8::MAX, Weekday::Monday, 2025, 9).is_err());
    }

    #[test]
    fn next_or_same() {
        // 2025-06-28 is a Saturday, so it is its own first Saturday
        let sat = Date::from_ymd(2025, 6, 28).unwrap();
        assert_eq!(sat.next_or_same(Weekday::Saturday).unwrap(), sat);

        // 2026-06-28 is a Sunday → first Saturday on/after is July 4
        let sun = Date::from_ymd(2026, 6, 28).unwrap();
        assert_eq!(
            sun.next_or_same(Weekday::Saturday).unwrap(),
            Date::from_ymd(2026, 7, 4).unwrap()
        );
    }

    #[test]
    fn previous_or_same() {
        // 2025-11-23 is a Sunday → Wednesday before is November 19
        let d = Date::from_ymd(2025, 11, 23).unwrap();
        assert_eq!(
            d.previous_or_same(Weekday::Wednesday).unwrap(),
            Date::from_ymd(2025, 11, 19).unwrap()
        );
        // 2022-11-23 is itself a Wednesday
        let w = Date::from_ymd(2022, 11, 23).unwrap();
        assert_eq!(w.previous_or_same(Weekday::Wednesday).unwrap(), w);
    }

    proptest! {
        #[test]
        fn serial_roundtrip(serial in 1..=Date::MAX.serial()) {
            let d = Date::MIN + (serial - 1);
            let back = Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap();
            prop_assert_eq!(d, back);
        }

        #[test]
        fn first_weekday_in_first_seven_days(
            year in 1900u16..=2199,
            month in 1u8..=12,
            wd in 1u8..=7,
        ) {
            let weekday = Weekday::from_ordinal(wd).unwrap();
            let d = Date::nth_weekday(1, weekday, year, month).unwrap();
            prop_assert!(d.day_of_month() >= 1 && d.day_of_month() <= 7);
            prop_assert_eq!(d.weekday(), weekday);
        }

        #[test]
        fn next_or_same_lands_on_weekday(
            serial in 1..=(Date::MAX.serial() - 7),
            wd in 1u8..=7,
        ) {
            let weekday = Weekday::from_ordinal(wd).unwrap();
            let d = Date::MIN + (serial - 1);
            let next = d.next_or_same(weekday).unwrap();
            prop_assert_eq!(next.weekday(), weekday);
            prop_assert!(next - d >= 0 && next - d < 7);
        }
    }
}
