//! German school holidays, per state and school year.
//!
//! Unlike Austria there is no federal law to compute these from; each
//! state negotiates its dates through the Kultusministerkonferenz
//! (<https://www.kmk.org/service/ferien.html>), so the data is a static
//! table keyed by school year. Dates are stored in the published
//! `DD.MM.YYYY` form and parsed on query.

use crate::countries::germany::GermanState;
use crate::definition::SchoolHolidayPeriod;
use fk_core::errors::{Error, Result};
use fk_time::Date;

/// One published period: start and end in `DD.MM.YYYY`, plus an optional
/// free-text annotation carrying additional single days or ranges.
#[derive(Debug, Clone, Copy)]
struct RawPeriod {
    start: &'static str,
    end: &'static str,
    extra: Option<&'static str>,
}

/// Published periods of one state for one school year. `None` means the
/// state skips that break.
#[derive(Debug, Clone, Copy)]
struct RawYear {
    herbst: Option<RawPeriod>,
    weihnachten: Option<RawPeriod>,
    winter: Option<RawPeriod>,
    ostern: Option<RawPeriod>,
    pfingsten: Option<RawPeriod>,
    sommer: Option<RawPeriod>,
}

const fn p(start: &'static str, end: &'static str) -> Option<RawPeriod> {
    Some(RawPeriod {
        start,
        end,
        extra: None,
    })
}

const fn px(start: &'static str, end: &'static str, extra: &'static str) -> Option<RawPeriod> {
    Some(RawPeriod {
        start,
        end,
        extra: Some(extra),
    })
}

/// Key for the school year starting in autumn of `year`, e.g. `2025`
/// gives `"2025/2026"`.
pub fn school_year_key(year: u16) -> String {
    format!("{}/{}", year, year + 1)
}

/// Parse a `DD.MM.YYYY` date.
pub fn parse_date(s: &str) -> Result<Date> {
    let mut parts = s.split('.');
    let (day, month, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(d), Some(m), Some(y), None) => (d, m, y),
        _ => return Err(Error::Parse(format!("expected DD.MM.YYYY, got {s:?}"))),
    };
    let day: u8 = day
        .parse()
        .map_err(|_| Error::Parse(format!("bad day in {s:?}")))?;
    let month: u8 = month
        .parse()
        .map_err(|_| Error::Parse(format!("bad month in {s:?}")))?;
    let year: u16 = year
        .parse()
        .map_err(|_| Error::Parse(format!("bad year in {s:?}")))?;
    Date::from_ymd(year, month, day)
}

/// Parse the free-text `extra` annotation into periods.
///
/// The annotation is a list of single dates or `start-end` ranges,
/// separated by commas or the word "und". Tokens that do not parse are
/// skipped; a fully malformed annotation yields no additional periods.
fn parse_extra_periods(
    extra: &str,
    name_de: &'static str,
    name_en: &'static str,
) -> Vec<SchoolHolidayPeriod> {
    extra
        .replace(" und ", ",")
        .split(',')
        .filter_map(|token| {
            let token = token.trim();
            let (start, end) = match token.split_once('-') {
                Some((a, b)) => (parse_date(a.trim()).ok()?, parse_date(b.trim()).ok()?),
                None => {
                    let d = parse_date(token).ok()?;
                    (d, d)
                }
            };
            (start <= end).then_some(SchoolHolidayPeriod {
                name_de,
                name_en,
                start,
                end,
            })
        })
        .collect()
}

fn push_period(
    out: &mut Vec<SchoolHolidayPeriod>,
    raw: Option<RawPeriod>,
    name_de: &'static str,
    name_en: &'static str,
) -> Result<()> {
    let Some(raw) = raw else {
        return Ok(());
    };
    out.push(SchoolHolidayPeriod {
        name_de,
        name_en,
        start: parse_date(raw.start)?,
        end: parse_date(raw.end)?,
    });
    if let Some(extra) = raw.extra {
        out.extend(parse_extra_periods(extra, name_de, name_en));
    }
    Ok(())
}

/// School holidays of a state for the school year starting in autumn of
/// `year`.
///
/// Returns the published periods in the fixed order autumn, Christmas,
/// winter, Easter, Whitsun, summer; additional days from the `extra`
/// annotation follow their parent period as separate entries. Years not
/// covered by the table yield an empty list.
pub fn school_holidays(year: u16, state: GermanState) -> Result<Vec<SchoolHolidayPeriod>> {
    let Some(raw) = lookup(year, state) else {
        return Ok(Vec::new());
    };
    let mut periods = Vec::with_capacity(6);
    push_period(&mut periods, raw.herbst, "Herbstferien", "Autumn Break")?;
    push_period(
        &mut periods,
        raw.weihnachten,
        "Weihnachtsferien",
        "Christmas Break",
    )?;
    push_period(&mut periods, raw.winter, "Winterferien", "Winter Break")?;
    push_period(&mut periods, raw.ostern, "Osterferien", "Easter Break")?;
    push_period(&mut periods, raw.pfingsten, "Pfingstferien", "Whit Break")?;
    push_period(&mut periods, raw.sommer, "Sommerferien", "Summer Holidays")?;
    Ok(periods)
}

/// School years covered by the table, by starting calendar year.
pub const COVERED_YEARS: [u16; 3] = [2025, 2026, 2027];

fn lookup(year: u16, state: GermanState) -> Option<RawYear> {
    let by_state = match year {
        2025 => &YEAR_2025_2026,
        2026 => &YEAR_2026_2027,
        2027 => &YEAR_2027_2028,
        _ => return None,
    };
    by_state
        .iter()
        .find(|(s, _)| *s == state)
        .map(|(_, raw)| *raw)
}

static YEAR_2025_2026: [(GermanState, RawYear); 16] = [
    (
        GermanState::BadenWuerttemberg,
        RawYear {
            herbst: px("27.10.2025", "30.10.2025", "31.10.2025"),
            weihnachten: p("22.12.2025", "05.01.2026"),
            winter: None,
            ostern: p("30.03.2026", "11.04.2026"),
            pfingsten: p("26.05.2026", "05.06.2026"),
            sommer: p("30.07.2026", "12.09.2026"),
        },
    ),
    (
        GermanState::Bayern,
        RawYear {
            herbst: p("03.11.2025", "07.11.2025"),
            weihnachten: p("22.12.2025", "05.01.2026"),
            winter: p("16.02.2026", "20.02.2026"),
            ostern: p("30.03.2026", "10.04.2026"),
            pfingsten: p("26.05.2026", "05.06.2026"),
            sommer: p("03.08.2026", "14.09.2026"),
        },
    ),
    (
        GermanState::Berlin,
        RawYear {
            herbst: p("20.10.2025", "01.11.2025"),
            weihnachten: p("22.12.2025", "02.01.2026"),
            winter: p("02.02.2026", "07.02.2026"),
            ostern: p("30.03.2026", "10.04.2026"),
            pfingsten: px("15.05.2026", "15.05.2026", "26.05.2026"),
            sommer: p("09.07.2026", "22.08.2026"),
        },
    ),
    (
        GermanState::Brandenburg,
        RawYear {
            herbst: p("20.10.2025", "01.11.2025"),
            weihnachten: p("22.12.2025", "02.01.2026"),
            winter: p("02.02.2026", "07.02.2026"),
            ostern: p("30.03.2026", "10.04.2026"),
            pfingsten: p("26.05.2026", "26.05.2026"),
            sommer: p("09.07.2026", "22.08.2026"),
        },
    ),
    (
        GermanState::Bremen,
        RawYear {
            herbst: p("13.10.2025", "25.10.2025"),
            weihnachten: p("22.12.2025", "05.01.2026"),
            winter: p("02.02.2026", "03.02.2026"),
            ostern: p("23.03.2026", "07.04.2026"),
            pfingsten: px("15.05.2026", "15.05.2026", "26.05.2026"),
            sommer: p("02.07.2026", "12.08.2026"),
        },
    ),
    (
        GermanState::Hamburg,
        RawYear {
            herbst: p("20.10.2025", "31.10.2025"),
            weihnachten: p("17.12.2025", "02.01.2026"),
            winter: p("30.01.2026", "30.01.2026"),
            ostern: p("02.03.2026", "13.03.2026"),
            pfingsten: p("11.05.2026", "15.05.2026"),
            sommer: p("09.07.2026", "19.08.2026"),
        },
    ),
    (
        GermanState::Hessen,
        RawYear {
            herbst: p("06.10.2025", "18.10.2025"),
            weihnachten: p("22.12.2025", "10.01.2026"),
            winter: None,
            ostern: p("30.03.2026", "10.04.2026"),
            pfingsten: None,
            sommer: p("29.06.2026", "07.08.2026"),
        },
    ),
    (
        GermanState::MecklenburgVorpommern,
        RawYear {
            herbst: px("20.10.2025", "24.10.2025", "02.10.2025, 03.11.2025"),
            weihnachten: p("20.12.2025", "03.01.2026"),
            winter: p("09.02.2026", "20.02.2026"),
            ostern: p("30.03.2026", "08.04.2026"),
            pfingsten: px("22.05.2026", "26.05.2026", "15.05.2026"),
            sommer: p("13.07.2026", "22.08.2026"),
        },
    ),
    (
        GermanState::Niedersachsen,
        RawYear {
            herbst: p("13.10.2025", "25.10.2025"),
            weihnachten: p("22.12.2025", "05.01.2026"),
            winter: p("02.02.2026", "03.02.2026"),
            ostern: p("23.03.2026", "07.04.2026"),
            pfingsten: px("15.05.2026", "15.05.2026", "26.05.2026"),
            sommer: p("02.07.2026", "12.08.2026"),
        },
    ),
    (
        GermanState::NordrheinWestfalen,
        RawYear {
            herbst: p("13.10.2025", "25.10.2025"),
            weihnachten: p("22.12.2025", "06.01.2026"),
            winter: None,
            ostern: p("30.03.2026", "11.04.2026"),
            pfingsten: p("26.05.2026", "26.05.2026"),
            sommer: p("20.07.2026", "01.09.2026"),
        },
    ),
    (
        GermanState::RheinlandPfalz,
        RawYear {
            herbst: p("13.10.2025", "24.10.2025"),
            weihnachten: p("22.12.2025", "07.01.2026"),
            winter: None,
            ostern: p("30.03.2026", "10.04.2026"),
            pfingsten: None,
            sommer: p("29.06.2026", "07.08.2026"),
        },
    ),
    (
        GermanState::Saarland,
        RawYear {
            herbst: p("13.10.2025", "24.10.2025"),
            weihnachten: p("22.12.2025", "02.01.2026"),
            winter: p("16.02.2026", "20.02.2026"),
            ostern: p("07.04.2026", "17.04.2026"),
            pfingsten: None,
            sommer: p("29.06.2026", "07.08.2026"),
        },
    ),
    (
        GermanState::Sachsen,
        RawYear {
            herbst: p("06.10.2025", "18.10.2025"),
            weihnachten: p("22.12.2025", "02.01.2026"),
            winter: p("09.02.2026", "21.02.2026"),
            ostern: p("03.04.2026", "10.04.2026"),
            pfingsten: p("15.05.2026", "15.05.2026"),
            sommer: p("04.07.2026", "14.08.2026"),
        },
    ),
    (
        GermanState::SachsenAnhalt,
        RawYear {
            herbst: p("13.10.2025", "25.10.2025"),
            weihnachten: p("22.12.2025", "05.01.2026"),
            winter: p("31.01.2026", "06.02.2026"),
            ostern: p("30.03.2026", "04.04.2026"),
            pfingsten: p("26.05.2026", "29.05.2026"),
            sommer: p("04.07.2026", "14.08.2026"),
        },
    ),
    (
        GermanState::SchleswigHolstein,
        RawYear {
            herbst: p("20.10.2025", "30.10.2025"),
            weihnachten: p("19.12.2025", "06.01.2026"),
            winter: None,
            ostern: p("26.03.2026", "10.04.2026"),
            pfingsten: p("15.05.2026", "15.05.2026"),
            sommer: p("04.07.2026", "15.08.2026"),
        },
    ),
    (
        GermanState::Thueringen,
        RawYear {
            herbst: p("06.10.2025", "18.10.2025"),
            weihnachten: p("22.12.2025", "03.01.2026"),
            winter: p("16.02.2026", "21.02.2026"),
            ostern: p("07.04.2026", "17.04.2026"),
            pfingsten: p("15.05.2026", "15.05.2026"),
            sommer: p("04.07.2026", "14.08.2026"),
        },
    ),
];

static YEAR_2026_2027: [(GermanState, RawYear); 16] = [
    (
        GermanState::BadenWuerttemberg,
        RawYear {
            herbst: px("26.10.2026", "30.10.2026", "31.10.2026"),
            weihnachten: p("23.12.2026", "09.01.2027"),
            winter: None,
            ostern: px("25.03.2027", "03.04.2027", "30.03.2027"),
            pfingsten: p("18.05.2027", "29.05.2027"),
            sommer: p("29.07.2027", "11.09.2027"),
        },
    ),
    (
        GermanState::Bayern,
        RawYear {
            herbst: p("02.11.2026", "06.11.2026"),
            weihnachten: p("24.12.2026", "08.01.2027"),
            winter: p("08.02.2027", "12.02.2027"),
            ostern: p("22.03.2027", "02.04.2027"),
            pfingsten: p("18.05.2027", "28.05.2027"),
            sommer: p("02.08.2027", "13.09.2027"),
        },
    ),
    (
        GermanState::Berlin,
        RawYear {
            herbst: p("19.10.2026", "31.10.2026"),
            weihnachten: p("23.12.2026", "02.01.2027"),
            winter: p("01.02.2027", "06.02.2027"),
            ostern: p("22.03.2027", "02.04.2027"),
            pfingsten: px("07.05.2027", "07.05.2027", "18.05.2027-19.05.2027"),
            sommer: p("01.07.2027", "14.08.2027"),
        },
    ),
    (
        GermanState::Brandenburg,
        RawYear {
            herbst: p("19.10.2026", "30.10.2026"),
            weihnachten: p("23.12.2026", "02.01.2027"),
            winter: p("01.02.2027", "06.02.2027"),
            ostern: p("22.03.2027", "03.04.2027"),
            pfingsten: p("18.05.2027", "18.05.2027"),
            sommer: p("01.07.2027", "14.08.2027"),
        },
    ),
    (
        GermanState::Bremen,
        RawYear {
            herbst: p("12.10.2026", "24.10.2026"),
            weihnachten: p("23.12.2026", "09.01.2027"),
            winter: p("01.02.2027", "02.02.2027"),
            ostern: p("22.03.2027", "03.04.2027"),
            pfingsten: px("07.05.2027", "07.05.2027", "18.05.2027"),
            sommer: p("08.07.2027", "18.08.2027"),
        },
    ),
    (
        GermanState::Hamburg,
        RawYear {
            herbst: p("19.10.2026", "30.10.2026"),
            weihnachten: p("21.12.2026", "01.01.2027"),
            winter: p("29.01.2027", "29.01.2027"),
            ostern: p("01.03.2027", "12.03.2027"),
            pfingsten: p("07.05.2027", "14.05.2027"),
            sommer: p("01.07.2027", "11.08.2027"),
        },
    ),
    (
        GermanState::Hessen,
        RawYear {
            herbst: p("05.10.2026", "17.10.2026"),
            weihnachten: p("23.12.2026", "12.01.2027"),
            winter: None,
            ostern: p("22.03.2027", "02.04.2027"),
            pfingsten: None,
            sommer: p("28.06.2027", "06.08.2027"),
        },
    ),
    (
        GermanState::MecklenburgVorpommern,
        RawYear {
            herbst: p("15.10.2026", "24.10.2026"),
            weihnachten: p("21.12.2026", "02.01.2027"),
            winter: p("08.02.2027", "19.02.2027"),
            ostern: p("24.03.2027", "02.04.2027"),
            pfingsten: px("07.05.2027", "07.05.2027", "14.05.2027-18.05.2027"),
            sommer: p("05.07.2027", "14.08.2027"),
        },
    ),
    (
        GermanState::Niedersachsen,
        RawYear {
            herbst: p("12.10.2026", "24.10.2026"),
            weihnachten: p("23.12.2026", "09.01.2027"),
            winter: p("01.02.2027", "02.02.2027"),
            ostern: p("22.03.2027", "03.04.2027"),
            pfingsten: px("07.05.2027", "07.05.2027", "18.05.2027"),
            sommer: p("08.07.2027", "18.08.2027"),
        },
    ),
    (
        GermanState::NordrheinWestfalen,
        RawYear {
            herbst: p("17.10.2026", "31.10.2026"),
            weihnachten: p("23.12.2026", "06.01.2027"),
            winter: None,
            ostern: p("22.03.2027", "03.04.2027"),
            pfingsten: p("18.05.2027", "18.05.2027"),
            sommer: p("19.07.2027", "31.08.2027"),
        },
    ),
    (
        GermanState::RheinlandPfalz,
        RawYear {
            herbst: p("05.10.2026", "16.10.2026"),
            weihnachten: p("23.12.2026", "08.01.2027"),
            winter: None,
            ostern: p("22.03.2027", "02.04.2027"),
            pfingsten: None,
            sommer: p("28.06.2027", "06.08.2027"),
        },
    ),
    (
        GermanState::Saarland,
        RawYear {
            herbst: p("05.10.2026", "16.10.2026"),
            weihnachten: p("21.12.2026", "31.12.2026"),
            winter: p("08.02.2027", "12.02.2027"),
            ostern: p("30.03.2027", "09.04.2027"),
            pfingsten: None,
            sommer: p("28.06.2027", "06.08.2027"),
        },
    ),
    (
        GermanState::Sachsen,
        RawYear {
            herbst: p("12.10.2026", "24.10.2026"),
            weihnachten: p("23.12.2026", "02.01.2027"),
            winter: p("08.02.2027", "19.02.2027"),
            ostern: p("26.03.2027", "02.04.2027"),
            pfingsten: px("07.05.2027", "07.05.2027", "15.05.2027-18.05.2027"),
            sommer: p("10.07.2027", "20.08.2027"),
        },
    ),
    (
        GermanState::SachsenAnhalt,
        RawYear {
            herbst: p("19.10.2026", "30.10.2026"),
            weihnachten: p("21.12.2026", "02.01.2027"),
            winter: p("01.02.2027", "06.02.2027"),
            ostern: p("22.03.2027", "27.03.2027"),
            pfingsten: p("15.05.2027", "22.05.2027"),
            sommer: p("10.07.2027", "20.08.2027"),
        },
    ),
    (
        GermanState::SchleswigHolstein,
        RawYear {
            herbst: p("12.10.2026", "24.10.2026"),
            weihnachten: p("21.12.2026", "06.01.2027"),
            winter: None,
            ostern: p("30.03.2027", "10.04.2027"),
            pfingsten: p("07.05.2027", "07.05.2027"),
            sommer: p("03.07.2027", "14.08.2027"),
        },
    ),
    (
        GermanState::Thueringen,
        RawYear {
            herbst: p("12.10.2026", "24.10.2026"),
            weihnachten: p("23.12.2026", "02.01.2027"),
            winter: p("01.02.2027", "06.02.2027"),
            ostern: p("22.03.2027", "03.04.2027"),
            pfingsten: p("07.05.2027", "07.05.2027"),
            sommer: p("10.07.2027", "20.08.2027"),
        },
    ),
];

static YEAR_2027_2028: [(GermanState, RawYear); 16] = [
    (
        GermanState::BadenWuerttemberg,
        RawYear {
            herbst: p("02.11.2027", "06.11.2027"),
            weihnachten: p("23.12.2027", "08.01.2028"),
            winter: None,
            ostern: px("13.04.2028", "13.04.2028", "18.04.2028-22.04.2028"),
            pfingsten: p("06.06.2028", "17.06.2028"),
            sommer: p("27.07.2028", "09.09.2028"),
        },
    ),
    (
        GermanState::Bayern,
        RawYear {
            herbst: p("02.11.2027", "05.11.2027"),
            weihnachten: p("24.12.2027", "07.01.2028"),
            winter: p("28.02.2028", "03.03.2028"),
            ostern: p("10.04.2028", "21.04.2028"),
            pfingsten: p("06.06.2028", "16.06.2028"),
            sommer: p("31.07.2028", "11.09.2028"),
        },
    ),
    (
        GermanState::Berlin,
        RawYear {
            herbst: p("11.10.2027", "23.10.2027"),
            weihnachten: p("22.12.2027", "31.12.2027"),
            winter: p("31.01.2028", "05.02.2028"),
            ostern: p("10.04.2028", "22.04.2028"),
            pfingsten: px("26.05.2028", "26.05.2028", "01.06.2028-02.06.2028"),
            sommer: p("01.07.2028", "12.08.2028"),
        },
    ),
    (
        GermanState::Brandenburg,
        RawYear {
            herbst: p("11.10.2027", "23.10.2027"),
            weihnachten: p("23.12.2027", "31.12.2027"),
            winter: p("31.01.2028", "05.02.2028"),
            ostern: p("10.04.2028", "22.04.2028"),
            pfingsten: None,
            sommer: p("29.06.2028", "12.08.2028"),
        },
    ),
    (
        GermanState::Bremen,
        RawYear {
            herbst: p("18.10.2027", "30.10.2027"),
            weihnachten: p("23.12.2027", "08.01.2028"),
            winter: p("31.01.2028", "01.02.2028"),
            ostern: p("10.04.2028", "22.04.2028"),
            pfingsten: px("26.05.2028", "26.05.2028", "06.06.2028"),
            sommer: p("20.07.2028", "30.08.2028"),
        },
    ),
    (
        GermanState::Hamburg,
        RawYear {
            herbst: p("11.10.2027", "22.10.2027"),
            weihnachten: p("20.12.2027", "31.12.2027"),
            winter: p("28.01.2028", "28.01.2028"),
            ostern: p("06.03.2028", "17.03.2028"),
            pfingsten: p("22.05.2028", "26.05.2028"),
            sommer: p("03.07.2028", "11.08.2028"),
        },
    ),
    (
        GermanState::Hessen,
        RawYear {
            herbst: p("04.10.2027", "16.10.2027"),
            weihnachten: p("23.12.2027", "11.01.2028"),
            winter: None,
            ostern: p("03.04.2028", "14.04.2028"),
            pfingsten: None,
            sommer: p("03.07.2028", "11.08.2028"),
        },
    ),
    (
        GermanState::MecklenburgVorpommern,
        RawYear {
            herbst: p("14.10.2027", "23.10.2027"),
            weihnachten: p("22.12.2027", "04.01.2028"),
            winter: px("05.02.2028", "17.02.2028", "18.02.2028"),
            ostern: p("12.04.2028", "21.04.2028"),
            pfingsten: px("26.05.2028", "26.05.2028", "02.06.2028-06.06.2028"),
            sommer: p("26.06.2028", "05.08.2028"),
        },
    ),
    (
        GermanState::Niedersachsen,
        RawYear {
            herbst: p("16.10.2027", "30.10.2027"),
            weihnachten: p("23.12.2027", "08.01.2028"),
            winter: p("31.01.2028", "01.02.2028"),
            ostern: p("10.04.2028", "22.04.2028"),
            pfingsten: px("26.05.2028", "26.05.2028", "06.06.2028"),
            sommer: p("20.07.2028", "30.08.2028"),
        },
    ),
    (
        GermanState::NordrheinWestfalen,
        RawYear {
            herbst: p("23.10.2027", "06.11.2027"),
            weihnachten: p("24.12.2027", "08.01.2028"),
            winter: None,
            ostern: p("10.04.2028", "22.04.2028"),
            pfingsten: None,
            sommer: p("10.07.2028", "22.08.2028"),
        },
    ),
    (
        GermanState::RheinlandPfalz,
        RawYear {
            herbst: p("04.10.2027", "15.10.2027"),
            weihnachten: p("23.12.2027", "07.01.2028"),
            winter: None,
            ostern: p("10.04.2028", "21.04.2028"),
            pfingsten: None,
            sommer: p("03.07.2028", "11.08.2028"),
        },
    ),
    (
        GermanState::Saarland,
        RawYear {
            herbst: p("04.10.2027", "15.10.2027"),
            weihnachten: p("20.12.2027", "31.12.2027"),
            winter: p("21.02.2028", "29.02.2028"),
            ostern: p("12.04.2028", "21.04.2028"),
            pfingsten: None,
            sommer: p("03.07.2028", "11.08.2028"),
        },
    ),
    (
        GermanState::Sachsen,
        RawYear {
            herbst: p("11.10.2027", "23.10.2027"),
            weihnachten: p("23.12.2027", "01.01.2028"),
            winter: p("14.02.2028", "26.02.2028"),
            ostern: p("14.04.2028", "22.04.2028"),
            pfingsten: p("26.05.2028", "26.05.2028"),
            sommer: p("22.07.2028", "01.09.2028"),
        },
    ),
    (
        GermanState::SachsenAnhalt,
        RawYear {
            herbst: p("18.10.2027", "23.10.2027"),
            weihnachten: p("20.12.2027", "31.12.2027"),
            winter: p("07.02.2028", "12.02.2028"),
            ostern: p("10.04.2028", "22.04.2028"),
            pfingsten: p("03.06.2028", "10.06.2028"),
            sommer: p("22.07.2028", "01.09.2028"),
        },
    ),
    (
        GermanState::SchleswigHolstein,
        RawYear {
            herbst: p("11.10.2027", "23.10.2027"),
            weihnachten: p("23.12.2027", "08.01.2028"),
            winter: None,
            ostern: p("03.04.2028", "15.04.2028"),
            pfingsten: p("26.05.2028", "26.05.2028"),
            sommer: p("24.06.2028", "04.08.2028"),
        },
    ),
    (
        GermanState::Thueringen,
        RawYear {
            herbst: p("09.10.2027", "23.10.2027"),
            weihnachten: p("23.12.2027", "31.12.2027"),
            winter: p("07.02.2028", "12.02.2028"),
            ostern: p("03.04.2028", "15.04.2028"),
            pfingsten: p("26.05.2028", "26.05.2028"),
            sommer: p("22.07.2028", "01.09.2028"),
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn school_year_key_format() {
        assert_eq!(school_year_key(2025), "2025/2026");
        assert_eq!(school_year_key(2027), "2027/2028");
    }

    #[test]
    fn parse_date_valid_and_invalid() {
        assert_eq!(parse_date("27.10.2025").unwrap(), date(2025, 10, 27));
        assert_eq!(parse_date("01.01.2026").unwrap(), date(2026, 1, 1));
        assert!(parse_date("2025-10-27").is_err());
        assert!(parse_date("32.01.2026").is_err());
        assert!(parse_date("27.10").is_err());
    }

    #[test]
    fn bavaria_2025_has_all_six_periods() {
        let periods = school_holidays(2025, GermanState::Bayern).unwrap();
        assert_eq!(periods.len(), 6);
        assert_eq!(periods[0].name_de, "Herbstferien");
        assert_eq!(periods[0].start, date(2025, 11, 3));
        let summer = periods.last().unwrap();
        assert_eq!(summer.name_de, "Sommerferien");
        assert_eq!(summer.start, date(2026, 8, 3));
        assert_eq!(summer.end, date(2026, 9, 14));
    }

    #[test]
    fn hesse_skips_winter_and_whitsun() {
        let periods = school_holidays(2025, GermanState::Hessen).unwrap();
        assert_eq!(periods.len(), 4);
        assert!(periods.iter().all(|p| p.name_de != "Winterferien"));
        assert!(periods.iter().all(|p| p.name_de != "Pfingstferien"));
    }

    #[test]
    fn extra_days_become_separate_periods() {
        // Baden-Württemberg 2025 autumn break carries Oct 31 as an extra.
        let periods = school_holidays(2025, GermanState::BadenWuerttemberg).unwrap();
        let autumn: Vec<_> = periods
            .iter()
            .filter(|p| p.name_de == "Herbstferien")
            .collect();
        assert_eq!(autumn.len(), 2);
        assert_eq!(autumn[0].end, date(2025, 10, 30));
        assert!(autumn[1].is_single_day());
        assert_eq!(autumn[1].start, date(2025, 10, 31));
    }

    #[test]
    fn extra_range_becomes_multi_day_period() {
        // Berlin 2026 Whitsun carries the range May 18-19, 2027.
        let periods = school_holidays(2026, GermanState::Berlin).unwrap();
        let whitsun: Vec<_> = periods
            .iter()
            .filter(|p| p.name_de == "Pfingstferien")
            .collect();
        assert_eq!(whitsun.len(), 2);
        assert_eq!(whitsun[1].start, date(2027, 5, 18));
        assert_eq!(whitsun[1].end, date(2027, 5, 19));
        assert_eq!(whitsun[1].len_days(), 2);
    }

    #[test]
    fn comma_separated_extras() {
        // Mecklenburg-Vorpommern 2025 autumn carries two extra single days.
        let periods = school_holidays(2025, GermanState::MecklenburgVorpommern).unwrap();
        let autumn: Vec<_> = periods
            .iter()
            .filter(|p| p.name_de == "Herbstferien")
            .collect();
        assert_eq!(autumn.len(), 3);
        assert_eq!(autumn[1].start, date(2025, 10, 2));
        assert_eq!(autumn[2].start, date(2025, 11, 3));
    }

    #[test]
    fn und_separated_extras() {
        let extras = parse_extra_periods(
            "02.10.2025 und 03.11.2025",
            "Herbstferien",
            "Autumn Break",
        );
        assert_eq!(extras.len(), 2);
        assert_eq!(extras[0].start, date(2025, 10, 2));
        assert_eq!(extras[1].start, date(2025, 11, 3));
    }

    #[test]
    fn malformed_extra_yields_no_additional_dates() {
        let extras = parse_extra_periods("not a date", "Herbstferien", "Autumn Break");
        assert!(extras.is_empty());
        let mixed = parse_extra_periods("garbage, 31.10.2025", "Herbstferien", "Autumn Break");
        assert_eq!(mixed.len(), 1);
        assert_eq!(mixed[0].start, date(2025, 10, 31));
    }

    #[test]
    fn uncovered_year_is_empty() {
        assert!(school_holidays(2024, GermanState::Bayern)
            .unwrap()
            .is_empty());
        assert!(school_holidays(2030, GermanState::Bayern)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn every_state_covered_for_every_year() {
        for year in COVERED_YEARS {
            for state in GermanState::ALL {
                let periods = school_holidays(year, state).unwrap();
                assert!(!periods.is_empty(), "{state} missing in {year}");
                for p in &periods {
                    assert!(p.start <= p.end);
                }
            }
        }
    }
}
