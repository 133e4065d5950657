//! iCalendar (RFC 5545) export.
//!
//! Emits all-day VEVENTs for public holidays and school holiday periods.
//! Output is deterministic: events are sorted by date, UIDs are derived
//! from the event date and name, and DTSTAMP is pinned to the event's
//! own start date. Feeds regenerated from the same input are
//! byte-identical, which keeps subscribed calendars from churning.

use crate::definition::{resolve_all, HolidayDefinition, ResolvedHoliday, SchoolHolidayPeriod};
use fk_core::errors::Result;
use fk_time::Date;

/// Feed-level metadata.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// PRODID value, e.g. `"-//feiertage-rs//DE//"`.
    pub product_id: String,
    /// X-WR-CALNAME value shown by calendar clients.
    pub calendar_name: String,
}

impl CalendarConfig {
    /// Convenience constructor.
    pub fn new(product_id: impl Into<String>, calendar_name: impl Into<String>) -> Self {
        CalendarConfig {
            product_id: product_id.into(),
            calendar_name: calendar_name.into(),
        }
    }
}

/// `YYYYMMDD` form used by DTSTART/DTEND with VALUE=DATE.
fn basic_date(date: Date) -> String {
    format!(
        "{:04}{:02}{:02}",
        date.year(),
        date.month(),
        date.day_of_month()
    )
}

/// Escape TEXT values per RFC 5545 §3.3.11.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Stable UID from the start date and the German name.
fn event_uid(start: Date, name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("{}-{}@feiertage-rs", basic_date(start), slug)
}

fn push_event(
    lines: &mut Vec<String>,
    start: Date,
    end_inclusive: Date,
    summary: &str,
    description: &str,
) -> Result<()> {
    // DTEND is exclusive for all-day events.
    let end_exclusive = end_inclusive.add_days(1)?;
    lines.push("BEGIN:VEVENT".into());
    lines.push(format!("UID:{}", event_uid(start, summary)));
    lines.push(format!("DTSTAMP:{}T000000Z", basic_date(start)));
    lines.push(format!("DTSTART;VALUE=DATE:{}", basic_date(start)));
    lines.push(format!("DTEND;VALUE=DATE:{}", basic_date(end_exclusive)));
    lines.push(format!("SUMMARY:{}", escape_text(summary)));
    if !description.is_empty() {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }
    lines.push("STATUS:CONFIRMED".into());
    lines.push("TRANSP:TRANSPARENT".into());
    lines.push("X-MICROSOFT-CDO-BUSYSTATUS:FREE".into());
    lines.push("END:VEVENT".into());
    Ok(())
}

fn calendar(
    config: &CalendarConfig,
    body: impl FnOnce(&mut Vec<String>) -> Result<()>,
) -> Result<String> {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
        format!("PRODID:{}", escape_text(&config.product_id)),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{}", escape_text(&config.calendar_name)),
    ];
    body(&mut lines)?;
    lines.push("END:VCALENDAR".into());
    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    Ok(out)
}

/// Render resolved public holidays as an iCalendar feed of one-day
/// events, sorted chronologically.
pub fn holidays_to_ics(holidays: &[ResolvedHoliday], config: &CalendarConfig) -> Result<String> {
    let mut sorted = holidays.to_vec();
    sorted.sort_by_key(|h| (h.date, h.name_de));
    calendar(config, |lines| {
        for holiday in &sorted {
            push_event(
                lines,
                holiday.date,
                holiday.date,
                holiday.name_de,
                holiday.name_en,
            )?;
        }
        Ok(())
    })
}

/// Render school holiday periods as an iCalendar feed of all-day
/// events spanning each period, sorted by start date.
pub fn school_holidays_to_ics(
    periods: &[SchoolHolidayPeriod],
    config: &CalendarConfig,
) -> Result<String> {
    let mut sorted = periods.to_vec();
    sorted.sort_by_key(|p| (p.start, p.name_de));
    calendar(config, |lines| {
        for period in &sorted {
            push_event(
                lines,
                period.start,
                period.end,
                period.name_de,
                period.name_en,
            )?;
        }
        Ok(())
    })
}

/// Resolve a definition table over an inclusive year range, for rolling
/// multi-year feeds.
pub fn rolling_holidays(
    definitions: &[HolidayDefinition],
    start_year: u16,
    end_year: u16,
) -> Result<Vec<ResolvedHoliday>> {
    let mut all = Vec::new();
    for year in start_year..=end_year {
        all.extend(resolve_all(definitions, year)?);
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::austria;

    fn config() -> CalendarConfig {
        CalendarConfig::new("-//feiertage-rs//AT//", "Feiertage Österreich")
    }

    #[test]
    fn single_day_event_has_exclusive_end() {
        let holidays = austria::holidays(2025).unwrap();
        let ics = holidays_to_ics(&holidays, &config()).unwrap();
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        // Neujahr: Jan 1, so DTEND is Jan 2.
        assert!(ics.contains("DTSTART;VALUE=DATE:20250101\r\n"));
        assert!(ics.contains("DTEND;VALUE=DATE:20250102\r\n"));
        assert!(ics.contains("SUMMARY:Neujahr\r\n"));
    }

    #[test]
    fn dates_render_in_basic_format() {
        let holidays = austria::holidays(2025).unwrap();
        let ics = holidays_to_ics(&holidays, &config()).unwrap();
        // Single-digit and double-digit months both render zero-padded.
        assert!(ics.contains("DTSTART;VALUE=DATE:20250421\r\n")); // Ostermontag
        assert!(ics.contains("DTSTART;VALUE=DATE:20251026\r\n")); // Nationalfeiertag
    }

    #[test]
    fn prodid_appears_only_in_the_calendar_header() {
        let holidays = austria::holidays(2025).unwrap();
        let ics = holidays_to_ics(&holidays, &config()).unwrap();
        let prodid_lines = ics.lines().filter(|l| l.starts_with("PRODID:")).count();
        assert_eq!(prodid_lines, 1);
        // The single PRODID precedes the first event.
        let header = ics.split("BEGIN:VEVENT").next().unwrap();
        assert!(header.contains("PRODID:"));
    }

    #[test]
    fn events_are_sorted_chronologically() {
        let holidays = austria::holidays(2025).unwrap();
        let ics = holidays_to_ics(&holidays, &config()).unwrap();
        let starts: Vec<&str> = ics
            .lines()
            .filter(|l| l.starts_with("DTSTART;VALUE=DATE:"))
            .collect();
        assert_eq!(starts.len(), 13);
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn output_is_deterministic() {
        let holidays = austria::holidays(2026).unwrap();
        let a = holidays_to_ics(&holidays, &config()).unwrap();
        let b = holidays_to_ics(&holidays, &config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn multi_day_period_spans_to_day_after_end() {
        let period = SchoolHolidayPeriod {
            name_de: "Herbstferien",
            name_en: "Autumn Break",
            start: Date::from_ymd(2025, 10, 27).unwrap(),
            end: Date::from_ymd(2025, 10, 31).unwrap(),
        };
        let ics = school_holidays_to_ics(&[period], &config()).unwrap();
        assert!(ics.contains("DTSTART;VALUE=DATE:20251027\r\n"));
        assert!(ics.contains("DTEND;VALUE=DATE:20251101\r\n"));
        assert!(ics.contains("TRANSP:TRANSPARENT\r\n"));
    }

    #[test]
    fn text_escaping() {
        assert_eq!(escape_text("a,b;c"), "a\\,b\\;c");
        assert_eq!(escape_text("line\nbreak"), "line\\nbreak");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn rolling_feed_covers_each_year() {
        let all = rolling_holidays(&austria::AUSTRIAN_HOLIDAYS, 2025, 2027).unwrap();
        assert_eq!(all.len(), 39);
    }
}
