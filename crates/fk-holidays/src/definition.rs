//! Holiday definitions and the resolver that turns them into dated
//! occurrences.
//!
//! A [`HolidayDefinition`] is either a fixed (month, day) pair applied to
//! any year or a pure function of the year. The rule is a closed variant,
//! so a definition can never be in the "neither fixed nor computed" state;
//! resolution is total over well-formed registries by construction.

use fk_core::errors::Result;
use fk_time::{Date, Month};

/// Geographic applicability of a holiday. Carried through to display
/// only; never consulted during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Observed country-wide (Austria, Switzerland).
    National,
    /// Observed in a subset of regions.
    Regional,
    /// Observed in all German states.
    Bundesweit,
    /// Observed in a subset of Swiss cantons.
    Kantonal,
}

/// How a holiday's date is derived for a given year.
#[derive(Clone, Copy)]
pub enum HolidayRule {
    /// The same (month, day) every year.
    Fixed {
        /// Calendar month.
        month: Month,
        /// Day of the month (1–31).
        day: u8,
    },
    /// A pure function of the year (Easter-relative and weekday-rule
    /// holidays).
    Computed(fn(u16) -> Result<Date>),
}

impl std::fmt::Debug for HolidayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayRule::Fixed { month, day } => {
                write!(f, "Fixed({month} {day})")
            }
            HolidayRule::Computed(_) => write!(f, "Computed(..)"),
        }
    }
}

/// An immutable holiday definition with bilingual names.
///
/// Definitions live in `static` per-country tables and are never mutated
/// after process start.
#[derive(Debug, Clone, Copy)]
pub struct HolidayDefinition {
    /// German name, e.g. `"Christi Himmelfahrt"`.
    pub name_de: &'static str,
    /// English name, e.g. `"Ascension Day"`.
    pub name_en: &'static str,
    /// Date rule.
    pub rule: HolidayRule,
    /// Display-only scope tag.
    pub scope: Option<Scope>,
    /// German Wikipedia article, if any.
    pub wikipedia_de: Option<&'static str>,
    /// English Wikipedia article, if any.
    pub wikipedia_en: Option<&'static str>,
}

impl HolidayDefinition {
    /// Define a holiday that falls on the same (month, day) every year.
    pub const fn fixed(name_de: &'static str, name_en: &'static str, month: Month, day: u8) -> Self {
        HolidayDefinition {
            name_de,
            name_en,
            rule: HolidayRule::Fixed { month, day },
            scope: None,
            wikipedia_de: None,
            wikipedia_en: None,
        }
    }

    /// Define a holiday whose date is a pure function of the year.
    pub const fn computed(
        name_de: &'static str,
        name_en: &'static str,
        calculator: fn(u16) -> Result<Date>,
    ) -> Self {
        HolidayDefinition {
            name_de,
            name_en,
            rule: HolidayRule::Computed(calculator),
            scope: None,
            wikipedia_de: None,
            wikipedia_en: None,
        }
    }

    /// Attach Wikipedia article links.
    pub const fn with_wikipedia(self, de: &'static str, en: &'static str) -> Self {
        HolidayDefinition {
            wikipedia_de: Some(de),
            wikipedia_en: Some(en),
            ..self
        }
    }

    /// Return a copy of this definition with the scope tag replaced.
    pub const fn scoped(self, scope: Scope) -> Self {
        HolidayDefinition {
            scope: Some(scope),
            ..self
        }
    }

    /// Apply the rule to a concrete year.
    pub fn resolve(&self, year: u16) -> Result<ResolvedHoliday> {
        let date = match self.rule {
            HolidayRule::Fixed { month, day } => Date::from_ymd(year, month.number(), day)?,
            HolidayRule::Computed(calculator) => calculator(year)?,
        };
        Ok(ResolvedHoliday {
            name_de: self.name_de,
            name_en: self.name_en,
            date,
            scope: self.scope,
        })
    }
}

/// A holiday definition applied to a concrete year.
///
/// Created fresh per (definition × year) query and never cached; ordering
/// is a caller concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedHoliday {
    /// German name.
    pub name_de: &'static str,
    /// English name.
    pub name_en: &'static str,
    /// Concrete civil date.
    pub date: Date,
    /// Display-only scope tag.
    pub scope: Option<Scope>,
}

/// Resolve a slice of definitions against a year.
///
/// The output order follows the input order; no sorting, no
/// deduplication. Callers that want chronological display sort by
/// [`ResolvedHoliday::date`].
pub fn resolve_all(definitions: &[HolidayDefinition], year: u16) -> Result<Vec<ResolvedHoliday>> {
    definitions.iter().map(|def| def.resolve(year)).collect()
}

/// A multi-day school holiday period with inclusive bounds.
///
/// Single-day periods have `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchoolHolidayPeriod {
    /// German name, e.g. `"Semesterferien"`.
    pub name_de: &'static str,
    /// English name, e.g. `"Semester Break"`.
    pub name_en: &'static str,
    /// First day of the period (inclusive).
    pub start: Date,
    /// Last day of the period (inclusive).
    pub end: Date,
}

impl SchoolHolidayPeriod {
    /// Number of calendar days covered, counting both bounds.
    pub fn len_days(&self) -> i32 {
        self.end - self.start + 1
    }

    /// Whether the period covers a single day.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }
}
