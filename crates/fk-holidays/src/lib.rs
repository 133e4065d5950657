//! Public holiday and school holiday registries for Austria, Germany,
//! and Switzerland.
//!
//! Holidays are declared as immutable [`HolidayDefinition`] tables per
//! country and resolved against a concrete year on demand. Regions are
//! closed enums, so a query for a known region can only fail on a date
//! outside the supported range. [`ics`] renders resolved holidays as
//! subscribable iCalendar feeds.

#![warn(missing_docs)]

pub mod common;
pub mod countries;
pub mod definition;
pub mod ics;
pub mod school;

pub use countries::austria::AustrianRegion;
pub use countries::germany::{GermanState, GermanVariant};
pub use countries::switzerland::SwissCanton;
pub use definition::{
    resolve_all, HolidayDefinition, HolidayRule, ResolvedHoliday, SchoolHolidayPeriod, Scope,
};
