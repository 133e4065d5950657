//! # feiertage
//!
//! Public holiday and school holiday calculations for Austria, Germany,
//! and Switzerland.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fk-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! feiertage = "0.1"
//! ```
//!
//! ```rust
//! use feiertage::holidays::countries::austria;
//!
//! let mut all = austria::holidays(2025).unwrap();
//! all.sort_by_key(|h| h.date);
//! assert_eq!(all.len(), 13);
//! assert_eq!(all[0].name_de, "Neujahr");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core error definitions and macros.
pub use fk_core as core;

/// Date arithmetic, weekday rules, and the Easter calculator.
pub use fk_time as time;

/// Holiday definitions, registries, school holidays, and ICS export.
pub use fk_holidays as holidays;
