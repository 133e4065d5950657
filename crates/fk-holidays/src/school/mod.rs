//! School holiday calculators.
//!
//! Austria computes its periods from the Schulzeitgesetz; Germany has no
//! comparable federal rule, so its periods come from a published table.

pub mod austria;
pub mod germany;
