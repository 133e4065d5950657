//! Per-country public holiday registries.

pub mod austria;
pub mod germany;
pub mod switzerland;
