//! # climate-domain
//!
//! Pure domain model for the climate observation API.
//!
//! ## Responsibilities
//! - Foundational types: validated observation dates, station identifiers,
//!   error conventions
//! - Define **precipitation** readings and the date-keyed precipitation map
//! - Define **temperature** readings and min/avg/max statistics
//! - Contain the date arithmetic the API relies on (the one-year window)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod date;
pub mod error;

pub mod precipitation;
pub mod station;
pub mod temperature;
