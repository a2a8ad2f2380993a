//! # climate-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ObservationRepository` — read precipitation and temperature observations
//!   - `StationRepository` — read station identifiers
//! - Define the **driving/inbound** use-case struct:
//!   - `ClimateService` — route listing, precipitation map, station list,
//!     trailing-year temperatures, temperature statistics
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `climate-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
