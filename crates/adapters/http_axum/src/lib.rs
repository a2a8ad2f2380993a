//! # climate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the read-only **JSON API** under `/api/v1.0`
//!   (`/precipitation`, `/stations`, `/tobs`, `/{start}`, `/{start}/{end}`)
//! - Serve a plain-text route listing at `/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `climate-app` (for port traits and services) and `climate-domain`
//! (for domain types used in response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod home;
pub mod router;
pub mod state;
