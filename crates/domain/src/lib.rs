//! # luach-domain
//!
//! Pure domain model for the luach Jewish calendar sensors.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **configuration** of an integration entry (location, language,
//!   diaspora flag, candle-lighting and havdalah offsets)
//! - Define the **sensor catalog** (one descriptor per sensor key) and the
//!   **sensor state** produced on every update cycle
//! - Define the **calendar** and **zmanim** value objects exchanged with the
//!   external calendar and time-computation libraries
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod calendar;
pub mod config;
pub mod sensor;
pub mod zmanim;
