//! # luach-app
//!
//! Application layer: the sensor update pipeline and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that the host integration must implement:
//!   - `SolarEvents`: sunset lookup for a location and date (async)
//!   - `CalendarProvider` / `HebrewDate`: Hebrew calendar arithmetic
//!   - `ZmanimProvider`: the daily table of halachic times
//! - Resolve the calendar day that "now" belongs to (sunset and nightfall rules)
//! - Derive each sensor's state through a per-category dispatch table
//! - Run update cycles, keeping the last good state when a cycle is skipped
//!
//! ## Dependency rule
//! Depends on `luach-domain` only. Never performs IO itself: every clock-free
//! astronomical or calendar fact arrives through a port.

pub mod ports;
pub mod services;
