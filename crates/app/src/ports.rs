//! Port definitions: traits for the collaborators this core consumes.
//!
//! Ports are the boundaries between the application core and the outside
//! world. The calendar arithmetic, the halachic time computation, and the
//! host's solar-event lookup are all implemented elsewhere; the core only
//! decides which date applies and which field to read.

pub mod calendar;
pub mod solar;
pub mod zmanim;

pub use calendar::{CalendarProvider, DateSpan, HebrewDate};
pub use solar::{SolarEvent, SolarEvents};
pub use zmanim::ZmanimProvider;
