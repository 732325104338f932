//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from the host.

pub mod day_boundary;
pub mod derive;
pub mod sensor_service;
pub mod zmanim_request;

#[cfg(test)]
pub(crate) mod fakes;
