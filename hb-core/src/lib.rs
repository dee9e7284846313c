//! # hb-core
//!
//! Domain core of the HomeBase location services: the geocoding
//! gateway abstraction, the distance unit policy, and the use cases
//! built on top of them.

pub mod gateways;
pub mod units;
pub mod usecases;

pub mod entities {
    pub use hb_entities::{address::*, country::*, geo::*};
}
