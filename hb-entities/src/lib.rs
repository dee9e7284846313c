#![deny(missing_debug_implementations)]

//! # hb-entities
//!
//! Reusable, agnostic domain entities for HomeBase.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod country;
pub mod geo;
