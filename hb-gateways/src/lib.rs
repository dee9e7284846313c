//! # hb-gateways
//!
//! Infrastructure gateway implementations for HomeBase: the Nominatim
//! forward geocoder, a caching wrapper, and the request throttle that
//! keeps the geocoding provider's rate limit.

pub mod cache;
pub mod nominatim;
pub mod throttle;
