use super::prelude::*;
use crate::units;

/// Convert a stored distance (always miles) into the unit displayed
/// in the given country.
pub fn localized_distance(stored: Distance, country: Option<&CountryCode>) -> Distance {
    let miles = stored.to_miles().value();
    match units::unit_system(country) {
        UnitSystem::Metric => Distance::from_km(units::miles_to_km(miles)),
        UnitSystem::Imperial => Distance::from_miles(miles),
    }
}

/// Convert a user-entered display distance back into the canonical
/// storage unit (miles).
pub fn stored_distance(display: f64, country: Option<&CountryCode>) -> Distance {
    Distance::from_miles(units::convert_distance_for_storage(display, country))
}
