//! Distance unit policy: which unit a country displays distances in,
//! and the conversions between the canonical storage unit (miles) and
//! the display unit.

use lazy_static::lazy_static;
use regex::Regex;

use hb_entities::{
    country::{CountryCode, UnitSystem},
    geo::{DistanceUnit, KM_PER_MI},
};

pub fn unit_system(country: Option<&CountryCode>) -> UnitSystem {
    country
        .map(CountryCode::unit_system)
        .unwrap_or(UnitSystem::Imperial)
}

pub fn distance_unit(country: Option<&CountryCode>) -> DistanceUnit {
    unit_system(country).distance_unit()
}

/// Convert miles to kilometers, rounded to the nearest whole number.
///
/// Sub-unit precision is discarded on every conversion, so the pair
/// `miles_to_km`/`km_to_miles` is not exactly invertible.
pub fn miles_to_km(miles: f64) -> f64 {
    (miles * KM_PER_MI).round()
}

/// Convert kilometers to miles, rounded to the nearest whole number.
pub fn km_to_miles(km: f64) -> f64 {
    (km / KM_PER_MI).round()
}

/// A selectable distance together with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceOption {
    pub value: u32,
    pub label: &'static str,
}

const fn option(value: u32, label: &'static str) -> DistanceOption {
    DistanceOption { value, label }
}

// The metric lists are curated, not derived from the imperial ones:
// 50 miles is deliberately approximated as 80 km.
const DISTANCE_OPTIONS_MI: &[DistanceOption] = &[
    option(5, "5 miles"),
    option(10, "10 miles"),
    option(25, "25 miles"),
    option(50, "50 miles"),
];

const DISTANCE_OPTIONS_KM: &[DistanceOption] = &[
    option(8, "8 km"),
    option(16, "16 km"),
    option(40, "40 km"),
    option(80, "80 km"),
];

const SERVICE_RADIUS_OPTIONS_MI: &[DistanceOption] = &[
    option(5, "5 miles"),
    option(10, "10 miles"),
    option(15, "15 miles"),
    option(20, "20 miles"),
    option(25, "25 miles"),
    option(30, "30 miles"),
    option(35, "35 miles"),
    option(40, "40 miles"),
    option(45, "45 miles"),
    option(50, "50 miles"),
];

const SERVICE_RADIUS_OPTIONS_KM: &[DistanceOption] = &[
    option(8, "8 km"),
    option(16, "16 km"),
    option(24, "24 km"),
    option(32, "32 km"),
    option(40, "40 km"),
    option(48, "48 km"),
    option(56, "56 km"),
    option(64, "64 km"),
    option(72, "72 km"),
    option(80, "80 km"),
];

/// Distance choices offered by the contractor search filter.
pub fn distance_options(country: Option<&CountryCode>) -> &'static [DistanceOption] {
    match unit_system(country) {
        UnitSystem::Metric => DISTANCE_OPTIONS_KM,
        UnitSystem::Imperial => DISTANCE_OPTIONS_MI,
    }
}

/// Service radius choices offered to contractors.
pub fn service_radius_options(country: Option<&CountryCode>) -> &'static [DistanceOption] {
    match unit_system(country) {
        UnitSystem::Metric => SERVICE_RADIUS_OPTIONS_KM,
        UnitSystem::Imperial => SERVICE_RADIUS_OPTIONS_MI,
    }
}

/// Convert a stored distance (always miles) into the value displayed
/// in the given country. Identity for imperial countries.
pub fn convert_distance_for_display(stored_mi: f64, country: Option<&CountryCode>) -> f64 {
    match unit_system(country) {
        UnitSystem::Metric => miles_to_km(stored_mi),
        UnitSystem::Imperial => stored_mi,
    }
}

/// Convert a user-entered display distance back into the canonical
/// storage unit (miles). Identity for imperial countries.
pub fn convert_distance_for_storage(display: f64, country: Option<&CountryCode>) -> f64 {
    match unit_system(country) {
        UnitSystem::Metric => km_to_miles(display),
        UnitSystem::Imperial => display,
    }
}

lazy_static! {
    // Indicators match as whole words only: a trailing ", UK" matches
    // while "Ukiah" does not. A street named "Uk Lane" still matches,
    // this is a heuristic, not a geocoding lookup.
    static ref GB_RE: Regex = Regex::new(
        r"(?i)(^|[\s,.])(united kingdom|great britain|england|scotland|wales|northern ireland|uk|gb)([\s,.]|$)"
    )
    .unwrap();
    // "CA" is not accepted as a Canada indicator because it collides
    // with the California state abbreviation.
    static ref CA_RE: Regex = Regex::new(r"(?i)(^|[\s,.])canada([\s,.]|$)").unwrap();
    static ref AU_RE: Regex = Regex::new(r"(?i)(^|[\s,.])(australia|au)([\s,.]|$)").unwrap();
}

/// Best-effort country inference from a free-text address.
///
/// Candidates are checked in the fixed order GB, CA, AU; anything
/// else, including absent input, falls back to `US`.
pub fn extract_country_from_address(address: Option<&str>) -> CountryCode {
    let Some(address) = address else {
        return CountryCode::from("US");
    };
    let mut candidates = Vec::new();
    if GB_RE.is_match(address) {
        candidates.push("GB");
    }
    if CA_RE.is_match(address) {
        candidates.push("CA");
    }
    if AU_RE.is_match(address) {
        candidates.push("AU");
    }
    if candidates.len() > 1 {
        log::debug!("Ambiguous country indicators {candidates:?} in '{address}'");
    }
    CountryCode::from(candidates.first().copied().unwrap_or("US"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_system_defaults_to_imperial() {
        assert_eq!(UnitSystem::Imperial, unit_system(None));
        assert_eq!(
            UnitSystem::Imperial,
            unit_system(Some(&CountryCode::from("US")))
        );
        assert_eq!(
            UnitSystem::Metric,
            unit_system(Some(&CountryCode::from("gb")))
        );
    }

    #[test]
    fn distance_unit_labels() {
        assert_eq!("miles", distance_unit(None).to_string());
        assert_eq!(
            "km",
            distance_unit(Some(&CountryCode::from("CA"))).to_string()
        );
    }

    #[test]
    fn conversion_rounds_to_whole_numbers() {
        assert_eq!(0.0, miles_to_km(0.0));
        assert_eq!(0.0, km_to_miles(0.0));
        assert_eq!(16.0, miles_to_km(10.0));
        assert_eq!(10.0, km_to_miles(16.0));
        assert_eq!(80.0, miles_to_km(50.0));
    }

    #[test]
    fn conversion_round_trip_diverges_at_most_one_mile() {
        for miles in 1..=500 {
            let miles = f64::from(miles);
            let back = km_to_miles(miles_to_km(miles));
            assert!(
                (back - miles).abs() <= 1.0,
                "{miles} mi -> {} km -> {back} mi",
                miles_to_km(miles)
            );
        }
    }

    #[test]
    fn display_conversion_is_identity_for_imperial() {
        assert_eq!(7.5, convert_distance_for_display(7.5, None));
        assert_eq!(
            7.5,
            convert_distance_for_storage(7.5, Some(&CountryCode::from("US")))
        );
    }

    #[test]
    fn display_conversion_for_metric() {
        let gb = CountryCode::from("GB");
        assert_eq!(16.0, convert_distance_for_display(10.0, Some(&gb)));
        assert_eq!(10.0, convert_distance_for_storage(16.0, Some(&gb)));
    }

    #[test]
    fn option_lists_per_unit_system() {
        let us = distance_options(None);
        assert_eq!(vec![5, 10, 25, 50], us.iter().map(|o| o.value).collect::<Vec<_>>());
        assert_eq!("5 miles", us[0].label);

        let gb = distance_options(Some(&CountryCode::from("GB")));
        assert_eq!(vec![8, 16, 40, 80], gb.iter().map(|o| o.value).collect::<Vec<_>>());
        assert_eq!("8 km", gb[0].label);
    }

    #[test]
    fn service_radius_lists_are_stepped() {
        let us = service_radius_options(None);
        assert_eq!(10, us.len());
        assert_eq!(5, us[0].value);
        assert_eq!(50, us[9].value);
        assert!(us.windows(2).all(|w| w[1].value - w[0].value == 5));

        let au = service_radius_options(Some(&CountryCode::from("AU")));
        assert_eq!(10, au.len());
        assert_eq!(8, au[0].value);
        assert_eq!(80, au[9].value);
        assert!(au.windows(2).all(|w| w[1].value - w[0].value == 8));
    }

    #[test]
    fn extract_country_gb() {
        for addr in [
            "221B Baker Street, London, England",
            "10 Downing Street, London, UK",
            "1 Princes Street, Edinburgh, Scotland",
            "5 High St, Cardiff, Wales, United Kingdom",
        ] {
            assert_eq!(CountryCode::from("GB"), extract_country_from_address(Some(addr)));
        }
    }

    #[test]
    fn extract_country_ca_and_au() {
        assert_eq!(
            CountryCode::from("CA"),
            extract_country_from_address(Some("100 Queen St W, Toronto, Canada"))
        );
        assert_eq!(
            CountryCode::from("AU"),
            extract_country_from_address(Some("1 Macquarie St, Sydney, Australia"))
        );
        assert_eq!(
            CountryCode::from("AU"),
            extract_country_from_address(Some("1 Macquarie St, Sydney, AU"))
        );
    }

    #[test]
    fn extract_country_defaults_to_us() {
        assert_eq!(CountryCode::from("US"), extract_country_from_address(None));
        assert_eq!(
            CountryCode::from("US"),
            extract_country_from_address(Some("500 Main St, Springfield, IL"))
        );
        // "CA" as a state abbreviation is not a Canada indicator.
        assert_eq!(
            CountryCode::from("US"),
            extract_country_from_address(Some("1 Market St, San Francisco, CA"))
        );
        // No word boundary, no match.
        assert_eq!(
            CountryCode::from("US"),
            extract_country_from_address(Some("12 School St, Ukiah"))
        );
    }

    #[test]
    fn extract_country_word_boundary_false_positive() {
        // Documented heuristic limitation.
        assert_eq!(
            CountryCode::from("GB"),
            extract_country_from_address(Some("3 Uk Lane, Springfield"))
        );
    }

    #[test]
    fn extract_country_prefers_gb_on_ambiguity() {
        assert_eq!(
            CountryCode::from("GB"),
            extract_country_from_address(Some("Canada Water, London, UK"))
        );
    }
}
