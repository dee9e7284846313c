use super::prelude::*;

/// Resolve a free-text address to coordinates.
///
/// Empty input is rejected locally without consulting the gateway.
/// All failures collapse to `None`; it is up to the caller to decide
/// how to proceed without a location.
pub fn resolve_location<G>(geo: &G, address: &str) -> Option<MapPoint>
where
    G: GeoCodingGateway,
{
    let Ok(query) = address.parse::<AddressQuery>() else {
        log::warn!("Cannot geocode an empty address");
        return None;
    };
    geo.resolve_address_lat_lng(&query)
}
