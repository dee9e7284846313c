use super::{prelude::*, resolve_location::resolve_location};

/// Great-circle distance between two addresses, in miles.
pub fn distance_between<G>(geo: &G, from: &str, to: &str) -> Result<Distance>
where
    G: GeoCodingGateway,
{
    let from_pos =
        resolve_location(geo, from).ok_or_else(|| Error::UnresolvedLocation(from.to_owned()))?;
    let to_pos =
        resolve_location(geo, to).ok_or_else(|| Error::UnresolvedLocation(to.to_owned()))?;
    Ok(MapPoint::distance(from_pos, to_pos))
}
