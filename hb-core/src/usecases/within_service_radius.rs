use super::{distance_between::distance_between, prelude::*};

/// Check whether a contractor's service radius covers a customer
/// address.
pub fn within_service_radius<G>(
    geo: &G,
    provider: &str,
    customer: &str,
    radius: Distance,
) -> Result<bool>
where
    G: GeoCodingGateway,
{
    if !radius.is_valid() {
        return Err(Error::InvalidServiceRadius);
    }
    let distance = distance_between(geo, provider, customer)?;
    Ok(distance.value() <= radius.to_miles().value())
}
