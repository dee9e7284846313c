mod distance_between;
mod error;
mod localize_distance;
mod resolve_location;
mod within_service_radius;


pub use self::{
    distance_between::*, error::Error, localize_distance::*, resolve_location::*,
    within_service_radius::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::GeoCodingGateway};
}
