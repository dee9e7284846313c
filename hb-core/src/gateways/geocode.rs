use hb_entities::{address::AddressQuery, geo::MapPoint};

pub trait GeoCodingGateway {
    fn resolve_address_lat_lng(&self, addr: &AddressQuery) -> Option<MapPoint>;
}
