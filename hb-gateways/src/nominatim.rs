use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use hb_core::gateways::geocode::GeoCodingGateway;
use hb_entities::{address::AddressQuery, geo::MapPoint};

use crate::throttle::RequestThrottle;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

// Identifying the application is an obligation of the Nominatim usage
// policy, as is staying below one request per second.
pub const DEFAULT_USER_AGENT: &str = "HomeBase-App/1.0";
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

#[derive(Debug, Error)]
enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Unparsable coordinates: {lat},{lon}")]
    InvalidCoordinates { lat: String, lon: String },
}

/// Forward geocoder backed by the Nominatim HTTP API.
#[derive(Debug)]
pub struct Nominatim {
    client: reqwest::blocking::Client,
    endpoint: String,
    throttle: RequestThrottle,
}

impl Nominatim {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_user_agent_and_delay(endpoint, DEFAULT_USER_AGENT, DEFAULT_REQUEST_DELAY)
    }

    pub fn with_user_agent_and_delay(
        endpoint: impl Into<String>,
        user_agent: &str,
        request_delay: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            throttle: RequestThrottle::new(request_delay),
        })
    }

    fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, FetchError> {
        self.throttle.acquire();
        let results = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(results)
    }
}

fn first_position(results: &[SearchResult]) -> Result<Option<MapPoint>, FetchError> {
    let Some(first) = results.first() else {
        return Ok(None);
    };
    let invalid = || FetchError::InvalidCoordinates {
        lat: first.lat.clone(),
        lon: first.lon.clone(),
    };
    let lat = first.lat.parse::<f64>().map_err(|_| invalid())?;
    let lon = first.lon.parse::<f64>().map_err(|_| invalid())?;
    MapPoint::try_from_lat_lng_deg(lat, lon)
        .map(Some)
        .ok_or_else(invalid)
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(&self, addr: &AddressQuery) -> Option<MapPoint> {
        let results = match self.fetch(addr.as_str()) {
            Ok(results) => results,
            Err(err) => {
                log::warn!("Failed to resolve address location '{addr}': {err}");
                return None;
            }
        };
        match first_position(&results) {
            Ok(Some(pos)) => {
                log::debug!(
                    "Resolved address location '{}': {} ({})",
                    addr,
                    pos,
                    results[0].display_name
                );
                Some(pos)
            }
            Ok(None) => {
                log::warn!("No geocoding results for '{addr}'");
                None
            }
            Err(err) => {
                log::warn!("Failed to resolve address location '{addr}': {err}");
                None
            }
        }
    }
}
