use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

// Mean Earth radius in miles.
const EARTH_RADIUS_MI: f64 = 3959.0;

/// Kilometers per mile.
pub const KM_PER_MI: f64 = 1.60934;

/// Geographical latitude in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MIN: f64 = -90.0;
    const DEG_MAX: f64 = 90.0;

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        (Self::DEG_MIN..=Self::DEG_MAX)
            .contains(&deg)
            .then_some(Self(deg))
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MIN: f64 = -180.0;
    const DEG_MAX: f64 = 180.0;

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        (Self::DEG_MIN..=Self::DEG_MAX)
            .contains(&deg)
            .then_some(Self(deg))
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// A validated geographical location on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    /// Great-circle distance between two points, tagged in miles.
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1, lng1) = p1.to_lat_lng_deg();
        let (lat2, lng2) = p2.to_lat_lng_deg();
        Distance::from_miles(haversine_distance_mi(lat1, lng1, lat2, lng2))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error)]
pub enum MapPointParseError {
    #[error("Expected 'lat,lng'")]
    Format,
    #[error("Invalid latitude: {0}")]
    Latitude(String),
    #[error("Invalid longitude: {0}")]
    Longitude(String),
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_str, lng_str)) = s.split(',').collect_tuple() else {
            return Err(MapPointParseError::Format);
        };
        let lat = lat_str
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(LatCoord::try_from_deg)
            .ok_or_else(|| MapPointParseError::Latitude(lat_str.to_owned()))?;
        let lng = lng_str
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(LngCoord::try_from_deg)
            .ok_or_else(|| MapPointParseError::Longitude(lng_str.to_owned()))?;
        Ok(Self::new(lat, lng))
    }
}

/// Great-circle (Haversine) distance in miles between two coordinate
/// pairs given in decimal degrees.
///
/// The input range is not validated: coordinates outside
/// [-90, 90] x [-180, 180] yield a mathematically defined but
/// geographically meaningless result. The function is symmetric and
/// returns exactly zero for identical inputs. Results are rounded to
/// one decimal place.
pub fn haversine_distance_mi(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_to_tenth(EARTH_RADIUS_MI * c)
}

fn round_to_tenth(mi: f64) -> f64 {
    (mi * 10.0).round() / 10.0
}

/// The unit a distance value is measured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum DistanceUnit {
    #[strum(serialize = "miles")]
    Miles,
    #[strum(serialize = "km")]
    Kilometers,
}

/// A distance tagged with its unit.
///
/// Distances are persisted in miles; kilometers only appear at the
/// display boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distance {
    value: f64,
    unit: DistanceUnit,
}

impl Distance {
    pub const fn from_miles(value: f64) -> Self {
        Self {
            value,
            unit: DistanceUnit::Miles,
        }
    }

    pub const fn from_km(value: f64) -> Self {
        Self {
            value,
            unit: DistanceUnit::Kilometers,
        }
    }

    pub const fn value(self) -> f64 {
        self.value
    }

    pub const fn unit(self) -> DistanceUnit {
        self.unit
    }

    /// Exact (unrounded) conversion into miles.
    pub fn to_miles(self) -> Self {
        match self.unit {
            DistanceUnit::Miles => self,
            DistanceUnit::Kilometers => Self::from_miles(self.value / KM_PER_MI),
        }
    }

    /// Exact (unrounded) conversion into kilometers.
    pub fn to_km(self) -> Self {
        match self.unit {
            DistanceUnit::Miles => Self::from_km(self.value * KM_PER_MI),
            DistanceUnit::Kilometers => self,
        }
    }

    pub fn is_valid(self) -> bool {
        self.value >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
