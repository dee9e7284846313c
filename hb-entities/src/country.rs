use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::geo::DistanceUnit;

/// Two-letter country code, normalized to upper case.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CountryCode(String);

// Countries whose users see distances in kilometers. Everything else,
// including the United States, defaults to miles.
const METRIC_COUNTRIES: &[&str] = &["GB", "UK", "CA", "AU"];

impl CountryCode {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn unit_system(&self) -> UnitSystem {
        if METRIC_COUNTRIES.contains(&self.0.as_str()) {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    }
}

impl From<&str> for CountryCode {
    fn from(from: &str) -> Self {
        Self(from.trim().to_uppercase())
    }
}

impl From<CountryCode> for String {
    fn from(from: CountryCode) -> Self {
        from.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid country code")]
pub struct CountryCodeParseError;

impl FromStr for CountryCode {
    type Err = CountryCodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(s.to_ascii_uppercase()))
        } else {
            Err(CountryCodeParseError)
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The measurement system distances are displayed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum UnitSystem {
    #[strum(serialize = "metric")]
    Metric,
    #[strum(serialize = "imperial")]
    Imperial,
}

impl UnitSystem {
    pub const fn distance_unit(self) -> DistanceUnit {
        match self {
            Self::Metric => DistanceUnit::Kilometers,
            Self::Imperial => DistanceUnit::Miles,
        }
    }
}
