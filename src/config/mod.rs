use std::{env, fs, io::ErrorKind, num::NonZeroUsize, path::Path, time::Duration};

use anyhow::{anyhow, Result};
use hb_entities::country::CountryCode;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "homebase.toml";

const ENV_NAME_GEOCODER_ENDPOINT: &str = "GEOCODER_ENDPOINT";

pub struct Config {
    pub geocoding: Geocoding,
    pub units: Units,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(endpoint) = env::var(ENV_NAME_GEOCODER_ENDPOINT) {
            if let Some(GeocodingGateway::Nominatim {
                endpoint: ref mut configured,
                ..
            }) = cfg.geocoding.gateway
            {
                *configured = endpoint;
            }
        }
        Ok(cfg)
    }
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    Nominatim {
        endpoint: String,
        user_agent: String,
        request_delay: Duration,
        cache_capacity: NonZeroUsize,
    },
}

pub struct Units {
    pub default_country: CountryCode,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            units,
            gateway,
        } = from;

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::Nominatim => {
                        let raw::Nominatim {
                            endpoint,
                            user_agent,
                            request_delay,
                            cache_capacity,
                        } = gateway
                            .nominatim
                            .ok_or_else(|| anyhow!("Missing 'nominatim' gateway configuration"))?;
                        let cache_capacity = NonZeroUsize::new(cache_capacity)
                            .ok_or_else(|| anyhow!("The geocoding cache capacity must not be zero"))?;
                        log::info!("Use Nominatim gateway ({endpoint})");
                        GeocodingGateway::Nominatim {
                            endpoint,
                            user_agent,
                            request_delay,
                            cache_capacity,
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let raw::Units { default_country } = units.unwrap_or_default();
        let default_country = default_country
            .parse()
            .map_err(|_| anyhow!("Invalid default country code '{default_country}'"))?;
        let units = Units { default_country };

        Ok(Self { geocoding, units })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert!(cfg.geocoding.gateway.is_some());
        assert_eq!("US", cfg.units.default_country.as_str());
    }
}
