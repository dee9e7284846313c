use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use hb_core::{entities::*, units, usecases};
use hb_gateways::{cache::CachedGeocoder, nominatim::Nominatim};

use crate::config::{Config, GeocodingGateway};

#[derive(Debug, Parser)]
#[command(name = "homebase", version, about = "HomeBase location services")]
pub struct Args {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve an address to geographic coordinates
    Geocode {
        address: String,
    },
    /// Compute the distance between two addresses
    Distance {
        from: String,
        to: String,
        /// Country code that selects the display unit
        /// (inferred from the destination address if omitted)
        #[arg(long)]
        country: Option<CountryCode>,
    },
    /// Check whether a contractor's service radius covers a customer address
    RadiusCheck {
        provider: String,
        customer: String,
        /// Service radius in the provider country's display unit
        radius: f64,
        #[arg(long)]
        country: Option<CountryCode>,
    },
    /// Print the distance options for a country
    Options {
        #[arg(long)]
        country: Option<CountryCode>,
        /// Print the service radius list instead of the filter list
        #[arg(long)]
        service_radius: bool,
    },
}

pub fn run(args: Args) -> Result<()> {
    let config = Config::try_load_from_file_or_default(args.config.as_deref())?;
    match args.command {
        Command::Geocode { address } => {
            let geo = geocoding_gateway(&config)?;
            match usecases::resolve_location(&geo, &address) {
                Some(pos) => println!("{pos}"),
                None => return Err(anyhow!("Unable to resolve the location of '{address}'")),
            }
        }
        Command::Distance { from, to, country } => {
            let geo = geocoding_gateway(&config)?;
            let country =
                country.unwrap_or_else(|| units::extract_country_from_address(Some(&to)));
            let stored = usecases::distance_between(&geo, &from, &to)?;
            let display = usecases::localized_distance(stored, Some(&country));
            println!("{display}");
        }
        Command::RadiusCheck {
            provider,
            customer,
            radius,
            country,
        } => {
            let geo = geocoding_gateway(&config)?;
            let country =
                country.unwrap_or_else(|| units::extract_country_from_address(Some(&provider)));
            let radius = match units::unit_system(Some(&country)) {
                UnitSystem::Metric => Distance::from_km(radius),
                UnitSystem::Imperial => Distance::from_miles(radius),
            };
            let covered = usecases::within_service_radius(&geo, &provider, &customer, radius)?;
            println!("{}", if covered { "covered" } else { "not covered" });
        }
        Command::Options {
            country,
            service_radius,
        } => {
            let country = country.unwrap_or_else(|| config.units.default_country.clone());
            let options = if service_radius {
                units::service_radius_options(Some(&country))
            } else {
                units::distance_options(Some(&country))
            };
            for option in options {
                println!("{}\t{}", option.value, option.label);
            }
        }
    }
    Ok(())
}

fn geocoding_gateway(config: &Config) -> Result<CachedGeocoder<Nominatim>> {
    let Some(GeocodingGateway::Nominatim {
        endpoint,
        user_agent,
        request_delay,
        cache_capacity,
    }) = &config.geocoding.gateway
    else {
        return Err(anyhow!("No geocoding gateway configured"));
    };
    let nominatim =
        Nominatim::with_user_agent_and_delay(endpoint.clone(), user_agent, *request_delay)?;
    Ok(CachedGeocoder::with_capacity(nominatim, *cache_capacity))
}
