use std::path::Path;

use clap::{Args, Parser};
use serde::{Deserialize, Serialize};
use stationflow_core::model::TimeFilter;

use super::StationFlowOperation;
use crate::{
    config::{InvalidTripPolicy, StationMapConfiguration},
    io,
    model::StationFlowError,
    session::StationMap,
};

/// command line tool computing bike-share station traffic maps
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct StationFlowCliArguments {
    /// select the stationflow operation to run
    #[command(subcommand)]
    pub op: StationFlowOperation,
}

/// dataset and configuration arguments shared by all operations
#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct DatasetArguments {
    /// station information JSON file (GBFS station_information or a list of stations)
    #[arg(long)]
    pub stations_file: String,
    /// trip history CSV file
    #[arg(long)]
    pub trips_file: String,
    /// path to a .toml or .json file with stationflow parameters
    #[arg(long)]
    pub configuration_file: Option<String>,
    /// overrides the invalid trip policy of the configuration file
    #[arg(long, value_enum)]
    pub invalid_trip_policy: Option<InvalidTripPolicy>,
}

impl DatasetArguments {
    pub fn configuration(&self) -> Result<StationMapConfiguration, StationFlowError> {
        let mut conf = match &self.configuration_file {
            None => StationMapConfiguration::default(),
            Some(f) => {
                log::info!("reading stationflow configuration from {f}");
                StationMapConfiguration::try_from(f)?
            }
        };
        if let Some(policy) = self.invalid_trip_policy {
            conf.invalid_trip_policy = policy;
        }
        Ok(conf)
    }

    /// reads both datasets and builds an unfiltered [`StationMap`].
    pub fn load(&self) -> Result<StationMap, StationFlowError> {
        let conf = self.configuration()?;
        let stations = io::read_stations(Path::new(&self.stations_file))?;
        let trips = io::read_trips(Path::new(&self.trips_file), &conf)?;
        StationMap::new(stations, trips, &conf)
    }
}

/// clap value parser for time selections, see [`TimeFilter`]'s `FromStr`
pub fn parse_time_filter(s: &str) -> Result<TimeFilter, String> {
    s.parse::<TimeFilter>().map_err(|e| e.to_string())
}
