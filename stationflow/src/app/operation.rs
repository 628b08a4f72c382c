use std::{fs::File, path::Path};

use clap::Subcommand;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use stationflow_core::model::TimeFilter;

use super::{stationflow_cli::parse_time_filter, DatasetArguments};
use crate::{
    io::{self, GeoJsonMarkerWriter},
    model::StationFlowError,
    session::{MapEvent, MapFrame},
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum StationFlowOperation {
    /// writes arrivals, departures and total traffic per station as CSV.
    Traffic {
        #[command(flatten)]
        datasets: DatasetArguments,
        /// time of day to filter trips by, as minutes since midnight or HH:MM.
        /// -1 uses all trips.
        #[arg(long, default_value = "-1", allow_hyphen_values = true, value_parser = parse_time_filter)]
        time: TimeFilter,
        /// output CSV path. writes to stdout if omitted.
        #[arg(long)]
        output_file: Option<String>,
    },
    /// writes a GeoJSON file of station markers for each time selection.
    Markers {
        #[command(flatten)]
        datasets: DatasetArguments,
        /// time selections to render, in order. may be repeated.
        /// -1 renders all trips.
        #[arg(long = "time", default_value = "-1", allow_hyphen_values = true, value_parser = parse_time_filter)]
        times: Vec<TimeFilter>,
        /// output directory path.
        #[arg(long, default_value_t = String::from("."))]
        output_directory: String,
        /// replace existing marker files
        #[arg(long)]
        overwrite: bool,
    },
}

impl StationFlowOperation {
    pub fn run(&self) -> Result<(), StationFlowError> {
        match self {
            StationFlowOperation::Traffic {
                datasets,
                time,
                output_file,
            } => run_traffic(datasets, time, output_file.as_deref()),
            StationFlowOperation::Markers {
                datasets,
                times,
                output_directory,
                overwrite,
            } => run_markers(datasets, times, Path::new(output_directory), *overwrite),
        }
    }
}

fn run_traffic(
    datasets: &DatasetArguments,
    time: &TimeFilter,
    output_file: Option<&str>,
) -> Result<(), StationFlowError> {
    let mut map = datasets.load()?;
    let frame = map.select_time(*time)?;
    log::info!(
        "{} trips match {}",
        frame.trip_count,
        frame.time_label
    );
    match output_file {
        None => io::write_station_traffic(std::io::stdout().lock(), "stdout", map.stations()),
        Some(f) => {
            let file = File::create(f)?;
            io::write_station_traffic(file, f, map.stations())
        }
    }
}

fn run_markers(
    datasets: &DatasetArguments,
    times: &[TimeFilter],
    output_directory: &Path,
    overwrite: bool,
) -> Result<(), StationFlowError> {
    std::fs::create_dir_all(output_directory)?;
    let mut map = datasets.load()?;
    map.subscribe(Box::new(GeoJsonMarkerWriter::new(
        output_directory,
        overwrite,
    )));
    map.subscribe(Box::new(
        |frame: &MapFrame| -> Result<(), StationFlowError> {
            let busiest = frame
                .markers
                .iter()
                .sorted_by_key(|m| std::cmp::Reverse(m.total_traffic))
                .take(3)
                .map(|m| format!("{} ({})", m.short_name, m.total_traffic))
                .join(", ");
            log::info!("{}: busiest stations {}", frame.time_label, busiest);
            Ok(())
        },
    ));
    for time in times.iter() {
        map.handle(MapEvent::TimeSelected {
            value: i64::from(*time),
        })?;
    }
    Ok(())
}
