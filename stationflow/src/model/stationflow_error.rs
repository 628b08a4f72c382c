use stationflow_core::model::TrafficError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StationFlowError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading station dataset {0}: {1}")]
    StationDatasetError(String, String),
    #[error("failure reading trip dataset {0}: {1}")]
    TripDatasetError(String, String),
    #[error("invalid trip in {0} on row {1}: {2}")]
    InvalidTrip(String, u64, String),
    #[error("invalid station feed: {0}")]
    InvalidStationFeed(String),
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure writing markers to {0}: {1}")]
    MarkerWriteError(String, String),
    #[error("invalid traffic query: {source}")]
    TrafficError {
        #[from]
        source: TrafficError,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
