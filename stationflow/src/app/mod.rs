mod operation;
mod stationflow_cli;

pub use operation::StationFlowOperation;
pub use stationflow_cli::{DatasetArguments, StationFlowCliArguments};
