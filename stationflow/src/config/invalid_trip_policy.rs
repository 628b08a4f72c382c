use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle
/// trip rows with missing station ids or unreadable timestamps
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvalidTripPolicy {
    Fail,
    #[default]
    DropTrip,
}
