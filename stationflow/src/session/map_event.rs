use serde::{Deserialize, Serialize};

/// user-driven inputs to a [`super::StationMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum MapEvent {
    /// time slider moved. `-1` clears the selection, otherwise minutes since
    /// midnight in [0, 1439].
    TimeSelected { value: i64 },
    /// re-emit the current frame without changing the selection, for example
    /// after the viewport moved and markers must be redrawn.
    Refresh,
}
