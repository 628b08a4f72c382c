//! orchestration of the filter + aggregate pipeline for an interactive map.
mod frame_listener;
mod map_event;
mod map_frame;
mod station_map;

pub use frame_listener::FrameListener;
pub use map_event::MapEvent;
pub use map_frame::MapFrame;
pub use station_map::StationMap;
