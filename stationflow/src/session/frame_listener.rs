use super::MapFrame;
use crate::model::StationFlowError;

/// receives every frame produced by a [`super::StationMap`].
pub trait FrameListener {
    fn on_frame(&mut self, frame: &MapFrame) -> Result<(), StationFlowError>;
}

impl<F> FrameListener for F
where
    F: FnMut(&MapFrame) -> Result<(), StationFlowError>,
{
    fn on_frame(&mut self, frame: &MapFrame) -> Result<(), StationFlowError> {
        self(frame)
    }
}
