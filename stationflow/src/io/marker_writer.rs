use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use geojson::{FeatureCollection, JsonObject, JsonValue};

use crate::{
    model::StationFlowError,
    session::{FrameListener, MapFrame},
};

/// builds a GeoJSON feature collection of the markers in a frame. the time
/// selection and matching trip count are attached as foreign members.
pub fn marker_feature_collection(frame: &MapFrame) -> Result<FeatureCollection, StationFlowError> {
    let features = frame
        .markers
        .iter()
        .map(|m| m.to_feature())
        .collect::<Result<Vec<_>, _>>()?;
    let mut foreign_members = JsonObject::new();
    foreign_members.insert(
        String::from("time_filter"),
        serde_json::to_value(frame.time_filter)?,
    );
    foreign_members.insert(
        String::from("time_label"),
        JsonValue::String(frame.time_label.clone()),
    );
    foreign_members.insert(
        String::from("trip_count"),
        JsonValue::from(frame.trip_count),
    );
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(foreign_members),
    })
}

/// frame listener that writes each frame to `markers_<label>.geojson` in an
/// output directory, where the label is `any` or the selected `HHMM`.
pub struct GeoJsonMarkerWriter {
    output_directory: PathBuf,
    overwrite: bool,
    written: Vec<PathBuf>,
}

impl GeoJsonMarkerWriter {
    pub fn new(output_directory: &Path, overwrite: bool) -> GeoJsonMarkerWriter {
        GeoJsonMarkerWriter {
            output_directory: output_directory.to_path_buf(),
            overwrite,
            written: vec![],
        }
    }

    /// files written so far, in write order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn filepath(&self, frame: &MapFrame) -> PathBuf {
        self.output_directory
            .join(format!("markers_{}.geojson", frame.time_filter.label()))
    }
}

impl FrameListener for GeoJsonMarkerWriter {
    fn on_frame(&mut self, frame: &MapFrame) -> Result<(), StationFlowError> {
        let filepath = self.filepath(frame);
        let filename = filepath.display().to_string();
        let collection = marker_feature_collection(frame)?;
        let mut file = if self.overwrite {
            File::create(&filepath)
        } else {
            File::create_new(&filepath)
        }
        .map_err(|e| StationFlowError::MarkerWriteError(filename.clone(), e.to_string()))?;
        writeln!(file, "{}", collection)
            .map_err(|e| StationFlowError::MarkerWriteError(filename.clone(), e.to_string()))?;
        log::info!(
            "wrote {} markers for {} to {}",
            frame.markers.len(),
            frame.time_label,
            filename
        );
        self.written.push(filepath);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StationMarker;
    use geo::Point;
    use stationflow_core::model::{MinuteOfDay, TimeFilter};

    fn mock_frame(time_filter: TimeFilter) -> MapFrame {
        let marker = StationMarker {
            short_name: String::from("A"),
            name: Some(String::from("Kendall")),
            coord: Point::new(-71.09, 42.36),
            radius: 12.5,
            departure_ratio: 0.5,
            arrivals: 1,
            departures: 1,
            total_traffic: 2,
            tooltip: String::from("2 trips (1 departures, 1 arrivals)"),
        };
        MapFrame {
            time_filter,
            time_label: time_filter.to_string(),
            trip_count: 2,
            markers: vec![marker],
        }
    }

    #[test]
    fn test_feature_collection_members() {
        let filter = TimeFilter::At(MinuteOfDay::new(510).expect("test invariant failed"));
        let collection =
            marker_feature_collection(&mock_frame(filter)).expect("test invariant failed");
        assert_eq!(collection.features.len(), 1);
        let members = collection
            .foreign_members
            .expect("collection should have foreign members");
        assert_eq!(members["time_filter"], 510);
        assert_eq!(members["time_label"], "8:30 AM");
        assert_eq!(members["trip_count"], 2);
    }

    #[test]
    fn test_writer_writes_one_file_per_frame() {
        let directory = std::env::temp_dir().join(format!(
            "stationflow_marker_writer_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&directory).expect("test invariant failed");
        let mut writer = GeoJsonMarkerWriter::new(&directory, true);
        let filter = TimeFilter::At(MinuteOfDay::new(1020).expect("test invariant failed"));
        writer
            .on_frame(&mock_frame(TimeFilter::Any))
            .expect("writing frame should succeed");
        writer
            .on_frame(&mock_frame(filter))
            .expect("writing frame should succeed");

        let expected = vec![
            directory.join("markers_any.geojson"),
            directory.join("markers_1700.geojson"),
        ];
        assert_eq!(writer.written(), expected.as_slice());

        let contents = std::fs::read_to_string(&expected[1]).expect("test invariant failed");
        let geojson: geojson::GeoJson = contents.parse().expect("output should be valid GeoJSON");
        match geojson {
            geojson::GeoJson::FeatureCollection(fc) => assert_eq!(fc.features.len(), 1),
            other => panic!("expected a feature collection, found {other:?}"),
        }
        std::fs::remove_dir_all(&directory).expect("test invariant failed");
    }

    #[test]
    fn test_writer_refuses_to_overwrite() {
        let directory = std::env::temp_dir().join(format!(
            "stationflow_marker_overwrite_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&directory).expect("test invariant failed");
        let mut writer = GeoJsonMarkerWriter::new(&directory, false);
        let frame = mock_frame(TimeFilter::Any);
        let _ = std::fs::remove_file(writer.filepath(&frame));
        writer.on_frame(&frame).expect("first write should succeed");
        let second = writer.on_frame(&frame);
        assert!(matches!(
            second,
            Err(StationFlowError::MarkerWriteError(_, _))
        ));
        std::fs::remove_dir_all(&directory).expect("test invariant failed");
    }
}
