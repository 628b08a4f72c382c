use crate::model::{TimeFilter, Trip};

use super::TimeWindow;

/// selects the trips that started or ended near the time of day of the filter.
///
/// with [`TimeFilter::Any`] every trip is returned. the relative order of the
/// surviving trips is preserved and no trip is modified.
///
/// # Arguments
///
/// * `trips`  - the full trip dataset
/// * `filter` - time of day to match, or no filtering
/// * `window` - tolerance for matching a trip to the filter target
///
/// # Returns
///
/// references to the trips that match the filter
pub fn filter_trips_by_time<'a>(
    trips: &'a [Trip],
    filter: &TimeFilter,
    window: &TimeWindow,
) -> Vec<&'a Trip> {
    match filter {
        TimeFilter::Any => trips.iter().collect(),
        TimeFilter::At(target) => {
            let filtered: Vec<&Trip> = trips
                .iter()
                .filter(|trip| window.contains(target, trip))
                .collect();
            log::debug!(
                "time filter {} (+-{} minutes) kept {} of {} trips",
                target,
                window.tolerance_minutes,
                filtered.len(),
                trips.len()
            );
            filtered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MinuteOfDay;
    use chrono::NaiveDateTime;

    fn mock_trip(start: &str, end: &str) -> Trip {
        let parse = |s: &str| {
            NaiveDateTime::parse_from_str(&format!("2024-03-01 {s}:00"), "%Y-%m-%d %H:%M:%S")
                .expect("test invariant failed: could not parse trip time")
        };
        Trip::new("A", "B", parse(start), parse(end))
    }

    fn at(minutes: u16) -> TimeFilter {
        TimeFilter::At(MinuteOfDay::new(minutes).expect("test invariant failed"))
    }

    #[test]
    fn test_any_time_is_identity() {
        let trips = vec![
            mock_trip("08:00", "08:05"),
            mock_trip("23:50", "00:10"),
            mock_trip("10:30", "10:45"),
        ];
        let result = filter_trips_by_time(&trips, &TimeFilter::Any, &TimeWindow::default());
        let expected: Vec<&Trip> = trips.iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_target_ten_am() {
        let kept = mock_trip("10:30", "10:45");
        let dropped = mock_trip("08:00", "08:05");
        let trips = vec![dropped, kept.clone()];
        let result = filter_trips_by_time(&trips, &at(600), &TimeWindow::default());
        assert_eq!(result, vec![&kept]);
    }

    #[test]
    fn test_end_time_alone_is_enough() {
        // starts 2 hours early but returns at 09:30
        let trips = vec![mock_trip("08:00", "09:30")];
        let result = filter_trips_by_time(&trips, &at(600), &TimeWindow::default());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_inclusive_bound() {
        let sixty = mock_trip("11:00", "11:00");
        let sixty_one = mock_trip("11:01", "11:01");
        let sixty_before = mock_trip("09:00", "09:00");
        let trips = vec![sixty.clone(), sixty_one, sixty_before.clone()];
        let result = filter_trips_by_time(&trips, &at(600), &TimeWindow::default());
        assert_eq!(result, vec![&sixty, &sixty_before]);
    }

    #[test]
    fn test_midnight_does_not_wrap() {
        let trips = vec![mock_trip("23:50", "23:55")];
        let result = filter_trips_by_time(&trips, &at(0), &TimeWindow::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_midnight_wraps_when_configured() {
        let trips = vec![mock_trip("23:50", "23:55")];
        let window = TimeWindow::new(60, true).expect("test invariant failed");
        let result = filter_trips_by_time(&trips, &at(0), &window);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_custom_tolerance() {
        let trips = vec![mock_trip("10:20", "10:25"), mock_trip("10:05", "10:40")];
        let window = TimeWindow::new(10, false).expect("test invariant failed");
        let result = filter_trips_by_time(&trips, &at(600), &window);
        assert_eq!(result, vec![&trips[1]]);
    }

    #[test]
    fn test_survival_matches_minute_distance() {
        let mut trips = vec![];
        for hour in 0..24 {
            for minute in [0, 17, 45] {
                let start = format!("{hour:02}:{minute:02}");
                let end = format!("{:02}:{minute:02}", (hour + 3) % 24);
                trips.push(mock_trip(&start, &end));
            }
        }
        for target in [0_u16, 59, 600, 1020, 1439] {
            let result = filter_trips_by_time(&trips, &at(target), &TimeWindow::default());
            let expected: Vec<&Trip> = trips
                .iter()
                .filter(|t| {
                    let s = t.started_minute().minutes() as i32;
                    let e = t.ended_minute().minutes() as i32;
                    (s - target as i32).abs() <= 60 || (e - target as i32).abs() <= 60
                })
                .collect();
            assert_eq!(result, expected, "target {target}");
        }
    }
}
