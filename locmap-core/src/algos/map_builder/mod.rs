use crate::{
    constants::VIEWPORT_PADDING,
    error::MapError,
    types::{Location, LocationMap},
};

use std::io;

use tracing::event;

mod bounds;
mod projector;
mod record_filter;

use bounds::BoundsAccumulator;
use projector::LocationProjector;
use record_filter::RecordFilter;

pub(crate) struct MapBuilder {
    pub padding: f64,
}

impl Default for MapBuilder {
    fn default() -> Self {
        MapBuilder {
            padding: VIEWPORT_PADDING,
        }
    }
}

impl MapBuilder {
    /// Consumes the whole line stream, stopping at the first error.
    pub fn build<I>(&self, lines: I) -> Result<LocationMap, MapError>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let build_start = std::time::Instant::now();

        let mut locations: Vec<Location> = Vec::new();
        let mut accumulator = BoundsAccumulator::new();

        for record in RecordFilter::new(lines) {
            let location = LocationProjector::project(&record?)?;

            accumulator.observe(&location);
            locations.push(location);
        }

        event!(
            tracing::Level::DEBUG,
            "Projected {} locations in {:.2}ms",
            accumulator.count(),
            build_start.elapsed().as_millis()
        );

        let bounds = accumulator.finish(self.padding)?;

        event!(tracing::Level::DEBUG, "Computed map bounds {}", bounds);

        Ok(LocationMap { locations, bounds })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn build(input: &str) -> Result<LocationMap, MapError> {
        MapBuilder::default().build(input.lines().map(|line| Ok(line.to_string())))
    }

    #[test]
    fn test_build_keeps_input_order() {
        let input = r#"{"recordType": "location", "distance": "5", "heading": "90", "depth": "0", "note": "first"}
{"recordType": "location", "distance": "5", "heading": "270", "depth": "0", "note": "second"}
{"recordType": "location", "distance": "5", "heading": "0", "depth": "0", "note": "third"}"#;

        let map = build(input).unwrap();

        let notes = map
            .locations
            .iter()
            .map(|location| location.note.as_deref().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(notes, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_build_computes_padded_bounds() {
        // x in {-5, 5} and y in {-5, 5}
        let input = r#"{"recordType": "location", "distance": "5", "heading": "90", "depth": "0"}
{"recordType": "location", "distance": "5", "heading": "270", "depth": "0"}
{"recordType": "location", "distance": "5", "heading": "0", "depth": "0"}
{"recordType": "location", "distance": "5", "heading": "180", "depth": "0"}"#;

        let bounds = build(input).unwrap().bounds;

        assert!((bounds.min_x + 15.0).abs() < 1e-9);
        assert!((bounds.min_y + 15.0).abs() < 1e-9);
        assert!((bounds.width() - 30.0).abs() < 1e-9);
        assert!((bounds.height() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_other_records_do_not_affect_bounds() {
        let only_location = r#"{"recordType": "location", "distance": "5", "heading": "90", "depth": "0"}"#;
        let with_noise = r#"# survey of the north passage
{"recordType": "survey", "distance": "500", "heading": "0", "depth": "0"}

{"recordType": "location", "distance": "5", "heading": "90", "depth": "0"}
   # trailing comment
{"recordType": "photo", "distance": "900", "heading": "180", "depth": "0"}"#;

        let expected = build(only_location).unwrap();
        let actual = build(with_noise).unwrap();

        assert_eq!(actual, expected);
        assert_eq!(actual.locations.len(), 1);
    }

    #[test]
    fn test_build_fails_on_first_bad_record() {
        let input = r#"{"recordType": "location", "distance": "5", "heading": "90", "depth": "0"}
{"recordType": "location", "heading": "90", "depth": "0"}
{"recordType": "location", "distance": "5", "heading": "90", "depth": "9"}"#;

        assert!(matches!(
            build(input),
            Err(MapError::MissingLocationData { line: 2, .. })
        ));
    }

    #[test]
    fn test_build_without_locations_is_empty_result() {
        let input = r#"# nothing to see
{"recordType": "survey"}"#;

        assert!(matches!(build(input), Err(MapError::EmptyResult)));
        assert!(matches!(build(""), Err(MapError::EmptyResult)));
    }
}
