use crate::{
    error::MapError,
    types::{Location, LocationRecord, RawNumber, SourceRecord},
};

use std::f64::consts::PI;

use serde::Deserialize;
use tracing::event;

#[derive(Debug, Clone, PartialEq)]
enum ParsedNumber {
    Valid(f64),
    Absent,
    Malformed(String),
}

// A blank string counts as absent: that is how the CSV adapter writes an
// empty cell.
fn parse_number(raw: Option<&RawNumber>) -> ParsedNumber {
    match raw {
        None => ParsedNumber::Absent,
        Some(RawNumber::Number(value)) if value.is_finite() => ParsedNumber::Valid(*value),
        Some(RawNumber::Number(value)) => ParsedNumber::Malformed(value.to_string()),
        Some(RawNumber::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return ParsedNumber::Absent;
            }

            match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() => ParsedNumber::Valid(value),
                _ => ParsedNumber::Malformed(text.clone()),
            }
        }
    }
}

// Empty and absent descriptive fields are the same thing.
fn dempty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

pub(crate) struct LocationProjector;

impl LocationProjector {
    /// Projects one `location` record into planar coordinates.
    ///
    /// # Errors
    ///
    /// - [MapError::InvalidRecord] if a field has a JSON type that cannot hold its value.
    /// - [MapError::MissingLocationData] if `distance`, `heading` or `depth` is absent.
    /// - [MapError::MalformedNumber] if one of them is not a finite number.
    /// - [MapError::InvalidGeometry] if the depth magnitude exceeds the distance.
    /// - [MapError::NonFiniteCoordinates] if the projection does not fit in an `f64`.
    pub fn project(source: &SourceRecord) -> Result<Location, MapError> {
        let record = LocationRecord::deserialize(&source.value).map_err(|e| {
            MapError::InvalidRecord {
                line: source.line,
                source: e,
            }
        })?;

        let distance = Self::require(source, "distance", record.distance.as_ref())?;
        let heading = Self::require(source, "heading", record.heading.as_ref())?;
        let depth = Self::require(source, "depth", record.depth.as_ref())?;

        if depth.abs() > distance {
            return Err(MapError::InvalidGeometry {
                line: source.line,
                distance,
                depth,
            });
        }

        // Very large distances overflow when squared, take the roots apart then.
        let horizontal_sq = (distance - depth) * (distance + depth);
        let horizontal_distance = if horizontal_sq.is_finite() {
            horizontal_sq.sqrt()
        } else {
            (distance - depth).sqrt() * (distance + depth).sqrt()
        };
        let angle = heading.rem_euclid(360.0) * PI / 180.0;

        let x = angle.sin() * horizontal_distance;
        let y = -angle.cos() * horizontal_distance;

        if !x.is_finite() || !y.is_finite() {
            return Err(MapError::NonFiniteCoordinates {
                line: source.line,
                distance,
                heading,
                depth,
            });
        }

        let location = Location {
            distance,
            heading,
            depth,
            x,
            y,
            z: depth,
            region_code: dempty(record.region_code),
            location_type_code: dempty(record.location_type_code),
            note: dempty(record.note),
        };

        event!(
            tracing::Level::TRACE,
            "Projected line {} to {}",
            source.line,
            location
        );

        Ok(location)
    }

    fn require(
        source: &SourceRecord,
        field: &'static str,
        raw: Option<&RawNumber>,
    ) -> Result<f64, MapError> {
        match parse_number(raw) {
            ParsedNumber::Valid(value) => Ok(value),
            ParsedNumber::Absent => Err(MapError::MissingLocationData {
                line: source.line,
                field,
                record: source.value.to_string(),
            }),
            ParsedNumber::Malformed(value) => Err(MapError::MalformedNumber {
                line: source.line,
                field,
                value,
                record: source.value.to_string(),
            }),
        }
    }
}
