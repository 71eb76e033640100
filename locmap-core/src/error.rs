use crate::types::Bounds;

use thiserror::Error;

/// Every way a map run can fail. All of them abort the run.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("Line {line} is not valid JSON: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: Record doesn't contain location info ({field} is missing): {record}")]
    MissingLocationData {
        line: usize,
        field: &'static str,
        record: String,
    },

    #[error(r#"Line {line}: field {field} is not a number ("{value}"): {record}"#)]
    MalformedNumber {
        line: usize,
        field: &'static str,
        value: String,
        record: String,
    },

    #[error("Line {line}: location record has unexpected field types: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: depth {depth} exceeds distance {distance}")]
    InvalidGeometry {
        line: usize,
        distance: f64,
        depth: f64,
    },

    #[error(
        "Line {line}: distance {distance}, heading {heading}, depth {depth} do not project to finite coordinates"
    )]
    NonFiniteCoordinates {
        line: usize,
        distance: f64,
        heading: f64,
        depth: f64,
    },

    #[error("Map extent {0} is too large to render")]
    UnboundedViewport(Bounds),

    #[error("No location records found in input")]
    EmptyResult,

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
