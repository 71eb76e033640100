use std::fmt::{Display, Formatter};

use serde::Deserialize;
use serde_json::Value;

/// A numeric field as it may appear in the record stream: either a JSON
/// number or a string holding one (the CSV adapter emits every cell as text).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawNumber {
    Number(f64),
    Text(String),
}

/// The typed view of a `location` record. Fields are validated by the
/// projector, not here, so that a missing field can be reported together
/// with the record that lacks it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LocationRecord {
    pub distance: Option<RawNumber>,
    pub heading: Option<RawNumber>,
    pub depth: Option<RawNumber>,
    pub region_code: Option<String>,
    pub location_type_code: Option<String>,
    pub note: Option<String>,
}

/// A selected input line, kept raw for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SourceRecord {
    /// 1-based line number in the input stream.
    pub line: usize,
    pub value: Value,
}

/// A projected location. `x`/`y` are screen-space coordinates: heading 0
/// points to negative `y`, heading 90 to positive `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub distance: f64,
    pub heading: f64,
    pub depth: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub region_code: Option<String>,
    pub location_type_code: Option<String>,
    pub note: Option<String>,
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// How a single location is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayInfo {
    pub css_class_name: String,
    pub circle_radius: u32,
}

/// The padded viewport of a finished map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[({}, {}) - ({}, {})]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// Every accepted location in input order, plus the viewport around them.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationMap {
    pub locations: Vec<Location>,
    pub bounds: Bounds,
}
