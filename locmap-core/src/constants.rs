pub(crate) const RECORD_TYPE_FIELD: &str = "recordType";
pub(crate) const LOCATION_RECORD_TYPE: &str = "location";

// Margin added on every side of the observed locations.
pub(crate) const VIEWPORT_PADDING: f64 = 10.0;

// Rendered pixel size relative to the viewport size.
pub(crate) const MAP_SCALE: f64 = 1.0 / 3.0;

// Horizontal distance between a marker and its note label.
pub(crate) const LABEL_OFFSET: f64 = 10.0;

pub(crate) const BIOME_CIRCLE_RADIUS: u32 = 20;
pub(crate) const DEFAULT_CIRCLE_RADIUS: u32 = 5;

pub(crate) const MAP_BACKGROUND: &str = "black";
