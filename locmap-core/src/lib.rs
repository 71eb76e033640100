mod algos;
mod constants;
mod error;
mod types;

use std::io::{self, BufRead};

use tracing::{Level, span};

pub use algos::{Classifier, DrawConfig, LocationKind, StandardClassifier};
pub use error::MapError;
pub use types::{Bounds, DisplayInfo, Location, LocationMap};

/// Renders the `location` records of a line-delimited JSON stream as an SVG
/// scatter map, embedding `stylesheet` as-is.
///
/// The whole stream is consumed before anything is drawn, since the viewport
/// depends on every location.
pub fn create_map<I>(lines: I, stylesheet: &str) -> Result<svg::Document, MapError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    create_map_with(lines, stylesheet, StandardClassifier, &DrawConfig::default())
}

/// Same as [create_map], reading lines from `reader`.
pub fn create_map_from_reader<R: BufRead>(
    reader: R,
    stylesheet: &str,
) -> Result<svg::Document, MapError> {
    create_map(reader.lines(), stylesheet)
}

/// Same as [create_map], with a custom [Classifier] and [DrawConfig].
pub fn create_map_with<I, C>(
    lines: I,
    stylesheet: &str,
    classifier: C,
    config: &DrawConfig,
) -> Result<svg::Document, MapError>
where
    I: IntoIterator<Item = io::Result<String>>,
    C: Classifier,
{
    let span = span!(Level::DEBUG, "create_map");
    let _guard = span.enter();

    let map = algos::MapBuilder::default().build(lines.into_iter())?;

    let drawer = algos::ScatterMapDrawer::new(classifier);

    Ok(algos::MapDrawer::draw(&drawer, &map, stylesheet, config))
}
