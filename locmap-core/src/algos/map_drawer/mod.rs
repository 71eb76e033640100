use crate::{
    constants::{LABEL_OFFSET, MAP_BACKGROUND, MAP_SCALE},
    types::LocationMap,
};

use svg::Document;

mod classifier;
mod scatter;

pub use classifier::{Classifier, LocationKind, StandardClassifier};
pub(crate) use scatter::ScatterMapDrawer;

#[derive(Debug, Clone)]
pub struct DrawConfig {
    // Pixel size of the document relative to its viewport.
    pub map_scale: f64,
    // Horizontal offset of a note label from its marker.
    pub label_offset: f64,
    pub background: String,
}

impl Default for DrawConfig {
    fn default() -> Self {
        DrawConfig {
            map_scale: MAP_SCALE,
            label_offset: LABEL_OFFSET,
            background: MAP_BACKGROUND.to_string(),
        }
    }
}

pub(crate) trait MapDrawer {
    fn draw(&self, map: &LocationMap, stylesheet: &str, config: &DrawConfig) -> Document;
}
