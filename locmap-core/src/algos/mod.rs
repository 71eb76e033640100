mod map_builder;
mod map_drawer;

pub(crate) use map_builder::MapBuilder;
pub(crate) use map_drawer::{MapDrawer, ScatterMapDrawer};
pub use map_drawer::{Classifier, DrawConfig, LocationKind, StandardClassifier};
