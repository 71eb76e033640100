use super::{Classifier, DrawConfig, MapDrawer};
use crate::types::{DisplayInfo, Location, LocationMap};

use svg::{
    Document, Node,
    node::{
        self, Blob,
        element::{Circle, Element},
    },
};
use tracing::event;

const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Draws every location as a circle, with an optional note label next to it.
pub(crate) struct ScatterMapDrawer<C> {
    classifier: C,
}

impl<C: Classifier> ScatterMapDrawer<C> {
    pub fn new(classifier: C) -> Self {
        ScatterMapDrawer { classifier }
    }
}

impl<C: Classifier> MapDrawer for ScatterMapDrawer<C> {
    fn draw(&self, map: &LocationMap, stylesheet: &str, config: &DrawConfig) -> Document {
        let bounds = &map.bounds;

        let mut document = Document::new()
            .set("xmlns:xlink", XLINK_NAMESPACE)
            .set(
                "viewBox",
                (bounds.min_x, bounds.min_y, bounds.width(), bounds.height()),
            )
            .set("style", format!("background: {}", config.background))
            .set("width", bounds.width() * config.map_scale)
            .set("height", bounds.height() * config.map_scale);

        document = document.add(Self::draw_stylesheet(stylesheet));

        let mut labels = 0;
        for location in map.locations.iter() {
            let display_info = self.classifier.classify(location);

            document = document.add(Self::draw_marker(location, &display_info));

            if let Some(note) = &location.note {
                document = document.add(Self::draw_label(
                    location,
                    note,
                    &display_info,
                    config.label_offset,
                ));
                labels += 1;
            }
        }

        event!(
            tracing::Level::DEBUG,
            "Drew {} markers and {} labels",
            map.locations.len(),
            labels
        );

        document
    }
}

impl<C: Classifier> ScatterMapDrawer<C> {
    // The stylesheet is opaque to us and goes in untouched.
    fn draw_stylesheet(stylesheet: &str) -> Element {
        let mut style = Element::new("style");
        style.append(Blob::new(stylesheet));
        style
    }

    // Adding zero turns a rounded -0 into 0.
    fn draw_marker(location: &Location, display_info: &DisplayInfo) -> Circle {
        Circle::new()
            .set("class", display_info.css_class_name.as_str())
            .set("r", display_info.circle_radius)
            .set("cx", location.x.round() + 0.0)
            .set("cy", location.y.round() + 0.0)
            .set("title", location.distance)
    }

    fn draw_label(
        location: &Location,
        note: &str,
        display_info: &DisplayInfo,
        label_offset: f64,
    ) -> Element {
        let mut label = Element::new("text");
        label.assign("class", display_info.css_class_name.as_str());
        label.assign("x", location.x + label_offset);
        label.assign("y", location.y);
        label.append(node::Text::new(note));
        label
    }
}
