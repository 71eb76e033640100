use crate::{
    constants::{BIOME_CIRCLE_RADIUS, DEFAULT_CIRCLE_RADIUS},
    types::{DisplayInfo, Location},
};

use std::fmt::{Display, Formatter};

/// The kind of place a location type code stands for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LocationKind {
    Edge,
    Home,
    Portal,
    Entrance,
    Biome,
    PointOfInterest,
}

impl LocationKind {
    /// Every code, known or not, maps to exactly one kind.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("E") => LocationKind::Edge,
            Some("H") => LocationKind::Home,
            Some("P") => LocationKind::Portal,
            Some("N") => LocationKind::Entrance,
            Some("B") | Some("BB") => LocationKind::Biome,
            _ => LocationKind::PointOfInterest,
        }
    }

    // Only entrances and biomes are tinted by their region.
    fn takes_region_suffix(&self) -> bool {
        matches!(self, LocationKind::Entrance | LocationKind::Biome)
    }

    fn circle_radius(&self) -> u32 {
        match self {
            LocationKind::Biome => BIOME_CIRCLE_RADIUS,
            _ => DEFAULT_CIRCLE_RADIUS,
        }
    }
}

impl Display for LocationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationKind::Edge => write!(f, "edge"),
            LocationKind::Home => write!(f, "home"),
            LocationKind::Portal => write!(f, "portal"),
            LocationKind::Entrance => write!(f, "entrance"),
            LocationKind::Biome => write!(f, "biome"),
            LocationKind::PointOfInterest => write!(f, "poi"),
        }
    }
}

/// Decides how each location is styled in the rendered map.
pub trait Classifier {
    fn classify(&self, location: &Location) -> DisplayInfo;
}

/// The stock lookup table: class name from the type code, with a
/// `{region}-biome` class added to entrances and biomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardClassifier;

impl Classifier for StandardClassifier {
    fn classify(&self, location: &Location) -> DisplayInfo {
        let kind = LocationKind::from_code(location.location_type_code.as_deref());

        let css_class_name = match location.region_code.as_deref() {
            Some(region) if kind.takes_region_suffix() => {
                format!("{} {}-biome", kind, region.to_lowercase())
            }
            _ => kind.to_string(),
        };

        DisplayInfo {
            css_class_name,
            circle_radius: kind.circle_radius(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn location(type_code: Option<&str>, region_code: Option<&str>) -> Location {
        Location {
            distance: 10.0,
            heading: 0.0,
            depth: 0.0,
            x: 0.0,
            y: -10.0,
            z: 0.0,
            region_code: region_code.map(str::to_string),
            location_type_code: type_code.map(str::to_string),
            note: None,
        }
    }

    fn classify(type_code: Option<&str>, region_code: Option<&str>) -> (String, u32) {
        let info = StandardClassifier.classify(&location(type_code, region_code));
        (info.css_class_name, info.circle_radius)
    }

    #[test]
    fn test_from_code() {
        assert_eq!(LocationKind::from_code(Some("E")), LocationKind::Edge);
        assert_eq!(LocationKind::from_code(Some("H")), LocationKind::Home);
        assert_eq!(LocationKind::from_code(Some("P")), LocationKind::Portal);
        assert_eq!(LocationKind::from_code(Some("N")), LocationKind::Entrance);
        assert_eq!(LocationKind::from_code(Some("B")), LocationKind::Biome);
        assert_eq!(LocationKind::from_code(Some("BB")), LocationKind::Biome);
        assert_eq!(
            LocationKind::from_code(None),
            LocationKind::PointOfInterest
        );
        // Codes are case sensitive.
        assert_eq!(
            LocationKind::from_code(Some("e")),
            LocationKind::PointOfInterest
        );
        assert_eq!(
            LocationKind::from_code(Some("BBB")),
            LocationKind::PointOfInterest
        );
    }

    #[test]
    fn test_plain_classes() {
        assert_eq!(classify(Some("E"), None), ("edge".to_string(), 5));
        assert_eq!(classify(Some("H"), None), ("home".to_string(), 5));
        assert_eq!(classify(Some("P"), None), ("portal".to_string(), 5));
        assert_eq!(classify(Some("N"), None), ("entrance".to_string(), 5));
        assert_eq!(classify(Some("B"), None), ("biome".to_string(), 20));
        assert_eq!(classify(Some("BB"), None), ("biome".to_string(), 20));
    }

    #[test]
    fn test_region_suffix_is_lower_cased() {
        assert_eq!(
            classify(Some("N"), Some("FOO")),
            ("entrance foo-biome".to_string(), 5)
        );
        assert_eq!(
            classify(Some("B"), Some("Jungle")),
            ("biome jungle-biome".to_string(), 20)
        );
        assert_eq!(
            classify(Some("BB"), Some("ice")),
            ("biome ice-biome".to_string(), 20)
        );
    }

    #[test]
    fn test_region_is_ignored_for_other_kinds() {
        assert_eq!(classify(Some("E"), Some("FOO")), ("edge".to_string(), 5));
        assert_eq!(classify(Some("H"), Some("FOO")), ("home".to_string(), 5));
        assert_eq!(classify(Some("P"), Some("FOO")), ("portal".to_string(), 5));
        assert_eq!(classify(None, Some("FOO")), ("poi".to_string(), 5));
    }

    #[test]
    fn test_unknown_codes_fall_back_to_poi() {
        for code in [None, Some("X"), Some("n"), Some(" N"), Some("??")] {
            assert_eq!(classify(code, None), ("poi".to_string(), 5));
        }
    }
}
