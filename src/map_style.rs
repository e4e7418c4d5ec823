//! The dark theme handed to the map surface.

use serde::{Serialize, Serializer};
use strum::AsStaticRef;
use strum_macros::{AsStaticStr, EnumIter, EnumString};

use self::{ElementType::*, FeatureType::*, Styler::Color};

/// Map features a rule applies to.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumString, AsStaticStr, EnumIter, Hash)]
pub enum FeatureType {
    #[strum(to_string = "administrative")]
    Administrative,
    #[strum(to_string = "administrative.country")]
    AdministrativeCountry,
    #[strum(to_string = "administrative.land_parcel")]
    AdministrativeLandParcel,
    #[strum(to_string = "administrative.locality")]
    AdministrativeLocality,
    #[strum(to_string = "poi")]
    Poi,
    #[strum(to_string = "poi.park")]
    PoiPark,
    #[strum(to_string = "road")]
    Road,
    #[strum(to_string = "road.arterial")]
    RoadArterial,
    #[strum(to_string = "road.highway")]
    RoadHighway,
    #[strum(to_string = "road.highway.controlled_access")]
    RoadHighwayControlledAccess,
    #[strum(to_string = "road.local")]
    RoadLocal,
    #[strum(to_string = "transit")]
    Transit,
    #[strum(to_string = "water")]
    Water,
}

/// Parts of a feature a rule applies to.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumString, AsStaticStr, EnumIter, Hash)]
pub enum ElementType {
    #[strum(to_string = "geometry")]
    Geometry,
    #[strum(to_string = "geometry.fill")]
    GeometryFill,
    #[strum(to_string = "labels.icon")]
    LabelsIcon,
    #[strum(to_string = "labels.text.fill")]
    LabelsTextFill,
    #[strum(to_string = "labels.text.stroke")]
    LabelsTextStroke,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumString, AsStaticStr, EnumIter, Hash)]
pub enum Visibility {
    #[strum(to_string = "on")]
    On,
    #[strum(to_string = "off")]
    Off,
    #[strum(to_string = "simplified")]
    Simplified,
}

macro_rules! serialize_as_static_str {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_static())
                }
            }
        )*
    };
}

serialize_as_static_str!(FeatureType, ElementType, Visibility);

/// A single style change.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Styler {
    Color(&'static str),
    Visibility(Visibility),
}

/// Stylers applied to everything matching the feature and element types. A missing type matches
/// everything.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<FeatureType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_type: Option<ElementType>,
    pub stylers: &'static [Styler],
}

const fn rule(
    feature_type: Option<FeatureType>,
    element_type: Option<ElementType>,
    stylers: &'static [Styler],
) -> StyleRule {
    StyleRule {
        feature_type,
        element_type,
        stylers,
    }
}

const OFF: &[Styler] = &[Styler::Visibility(Visibility::Off)];

static DARK_THEME: [StyleRule; 21] = [
    rule(None, Some(Geometry), &[Color("#212121")]),
    rule(None, Some(LabelsIcon), OFF),
    rule(None, Some(LabelsTextFill), &[Color("#757575")]),
    rule(None, Some(LabelsTextStroke), &[Color("#212121")]),
    rule(Some(Administrative), Some(Geometry), &[Color("#757575")]),
    rule(Some(AdministrativeCountry), Some(LabelsTextFill), &[Color("#9e9e9e")]),
    rule(Some(AdministrativeLandParcel), None, OFF),
    rule(Some(AdministrativeLocality), Some(LabelsTextFill), &[Color("#bdbdbd")]),
    rule(Some(Poi), Some(LabelsTextFill), &[Color("#757575")]),
    rule(Some(PoiPark), Some(Geometry), &[Color("#181818")]),
    rule(Some(PoiPark), Some(LabelsTextFill), &[Color("#616161")]),
    rule(Some(PoiPark), Some(LabelsTextStroke), &[Color("#1b1b1b")]),
    rule(Some(Road), Some(GeometryFill), &[Color("#2c2c2c")]),
    rule(Some(Road), Some(LabelsTextFill), &[Color("#8a8a8a")]),
    rule(Some(RoadArterial), Some(Geometry), &[Color("#373737")]),
    rule(Some(RoadHighway), Some(Geometry), &[Color("#3c3c3c")]),
    rule(Some(RoadHighwayControlledAccess), Some(Geometry), &[Color("#4e4e4e")]),
    rule(Some(RoadLocal), Some(LabelsTextFill), &[Color("#616161")]),
    rule(Some(Transit), Some(LabelsTextFill), &[Color("#757575")]),
    rule(Some(Water), Some(Geometry), &[Color("#000000")]),
    rule(Some(Water), Some(LabelsTextFill), &[Color("#3d3d3d")]),
];

/// The dark theme, in the order the rules must be applied.
pub fn dark_theme() -> &'static [StyleRule] {
    &DARK_THEME
}

/// The dark theme as the JSON style array map surfaces accept.
pub fn dark_theme_json() -> serde_json::Value {
    // Only strings and static enums in here, serialising cannot fail.
    serde_json::to_value(dark_theme()).unwrap_or(serde_json::Value::Null)
}
