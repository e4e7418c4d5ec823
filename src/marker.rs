//! Markers placed on the map.

use crate::{coords::Coordinate, profile::UserProfile};
use serde::Serialize;
use std::fmt;
use strum_macros::{AsStaticStr, EnumIter, EnumString};

/// Whose marker this is.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumString, AsStaticStr, EnumIter, Hash, Serialize)]
pub enum MarkerTag {
    /// The user of this device.
    #[strum(to_string = "self", serialize = "SELF", serialize = "own")]
    #[serde(rename = "self")]
    Own,
    /// A friend discovered nearby.
    #[strum(to_string = "other", serialize = "OTHER")]
    #[serde(rename = "other")]
    Other,
}

impl fmt::Display for MarkerTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MarkerTag::Own => write!(f, "self"),
            MarkerTag::Other => write!(f, "other"),
        }
    }
}

impl MarkerTag {
    /// Pin colour the renderer should use.
    pub fn pin_color(self) -> &'static str {
        match self {
            MarkerTag::Own => "#663399",
            MarkerTag::Other => "#fafafa",
        }
    }
}

/// A labelled point on the map.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FriendMarker {
    pub display_name: String,
    pub coordinate: Coordinate,
    pub tag: MarkerTag,
}

impl FriendMarker {
    /// A marker for a friend reported by the service.
    pub fn other(display_name: String, coordinate: Coordinate) -> Self {
        FriendMarker {
            display_name,
            coordinate,
            tag: MarkerTag::Other,
        }
    }

    /// The marker for the user of this device.
    pub fn own(profile: &UserProfile, coordinate: Coordinate) -> Self {
        FriendMarker {
            display_name: profile.display_name.clone(),
            coordinate,
            tag: MarkerTag::Own,
        }
    }

    /// Title shown on the pin.
    pub fn title(&self) -> &str {
        &self.display_name
    }

    /// Description shown under the title.
    pub fn description(&self) -> String {
        let who = match self.tag {
            MarkerTag::Own => "You",
            MarkerTag::Other => "Friend",
        };

        format!(
            "{} at {:.5}, {:.5}",
            who,
            self.coordinate.latitude(),
            self.coordinate.longitude()
        )
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
