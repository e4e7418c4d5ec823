#![deny(missing_docs)]
//! Package to discover nearby friends and place them on a dark-styled map.
//!
//! A [`Session`] owns a [`DiscoveryClient`] and the [`ViewState`] a map renderer draws. Logging in
//! asks the [`LocationProvider`] for a fix, registers it with the [`FriendService`], and swaps in
//! the markers that come back.

//
// Public API
//
pub use crate::client::DiscoveryClient;
pub use crate::cmd_line::CommonCmdLineArgs;
pub use crate::config::Config;
pub use crate::coords::Coordinate;
pub use crate::errors::{DiscoveryFailure, FriendMapErr};
pub use crate::location::{
    request_current_location, Accuracy, DeniedLocation, FixedLocation, LocationProvider,
    Permission,
};
pub use crate::map_style::{
    dark_theme, dark_theme_json, ElementType, FeatureType, StyleRule, Styler, Visibility,
};
pub use crate::marker::{FriendMarker, MarkerTag};
pub use crate::profile::UserProfile;
pub use crate::service::{FriendService, HttpFriendService};
pub use crate::view::{Region, Session, ViewState};
pub use crate::wire::{
    into_markers, parse_friends, FriendLocation, FriendRecord, GeoPoint, RegistrationRequest,
};

//
// Implementation only
//
mod client;
mod cmd_line;
mod config;
mod coords;
mod errors;
mod location;
mod map_style;
mod marker;
mod profile;
mod service;
mod view;
mod wire;
