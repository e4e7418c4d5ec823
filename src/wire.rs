//! JSON shapes exchanged with the friends service.
//!
//! Positions follow GeoJSON and are written `[longitude, latitude]`.

use crate::{
    coords::Coordinate,
    marker::FriendMarker,
    profile::UserProfile,
};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Body of the registration POST.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub user_name: String,
    pub loc: GeoPoint,
}

/// A GeoJSON `Point`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: [f64; 2],
}

impl GeoPoint {
    /// Wrap a coordinate, writing it longitude first.
    pub fn new(coordinate: Coordinate) -> Self {
        GeoPoint {
            kind: "Point",
            coordinates: coordinate.to_lon_lat(),
        }
    }

    /// The `[lon, lat]` position.
    pub fn coordinates(&self) -> [f64; 2] {
        self.coordinates
    }
}

impl RegistrationRequest {
    /// Build the request for this profile at this fix.
    pub fn new(profile: &UserProfile, fix: Coordinate) -> Self {
        RegistrationRequest {
            user_name: profile.display_name.clone(),
            loc: GeoPoint::new(fix),
        }
    }
}

/// One element of the service's response array.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRecord {
    pub user_name: String,
    pub loc: FriendLocation,
}

/// Location of a friend. Only the position is read, anything else the service sends is ignored.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FriendLocation {
    pub coordinates: Vec<f64>,
}

/// Parse a response body into records.
pub fn parse_friends(body: &[u8]) -> Result<Vec<FriendRecord>, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Turn the service records into markers, then append the marker for `profile` at `fix`.
///
/// Records are dropped, never rejected as a whole, when their position does not have exactly two
/// values, when it is outside the valid latitude/longitude range, when the name was already seen
/// earlier in the response, or when the name is the user's own. The user's marker is always last.
pub fn into_markers(
    records: Vec<FriendRecord>,
    profile: &UserProfile,
    fix: Coordinate,
) -> Vec<FriendMarker> {
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(profile.display_name.clone());

    let mut markers: Vec<FriendMarker> = records
        .into_iter()
        .filter_map(|record| {
            let coordinate = match Coordinate::from_lon_lat(&record.loc.coordinates) {
                Some(Ok(coordinate)) => coordinate,
                Some(Err(err)) => {
                    warn!("dropping friend {}: {}", record.user_name, err);
                    return None;
                }
                None => {
                    warn!(
                        "dropping friend {}: position has {} values",
                        record.user_name,
                        record.loc.coordinates.len()
                    );
                    return None;
                }
            };

            if !seen.insert(record.user_name.clone()) {
                warn!("dropping duplicate friend {}", record.user_name);
                return None;
            }

            Some(FriendMarker::other(record.user_name, coordinate))
        })
        .collect();

    markers.push(FriendMarker::own(profile, fix));

    markers
}
