//! Module for errors.
use std::{error::Error, fmt::Display};

/// Error from the discovery client and its collaborators.
#[derive(Debug)]
pub enum FriendMapErr {
    // Failures of the registration flow
    /// The location capability refused permission.
    PermissionDenied,
    /// A fix could not be obtained from the location service.
    LocationUnavailable(String),
    /// The registration exchange with the remote service failed.
    DiscoveryFailed(DiscoveryFailure),

    // My own errors from this crate
    /// User entered data that cannot make a profile.
    InvalidProfile(String),
    /// Latitude or longitude out of range.
    InvalidCoordinate(f64, f64),
    /// The configuration could not be built.
    InvalidConfig(String),
    /// The HTTP client could not be built, forwarded from reqwest.
    HttpClient(reqwest::Error),
    /// Another registration attempt is still outstanding.
    AttemptInProgress,
}

/// What went wrong during the registration exchange.
#[derive(Debug)]
pub enum DiscoveryFailure {
    /// Error forwarded from reqwest, the request never completed.
    Transport(reqwest::Error),
    /// The service answered with something other than 2xx.
    Status(reqwest::StatusCode),
    /// The response body was not the expected JSON.
    Body(serde_json::Error),
}

impl Display for FriendMapErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        use crate::errors::FriendMapErr::*;

        match self {
            PermissionDenied => write!(f, "location permission denied"),
            LocationUnavailable(msg) => write!(f, "location unavailable: {}", msg),
            DiscoveryFailed(failure) => write!(f, "discovery failed: {}", failure),

            InvalidProfile(msg) => write!(f, "invalid profile: {}", msg),
            InvalidCoordinate(lat, lon) => {
                write!(f, "invalid coordinate: lat {} lon {}", lat, lon)
            }
            InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            HttpClient(err) => write!(f, "could not build HTTP client: {}", err),
            AttemptInProgress => write!(f, "a registration attempt is already in flight"),
        }
    }
}

impl Display for DiscoveryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            DiscoveryFailure::Transport(err) => write!(f, "transport error: {}", err),
            DiscoveryFailure::Status(code) => write!(f, "HTTP error ({})", code),
            DiscoveryFailure::Body(err) => write!(f, "malformed response body: {}", err),
        }
    }
}

impl Error for FriendMapErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FriendMapErr::DiscoveryFailed(DiscoveryFailure::Transport(err)) => Some(err),
            FriendMapErr::DiscoveryFailed(DiscoveryFailure::Body(err)) => Some(err),
            FriendMapErr::HttpClient(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FriendMapErr {
    fn from(err: reqwest::Error) -> FriendMapErr {
        FriendMapErr::DiscoveryFailed(DiscoveryFailure::Transport(err))
    }
}

impl From<serde_json::Error> for FriendMapErr {
    fn from(err: serde_json::Error) -> FriendMapErr {
        FriendMapErr::DiscoveryFailed(DiscoveryFailure::Body(err))
    }
}

impl FriendMapErr {
    /// A short message suitable for a banner in front of the user.
    pub fn notice(&self) -> &'static str {
        use crate::errors::FriendMapErr::*;

        match self {
            PermissionDenied => "Location permission is needed to find friends nearby.",
            LocationUnavailable(_) | InvalidCoordinate(..) => {
                "Could not determine your location. Try again."
            }
            DiscoveryFailed(_) => "Could not reach the friends service. Try again.",
            InvalidProfile(_) => "Enter a username and a distance in kilometers.",
            InvalidConfig(_) | HttpClient(_) => "The application is misconfigured.",
            AttemptInProgress => "Still looking for friends...",
        }
    }
}
