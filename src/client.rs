//! The discovery client.

use crate::{
    config::Config,
    coords::Coordinate,
    errors::FriendMapErr,
    location::{self, LocationProvider},
    marker::FriendMarker,
    profile::UserProfile,
    service::FriendService,
    wire::{into_markers, RegistrationRequest},
};
use log::{debug, info};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Runs registration exchanges, one at a time.
#[derive(Debug)]
pub struct DiscoveryClient<L, S> {
    config: Config,
    location: Arc<L>,
    service: S,
    in_flight: AtomicBool,
}

// Clears the in flight flag however the attempt ends.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl<'a> Drop for InFlight<'a> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<L, S> DiscoveryClient<L, S>
where
    L: LocationProvider + Send + Sync + 'static,
    S: FriendService,
{
    /// Create a new client.
    pub fn new(config: Config, location: L, service: S) -> Self {
        DiscoveryClient {
            config,
            location: Arc::new(location),
            service,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Ask for location permission and, if granted, a high accuracy fix.
    ///
    /// Gives up with `LocationUnavailable` once the configured location timeout passes.
    pub fn request_current_location(&self) -> Result<Coordinate, FriendMapErr> {
        location::request_current_location(&self.location, self.config.location_timeout())
    }

    /// Register `profile` at the current location and return the markers to show, friends first
    /// and the user last.
    ///
    /// Fails with `AttemptInProgress`, without touching the location service or the network, if
    /// another call is still outstanding.
    pub fn register(&self, profile: &UserProfile) -> Result<Vec<FriendMarker>, FriendMapErr> {
        let _guard = InFlight::acquire(&self.in_flight).ok_or(FriendMapErr::AttemptInProgress)?;

        let fix = self.request_current_location()?;

        let request = RegistrationRequest::new(profile, fix);
        let records = self
            .service
            .register(&profile.radius_path_segment(), &request)?;
        debug!("service returned {} records", records.len());

        let markers = into_markers(records, profile, fix);
        info!(
            "{} registered within {} km, {} friends nearby",
            profile.display_name,
            profile.search_radius_km,
            markers.len() - 1
        );

        Ok(markers)
    }

    /// True while a registration is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }
}


/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
