//! What the map screen shows and the transitions between states.

use crate::{
    client::DiscoveryClient,
    errors::FriendMapErr,
    location::LocationProvider,
    marker::FriendMarker,
    profile::UserProfile,
    service::FriendService,
};
use chrono::{DateTime, Utc};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The visible part of the map. Values reported by the map surface are stored as is.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    const INITIAL_LATITUDE: f64 = 55.769918;
    const INITIAL_LONGITUDE: f64 = 12.511906;
    const LATITUDE_DELTA: f64 = 0.0922;

    /// The region shown at start up for a viewport with `aspect_ratio` (width / height).
    pub fn initial(aspect_ratio: f64) -> Self {
        Region {
            latitude: Self::INITIAL_LATITUDE,
            longitude: Self::INITIAL_LONGITUDE,
            latitude_delta: Self::LATITUDE_DELTA,
            longitude_delta: Self::LATITUDE_DELTA * aspect_ratio,
        }
    }
}

/// Everything the renderer needs. Never mutated in place, every transition returns a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    region: Region,
    markers: Arc<Vec<FriendMarker>>,
    markers_updated: Option<DateTime<Utc>>,
    modal_visible: bool,
    notice: Option<String>,
}

impl ViewState {
    /// Starting state: initial region, no markers, login closed.
    pub fn new(aspect_ratio: f64) -> Self {
        ViewState {
            region: Region::initial(aspect_ratio),
            markers: Arc::new(vec![]),
            markers_updated: None,
            modal_visible: false,
            notice: None,
        }
    }

    /// Replace the whole marker set.
    pub fn with_markers(&self, markers: Vec<FriendMarker>, at: DateTime<Utc>) -> Self {
        ViewState {
            markers: Arc::new(markers),
            markers_updated: Some(at),
            ..self.clone()
        }
    }

    /// Show or hide the login modal.
    pub fn with_modal_visible(&self, modal_visible: bool) -> Self {
        ViewState {
            modal_visible,
            ..self.clone()
        }
    }

    /// Store a region reported by the map.
    pub fn with_region(&self, region: Region) -> Self {
        ViewState {
            region,
            ..self.clone()
        }
    }

    /// Show a banner.
    pub fn with_notice(&self, notice: &str) -> Self {
        ViewState {
            notice: Some(notice.to_owned()),
            ..self.clone()
        }
    }

    /// Dismiss the banner.
    pub fn without_notice(&self) -> Self {
        ViewState {
            notice: None,
            ..self.clone()
        }
    }

    #[allow(missing_docs)]
    pub fn region(&self) -> Region {
        self.region
    }

    #[allow(missing_docs)]
    pub fn markers(&self) -> &[FriendMarker] {
        &self.markers
    }

    /// When the marker set was last replaced.
    pub fn markers_updated(&self) -> Option<DateTime<Utc>> {
        self.markers_updated
    }

    #[allow(missing_docs)]
    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    #[allow(missing_docs)]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

/// Owns the discovery client and the current view state for the lifetime of the app.
#[derive(Debug)]
pub struct Session<L, S> {
    client: DiscoveryClient<L, S>,
    state: ViewState,
}

impl<L, S> Session<L, S>
where
    L: LocationProvider + Send + Sync + 'static,
    S: FriendService,
{
    /// Create a new session.
    pub fn new(client: DiscoveryClient<L, S>, aspect_ratio: f64) -> Self {
        Session {
            client,
            state: ViewState::new(aspect_ratio),
        }
    }

    /// The current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The login button on the map was pressed.
    pub fn open_login(&mut self) {
        self.state = self.state.with_modal_visible(true);
    }

    /// The map was panned or zoomed.
    pub fn on_region_change(&mut self, region: Region) {
        self.state = self.state.with_region(region);
    }

    /// The banner was dismissed.
    pub fn dismiss_notice(&mut self) {
        self.state = self.state.without_notice();
    }

    /// The login form was submitted.
    ///
    /// Closes the modal and runs the registration. On success the marker set is swapped for the
    /// new one. On failure the error is logged, the markers stay as they were, and a notice is
    /// set. Returns true if the markers were replaced.
    pub fn login(&mut self, username: &str, distance: &str) -> bool {
        self.state = self.state.with_modal_visible(false);

        let result = UserProfile::from_input(username, distance)
            .and_then(|profile| self.client.register(&profile));

        match result {
            Ok(markers) => {
                self.state = self
                    .state
                    .with_markers(markers, Utc::now())
                    .without_notice();
                true
            }
            Err(err) => {
                match err {
                    FriendMapErr::AttemptInProgress => debug!("ignoring login: {}", err),
                    _ => error!("login failed: {}", err),
                }
                self.state = self.state.with_notice(err.notice());
                false
            }
        }
    }
}

#[cfg(test)]
mod unit {
    use super::*;
    use crate::{
        client::test_util::{FakeService, Reply},
        config::Config,
        coords::Coordinate,
        location::{DeniedLocation, FixedLocation},
        marker::MarkerTag,
    };

    const BOB: &str = r#"[{"userName":"bob","loc":{"coordinates":[12.55,55.71]}}]"#;

    fn session<L: LocationProvider + Send + Sync + 'static>(
        location: L,
        service: &FakeService,
    ) -> Session<L, &FakeService> {
        let config = Config::new("http://localhost:3000").unwrap();
        Session::new(DiscoveryClient::new(config, location, service), 0.5)
    }

    fn here() -> FixedLocation {
        FixedLocation::new(Coordinate::new(55.70, 12.50).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new(0.5);

        assert_eq!(state.region().latitude, 55.769918);
        assert_eq!(state.region().longitude, 12.511906);
        assert_eq!(state.region().latitude_delta, 0.0922);
        assert_eq!(state.region().longitude_delta, 0.0922 * 0.5);
        assert!(state.markers().is_empty());
        assert!(!state.modal_visible());
        assert!(state.notice().is_none());
        assert!(state.markers_updated().is_none());
    }

    #[test]
    fn test_transitions_do_not_touch_the_original() {
        let state = ViewState::new(1.0);
        let shown = state.with_modal_visible(true);

        assert!(!state.modal_visible());
        assert!(shown.modal_visible());

        let region = Region {
            latitude: 1000.0,
            longitude: -1000.0,
            latitude_delta: 0.0,
            longitude_delta: 0.0,
        };
        assert_eq!(shown.with_region(region).region(), region);
        assert_eq!(shown.region(), Region::initial(1.0));
    }

    #[test]
    fn test_login_success() {
        let service = FakeService::new(Reply::Body(BOB));
        let mut session = session(here(), &service);

        session.open_login();
        assert!(session.state().modal_visible());

        assert!(session.login("alice", "5"));

        let state = session.state();
        assert!(!state.modal_visible());
        assert!(state.notice().is_none());
        assert!(state.markers_updated().is_some());

        let names: Vec<(&str, MarkerTag)> =
            state.markers().iter().map(|m| (m.title(), m.tag)).collect();
        assert_eq!(names, vec![("bob", MarkerTag::Other), ("alice", MarkerTag::Own)]);
    }

    #[test]
    fn test_failures_keep_previous_markers() {
        let good = FakeService::new(Reply::Body(BOB));
        let mut session = session(here(), &good);
        assert!(session.login("alice", "5"));
        let before = session.state().clone();

        let bad_status = FakeService::new(Reply::Status(503));
        let mut failing = Session {
            client: DiscoveryClient::new(
                Config::new("http://localhost:3000").unwrap(),
                here(),
                &bad_status,
            ),
            state: before.clone(),
        };

        assert!(!failing.login("alice", "5"));
        assert_eq!(failing.state().markers(), before.markers());
        assert_eq!(failing.state().markers_updated(), before.markers_updated());
        assert_eq!(
            failing.state().notice(),
            Some("Could not reach the friends service. Try again.")
        );

        let bad_body = FakeService::new(Reply::Body("<html>oops</html>"));
        let mut failing = Session {
            client: DiscoveryClient::new(
                Config::new("http://localhost:3000").unwrap(),
                here(),
                &bad_body,
            ),
            state: before.clone(),
        };

        assert!(!failing.login("alice", "5"));
        assert_eq!(failing.state().markers(), before.markers());
    }

    #[test]
    fn test_denied_and_invalid_input() {
        let service = FakeService::new(Reply::Body(BOB));
        let mut session = session(DeniedLocation, &service);

        assert!(!session.login("alice", "5"));
        assert!(session.state().markers().is_empty());
        assert_eq!(
            session.state().notice(),
            Some("Location permission is needed to find friends nearby.")
        );

        assert!(!session.login("", "5"));
        assert!(!session.login("alice", "far"));
        assert_eq!(service.call_count(), 0);

        session.dismiss_notice();
        assert!(session.state().notice().is_none());
    }

    #[test]
    fn test_region_change_is_stored() {
        let service = FakeService::new(Reply::Body("[]"));
        let mut session = session(here(), &service);
        let region = Region {
            latitude: 40.0,
            longitude: -74.0,
            latitude_delta: 0.5,
            longitude_delta: 0.25,
        };

        session.on_region_change(region);
        assert_eq!(session.state().region(), region);
    }
}
