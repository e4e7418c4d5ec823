//! The device location service.

use crate::{coords::Coordinate, errors::FriendMapErr};
use log::debug;
use std::{
    sync::{
        mpsc::{self, RecvTimeoutError},
        Arc,
    },
    thread,
    time::Duration,
};

/// Answer to a permission request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Permission {
    /// Location may be read.
    Granted,
    /// The user or platform refused.
    Denied,
}

/// How precise a fix to ask for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Accuracy {
    /// GPS quality.
    High,
    /// Network or cell quality.
    Balanced,
}

/// Something that can tell where the device is.
///
/// Both calls block until the platform answers. Callers bound the wait themselves, so a provider
/// that never answers only costs a parked thread.
pub trait LocationProvider {
    /// Ask for permission to read the location.
    fn request_permission(&self) -> Permission;

    /// Get a fix. `timeout` is a hint for platforms that take one.
    fn current_fix(&self, accuracy: Accuracy, timeout: Duration)
        -> Result<Coordinate, FriendMapErr>;
}

/// Ask for permission and, only if granted, a high accuracy fix.
///
/// Both steps run on a worker thread and the caller waits at most `timeout` for the answer.
/// Expiry is `LocationUnavailable`; a late answer is thrown away.
pub fn request_current_location<L>(
    provider: &Arc<L>,
    timeout: Duration,
) -> Result<Coordinate, FriendMapErr>
where
    L: LocationProvider + Send + Sync + 'static,
{
    let (tx, rx) = mpsc::channel();
    let provider = Arc::clone(provider);

    thread::Builder::new()
        .name("location-fix".to_owned())
        .spawn(move || {
            // The receiver is gone if the caller already gave up.
            let _ = tx.send(permission_then_fix(&*provider, timeout));
        })
        .map_err(|err| FriendMapErr::LocationUnavailable(err.to_string()))?;

    let fix = match rx.recv_timeout(timeout) {
        Ok(res) => res?,
        Err(RecvTimeoutError::Timeout) => {
            return Err(FriendMapErr::LocationUnavailable(format!(
                "timed out after {:?}",
                timeout
            )))
        }
        Err(RecvTimeoutError::Disconnected) => {
            return Err(FriendMapErr::LocationUnavailable(
                "location provider panicked".to_owned(),
            ))
        }
    };

    debug!("got fix {:?}", fix);

    Ok(fix)
}

fn permission_then_fix<L: LocationProvider + ?Sized>(
    provider: &L,
    timeout: Duration,
) -> Result<Coordinate, FriendMapErr> {
    match provider.request_permission() {
        Permission::Granted => debug!("location permission granted"),
        Permission::Denied => return Err(FriendMapErr::PermissionDenied),
    }

    provider
        .current_fix(Accuracy::High, timeout)
        .map_err(|err| match err {
            FriendMapErr::PermissionDenied | FriendMapErr::LocationUnavailable(_) => err,
            other => FriendMapErr::LocationUnavailable(other.to_string()),
        })
}

/// A provider that always grants permission and reports the same fix.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    fix: Coordinate,
}

impl FixedLocation {
    /// Create a new one.
    pub fn new(fix: Coordinate) -> Self {
        FixedLocation { fix }
    }
}

impl LocationProvider for FixedLocation {
    fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    fn current_fix(&self, _: Accuracy, _: Duration) -> Result<Coordinate, FriendMapErr> {
        Ok(self.fix)
    }
}

/// A provider that never grants permission.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

impl LocationProvider for DeniedLocation {
    fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    fn current_fix(&self, _: Accuracy, _: Duration) -> Result<Coordinate, FriendMapErr> {
        Err(FriendMapErr::PermissionDenied)
    }
}
