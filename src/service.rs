//! The remote friends service.

use crate::{
    config::Config,
    errors::{DiscoveryFailure, FriendMapErr},
    wire::{parse_friends, FriendRecord, RegistrationRequest},
};
use log::debug;
use reqwest::blocking::Client;

/// Transport for the registration exchange.
pub trait FriendService {
    /// POST `request` to the register endpoint for `radius_segment` and return the friends found.
    ///
    /// Transport errors, non-2xx answers and unparseable bodies are all `DiscoveryFailed`.
    fn register(
        &self,
        radius_segment: &str,
        request: &RegistrationRequest,
    ) -> Result<Vec<FriendRecord>, FriendMapErr>;
}

impl<'a, S: FriendService + ?Sized> FriendService for &'a S {
    fn register(
        &self,
        radius_segment: &str,
        request: &RegistrationRequest,
    ) -> Result<Vec<FriendRecord>, FriendMapErr> {
        (**self).register(radius_segment, request)
    }
}

/// The friends service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFriendService {
    config: Config,
    client: Client,
}

impl HttpFriendService {
    /// Build the HTTP client from the configuration.
    pub fn new(config: Config) -> Result<Self, FriendMapErr> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(FriendMapErr::HttpClient)?;

        Ok(HttpFriendService { config, client })
    }
}

impl FriendService for HttpFriendService {
    fn register(
        &self,
        radius_segment: &str,
        request: &RegistrationRequest,
    ) -> Result<Vec<FriendRecord>, FriendMapErr> {
        let url = self.config.register_url(radius_segment)?;
        debug!("POST {}", url);

        let response = self.client.post(url).json(request).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FriendMapErr::DiscoveryFailed(DiscoveryFailure::Status(
                status,
            )));
        }

        let body = response.bytes()?;
        debug!("received {} bytes", body.len());

        Ok(parse_friends(&body)?)
    }
}
