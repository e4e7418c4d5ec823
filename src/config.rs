//! Settings injected at start up.

use crate::errors::FriendMapErr;
use log::{info, warn};
use reqwest::Url;
use std::{env, time::Duration};

/// Where the friends service lives and how long to wait on things.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    base_url: Url,
    request_timeout: Duration,
    location_timeout: Duration,
}

impl Config {
    /// Environment variable holding the service base URL.
    pub const BASE_URL_VAR: &'static str = "FRIENDMAP_BASE_URL";
    /// Environment variable holding the HTTP timeout in seconds.
    pub const REQUEST_TIMEOUT_VAR: &'static str = "FRIENDMAP_REQUEST_TIMEOUT_SECS";
    /// Environment variable holding the location fix timeout in seconds.
    pub const LOCATION_TIMEOUT_VAR: &'static str = "FRIENDMAP_LOCATION_TIMEOUT_SECS";

    const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
    const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a configuration with default timeouts.
    pub fn new(base_url: &str) -> Result<Self, FriendMapErr> {
        let base_url = Url::parse(base_url)
            .map_err(|err| FriendMapErr::InvalidConfig(format!("{}: {}", base_url, err)))?;

        if base_url.cannot_be_a_base() {
            return Err(FriendMapErr::InvalidConfig(format!(
                "{} cannot be a base URL",
                base_url
            )));
        }

        Ok(Config {
            base_url,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
            location_timeout: Self::DEFAULT_LOCATION_TIMEOUT,
        })
    }

    /// Load from the environment. Only the base URL is required.
    pub fn from_env() -> Result<Self, FriendMapErr> {
        let base_url = env::var(Self::BASE_URL_VAR).map_err(|_| {
            FriendMapErr::InvalidConfig(format!("{} is not set", Self::BASE_URL_VAR))
        })?;

        let config = Self::new(&base_url)?;

        let request_timeout = secs_from_env(Self::REQUEST_TIMEOUT_VAR, config.request_timeout)?;
        let location_timeout = secs_from_env(Self::LOCATION_TIMEOUT_VAR, config.location_timeout)?;

        Ok(config
            .with_request_timeout(request_timeout)
            .with_location_timeout(location_timeout))
    }

    /// Replace the HTTP timeout.
    pub fn with_request_timeout(self, request_timeout: Duration) -> Self {
        Config {
            request_timeout,
            ..self
        }
    }

    /// Replace the location fix timeout.
    pub fn with_location_timeout(self, location_timeout: Duration) -> Self {
        Config {
            location_timeout,
            ..self
        }
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The registration endpoint for a radius, `<base>/api/friends/register/{radius}`.
    pub fn register_url(&self, radius_segment: &str) -> Result<Url, FriendMapErr> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| FriendMapErr::InvalidConfig("base URL cannot take a path".to_owned()))?
            .pop_if_empty()
            .extend(&["api", "friends", "register", radius_segment]);

        Ok(url)
    }

    /// How long to wait on the friends service.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// How long to wait on a location fix.
    pub fn location_timeout(&self) -> Duration {
        self.location_timeout
    }
}

fn secs_from_env(key: &str, default: Duration) -> Result<Duration, FriendMapErr> {
    match env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|err| {
                warn!("Invalid {} value: {}", key, err);
                FriendMapErr::InvalidConfig(format!("{}: {}", key, err))
            }),
        Err(_) => {
            info!("{} not set, using default: {:?}", key, default);
            Ok(default)
        }
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn test_register_url() {
        let config = Config::new("http://localhost:3000").unwrap();
        assert_eq!(
            config.register_url("5").unwrap().as_str(),
            "http://localhost:3000/api/friends/register/5"
        );

        let config = Config::new("https://example.com/friendmap/").unwrap();
        assert_eq!(
            config.register_url("2.5").unwrap().as_str(),
            "https://example.com/friendmap/api/friends/register/2.5"
        );
    }

    #[test]
    fn test_bad_base_url() {
        match Config::new("not a url") {
            Err(FriendMapErr::InvalidConfig(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
        match Config::new("mailto:someone@example.com") {
            Err(FriendMapErr::InvalidConfig(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    // One test owns every FRIENDMAP_* variable so nothing else races on them.
    #[test]
    fn test_from_env() {
        let vars = [
            Config::BASE_URL_VAR,
            Config::REQUEST_TIMEOUT_VAR,
            Config::LOCATION_TIMEOUT_VAR,
        ];
        let saved: Vec<_> = vars.iter().map(|key| (*key, env::var_os(key))).collect();
        for key in &vars {
            env::remove_var(key);
        }

        match Config::from_env() {
            Err(FriendMapErr::InvalidConfig(msg)) => assert!(msg.contains(Config::BASE_URL_VAR)),
            other => panic!("unexpected: {:?}", other),
        }

        env::set_var(Config::BASE_URL_VAR, "http://friends.example.com:8080");
        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url().as_str(), "http://friends.example.com:8080/");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.location_timeout(), Duration::from_secs(30));

        env::set_var(Config::REQUEST_TIMEOUT_VAR, "4");
        env::set_var(Config::LOCATION_TIMEOUT_VAR, " 45 ");
        let config = Config::from_env().unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(4));
        assert_eq!(config.location_timeout(), Duration::from_secs(45));

        env::set_var(Config::REQUEST_TIMEOUT_VAR, "soon");
        match Config::from_env() {
            Err(FriendMapErr::InvalidConfig(msg)) => {
                assert!(msg.starts_with(Config::REQUEST_TIMEOUT_VAR))
            }
            other => panic!("unexpected: {:?}", other),
        }

        env::set_var(Config::REQUEST_TIMEOUT_VAR, "4");
        env::set_var(Config::LOCATION_TIMEOUT_VAR, "2.5");
        match Config::from_env() {
            Err(FriendMapErr::InvalidConfig(msg)) => {
                assert!(msg.starts_with(Config::LOCATION_TIMEOUT_VAR))
            }
            other => panic!("unexpected: {:?}", other),
        }

        env::set_var(Config::BASE_URL_VAR, "not a url");
        env::remove_var(Config::LOCATION_TIMEOUT_VAR);
        match Config::from_env() {
            Err(FriendMapErr::InvalidConfig(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }

        for (key, val) in saved {
            match val {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_timeouts() {
        let config = Config::new("http://localhost:3000")
            .unwrap()
            .with_request_timeout(Duration::from_secs(2));

        assert_eq!(config.request_timeout(), Duration::from_secs(2));
        assert_eq!(config.location_timeout(), Duration::from_secs(30));
    }
}
