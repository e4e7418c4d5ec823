//! Command line options that are used across applications.

use std::time::Duration;

use clap::{crate_authors, crate_version, App, Arg, ArgMatches};

use crate::config::Config;
use crate::errors::FriendMapErr;

/// Struct to package up command line arguments.
#[derive(Clone, Debug)]
pub struct CommonCmdLineArgs {
    // Where to find the friends service and how long to wait on it.
    config: Config,
}

impl<'a, 'b> CommonCmdLineArgs {
    const DEFAULT_REQUEST_TIMEOUT: &'static str = "10";
    const DEFAULT_LOCATION_TIMEOUT: &'static str = "30";

    /// Create a new set of args.
    pub fn new_app(app_name: &'static str, about: &'static str) -> App<'a, 'b> {
        App::new(app_name)
            .author(crate_authors!())
            .about(about)
            .version(crate_version!())
            .arg(
                Arg::with_name("base-url")
                    .short("u")
                    .long("base-url")
                    .takes_value(true)
                    .env(Config::BASE_URL_VAR)
                    .global(true)
                    .help("Base URL of the friends service.")
                    .long_help(concat!(
                        "Base URL of the friends service, e.g. http://localhost:3000. ",
                        "Requests go to <base-url>/api/friends/register/<distance>."
                    )),
            )
            .arg(
                Arg::with_name("timeout")
                    .short("t")
                    .long("timeout")
                    .takes_value(true)
                    .env(Config::REQUEST_TIMEOUT_VAR)
                    .default_value(Self::DEFAULT_REQUEST_TIMEOUT)
                    .global(true)
                    .help("Seconds to wait on the friends service."),
            )
            .arg(
                Arg::with_name("location-timeout")
                    .long("location-timeout")
                    .takes_value(true)
                    .env(Config::LOCATION_TIMEOUT_VAR)
                    .default_value(Self::DEFAULT_LOCATION_TIMEOUT)
                    .global(true)
                    .help("Seconds to wait on a location fix."),
            )
            .after_help(concat!(
                "Options may also be set in the environment with FRIENDMAP_BASE_URL, ",
                "FRIENDMAP_REQUEST_TIMEOUT_SECS and FRIENDMAP_LOCATION_TIMEOUT_SECS. ",
                "Set RUST_LOG=debug to see each step of the exchange."
            ))
    }

    /// Pull the configuration out of parsed arguments. Global arguments are propagated down, so
    /// pass the matches of the deepest subcommand.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, FriendMapErr> {
        let base_url = matches.value_of("base-url").ok_or_else(|| {
            FriendMapErr::InvalidConfig(format!(
                "no base URL, use --base-url or set {}",
                Config::BASE_URL_VAR
            ))
        })?;

        let request_timeout = parse_secs(matches, "timeout", Self::DEFAULT_REQUEST_TIMEOUT)?;
        let location_timeout =
            parse_secs(matches, "location-timeout", Self::DEFAULT_LOCATION_TIMEOUT)?;

        let config = Config::new(base_url)?
            .with_request_timeout(request_timeout)
            .with_location_timeout(location_timeout);

        Ok(CommonCmdLineArgs { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn parse_secs(matches: &ArgMatches, name: &str, default: &str) -> Result<Duration, FriendMapErr> {
    matches
        .value_of(name)
        .unwrap_or(default)
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| FriendMapErr::InvalidConfig(format!("invalid --{}, not a whole number", name)))
}

#[cfg(test)]
mod unit {
    use super::*;

    fn parse(args: &[&str]) -> Result<CommonCmdLineArgs, FriendMapErr> {
        let matches = CommonCmdLineArgs::new_app("test", "testing").get_matches_from(args);
        CommonCmdLineArgs::from_matches(&matches)
    }

    #[test]
    fn test_base_url_and_timeouts() {
        // Every value is given so the FRIENDMAP_* variables set by other tests don't leak in.
        let args = parse(&[
            "test",
            "--base-url",
            "http://localhost:3000",
            "-t",
            "3",
            "--location-timeout",
            "45",
        ])
        .unwrap();

        assert_eq!(args.config().base_url().as_str(), "http://localhost:3000/");
        assert_eq!(args.config().request_timeout(), Duration::from_secs(3));
        assert_eq!(args.config().location_timeout(), Duration::from_secs(45));
    }

    #[test]
    fn test_bad_timeout() {
        match parse(&[
            "test",
            "--base-url",
            "http://localhost:3000",
            "-t",
            "soon",
            "--location-timeout",
            "30",
        ]) {
            Err(FriendMapErr::InvalidConfig(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_author_is_this_crate() {
        let mut help = Vec::new();
        CommonCmdLineArgs::new_app("test", "testing")
            .write_long_help(&mut help)
            .unwrap();
        let help = String::from_utf8(help).unwrap();

        assert!(help.contains("The friendmap developers"));
    }
}
