//! friendmap - Register with the friends service and list who is nearby.

use std::error::Error;

use clap::{Arg, ArgMatches, SubCommand};
use friendmap::{
    dark_theme_json, Coordinate, CommonCmdLineArgs, DiscoveryClient, FixedLocation, FriendMapErr,
    HttpFriendService, Session,
};

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        println!("error: {}", e);

        let mut err: &dyn Error = &**e;

        while let Some(cause) = err.source() {
            println!("caused by: {}", cause);
            err = cause;
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let app = CommonCmdLineArgs::new_app("friendmap", "Find friends near a location.")
        .subcommand(
            SubCommand::with_name("register")
                .about("Register a username at a location and list the friends nearby.")
                .arg(
                    Arg::with_name("username")
                        .index(1)
                        .required(true)
                        .takes_value(true)
                        .help("The name to register as."),
                )
                .arg(
                    Arg::with_name("distance")
                        .index(2)
                        .required(true)
                        .takes_value(true)
                        .help("Search radius in kilometers."),
                )
                .arg(
                    Arg::with_name("lat")
                        .long("lat")
                        .required(true)
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .help("Latitude of the device in degrees."),
                )
                .arg(
                    Arg::with_name("lon")
                        .long("lon")
                        .required(true)
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .help("Longitude of the device in degrees."),
                )
                .arg(
                    Arg::with_name("json")
                        .long("json")
                        .help("Print the markers as JSON."),
                ),
        )
        .subcommand(
            SubCommand::with_name("style")
                .about("Print the dark map theme as JSON. Ignores all global options."),
        );

    let matches = app.get_matches();

    match matches.subcommand() {
        ("register", Some(sub_args)) => register(sub_args),
        ("style", Some(_)) => style(),
        _ => {
            println!("{}", matches.usage());
            Ok(())
        }
    }
}

fn register(sub_args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let common_args = CommonCmdLineArgs::from_matches(sub_args)?;

    let lat = parse_degrees(sub_args, "lat")?;
    let lon = parse_degrees(sub_args, "lon")?;
    let location = FixedLocation::new(Coordinate::new(lat, lon)?);

    let service = HttpFriendService::new(common_args.config().clone())?;
    let client = DiscoveryClient::new(common_args.config().clone(), location, service);
    let mut session = Session::new(client, 1.0);

    // Safe to unwrap, clap enforces these are present.
    let username = sub_args.value_of("username").unwrap();
    let distance = sub_args.value_of("distance").unwrap();

    session.open_login();
    if !session.login(username, distance) {
        let notice = session.state().notice().unwrap_or("registration failed");
        return Err(notice.into());
    }

    let markers = session.state().markers();

    if sub_args.is_present("json") {
        println!("{}", serde_json::to_string_pretty(markers)?);
        return Ok(());
    }

    for marker in markers {
        println!(
            "{:>6} {:<20} {:>10.5} {:>11.5}",
            marker.tag.to_string(),
            marker.title(),
            marker.coordinate.latitude(),
            marker.coordinate.longitude()
        );
    }

    if let Some(updated) = session.state().markers_updated() {
        println!("updated {}", updated.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    Ok(())
}

fn style() -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(&dark_theme_json())?);
    Ok(())
}

fn parse_degrees(sub_args: &ArgMatches, name: &str) -> Result<f64, FriendMapErr> {
    sub_args
        .value_of(name)
        .unwrap_or_default()
        .parse::<f64>()
        .map_err(|_| FriendMapErr::InvalidConfig(format!("--{} is not a number", name)))
}
