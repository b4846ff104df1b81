use anyhow::Result;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, process};
use streetcache_boundary as json;
use streetcache_core::{
    entities::MapPoint,
    repositories::AddressCacheRepo,
    usecases::{AddressResolver, ResolutionResult},
    util::geo::street_view_heading,
};

mod config;
mod gateways;

use self::config::Config;

const FAILURE_MESSAGE: &str = "Failed to fetch address data";
const INVALID_COORDINATES_MESSAGE: &str = "Invalid coordinates";

#[derive(Debug, Parser)]
#[command(
    name = "streetcache",
    about = "Resolve addresses into street view and map images",
    version
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve an address, from the cache if possible
    Resolve {
        #[arg(value_name = "ADDRESS")]
        address: String,
    },

    /// Look up an address in the cache without contacting any provider
    Lookup {
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Print the heading from a street view camera towards a location
    Heading {
        #[arg(allow_negative_numbers = true)]
        cam_lat: f64,
        #[arg(allow_negative_numbers = true)]
        cam_lng: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
}

impl Command {
    fn failure_message(&self) -> &'static str {
        match self {
            Self::Resolve { .. } | Self::Lookup { .. } => FAILURE_MESSAGE,
            Self::Heading { .. } => INVALID_COORDINATES_MESSAGE,
        }
    }
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let failure_message = cli.command.failure_message();
    if let Err(err) = run(cli) {
        log::error!("{err:#}");
        eprintln!("{failure_message}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli { config, command } = cli;
    match command {
        Command::Resolve { address } => {
            let cfg = Config::try_load_from_file_or_default(config)?;
            resolve(&cfg, &address)
        }
        Command::Lookup { query } => {
            let cfg = Config::try_load_from_file_or_default(config)?;
            lookup(&cfg, &query)
        }
        Command::Heading {
            cam_lat,
            cam_lng,
            lat,
            lng,
        } => {
            let camera = MapPoint::try_from_lat_lng_deg(cam_lat, cam_lng)?;
            let target = MapPoint::try_from_lat_lng_deg(lat, lng)?;
            println!("{}", street_view_heading(camera, target));
            Ok(())
        }
    }
}

fn resolve(cfg: &Config, address: &str) -> Result<()> {
    let google_maps = gateways::google_maps_gateway(cfg)?;
    let resolver = AddressResolver::new(
        gateways::cache_repo(cfg)?,
        google_maps.clone(),
        google_maps,
        gateways::artifact_store(cfg)?,
        cfg.storage.bucket.as_str(),
    );
    let result = resolver.resolve_address(address)?;
    let notification = if result.provenance.is_cached() {
        "Loaded from cache"
    } else {
        "Fetched fresh data"
    };
    println!("{}", serde_json::to_string_pretty(&into_json(result))?);
    eprintln!("{notification}");
    Ok(())
}

fn lookup(cfg: &Config, query: &str) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("Empty query");
    }
    match gateways::cache_repo(cfg)?.find_address(query)? {
        Some(record) => {
            let record = json::AddressRecord::from(record);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        None => eprintln!("not cached"),
    }
    Ok(())
}

fn into_json(from: ResolutionResult) -> json::ResolutionResult {
    let ResolutionResult {
        record,
        provenance,
        degradations,
    } = from;
    json::ResolutionResult {
        data: record.into(),
        source: provenance.into(),
        degradations: degradations.into_iter().map(Into::into).collect(),
    }
}
