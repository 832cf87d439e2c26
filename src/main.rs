//! Nearest Place CLI
//!
//! Find the closest location to a position from the command line.
//!
//! Usage:
//!     nearest-place find --lat 48.8566 --lon 2.3522 --url http://localhost:3000
//!     nearest-place find --lat 48.8566 --lon 2.3522 --file ~/pharmacies.json --limit 5
//!     nearest-place distance --from 48.8566,2.3522 --to 45.764,4.8357

use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use nearest_place::core::config::{FinderConfig, SourceConfig, DEFAULT_LOCATIONS_PATH};
use nearest_place::{
    distance_km, CandidateSource, Coordinate, HttpSource, JsonFileSource, Nearest, NearestResult,
    RankedCandidate, ScanFinder,
};

/// Nearest Place - find the closest point of interest
#[derive(Parser, Debug)]
#[command(name = "nearest-place")]
#[command(version)]
#[command(about = "Great-circle nearest location lookup", long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List locations by distance and mark the nearest
    Find {
        /// Origin latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Origin longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Location API base URL
        #[arg(long, env = "NEAREST_PLACE_URL")]
        url: Option<String>,

        /// Endpoint path on the location API
        #[arg(long, default_value = DEFAULT_LOCATIONS_PATH)]
        path: String,

        /// Read locations from a JSON file instead of the API
        #[arg(long)]
        file: Option<String>,

        /// Ignore locations further than this many kilometres
        #[arg(long)]
        radius: Option<f64>,

        /// Show only the closest N locations, sorted by distance
        #[arg(long)]
        limit: Option<usize>,

        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Great-circle distance between two `lat,lon` points
    Distance {
        /// First point, `lat,lon`
        #[arg(long, allow_hyphen_values = true)]
        from: Coordinate,

        /// Second point, `lat,lon`
        #[arg(long, allow_hyphen_values = true)]
        to: Coordinate,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn open_source(
    url: Option<String>,
    path: &str,
    file: Option<String>,
    timeout: u64,
) -> anyhow::Result<Box<dyn CandidateSource>> {
    if let Some(file) = file {
        return Ok(Box::new(JsonFileSource::new(expand_path(&file))));
    }
    let Some(url) = url else {
        bail!("no location source: pass --url, --file, or set NEAREST_PLACE_URL");
    };
    let config = SourceConfig::new(&url)
        .with_path(path)
        .with_timeout(Duration::from_secs(timeout));
    Ok(Box::new(HttpSource::new(config)?))
}

fn describe(ranked: &RankedCandidate) -> String {
    let candidate = &ranked.candidate;
    match candidate.address.as_deref() {
        Some(address) if !address.is_empty() => {
            format!("{} - {} (à {:.2} km)", candidate.name, address, ranked.distance_km)
        }
        _ => format!("{} (à {:.2} km)", candidate.name, ranked.distance_km),
    }
}

fn render_result(result: &NearestResult) -> String {
    let mut out = String::new();
    let Some(nearest) = result.nearest() else {
        out.push_str("No locations found.\n");
        return out;
    };

    let _ = writeln!(out, "Nearest: {}", describe(nearest));
    let _ = writeln!(out);
    for ranked in &result.candidates {
        let marker = if result.is_nearest(ranked.id()) { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {}", describe(ranked));
    }
    out
}

fn render_ranked(ranked: &[RankedCandidate]) -> String {
    if ranked.is_empty() {
        return "No locations found.\n".to_string();
    }
    let mut out = String::new();
    // Sorted ascending with ties in input order, so the first entry is the nearest
    for (i, r) in ranked.iter().enumerate() {
        let marker = if i == 0 { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {:>3}. {}", i + 1, describe(r));
    }
    out
}

#[allow(clippy::too_many_arguments)]
fn cmd_find(
    origin: Coordinate,
    url: Option<String>,
    path: &str,
    file: Option<String>,
    radius: Option<f64>,
    limit: Option<usize>,
    timeout: u64,
    format: Format,
) -> anyhow::Result<()> {
    let source = open_source(url, path, file, timeout)?;
    let candidates = source
        .fetch()
        .with_context(|| format!("fetching locations from {}", source.describe()))?;

    let mut config = FinderConfig::new();
    if let Some(radius) = radius {
        config = config.with_radius_km(radius);
    }
    let finder = ScanFinder::new(config);

    match limit {
        Some(k) => {
            let ranked = finder.rank(&origin, &candidates, k)?;
            match format {
                Format::Text => print!("{}", render_ranked(&ranked)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
            }
        }
        None => {
            let result = finder.find_nearest(&origin, &candidates)?;
            match format {
                Format::Text => print!("{}", render_result(&result)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }
    }
    Ok(())
}

fn cmd_distance(from: Coordinate, to: Coordinate) -> anyhow::Result<()> {
    let d = distance_km(&from, &to)?;
    println!("{d:.3} km");
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Find {
            lat,
            lon,
            url,
            path,
            file,
            radius,
            limit,
            timeout,
            format,
        } => cmd_find(
            Coordinate::new(lat, lon),
            url,
            &path,
            file,
            radius,
            limit,
            timeout,
            format,
        ),
        Commands::Distance { from, to } => cmd_distance(from, to),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
