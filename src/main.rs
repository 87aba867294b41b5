use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use std::path::PathBuf;

use mapmark::config::FileConfig;
use mapmark::report::{list_rows, snapshot_json};
use mapmark::script::Script;
use mapmark::{AnnotationStore, IconKind, LatLng};

/// Measure and annotate drawn map shapes
///
/// Examples:
///   # Area of a small triangle near the equator
///   mapmark area 0,0 0,0.001 0.001,0
///
///   # Length of a path
///   mapmark length 40.0,-74.0 40.0,-73.99
///
///   # Replay a gesture script and print the property list
///   mapmark replay session.toml
///
///   # Same, as JSON
///   mapmark replay session.toml --json
#[derive(Parser, Debug)]
#[command(name = "mapmark")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches mapmark.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Geodesic area of a polygon ring given as LAT,LNG vertices
    Area {
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<LatLng>,
    },
    /// Great-circle length of a path given as LAT,LNG vertices
    Length {
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<LatLng>,
    },
    /// Replay a gesture script against an empty store
    Replay {
        script: PathBuf,

        /// Print the resulting elements as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the marker icons and their palette colors
    Icons,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config: FileConfig = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let level = if args.verbose || file_config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    debug!("Configuration: {:?}", file_config);

    match args.command {
        Command::Area { points } => {
            let mut store = AnnotationStore::new();
            let polygon = store
                .create_polygon(points)
                .context("Cannot measure polygon")?;
            println!("Area: {:.2} m²", polygon.area().unwrap_or_default());
        }
        Command::Length { points } => {
            let mut store = AnnotationStore::new();
            let polyline = store
                .create_polyline(points)
                .context("Cannot measure polyline")?;
            println!("Length: {:.2} m", polyline.length().unwrap_or_default());
        }
        Command::Replay { script, json } => {
            let script = Script::load(&script)?;
            let mut store = AnnotationStore::new();
            script.replay(&mut store, &file_config)?;

            if json {
                println!("{}", snapshot_json(&store)?);
            } else {
                print_property_list(&store);
            }
        }
        Command::Icons => {
            for icon in IconKind::ALL {
                println!(
                    "{:<18} {:<18} {}",
                    icon.as_str(),
                    icon.label(),
                    icon.default_color()
                );
            }
        }
    }

    Ok(())
}

fn print_property_list(store: &AnnotationStore) {
    println!("Map Elements");
    println!("============");

    if store.is_empty() {
        println!("(none)");
        return;
    }

    for row in list_rows(store) {
        println!("{}", row);
    }

    if let Some(rect) = store.bounds() {
        println!();
        println!(
            "Bounds: lat {:.6} .. {:.6}, lng {:.6} .. {:.6}",
            rect.min().y,
            rect.max().y,
            rect.min().x,
            rect.max().x
        );
    }
}
