//! Capsule CLI - check, replay and demo switch manifests.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::unwrap_used,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::doc_markdown,
    clippy::needless_raw_string_hashes
)]

mod demo;
mod error;
mod replay;

use capsule_switch::CapsuleSwitch;
use capsule_yaml::Manifest;
use clap::{Parser, Subcommand};
use error::CliError;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "capsule")]
#[command(about = "Animated capsule toggle switch - manifest tools and sample screens")]
#[command(version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check manifest validity
    Check {
        /// Path to manifest file (.yaml or .json)
        #[arg(default_value = "switches.yaml")]
        manifest: PathBuf,
    },

    /// Replay each switch's script headlessly
    Run {
        /// Path to manifest file (.yaml or .json)
        #[arg(default_value = "switches.yaml")]
        manifest: PathBuf,

        /// Only replay the switch with this id
        #[arg(long)]
        id: Option<String>,

        /// Simulated frame interval in milliseconds
        #[arg(long, default_value = "16")]
        frame_ms: f64,

        /// Print one JSON record per line
        #[arg(long)]
        json: bool,
    },

    /// Run one of the sample screens
    Demo {
        /// Screen to run
        #[arg(value_enum, default_value = "basic")]
        screen: demo::Screen,

        /// Simulated frame interval in milliseconds
        #[arg(long, default_value = "16")]
        frame_ms: f64,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check { manifest } => check_manifest(&manifest),
        Commands::Run {
            manifest,
            id,
            frame_ms,
            json,
        } => run_manifest(&manifest, id.as_deref(), frame_ms, json),
        Commands::Demo { screen, frame_ms } => {
            for line in demo::run(screen, frame_ms) {
                println!("{line}");
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn check_manifest(path: &Path) -> Result<(), CliError> {
    println!("Checking manifest: {}", path.display());
    let manifest = Manifest::load(path)?;

    println!("Manifest valid!");
    println!("  Density: {}", manifest.density);
    println!("  Switches: {}", manifest.switches.len());
    for spec in &manifest.switches {
        let switch = CapsuleSwitch::new(spec.to_config(manifest.density)?);
        let geometry = switch.geometry();
        println!(
            "  - {}: {}x{}px slider_radius={} direction={:?} checked={} steps={}",
            spec.id,
            geometry.track.width,
            geometry.track.height,
            geometry.slider_radius,
            geometry.direction,
            switch.is_checked(),
            spec.script.len()
        );
    }
    Ok(())
}

fn run_manifest(
    path: &Path,
    only: Option<&str>,
    frame_ms: f64,
    json: bool,
) -> Result<(), CliError> {
    let manifest = Manifest::load(path)?;
    let ids: Vec<&str> = match only {
        Some(id) => vec![id],
        None => manifest.ids().collect(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for id in ids {
        let session = replay::replay(&manifest, id, frame_ms)?;
        if json {
            for record in session.records() {
                serde_json::to_writer(&mut out, &serde_json::json!({ "id": id, "record": record }))?;
                writeln!(out)?;
            }
        } else {
            writeln!(out, "{id}:")?;
            for record in session.records() {
                writeln!(out, "  {record}")?;
            }
            writeln!(out, "  final: checked={}", session.switch().is_checked())?;
        }
    }
    Ok(())
}
