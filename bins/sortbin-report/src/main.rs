//! sortbin-report: how far is every address from a sorting container?
//!
//! Loads two GeoJSON feature collections (residential address points in
//! WGS-84 and waste-sorting container sites in S-JTSK planar), computes
//! each address's distance to the nearest publicly accessible container,
//! and prints mean, median, and maximum statistics. Single pass, no
//! retries: the first fatal problem ends the run with a message.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use sortbin_analysis::{DistanceStats, nearest_distances};
use sortbin_dataset::{DatasetKind, Extraction, Extractor, load_features};
use sortbin_geo::KrovakProjection;

mod report;

const DEFAULT_ADDRESSES: &str = "adresy.geojson";
const DEFAULT_CONTAINERS: &str = "kontejnery.geojson";

/// Distance statistics from address points to public sorting containers
#[derive(Parser)]
#[command(name = "sortbin-report")]
#[command(author, version, about)]
struct Cli {
    /// Path to the address points GeoJSON (WGS-84); defaults to
    /// adresy.geojson next to the executable
    #[arg(long)]
    addresses: Option<PathBuf>,

    /// Path to the container sites GeoJSON (S-JTSK); defaults to
    /// kontejnery.geojson next to the executable
    #[arg(long)]
    containers: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("sortbin_dataset=debug,sortbin_analysis=debug")
            .init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report::error(&format!("{error:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let containers_path = resolve_input(cli.containers.as_deref(), DEFAULT_CONTAINERS);
    let addresses_path = resolve_input(cli.addresses.as_deref(), DEFAULT_ADDRESSES);

    let projection = KrovakProjection::new();
    let extractor = Extractor::new(&projection);

    let containers = load_dataset(&extractor, &containers_path, DatasetKind::Containers)?;
    let addresses = load_dataset(&extractor, &addresses_path, DatasetKind::Addresses)?;

    let table = nearest_distances(&containers.records, &addresses.records)?;
    let stats = DistanceStats::from_table(&table).context("no distances to summarize")?;

    report::print_report(addresses.records.len(), containers.records.len(), &stats);

    Ok(())
}

/// Load one input file and extract its records, warning about any
/// dropped ones.
fn load_dataset(
    extractor: &Extractor<'_>,
    path: &Path,
    kind: DatasetKind,
) -> anyhow::Result<Extraction> {
    let features =
        load_features(path).with_context(|| format!("could not load the {kind} dataset"))?;

    let extraction = extractor.extract(&features, kind)?;
    if extraction.invalid > 0 {
        report::warning(&format!(
            "dropped {} {kind} record(s) missing required fields",
            extraction.invalid
        ));
    }

    Ok(extraction)
}

/// Explicit flag value, or the default file name next to the executable.
fn resolve_input(flag: Option<&Path>, default_name: &str) -> PathBuf {
    match flag {
        Some(path) => path.to_path_buf(),
        None => std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .map_or_else(|| PathBuf::from(default_name), |dir| dir.join(default_name)),
    }
}
