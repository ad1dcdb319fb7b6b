//! Command-line interface for browsing bike-sharing snapshots.
//!
//! `velomap networks` lists networks near a position with progressive radius
//! widening, and `velomap stations` lists the docking stations of one
//! network. Both print a page of results with pagination links and the map
//! viewport that frames the whole listing.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};

mod error;
mod networks;
mod output;
mod stations;

pub use error::CliError;
pub use output::OutputFormat;

const ARG_NETWORKS: &str = "networks";
const ARG_NETWORK_DETAIL: &str = "network-detail";
const ARG_COUNTRY: &str = "country";
const ARG_SEARCH: &str = "search";
const ARG_LAT: &str = "lat";
const ARG_LNG: &str = "lng";
const ARG_PAGE: &str = "page";
const ARG_PAGE_SIZE: &str = "page-size";
const ARG_RADII: &str = "radii";
const ARG_SORT_KEY: &str = "sort-key";
const ARG_SORT_DIRECTION: &str = "sort-direction";
const ARG_FORMAT: &str = "format";
const ARG_OUTPUT: &str = "output";
const ENV_NETWORKS: &str = "VELOMAP_CMDS_NETWORKS_NETWORKS";
const ENV_NETWORK_DETAIL: &str = "VELOMAP_CMDS_STATIONS_NETWORK_DETAIL";

/// Run the velomap CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, a
/// snapshot cannot be loaded, or the listing cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Networks(args) => networks::run_networks(args),
        Command::Stations(args) => stations::run_stations(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "velomap",
    about = "Browse bike-sharing networks and stations from saved CityBikes snapshots",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List networks, nearest first when a position is given.
    Networks(networks::NetworksArgs),
    /// List the stations of one network.
    Stations(stations::StationsArgs),
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match velomap_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
