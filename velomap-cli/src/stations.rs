//! `stations` command: list the docking stations of one network.

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use velomap_core::{
    Network, STATION_ITEMS_PER_PAGE, SortDirection, StationQuery, StationSortKey,
    discover_stations, parse_page_number, stations_feature_collection,
};
use velomap_data::load_network_detail;

use crate::output::{OutputFormat, emit, listing_json, to_pretty_json};
use crate::{ARG_FORMAT, ARG_NETWORK_DETAIL, ARG_OUTPUT, ARG_PAGE, ARG_PAGE_SIZE};
use crate::{ARG_SORT_DIRECTION, ARG_SORT_KEY, CliError, ENV_NETWORK_DETAIL, require_existing};

/// CLI arguments for the `stations` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List the docking stations of one network from a saved \
                 CityBikes network detail response, optionally sorted by \
                 available bikes or empty docks.",
    about = "List the stations of one network"
)]
#[ortho_config(prefix = "VELOMAP")]
pub(crate) struct StationsArgs {
    /// Path to a saved network detail (`/v2/networks/{id}` response).
    #[arg(long = ARG_NETWORK_DETAIL, value_name = "path")]
    #[serde(default)]
    pub(crate) network_detail: Option<Utf8PathBuf>,
    /// Sort by `free_bikes` or `empty_slots`; feed order when omitted.
    #[arg(long = ARG_SORT_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) sort_key: Option<String>,
    /// `asc` or `desc` (default `desc`).
    #[arg(long = ARG_SORT_DIRECTION, value_name = "direction")]
    #[serde(default)]
    pub(crate) sort_direction: Option<String>,
    /// 1-based page to print; invalid values select page 1.
    #[arg(long = ARG_PAGE, value_name = "number", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) page: Option<String>,
    /// Stations per page (default 15).
    #[arg(long = ARG_PAGE_SIZE, value_name = "count")]
    #[serde(default)]
    pub(crate) page_size: Option<usize>,
    /// Output encoding.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Write the listing to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl StationsArgs {
    pub(crate) fn into_config(self) -> Result<StationsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        StationsConfig::try_from(merged)
    }
}

/// Resolved `stations` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StationsConfig {
    /// Saved network detail.
    pub(crate) network_detail: Utf8PathBuf,
    /// Pipeline parameters.
    pub(crate) query: StationQuery,
    /// Output encoding.
    pub(crate) format: OutputFormat,
    /// Destination file, if any.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<StationsArgs> for StationsConfig {
    type Error = CliError;

    fn try_from(args: StationsArgs) -> Result<Self, Self::Error> {
        let network_detail = args.network_detail.ok_or(CliError::MissingArgument {
            field: ARG_NETWORK_DETAIL,
            env: ENV_NETWORK_DETAIL,
        })?;

        let direction = args
            .sort_direction
            .as_deref()
            .map(str::parse::<SortDirection>)
            .transpose()?
            .unwrap_or(SortDirection::Desc);
        let mut query = StationQuery::default()
            .with_page(parse_page_number(args.page.as_deref()))
            .with_page_size(args.page_size.unwrap_or(STATION_ITEMS_PER_PAGE));
        if let Some(raw) = args.sort_key.as_deref() {
            query = query.sorted_by(raw.parse::<StationSortKey>()?, direction);
        }

        Ok(Self {
            network_detail,
            query,
            format: args.format.unwrap_or_default(),
            output: args.output,
        })
    }
}

#[derive(Debug, Serialize)]
struct StationsContext<'a> {
    network: &'a Network,
    vehicle_count: usize,
    sort_key: Option<StationSortKey>,
    sort_direction: SortDirection,
}

pub(crate) fn run_stations(args: StationsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_stations_with(args, &mut stdout)
}

pub(crate) fn run_stations_with(
    args: StationsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_stations(&config, writer)
}

pub(crate) fn execute_stations(
    config: &StationsConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_existing(&config.network_detail, ARG_NETWORK_DETAIL)?;
    let snapshot = load_network_detail(&config.network_detail)?;
    let listing = discover_stations(&snapshot.stations, &config.query);
    info!(
        "listing {} of {} stations in {}",
        listing.page.items.len(),
        listing.total_items,
        snapshot.network.id
    );

    let payload = match config.format {
        OutputFormat::Json => {
            let context = StationsContext {
                network: &snapshot.network,
                vehicle_count: snapshot.vehicle_count,
                sort_key: config.query.sort_key,
                sort_direction: config.query.direction,
            };
            listing_json(&listing, context)?
        }
        OutputFormat::Geojson => to_pretty_json(&stations_feature_collection(&listing.page.items))?,
    };
    emit(&payload, config.output.as_deref(), writer)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<StationsConfig, CliError> {
    let merged = StationsArgs::merge_from_layers(layers).map_err(CliError::from)?;
    StationsConfig::try_from(merged)
}
