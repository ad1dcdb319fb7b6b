//! `networks` command: list networks near a position.

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use velomap_core::{
    DEFAULT_RADII_KM, FilterCriteria, GeoPoint, NETWORK_ITEMS_PER_PAGE, NetworkQuery,
    discover_networks, networks_feature_collection, parse_page_number,
};
use velomap_data::load_networks;

use crate::output::{OutputFormat, emit, listing_json, to_pretty_json};
use crate::{ARG_COUNTRY, ARG_FORMAT, ARG_LAT, ARG_LNG, ARG_NETWORKS, ARG_OUTPUT, ARG_PAGE};
use crate::{ARG_PAGE_SIZE, ARG_RADII, ARG_SEARCH, CliError, ENV_NETWORKS, require_existing};

/// CLI arguments for the `networks` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List bike-sharing networks from a saved CityBikes network list. \
                 When a position is given the search widens through the radius \
                 ladder until a rung contains a network, and results are ordered \
                 nearest first.",
    about = "List networks, nearest first when a position is given"
)]
#[ortho_config(prefix = "VELOMAP")]
pub(crate) struct NetworksArgs {
    /// Path to a saved network list (`/v2/networks` response).
    #[arg(long = ARG_NETWORKS, value_name = "path")]
    #[serde(default)]
    pub(crate) networks: Option<Utf8PathBuf>,
    /// Keep only networks in this ISO country code.
    #[arg(long = ARG_COUNTRY, value_name = "code")]
    #[serde(default)]
    pub(crate) country: Option<String>,
    /// Keep only networks whose name or operator contains this text.
    #[arg(long = ARG_SEARCH, value_name = "text")]
    #[serde(default)]
    pub(crate) search: Option<String>,
    /// Latitude of the user position in degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the user position in degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// 1-based page to print; invalid values select page 1.
    #[arg(long = ARG_PAGE, value_name = "number", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) page: Option<String>,
    /// Networks per page (default 15).
    #[arg(long = ARG_PAGE_SIZE, value_name = "count")]
    #[serde(default)]
    pub(crate) page_size: Option<usize>,
    /// Comma-separated radius ladder in kilometres (default 10,50,100,200).
    #[arg(long = ARG_RADII, value_name = "km,km,...")]
    #[serde(default)]
    pub(crate) radii: Option<String>,
    /// Output encoding.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Write the listing to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl NetworksArgs {
    pub(crate) fn into_config(self) -> Result<NetworksConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NetworksConfig::try_from(merged)
    }
}

/// Resolved `networks` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NetworksConfig {
    /// Saved network list.
    pub(crate) networks: Utf8PathBuf,
    /// Pipeline parameters.
    pub(crate) query: NetworkQuery,
    /// Output encoding.
    pub(crate) format: OutputFormat,
    /// Destination file, if any.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<NetworksArgs> for NetworksConfig {
    type Error = CliError;

    fn try_from(args: NetworksArgs) -> Result<Self, Self::Error> {
        let networks = args.networks.ok_or(CliError::MissingArgument {
            field: ARG_NETWORKS,
            env: ENV_NETWORKS,
        })?;

        let mut criteria = FilterCriteria::new();
        if let Some(country) = args.country {
            criteria = criteria.with_country_code(country);
        }
        if let Some(search) = args.search {
            criteria = criteria.with_search_term(search);
        }

        let radii_km = args
            .radii
            .as_deref()
            .map(parse_radii)
            .transpose()?
            .unwrap_or_else(|| DEFAULT_RADII_KM.to_vec());

        let mut query = NetworkQuery::default()
            .with_criteria(criteria)
            .with_page(parse_page_number(args.page.as_deref()))
            .with_page_size(args.page_size.unwrap_or(NETWORK_ITEMS_PER_PAGE))
            .with_radii(radii_km);
        if let Some(position) = user_position(args.lat, args.lng)? {
            query = query.with_user_position(position);
        }

        Ok(Self {
            networks,
            query,
            format: args.format.unwrap_or_default(),
            output: args.output,
        })
    }
}

fn user_position(lat: Option<f64>, lng: Option<f64>) -> Result<Option<GeoPoint>, CliError> {
    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(latitude), Some(longitude)) => GeoPoint::new(latitude, longitude)
            .map(Some)
            .map_err(CliError::InvalidCoordinates),
        _ => Err(CliError::IncompleteCoordinates),
    }
}

/// Parse a comma-separated radius ladder, skipping blank entries.
pub(crate) fn parse_radii(raw: &str) -> Result<Vec<f64>, CliError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse::<f64>().map_err(|_| CliError::InvalidRadius {
                value: entry.to_owned(),
            })
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct NetworksContext<'a> {
    country: Option<&'a str>,
    search: Option<&'a str>,
    user_position: Option<GeoPoint>,
}

pub(crate) fn run_networks(args: NetworksArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_networks_with(args, &mut stdout)
}

pub(crate) fn run_networks_with(
    args: NetworksArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_networks(&config, writer)
}

pub(crate) fn execute_networks(
    config: &NetworksConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_existing(&config.networks, ARG_NETWORKS)?;
    let networks = load_networks(&config.networks)?;
    let listing = discover_networks(&networks, &config.query);
    info!(
        "listing {} of {} networks, search radius {:?}",
        listing.page.items.len(),
        listing.total_items,
        listing.search_radius
    );

    let payload = match config.format {
        OutputFormat::Json => {
            let criteria = &config.query.criteria;
            let context = NetworksContext {
                country: criteria.country_code.as_deref(),
                search: criteria.search_term.as_deref(),
                user_position: config.query.user_position,
            };
            listing_json(&listing, context)?
        }
        OutputFormat::Geojson => to_pretty_json(&networks_feature_collection(&listing.page.items))?,
    };
    emit(&payload, config.output.as_deref(), writer)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<NetworksConfig, CliError> {
    let merged = NetworksArgs::merge_from_layers(layers).map_err(CliError::from)?;
    NetworksConfig::try_from(merged)
}
