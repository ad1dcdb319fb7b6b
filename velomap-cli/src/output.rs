//! Rendering of listings as JSON or GeoJSON.

use camino::Utf8Path;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use velomap_core::{DEFAULT_SIBLING_COUNT, Discovered, PageLink, SearchRadius, page_range};

use crate::CliError;

/// Output encoding selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Page, pagination links, viewport and search radius.
    #[default]
    Json,
    /// Map markers for the current page.
    Geojson,
}

/// Viewport with bounds flattened to `[min_lon, min_lat, max_lon, max_lat]`.
#[derive(Debug, Serialize)]
struct ViewportOutput {
    bounds: Option<[f64; 4]>,
    max_zoom: u8,
    padding_px: u16,
    single_point: bool,
}

#[derive(Debug, Serialize)]
struct RadiusOutput {
    km: f64,
    description: Option<String>,
}

impl From<SearchRadius> for RadiusOutput {
    fn from(radius: SearchRadius) -> Self {
        Self {
            km: radius.as_km(),
            description: radius.describe(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ListingOutput<'a, T, C> {
    #[serde(flatten)]
    context: C,
    items: &'a [T],
    page: usize,
    total_pages: usize,
    total_items: usize,
    page_links: Vec<PageLink>,
    viewport: ViewportOutput,
    search_radius: RadiusOutput,
}

/// Encode `listing` as pretty-printed JSON, merging `context` fields into
/// the top-level object.
pub(crate) fn listing_json<T, C>(listing: &Discovered<T>, context: C) -> Result<String, CliError>
where
    T: Serialize,
    C: Serialize,
{
    let viewport = &listing.viewport;
    let payload = ListingOutput {
        context,
        items: &listing.page.items,
        page: listing.page.page_number,
        total_pages: listing.page.total_pages,
        total_items: listing.total_items,
        page_links: page_range(
            listing.page.page_number,
            listing.page.total_pages,
            DEFAULT_SIBLING_COUNT,
        ),
        viewport: ViewportOutput {
            bounds: viewport.bounds_array(),
            max_zoom: viewport.max_zoom,
            padding_px: viewport.padding_px,
            single_point: viewport.is_single_point(),
        },
        search_radius: listing.search_radius.into(),
    };
    serde_json::to_string_pretty(&payload).map_err(CliError::SerialiseListing)
}

/// Encode any serialisable value as pretty-printed JSON.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(CliError::SerialiseListing)
}

/// Write `payload` to `output` when given, otherwise to `writer`.
pub(crate) fn emit(
    payload: &str,
    output: Option<&Utf8Path>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    if let Some(path) = output {
        let contents = format!("{payload}\n");
        return velomap_fs::write_utf8_file(path, &contents).map_err(|source| {
            CliError::WriteOutputFile {
                path: path.to_path_buf(),
                source,
            }
        });
    }
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
