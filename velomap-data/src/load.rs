//! Snapshot loaders backed by capability-based file access.

use camino::Utf8Path;
use log::info;
use std::io::Read;
use velomap_core::Network;
use velomap_fs::open_utf8_file;

use crate::decode::{NetworkSnapshot, decode_network_detail, decode_networks};
use crate::error::LoadError;

fn read_snapshot(path: &Utf8Path) -> Result<String, LoadError> {
    let mut file = open_utf8_file(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut body = String::new();
    file.read_to_string(&mut body)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(body)
}

/// Load a saved network list document.
///
/// # Errors
/// Returns [`LoadError`] naming `path` when the file cannot be opened, read
/// or decoded.
pub fn load_networks(path: &Utf8Path) -> Result<Vec<Network>, LoadError> {
    let body = read_snapshot(path)?;
    let networks = decode_networks(&body).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {} networks from {path}", networks.len());
    Ok(networks)
}

/// Load a saved network detail document.
///
/// # Errors
/// Returns [`LoadError`] naming `path` when the file cannot be opened, read
/// or decoded.
pub fn load_network_detail(path: &Utf8Path) -> Result<NetworkSnapshot, LoadError> {
    let body = read_snapshot(path)?;
    let snapshot = decode_network_detail(&body).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "loaded {} stations for network {} from {path}",
        snapshot.stations.len(),
        snapshot.network.id
    );
    Ok(snapshot)
}
