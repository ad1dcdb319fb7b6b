//! Snapshot fixtures written into scratch directories.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;

pub(super) const NETWORKS_JSON: &str = r#"{
  "networks": [
    {"id": "velib", "name": "Vélib' Métropole", "company": ["Smovengo"],
     "location": {"city": "Paris", "country": "FR", "latitude": 48.856614, "longitude": 2.3522219}},
    {"id": "velov", "name": "Vélo'v", "company": "JCDecaux",
     "location": {"city": "Lyon", "country": "FR", "latitude": 45.764043, "longitude": 4.835659}},
    {"id": "citi-bike-nyc", "name": "Citi Bike", "company": ["Lyft", "Motivate International, Inc."],
     "location": {"city": "New York, NY", "country": "US", "latitude": 40.7143528, "longitude": -74.0059731}},
    {"id": "bicing", "name": "Bicing", "company": null,
     "location": {"city": "Barcelona", "country": "ES", "latitude": 41.3850639, "longitude": 2.1734035}}
  ]
}"#;

pub(super) const DETAIL_JSON: &str = r#"{
  "network": {
    "id": "velov", "name": "Vélo'v", "company": ["JCDecaux"],
    "location": {"city": "Lyon", "country": "FR", "latitude": 45.764043, "longitude": 4.835659},
    "stations": [
      {"id": "0a1b", "name": "Bellecour", "latitude": 45.7578, "longitude": 4.8320,
       "free_bikes": 8, "empty_slots": 12},
      {"id": "0a1c", "name": "Part-Dieu", "latitude": 45.7605, "longitude": 4.8590,
       "free_bikes": 18, "empty_slots": 2},
      {"id": "0a1d", "name": "Jean Macé", "latitude": 45.7484, "longitude": 4.8467,
       "free_bikes": 0, "empty_slots": 9}
    ],
    "vehicles": [
      {"id": "v1", "latitude": 45.75, "longitude": 4.85, "kind": "ebike"}
    ]
  }
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// Scratch directory holding saved snapshots.
#[derive(Debug)]
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn networks(&self) -> Utf8PathBuf {
        let path = self.path("networks.json");
        write_utf8(&path, NETWORKS_JSON.as_bytes());
        path
    }

    pub(super) fn network_detail(&self) -> Utf8PathBuf {
        let path = self.path("velov.json");
        write_utf8(&path, DETAIL_JSON.as_bytes());
        path
    }
}

pub(super) fn parse_output(buffer: &[u8]) -> Value {
    serde_json::from_slice(buffer).expect("output should be JSON")
}

/// Collect the `id` of every listed item.
pub(super) fn item_ids(output: &Value) -> Vec<String> {
    output
        .get("items")
        .and_then(Value::as_array)
        .expect("items array")
        .iter()
        .filter_map(|item| item.get("id").and_then(Value::as_str))
        .map(str::to_owned)
        .collect()
}
