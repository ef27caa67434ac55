//! Region → station id mapping, loaded from a JSON document such as
//!
//! ```json
//! { "east_coast": ["8443970", "8518750"], "gulf": [8771450] }
//! ```

use crate::catalog::error::CatalogError;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Station ids appear as strings or as bare numbers in catalog files.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStationId {
    Text(String),
    Number(u64),
}

impl From<RawStationId> for String {
    fn from(raw: RawStationId) -> Self {
        match raw {
            RawStationId::Text(id) => id,
            RawStationId::Number(id) => id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionCatalog {
    regions: BTreeMap<String, Vec<String>>,
}

impl RegionCatalog {
    pub fn new(regions: BTreeMap<String, Vec<String>>) -> Self {
        Self { regions }
    }

    /// Reads and parses the catalog at `path`.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CatalogError::Read(path.to_path_buf(), e))?;
        let catalog = Self::from_slice(&bytes)
            .map_err(|e| CatalogError::Parse(path.to_path_buf(), e))?;
        debug!(
            "Loaded {} regions from {}",
            catalog.regions.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, Vec<RawStationId>> = serde_json::from_slice(bytes)?;
        let regions = raw
            .into_iter()
            .map(|(region, ids)| (region, ids.into_iter().map(String::from).collect()))
            .collect();
        Ok(Self { regions })
    }

    /// Station ids of `region` in catalog order.
    pub fn stations(&self, region: &str) -> Option<&[String]> {
        self.regions.get(region).map(Vec::as_slice)
    }

    pub fn contains(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// Region names in alphabetical order.
    pub fn region_names(&self) -> Vec<String> {
        self.regions.keys().cloned().collect()
    }
}
