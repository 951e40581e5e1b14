use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// One entry of the asset catalog.
///
/// Text fields that are absent from the JSON default to empty strings; only
/// the `guid` key is required since it names the thumbnail on disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetRecord {
    pub guid: String,
    #[serde(default)]
    pub asset_name: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub last_edit: String,
    #[serde(default)]
    pub modified: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read the catalog at `path`. Records come back in file order.
pub fn load(path: &Path) -> Result<Vec<AssetRecord>, CatalogError> {
    let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse(&data).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&records);
    Ok(records)
}

fn parse(data: &str) -> serde_json::Result<Vec<AssetRecord>> {
    serde_json::from_str(data)
}

/// Report suspicious guids. The records are kept either way; a bad guid only
/// costs its row the thumbnail.
fn validate(records: &[AssetRecord]) {
    let mut seen = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        if record.guid.trim().is_empty() {
            log::warn!("Catalog record {index} has an empty guid");
        } else if !seen.insert(record.guid.as_str()) {
            log::warn!("Duplicate guid in catalog: {}", record.guid);
        }
    }
}

/// Where the thumbnail for `guid` lives under `asset_dir`.
pub fn thumbnail_path(asset_dir: &Path, guid: &str) -> PathBuf {
    asset_dir.join(format!("{guid}.jpg"))
}
