//! Catalog loading - JSON descriptor files produced by the nib scanner

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::CodegenError;
use crate::ir::ResourceCatalog;

/// Parse a catalog from JSON text.
pub fn parse_catalog(json: &str) -> Result<ResourceCatalog, CodegenError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<ResourceCatalog, CodegenError> {
    let json = fs::read_to_string(path).map_err(|source| CodegenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&json)?;
    debug!("catalog: loaded {} nibs from {:?}", catalog.nibs.len(), path);
    Ok(catalog)
}
