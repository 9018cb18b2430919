//! Generator configuration.
//!
//! Reads `resgen.toml`:
//!
//! ```toml
//! [swift]
//! file_name = "R.generated.swift"
//! hosting_bundle = "NSBundle(forClass: R.self)"
//! imports = ["Foundation", "UIKit"]
//! ```

use std::path::Path;

use resgen_codegen_lib::swift::SwiftOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Options for the `swift` target.
    #[serde(default)]
    pub swift: SwiftOptions,
}

impl CodegenConfig {
    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: CodegenConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
