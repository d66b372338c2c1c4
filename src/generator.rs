//! Batch generation of the application icon set.
//!
//! A [`GeneratorConfig`] names an output directory and the icons to write
//! into it. The default config is the standard pair of web app icons:
//!
//! ```json
//! {
//!   "outputDir": "client/public",
//!   "targets": [
//!     { "size": 192, "fileName": "icon-192.png" },
//!     { "size": 512, "fileName": "icon-512.png" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::renderer::IconSpec;

/// Directory the icons are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "client/public";

/// Icon sizes and file names produced by default.
pub const STANDARD_TARGETS: [(u32, &str); 2] = [(192, "icon-192.png"), (512, "icon-512.png")];

// ============================================================================
// Config
// ============================================================================

/// One icon in a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconTarget {
    /// Side length in pixels.
    pub size: u32,

    /// File name inside the output directory.
    pub file_name: String,
}

impl IconTarget {
    pub fn new(size: u32, file_name: impl Into<String>) -> Self {
        Self {
            size,
            file_name: file_name.into(),
        }
    }
}

/// Where to write icons and which ones to write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Directory that receives the icons. Created if missing.
    pub output_dir: PathBuf,

    /// Icons to render, in order.
    #[serde(default)]
    pub targets: Vec<IconTarget>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::standard(DEFAULT_OUTPUT_DIR)
    }
}

impl GeneratorConfig {
    /// Creates a config with the standard targets in `output_dir`.
    pub fn standard(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            targets: STANDARD_TARGETS
                .iter()
                .map(|&(size, name)| IconTarget::new(size, name))
                .collect(),
        }
    }

    /// Resolves each target to a full [`IconSpec`].
    ///
    /// Fails on the first target with a zero size.
    pub fn specs(&self) -> Result<Vec<IconSpec>> {
        self.targets
            .iter()
            .map(|t| IconSpec::new(t.size, self.output_dir.join(&t.file_name)))
            .collect()
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Creates the output directory and renders every target into it.
///
/// Returns the icons written, in target order. Stops at the first failure;
/// icons written before it are left in place.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<IconSpec>> {
    let specs = config.specs()?;

    log::debug!("ensuring output directory {}", config.output_dir.display());
    fs::create_dir_all(&config.output_dir).map_err(|source| Error::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    for spec in &specs {
        spec.render()?;
    }

    Ok(specs)
}
