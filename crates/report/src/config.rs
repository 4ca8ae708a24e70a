//! Reporter configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ReportError, ReportResult};
use crate::markup::PageOptions;

/// Default document location, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "viewer.html";

/// Reporter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Where the document is written
    pub output: PathBuf,

    /// Document title
    pub title: String,

    /// Image shown on placeholder tiles
    pub missing_image: String,

    /// Optional JSON run summary
    pub summary: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: "Image Tests Report".to_string(),
            missing_image: "missing.png".to_string(),
            summary: None,
        }
    }
}

impl ReportConfig {
    /// Load configuration from file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> ReportResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> ReportResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ReportResult<()> {
        if self.output.as_os_str().is_empty() {
            return Err(ReportError::InvalidConfig("output path is empty".to_string()));
        }
        if self.summary.as_deref() == Some(self.output.as_path()) {
            return Err(ReportError::InvalidConfig(
                "summary and output paths must differ".to_string(),
            ));
        }
        Ok(())
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            title: self.title.clone(),
            missing_image: self.missing_image.clone(),
        }
    }
}
