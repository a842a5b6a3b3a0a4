use serde::{Deserialize, Serialize};
use crate::models::ArchiverError;

/// Compression and extraction options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArchiveOptions {
    /// Deflate level for zip entries (`None` uses the codec default)
    pub zip_compression_level: Option<i64>,
    /// Gzip level for single-file compression (0 - 9)
    pub gzip_level: u32,
    /// Prefix zip entry names with the source folder's own name
    pub include_base_directory: bool,
    /// Replace files that already exist under the extraction directory
    pub overwrite_files: bool,
}

impl ArchiveOptions {
    pub const DEFAULT_GZIP_LEVEL: u32 = 6;

    /// Parse options from a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ArchiverError> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| ArchiverError::InvalidConfig(format!("Failed to parse options: {}", e)))?;
        Ok(options.normalized())
    }

    pub fn with_gzip_level(mut self, level: u32) -> Self {
        self.gzip_level = level;
        self.normalized()
    }

    pub fn with_zip_compression_level(mut self, level: Option<i64>) -> Self {
        self.zip_compression_level = level;
        self.normalized()
    }

    pub fn with_base_directory(mut self, include: bool) -> Self {
        self.include_base_directory = include;
        self
    }

    pub fn with_overwrite_files(mut self, overwrite: bool) -> Self {
        self.overwrite_files = overwrite;
        self
    }

    fn normalized(mut self) -> Self {
        self.gzip_level = self.gzip_level.min(9);
        self.zip_compression_level = self.zip_compression_level.map(|level| level.clamp(0, 9));
        self
    }
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            zip_compression_level: None,
            gzip_level: Self::DEFAULT_GZIP_LEVEL,
            include_base_directory: false,
            overwrite_files: false,
        }
    }
}
