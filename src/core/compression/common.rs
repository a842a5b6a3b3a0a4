// Archive handler trait for container formats

use std::path::Path;
use crate::models::ArchiverError;

/// Trait for handling an archive container format
pub trait ArchiveHandler: Send + Sync {
    /// Extract archive into an existing directory preserving hierarchy
    ///
    /// Returns the number of entries extracted.
    fn extract(&self, archive_path: &Path, dest_dir: &Path) -> Result<usize, ArchiverError>;

    /// Create a new archive from a directory preserving hierarchy
    ///
    /// Fails if `output_path` already exists. Returns the number of entries written.
    fn create(&self, source_dir: &Path, output_path: &Path) -> Result<usize, ArchiverError>;

    /// Check if this handler supports the given file
    fn supports(&self, archive_path: &Path) -> bool;
}
