use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::path::Path;
use flate2::write::GzEncoder;
use flate2::Compression;
use crate::models::ArchiverError;

/// Single-file gzip compressor
///
/// Writes the raw gzip stream of one source file to the destination; no
/// container or entry name is recorded.
pub struct GzipHandler {
    level: Compression,
}

impl GzipHandler {
    pub fn new(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(9)),
        }
    }

    /// Stream `source` through a gzip encoder into `output_path`
    ///
    /// The destination is created or truncated. The encoder is finished
    /// before the file handle is released so the trailer is always written.
    ///
    /// # Returns
    /// * Number of uncompressed bytes read from `source`
    pub fn compress<R: Read>(&self, source: &mut R, output_path: &Path) -> Result<u64, ArchiverError> {
        let output = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(output_path)?;

        let mut encoder = GzEncoder::new(output, self.level);
        let bytes_read = io::copy(source, &mut encoder)
            .map_err(|e| ArchiverError::Archive(
                format!("Failed to compress into {}: {}", output_path.display(), e)
            ))?;

        let output: File = encoder.finish()
            .map_err(|e| ArchiverError::Archive(
                format!("Failed to finish gzip stream {}: {}", output_path.display(), e)
            ))?;
        output.sync_all()?;

        Ok(bytes_read)
    }
}

impl Default for GzipHandler {
    fn default() -> Self {
        Self::new(Compression::default().level())
    }
}
