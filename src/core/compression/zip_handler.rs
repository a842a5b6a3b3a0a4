use std::path::Path;
use std::fs::{self, File, OpenOptions};
use std::io;
use zip::{ZipArchive, ZipWriter, write::SimpleFileOptions, CompressionMethod};
use tracing::debug;
use crate::core::compression::common::ArchiveHandler;
use crate::core::file_ops::attributes::has_extension;
use crate::core::file_ops::scanner::EntryScanner;
use crate::models::{ArchiveOptions, ArchiverError};
use crate::ARCHIVE_EXTENSION;

/// ZIP archive handler
///
/// Handles extraction and creation of ZIP archives while preserving directory hierarchy.
pub struct ZipHandler {
    compression_level: Option<i64>,
    include_base_directory: bool,
    overwrite_files: bool,
}

impl ZipHandler {
    pub fn new() -> Self {
        Self::with_options(&ArchiveOptions::default())
    }

    pub fn with_options(options: &ArchiveOptions) -> Self {
        Self {
            compression_level: options.zip_compression_level,
            include_base_directory: options.include_base_directory,
            overwrite_files: options.overwrite_files,
        }
    }

    fn open_output(&self, output_path: &Path) -> io::Result<File> {
        let mut opts = OpenOptions::new();
        opts.write(true);
        if self.overwrite_files {
            opts.create(true).truncate(true);
        } else {
            opts.create_new(true);
        }
        opts.open(output_path)
    }
}

impl ArchiveHandler for ZipHandler {
    /// Extract ZIP archive to destination directory
    ///
    /// # Behavior
    /// - Preserves directory hierarchy
    /// - Creates parent directories as needed
    /// - Existing files fail the extraction unless `overwrite_files` is set
    /// - Entries that would land outside `dest_dir` abort the extraction
    /// - Sets file permissions on Unix systems
    fn extract(&self, archive_path: &Path, dest_dir: &Path) -> Result<usize, ArchiverError> {
        let file = File::open(archive_path)?;

        let mut archive = ZipArchive::new(file)
            .map_err(|e| ArchiverError::Archive(
                format!("Failed to read ZIP archive {}: {}", archive_path.display(), e)
            ))?;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)
                .map_err(|e| ArchiverError::Archive(
                    format!("Failed to read entry at index {}: {}", i, e)
                ))?;

            let entry_path = entry.enclosed_name()
                .ok_or_else(|| ArchiverError::Archive(
                    format!("Entry {} would extract outside the destination directory", entry.name())
                ))?;

            let output_path = dest_dir.join(&entry_path);

            if entry.is_dir() {
                fs::create_dir_all(&output_path)?;
                continue;
            }

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut output_file = self.open_output(&output_path)
                .map_err(|e| ArchiverError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to create output file {}: {}", output_path.display(), e),
                )))?;

            io::copy(&mut entry, &mut output_file)
                .map_err(|e| ArchiverError::Archive(
                    format!("Failed to extract {}: {}", entry_path.display(), e)
                ))?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = entry.unix_mode() {
                    fs::set_permissions(&output_path, fs::Permissions::from_mode(permission_bits(mode)))?;
                }
            }

            debug!(entry = %entry_path.display(), "extracted zip entry");
        }

        Ok(archive.len())
    }

    /// Create ZIP archive from source directory
    ///
    /// # Behavior
    /// - Every subfolder gets its own entry, so empty folders survive extraction
    /// - File contents stream straight from disk into the archive
    /// - Already-compressed formats (PNG, JPG, MP3…) are stored without re-compression
    fn create(&self, source_dir: &Path, output_path: &Path) -> Result<usize, ArchiverError> {
        let entries = EntryScanner::with_base_directory(self.include_base_directory)
            .scan(source_dir)?;

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(output_path)?;
        let mut zip = ZipWriter::new(file);

        let stored_opts = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .unix_permissions(0o755);
        let deflated_opts = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(self.compression_level)
            .unix_permissions(0o644);

        for entry in &entries {
            if entry.is_dir {
                zip.add_directory(entry.name.as_str(), stored_opts)
                    .map_err(|e| ArchiverError::Archive(
                        format!("Failed to add directory {} to archive: {}", entry.name, e)
                    ))?;
                continue;
            }

            let opts = if is_already_compressed(&entry.name) {
                stored_opts.unix_permissions(0o644)
            } else {
                deflated_opts
            };

            zip.start_file(entry.name.as_str(), opts)
                .map_err(|e| ArchiverError::Archive(
                    format!("Failed to start file {} in archive: {}", entry.name, e)
                ))?;

            let mut source = File::open(&entry.path)?;
            io::copy(&mut source, &mut zip)
                .map_err(|e| ArchiverError::Archive(
                    format!("Failed to write file {} to archive: {}", entry.name, e)
                ))?;
        }

        zip.finish()
            .map_err(|e| ArchiverError::Archive(
                format!("Failed to finalize ZIP archive: {}", e)
            ))?;

        Ok(entries.len())
    }

    /// Returns true for paths ending in the archive suffix
    fn supports(&self, archive_path: &Path) -> bool {
        has_extension(archive_path, ARCHIVE_EXTENSION)
    }
}

/// Keep only rwx bits; setuid, setgid, sticky and file-type bits are dropped
fn permission_bits(mode: u32) -> u32 {
    mode & 0o777
}

/// Returns true for formats that are already compressed and won't benefit from Deflate.
fn is_already_compressed(name: &str) -> bool {
    let ext = name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    matches!(
        ext.as_str(),
        "png" | "jpg" | "jpeg" | "gif" | "webp"
            | "mp3" | "mp4" | "ogg" | "aac" | "flac"
            | "zip" | "gz" | "7z" | "rar" | "xz" | "zst"
    )
}

impl Default for ZipHandler {
    fn default() -> Self {
        Self::new()
    }
}
