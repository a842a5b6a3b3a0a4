// Archive compression modules
pub mod common;
pub mod zip_handler;
pub mod gzip_handler;

use std::fs::{self, File};
use std::path::Path;
use tracing::{debug, info, warn};
use crate::core::file_ops::attributes::{has_extension, is_hidden, PathKind};
use crate::models::{ArchiveOptions, ArchiverError, CompressOutcome, SkipReason};
use crate::ARCHIVE_EXTENSION;
use common::ArchiveHandler;
use gzip_handler::GzipHandler;
use zip_handler::ZipHandler;

/// Gateway that validates arguments and dispatches to the codecs
///
/// Workflow:
/// 1. Validate paths and the destination suffix
/// 2. Inspect the source on disk (file vs. directory)
/// 3. Zip a directory, gzip a single file, or extract a zip archive
///
/// Holds only immutable options; every call is independent.
pub struct Archiver {
    zip: ZipHandler,
    gzip: GzipHandler,
}

impl Archiver {
    pub fn new(options: ArchiveOptions) -> Self {
        Self {
            zip: ZipHandler::with_options(&options),
            gzip: GzipHandler::new(options.gzip_level),
        }
    }

    /// Compress a folder (including its subfolders) or a single file
    ///
    /// # Arguments
    /// * `source` - Folder or file to compress
    /// * `destination` - Output path, must end in `.zip`
    /// * `replace_existing` - Delete an existing file at `destination` first
    ///
    /// # Returns
    /// * `Archived` for a folder, `Gzipped` for a file, or `Skipped` when the
    ///   file is hidden or already carries the archive suffix
    pub fn compress(
        &self,
        source: &Path,
        destination: &Path,
        replace_existing: bool,
    ) -> Result<CompressOutcome, ArchiverError> {
        if source.as_os_str().is_empty() {
            return Err(ArchiverError::invalid("source path is empty"));
        }
        if destination.as_os_str().is_empty() {
            return Err(ArchiverError::invalid("destination path is empty"));
        }
        if !self.zip.supports(destination) {
            return Err(ArchiverError::invalid(format!(
                "destination {} must end in {}",
                destination.display(),
                ARCHIVE_EXTENSION
            )));
        }

        if replace_existing && PathKind::probe(destination)? == PathKind::File {
            debug!(destination = %destination.display(), "removing existing archive");
            fs::remove_file(destination)?;
        }

        // Source existence is not checked up front; a missing source fails here.
        let metadata = fs::metadata(source)?;

        if metadata.is_dir() {
            debug!(source = %source.display(), "compressing directory into zip");
            let entries = self.zip.create(source, destination)?;
            info!(
                source = %source.display(),
                destination = %destination.display(),
                entries,
                "created zip archive"
            );
            return Ok(CompressOutcome::Archived { entries });
        }

        let mut file = File::open(source)?;

        let skip = if is_hidden(source, &metadata) {
            Some(SkipReason::Hidden)
        } else if has_extension(source, ARCHIVE_EXTENSION) {
            Some(SkipReason::AlreadyArchive)
        } else {
            None
        };

        if let Some(reason) = skip {
            warn!(source = %source.display(), ?reason, "skipping single-file compression");
            return Ok(CompressOutcome::Skipped { reason });
        }

        debug!(source = %source.display(), "compressing file into gzip stream");
        let bytes_read = self.gzip.compress(&mut file, destination)?;
        info!(
            source = %source.display(),
            destination = %destination.display(),
            bytes_read,
            "wrote gzip stream"
        );
        Ok(CompressOutcome::Gzipped { bytes_read })
    }

    /// Extract a zip archive into a directory, creating the directory if needed
    ///
    /// # Arguments
    /// * `source` - Existing zip archive
    /// * `destination` - Target directory
    ///
    /// # Returns
    /// * Number of archive entries extracted
    pub fn decompress(&self, source: &Path, destination: &Path) -> Result<usize, ArchiverError> {
        if source.as_os_str().is_empty() {
            return Err(ArchiverError::invalid("source path is empty"));
        }
        if destination.as_os_str().is_empty() {
            return Err(ArchiverError::invalid("destination path is empty"));
        }

        let source_kind = PathKind::probe(source)?;
        if source_kind.is_dir() {
            return Err(ArchiverError::invalid(format!(
                "source {} is a directory, expected a zip file",
                source.display()
            )));
        }

        // A missing destination is not yet a directory; it gets created below.
        let destination_kind = PathKind::probe(destination)?;
        if destination_kind == PathKind::File {
            return Err(ArchiverError::invalid(format!(
                "destination {} is not a directory",
                destination.display()
            )));
        }

        if !source_kind.exists() {
            return Err(ArchiverError::NotFound(format!(
                "source file {} does not exist",
                source.display()
            )));
        }

        if !destination_kind.exists() {
            debug!(destination = %destination.display(), "creating extraction directory");
            fs::create_dir_all(destination)?;
        }

        let entries = self.zip.extract(source, destination)?;
        info!(
            source = %source.display(),
            destination = %destination.display(),
            entries,
            "extracted zip archive"
        );
        Ok(entries)
    }
}

impl Default for Archiver {
    fn default() -> Self {
        Self::new(ArchiveOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use flate2::read::GzDecoder;
    use crate::models::ErrorKind;
    use tempfile::TempDir;

    fn create_project(dir: &Path) {
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("a.txt"), b"alpha").unwrap();
        fs::write(dir.join("sub/b.txt"), b"bravo").unwrap();
    }

    fn gunzip(path: &Path) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(File::open(path).unwrap()).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_directory_round_trip() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        create_project(&project);

        let archiver = Archiver::default();
        let zip_path = temp.path().join("project.zip");
        let outcome = archiver.compress(&project, &zip_path, true).unwrap();
        assert_eq!(outcome, CompressOutcome::Archived { entries: 3 });

        let out = temp.path().join("out");
        fs::create_dir(&out).unwrap();
        archiver.decompress(&zip_path, &out).unwrap();

        assert_eq!(fs::read(out.join("a.txt")).unwrap(), b"alpha");
        assert_eq!(fs::read(out.join("sub/b.txt")).unwrap(), b"bravo");
    }

    #[test]
    fn test_single_file_is_gzipped() {
        let temp = TempDir::new().unwrap();
        let notes = temp.path().join("notes.txt");
        fs::write(&notes, b"ten bytes!").unwrap();

        let zip_path = temp.path().join("notes.zip");
        let outcome = Archiver::default().compress(&notes, &zip_path, true).unwrap();

        assert_eq!(outcome, CompressOutcome::Gzipped { bytes_read: 10 });
        assert_eq!(gunzip(&zip_path), b"ten bytes!");
    }

    #[test]
    fn test_destination_suffix_required() {
        let temp = TempDir::new().unwrap();
        let archiver = Archiver::default();

        for dest in ["out.gz", "out", "out.ZIP", "out.zip.bak"] {
            let err = archiver
                .compress(temp.path(), &temp.path().join(dest), true)
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "destination {}", dest);
        }
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_paths_rejected_in_order() {
        let archiver = Archiver::default();

        let err = archiver.compress(Path::new(""), Path::new(""), true).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: source path is empty");

        let err = archiver.compress(Path::new("x"), Path::new(""), true).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: destination path is empty");

        let err = archiver.decompress(Path::new(""), Path::new("out")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = archiver.decompress(Path::new("a.zip"), Path::new("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_missing_source_surfaces_as_io_not_found() {
        let temp = TempDir::new().unwrap();
        let result = Archiver::default().compress(
            &temp.path().join("missing"),
            &temp.path().join("out.zip"),
            true,
        );
        match result {
            Err(ArchiverError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("Expected Io NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_replace_deletes_destination_before_source_lookup() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("out.zip");
        fs::write(&zip_path, b"stale content").unwrap();

        let err = Archiver::default()
            .compress(&temp.path().join("missing"), &zip_path, true)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert!(!zip_path.exists());
    }

    #[test]
    fn test_replace_existing_archive() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        create_project(&project);
        let zip_path = temp.path().join("project.zip");
        fs::write(&zip_path, b"stale content").unwrap();

        let archiver = Archiver::default();
        archiver.compress(&project, &zip_path, true).unwrap();

        let archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        assert_eq!(archive.len(), 3);
    }

    #[test]
    fn test_keep_existing_archive_fails_for_directory() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        create_project(&project);
        let zip_path = temp.path().join("project.zip");
        fs::write(&zip_path, b"stale content").unwrap();

        let err = Archiver::default().compress(&project, &zip_path, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert_eq!(fs::read(&zip_path).unwrap(), b"stale content");
    }

    #[test]
    fn test_keep_existing_archive_overwrites_for_file() {
        let temp = TempDir::new().unwrap();
        let notes = temp.path().join("notes.txt");
        fs::write(&notes, b"fresh").unwrap();
        let zip_path = temp.path().join("notes.zip");
        fs::write(&zip_path, b"stale content").unwrap();

        Archiver::default().compress(&notes, &zip_path, false).unwrap();
        assert_eq!(gunzip(&zip_path), b"fresh");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_hidden_file_skipped() {
        let temp = TempDir::new().unwrap();
        let hidden = temp.path().join(".env");
        fs::write(&hidden, b"SECRET=1").unwrap();
        let zip_path = temp.path().join("env.zip");

        let outcome = Archiver::default().compress(&hidden, &zip_path, true).unwrap();
        assert_eq!(outcome, CompressOutcome::Skipped { reason: SkipReason::Hidden });
        assert!(!zip_path.exists());
    }

    #[test]
    fn test_zip_file_skipped() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("bundle.zip");
        fs::write(&existing, b"already zipped").unwrap();
        let zip_path = temp.path().join("again.zip");

        let outcome = Archiver::default().compress(&existing, &zip_path, true).unwrap();
        assert_eq!(outcome, CompressOutcome::Skipped { reason: SkipReason::AlreadyArchive });
        assert!(!zip_path.exists());
    }

    #[test]
    fn test_skip_still_removes_replaced_destination() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("bundle.zip");
        fs::write(&existing, b"already zipped").unwrap();
        let zip_path = temp.path().join("again.zip");
        fs::write(&zip_path, b"old").unwrap();

        let outcome = Archiver::default().compress(&existing, &zip_path, true).unwrap();
        assert!(outcome.is_skipped());
        assert!(!zip_path.exists());
    }

    #[test]
    fn test_decompress_source_directory_rejected() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out");

        let err = Archiver::default().decompress(temp.path(), &out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(!out.exists());
    }

    #[test]
    fn test_decompress_destination_file_rejected() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        create_project(&project);
        let zip_path = temp.path().join("project.zip");
        let archiver = Archiver::default();
        archiver.compress(&project, &zip_path, true).unwrap();

        let file_dest = temp.path().join("occupied");
        fs::write(&file_dest, b"x").unwrap();
        let err = archiver.decompress(&zip_path, &file_dest).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_decompress_missing_source() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out");

        let err = Archiver::default()
            .decompress(&temp.path().join("missing.zip"), &out)
            .unwrap_err();
        assert!(matches!(err, ArchiverError::NotFound(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_decompress_creates_destination() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        create_project(&project);
        let zip_path = temp.path().join("project.zip");
        let archiver = Archiver::default();
        archiver.compress(&project, &zip_path, true).unwrap();

        let out = temp.path().join("nested/new/out");
        let entries = archiver.decompress(&zip_path, &out).unwrap();
        assert_eq!(entries, 3);
        assert_eq!(fs::read(out.join("sub/b.txt")).unwrap(), b"bravo");
    }

    #[test]
    fn test_decompress_corrupt_archive() {
        let temp = TempDir::new().unwrap();
        let bogus = temp.path().join("bogus.zip");
        fs::write(&bogus, b"definitely not a zip").unwrap();

        let err = Archiver::default()
            .decompress(&bogus, &temp.path().join("out"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }
}
