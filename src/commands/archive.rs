//! Public entry points.
//!
//! Stateless free functions over a default [`Archiver`]. The typed-handle
//! forms accept `None` as a null handle and reject it before touching disk.

use std::path::Path;
use crate::core::compression::Archiver;
use crate::models::{ArchiverError, CompressOutcome, DirectoryRef, FileRef};

/// Compress a folder (including its subfolders) or a single file into `destination`
///
/// Folders become zip archives. A single file is written as a gzip stream
/// under the given `.zip` name, unless it is hidden or already a `.zip`, in
/// which case nothing is written and `Skipped` is returned.
pub fn compress(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    replace_existing: bool,
) -> Result<CompressOutcome, ArchiverError> {
    Archiver::default().compress(source.as_ref(), destination.as_ref(), replace_existing)
}

/// Compress a folder, including all of its files and subfolders
pub fn compress_directory(
    source: Option<&DirectoryRef>,
    destination: Option<&FileRef>,
    replace_existing: bool,
) -> Result<CompressOutcome, ArchiverError> {
    let source = source.ok_or_else(|| ArchiverError::invalid("source directory is null"))?;
    let destination = destination.ok_or_else(|| ArchiverError::invalid("destination file is null"))?;

    compress(source.full_name(), destination.full_name(), replace_existing)
}

/// Compress a single file
pub fn compress_file(
    source: Option<&FileRef>,
    destination: Option<&FileRef>,
    replace_existing: bool,
) -> Result<CompressOutcome, ArchiverError> {
    let source = source.ok_or_else(|| ArchiverError::invalid("source file is null"))?;
    let destination = destination.ok_or_else(|| ArchiverError::invalid("destination file is null"))?;

    compress(source.full_name(), destination.full_name(), replace_existing)
}

/// Extract the zip archive `source` into the folder `destination`
///
/// The folder is created, parents included, when it does not exist yet.
pub fn decompress(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<usize, ArchiverError> {
    Archiver::default().decompress(source.as_ref(), destination.as_ref())
}

/// Extract a zip archive given as typed handles
pub fn decompress_file(
    source: Option<&FileRef>,
    destination: Option<&DirectoryRef>,
) -> Result<usize, ArchiverError> {
    let source = source.ok_or_else(|| ArchiverError::invalid("source file is null"))?;
    let destination = destination.ok_or_else(|| ArchiverError::invalid("destination directory is null"))?;

    decompress(source.full_name(), destination.full_name())
}
