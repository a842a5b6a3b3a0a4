//! Compress files and folders into zip archives and extract them back.
//!
//! Folders are written as standard zip archives. A single file is written as
//! a raw gzip stream under the caller's `.zip`-suffixed name. Extraction
//! recreates an archive's folder structure under a target directory.
//!
//! ```no_run
//! use archiver::{compress, decompress, CompressOutcome};
//!
//! # fn main() -> Result<(), archiver::ArchiverError> {
//! let outcome = compress("project", "project.zip", true)?;
//! assert!(matches!(outcome, CompressOutcome::Archived { .. }));
//! decompress("project.zip", "restored")?;
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod models;
pub mod core;
pub mod commands;

/// Suffix every compression destination must carry
pub const ARCHIVE_EXTENSION: &str = ".zip";

pub use commands::archive::{compress, compress_directory, compress_file, decompress, decompress_file};
pub use crate::core::compression::Archiver;
pub use models::{
    ArchiveOptions, ArchiverError, CompressOutcome, DirectoryRef, ErrorKind, FileRef, SkipReason,
};
