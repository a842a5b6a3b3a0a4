pub mod error;
pub mod config;
pub mod outcome;
pub mod handle;

// Re-export commonly used types
pub use error::{ArchiverError, ErrorKind};
pub use config::ArchiveOptions;
pub use outcome::{CompressOutcome, SkipReason};
pub use handle::{DirectoryRef, FileRef};
