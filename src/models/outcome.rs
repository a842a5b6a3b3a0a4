use serde::Serialize;

/// Why a single-file compression produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// The source file is hidden
    Hidden,
    /// The source file already carries the archive suffix
    AlreadyArchive,
}

/// What a successful compression call did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum CompressOutcome {
    /// A folder was written as a zip archive
    Archived { entries: usize },
    /// A single file was written as a gzip stream
    Gzipped { bytes_read: u64 },
    /// Nothing was written; not an error
    Skipped { reason: SkipReason },
}

impl CompressOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, CompressOutcome::Skipped { .. })
    }
}
