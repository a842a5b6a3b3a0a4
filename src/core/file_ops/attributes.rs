use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

/// What currently sits at a path on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Missing,
    File,
    Directory,
}

impl PathKind {
    /// Look up a path's metadata, reporting a missing path as `Missing` instead of failing
    pub fn probe(path: &Path) -> io::Result<Self> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(PathKind::Directory),
            Ok(_) => Ok(PathKind::File),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PathKind::Missing),
            Err(e) => Err(e),
        }
    }

    pub fn is_dir(self) -> bool {
        self == PathKind::Directory
    }

    pub fn exists(self) -> bool {
        self != PathKind::Missing
    }
}

/// Check whether `path` ends with `extension` (e.g. ".zip")
///
/// The extension is everything from the last `.` of the final component,
/// compared case-sensitively, so a bare ".zip" name matches too.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rfind('.').map(|idx| &name[idx..]))
        .map(|ext| ext == extension)
        .unwrap_or(false)
}

/// Check whether a file is hidden on the host platform
#[cfg(windows)]
pub fn is_hidden(_path: &Path, metadata: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0
}

/// Check whether a file is hidden on the host platform
#[cfg(not(windows))]
pub fn is_hidden(path: &Path, _metadata: &Metadata) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
