use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// One file or folder found under a scanned root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    /// Entry name inside the archive, `/`-separated
    pub name: String,
    /// Location on disk
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Recursive directory scanner producing archive entry names
///
/// Names are relative to the scanned root, optionally prefixed with the
/// root folder's own name.
pub struct EntryScanner {
    include_base_directory: bool,
}

impl EntryScanner {
    pub fn new() -> Self {
        Self {
            include_base_directory: false,
        }
    }

    pub fn with_base_directory(include_base_directory: bool) -> Self {
        Self {
            include_base_directory,
        }
    }

    /// Scan `root_path` recursively
    ///
    /// # Returns
    /// * Entries sorted by name, so archives come out in a stable order
    pub fn scan(&self, root_path: &Path) -> Result<Vec<ScannedEntry>, io::Error> {
        let prefix = if self.include_base_directory {
            base_name(root_path)
        } else {
            None
        };

        let mut entries = Vec::new();
        if let Some(prefix) = &prefix {
            entries.push(ScannedEntry {
                name: prefix.clone(),
                path: root_path.to_path_buf(),
                is_dir: true,
            });
        }

        for entry in WalkDir::new(root_path).follow_links(false) {
            let entry = entry?;
            let path = entry.path();

            let relative = path.strip_prefix(root_path)
                .map_err(|e| io::Error::new(
                    io::ErrorKind::Other,
                    format!("Failed to calculate relative path: {}", e)
                ))?;
            if relative.as_os_str().is_empty() {
                continue;
            }

            let relative_name = entry_name(relative);
            let name = match &prefix {
                Some(prefix) => format!("{}/{}", prefix, relative_name),
                None => relative_name,
            };

            // Classify through the link so file symlinks are archived by content
            if path.is_dir() {
                entries.push(ScannedEntry { name, path: path.to_path_buf(), is_dir: true });
            } else if path.is_file() {
                entries.push(ScannedEntry { name, path: path.to_path_buf(), is_dir: false });
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

impl Default for EntryScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Join path components with `/` regardless of host separator
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn base_name(root_path: &Path) -> Option<String> {
    let resolved = std::path::absolute(root_path).ok()?;
    resolved
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .last()
}
