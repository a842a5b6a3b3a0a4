use std::path::{Path, PathBuf};

/// Typed reference to a file location (which need not exist yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    path: PathBuf,
}

/// Typed reference to a directory location (which need not exist yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRef {
    path: PathBuf,
}

macro_rules! path_ref {
    ($name:ident) => {
        impl $name {
            pub fn new(path: impl Into<PathBuf>) -> Self {
                Self { path: path.into() }
            }

            pub fn path(&self) -> &Path {
                &self.path
            }

            /// Fully-qualified form of the path, resolved against the current directory
            ///
            /// Falls back to the path as given when the current directory is unavailable.
            pub fn full_name(&self) -> PathBuf {
                std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone())
            }
        }

        impl From<PathBuf> for $name {
            fn from(path: PathBuf) -> Self {
                Self::new(path)
            }
        }

        impl From<&Path> for $name {
            fn from(path: &Path) -> Self {
                Self::new(path)
            }
        }

        impl AsRef<Path> for $name {
            fn as_ref(&self) -> &Path {
                &self.path
            }
        }
    };
}

path_ref!(FileRef);
path_ref!(DirectoryRef);
