use std::io;
use thiserror::Error;

/// Error types raised by compression and extraction
#[derive(Error, Debug)]
pub enum ArchiverError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Coarse classification callers can match on without inspecting messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    IoFailure,
}

impl ArchiverError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArchiverError::InvalidArgument(_) | ArchiverError::InvalidConfig(_) => {
                ErrorKind::InvalidArgument
            }
            ArchiverError::NotFound(_) => ErrorKind::NotFound,
            ArchiverError::Io(_) | ArchiverError::Archive(_) => ErrorKind::IoFailure,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ArchiverError::InvalidArgument(msg.into())
    }
}

impl From<zip::result::ZipError> for ArchiverError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => ArchiverError::Io(e),
            other => ArchiverError::Archive(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ArchiverError::invalid("x").kind(), ErrorKind::InvalidArgument);
        assert_eq!(ArchiverError::NotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(ArchiverError::Archive("x".into()).kind(), ErrorKind::IoFailure);

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(ArchiverError::from(io_err).kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn test_zip_io_error_keeps_io_kind() {
        let zip_err = zip::result::ZipError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        match ArchiverError::from(zip_err) {
            ArchiverError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let err = ArchiverError::invalid("source path is empty");
        assert_eq!(err.to_string(), "Invalid argument: source path is empty");
    }
}
