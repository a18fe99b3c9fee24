//! Photo lifecycle error types.

/// Kinds of photo lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PhotoErrorKind {
    /// No record exists for the given photo id
    #[display("Photo not found: {}", _0)]
    NotFound(String),
    /// Album does not exist or belongs to a different person
    #[display("Album {} is not owned by the uploading person", _0)]
    AlbumOwnerMismatch(String),
    /// Remote fetch completion on a record that is not pending
    #[display("Photo {} is not pending a remote fetch", _0)]
    NotPendingRemote(String),
}

/// Photo error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Photo Error: {} at line {} in {}", kind, line, file)]
pub struct PhotoError {
    /// The kind of error that occurred
    pub kind: PhotoErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PhotoError {
    /// Create a new photo error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PhotoErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
