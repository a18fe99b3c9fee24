//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write blob
    #[display("Failed to write blob: {}", _0)]
    FileWrite(String),
    /// Failed to read blob
    #[display("Failed to read blob: {}", _0)]
    FileRead(String),
    /// Blob not found under the given key
    #[display("Blob not found: {}", _0)]
    NotFound(String),
    /// Storage key is malformed or unsafe to use as a path component
    #[display("Invalid storage key: {}", _0)]
    InvalidKey(String),
    /// Storage backend did not respond within the configured deadline
    #[display("Storage unavailable: {}", _0)]
    Unavailable(String),
    /// Derivative renderer failed or timed out
    #[display("Derivative rendering failed for variant {}: {}", _0, _1)]
    RenderFailed(String, String),
    /// Stored content does not match its recorded hash
    #[display("Hash mismatch: expected {}, got {}", _0, _1)]
    HashMismatch(String, String),
}

impl StorageErrorKind {
    /// Whether a retry of the same operation may succeed.
    ///
    /// Timeouts and backend outages are transient; everything else is not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StorageErrorKind::Unavailable(_))
    }
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use fresco_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("deadbeef".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
