//! Federation ingestion error types.

/// Kinds of federation errors.
///
/// All inbound document content is untrusted; any missing or malformed
/// required field rejects the whole message rather than constructing a
/// partial record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FederationErrorKind {
    /// Document is not well-formed XML or not a photo message
    #[display("Malformed federation message: {}", _0)]
    MalformedMessage(String),
    /// A required field is absent or empty
    #[display("Missing required field: {}", _0)]
    MissingField(String),
    /// Sender handle could not be resolved by the receiving pod
    #[display("Unknown sender: {}", _0)]
    UnknownSender(String),
    /// Timestamp field is not valid ISO-8601
    #[display("Invalid timestamp: {}", _0)]
    InvalidTimestamp(String),
}

/// Federation error with location tracking.
///
/// # Examples
///
/// ```
/// use fresco_error::{FederationError, FederationErrorKind};
///
/// let err = FederationError::new(FederationErrorKind::MissingField("url".to_string()));
/// assert!(format!("{}", err).contains("url"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Federation Error: {} at line {} in {}", kind, line, file)]
pub struct FederationError {
    /// The kind of error that occurred
    pub kind: FederationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FederationError {
    /// Create a new federation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FederationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
