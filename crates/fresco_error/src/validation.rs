//! Upload validation error types.

/// Kinds of upload validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Declared content type is not on the whitelist
    #[display("Content type not accepted: {}", _0)]
    UnsupportedType(String),
    /// Byte sample does not carry the signature of the declared type
    #[display("Content does not match declared type {}", _0)]
    SignatureMismatch(String),
    /// Upload contained no bytes
    #[display("Empty upload")]
    Empty,
}

/// Validation error with location tracking.
///
/// Raised before any byte reaches durable storage; a validation failure
/// guarantees nothing was persisted.
///
/// # Examples
///
/// ```
/// use fresco_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::UnsupportedType(
///     "application/xml".to_string(),
/// ));
/// assert!(format!("{}", err).contains("not accepted"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
