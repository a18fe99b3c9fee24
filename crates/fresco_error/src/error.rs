//! Top-level error wrapper types.

use crate::{ConfigError, FederationError, PhotoError, StorageError, ValidationError};

/// This is the foundation error enum. Each fresco crate contributes the
/// variants for its own failure domain.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoError, ConfigError};
///
/// let config_err = ConfigError::new("missing base_url");
/// let err: FrescoError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FrescoErrorKind {
    /// Upload validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Photo lifecycle error
    #[from(PhotoError)]
    Photo(PhotoError),
    /// Federation ingestion error
    #[from(FederationError)]
    Federation(FederationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Fresco error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoResult, ValidationError, ValidationErrorKind};
///
/// fn might_fail() -> FrescoResult<()> {
///     Err(ValidationError::new(ValidationErrorKind::Empty))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fresco Error: {}", _0)]
pub struct FrescoError(Box<FrescoErrorKind>);

impl FrescoError {
    /// Create a new error from a kind.
    pub fn new(kind: FrescoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FrescoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FrescoErrorKind
impl<T> From<T> for FrescoError
where
    T: Into<FrescoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fresco operations.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoResult, StorageError, StorageErrorKind};
///
/// fn fetch_blob() -> FrescoResult<Vec<u8>> {
///     Err(StorageError::new(StorageErrorKind::NotFound("key".to_string())))?
/// }
/// ```
pub type FrescoResult<T> = std::result::Result<T, FrescoError>;
