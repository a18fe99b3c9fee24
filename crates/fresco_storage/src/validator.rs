//! Content-type whitelist validation.

use fresco_core::ContentType;
use fresco_error::{ValidationError, ValidationErrorKind};

/// Validates a candidate upload against the content-type whitelist.
///
/// Validation is a required precondition of every store operation, invoked
/// before any byte is written to durable storage, and it is side-effect
/// free. The declared type alone is never trusted: the byte sample must
/// carry the matching magic signature, so a spoofed extension or header is
/// rejected even when the declared type is acceptable.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitelistValidator;

impl WhitelistValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate a declared content type against a byte sample.
    ///
    /// # Errors
    ///
    /// - `UnsupportedType` when the declared type is off the whitelist
    /// - `SignatureMismatch` when the bytes do not match the declared type
    /// - `Empty` when no bytes were supplied
    pub fn validate(
        &self,
        declared: &str,
        bytes: &[u8],
    ) -> Result<ContentType, ValidationError> {
        if bytes.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::Empty));
        }

        let content_type = ContentType::from_mime(declared).ok_or_else(|| {
            tracing::debug!(declared, "Rejected upload: content type not whitelisted");
            ValidationError::new(ValidationErrorKind::UnsupportedType(declared.to_string()))
        })?;

        if !content_type.matches_signature(bytes) {
            tracing::debug!(
                declared,
                "Rejected upload: byte signature does not match declared type"
            );
            return Err(ValidationError::new(ValidationErrorKind::SignatureMismatch(
                declared.to_string(),
            )));
        }

        Ok(content_type)
    }
}
