//! Random storage keys.

use crate::Variant;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, non-guessable token used to build storage paths and URLs.
///
/// Generated fresh at store time from a v4 uuid, so a key is never derived
/// from the uploaded filename or the record id. Derivative blobs live under
/// keys built from the original's key plus the variant name.
///
/// # Examples
///
/// ```
/// use fresco_core::{StorageKey, Variant};
///
/// let key = StorageKey::generate();
/// assert_eq!(key.as_str().len(), 32);
/// assert_eq!(
///     key.variant_key(Variant::ThumbMedium),
///     format!("{}_thumb_medium", key.as_str()),
/// );
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct StorageKey(String);

impl StorageKey {
    /// Generate a fresh random key (32 lowercase hex characters).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Reconstruct a key from its string form.
    ///
    /// Accepts only lowercase hex of the generated length, which keeps keys
    /// safe to use as single path components.
    pub fn parse(s: &str) -> Option<Self> {
        let valid = s.len() == 32 && s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
        valid.then(|| Self(s.to_string()))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Storage key for one variant of this photo.
    ///
    /// The original keeps the bare key; rendered variants append their name.
    pub fn variant_key(&self, variant: Variant) -> String {
        match variant {
            Variant::Full => self.0.clone(),
            other => format!("{}_{}", self.0, other.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_unique_hex() {
        let a = StorageKey::generate();
        let b = StorageKey::generate();
        assert_ne!(a, b);
        assert!(StorageKey::parse(a.as_str()).is_some());
    }

    #[test]
    fn parse_rejects_path_traversal() {
        assert!(StorageKey::parse("../../../etc/passwd").is_none());
        assert!(StorageKey::parse("").is_none());
        assert!(StorageKey::parse("ABCDEF0123456789ABCDEF0123456789").is_none());
    }

    #[test]
    fn full_variant_keeps_bare_key() {
        let key = StorageKey::generate();
        assert_eq!(key.variant_key(Variant::Full), key.as_str());
    }
}
