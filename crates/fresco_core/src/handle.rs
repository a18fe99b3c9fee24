//! Federation identity types.

use crate::PersonId;
use serde::{Deserialize, Serialize};

/// Globally resolvable identity string for a person, used across pods.
///
/// Handles look like `alice@pod.example`. The local pod treats the handle as
/// opaque text; resolution to a trusted identity is the job of the receiving
/// pod's federation layer.
///
/// # Examples
///
/// ```
/// use fresco_core::FederationHandle;
///
/// let handle = FederationHandle::new("alice@pod.example");
/// assert_eq!(handle.as_str(), "alice@pod.example");
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
pub struct FederationHandle(String);

impl FederationHandle {
    /// Wrap a handle string.
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The handle as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FederationHandle {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Reference to an owning person: local id plus federation handle.
///
/// Constructed only by trusted paths (the upload entry point, or the
/// receiving pod's sender resolution). External field maps can never write
/// one into an existing record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonRef {
    /// Local opaque id for the person
    pub id: PersonId,
    /// Globally resolvable federation handle
    pub handle: FederationHandle,
}

impl PersonRef {
    /// Create a reference from its parts.
    pub fn new(id: PersonId, handle: FederationHandle) -> Self {
        Self { id, handle }
    }
}
