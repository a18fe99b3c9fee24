//! Opaque identifiers for photos, people, and albums.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a photo record.
///
/// Assigned once at creation and never reassigned. A pod receiving a remote
/// photo mints a fresh local id; the origin id is kept only as a dedup key.
///
/// # Examples
///
/// ```
/// use fresco_core::PhotoId;
///
/// let a = PhotoId::generate();
/// let b = PhotoId::generate();
/// assert_ne!(a, b);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
pub struct PhotoId(Uuid);

impl PhotoId {
    /// Mint a new random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying uuid.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::str::FromStr for PhotoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a person.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Mint a new random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying uuid.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

/// Unique identifier for an album.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
pub struct AlbumId(Uuid);

impl AlbumId {
    /// Mint a new random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying uuid.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::str::FromStr for AlbumId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
