//! Core data types for the Fresco photo pod core.
//!
//! This crate provides the identity and domain vocabulary shared across all
//! Fresco crates: opaque ids, federation handles, storage keys, the accepted
//! content types, and the derivative variant set.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod content_type;
mod handle;
mod id;
mod key;
mod variant;

pub use content_type::ContentType;
pub use handle::{FederationHandle, PersonRef};
pub use id::{AlbumId, PersonId, PhotoId};
pub use key::StorageKey;
pub use variant::Variant;
