//! Fresco - federated photo pod core
//!
//! Fresco manages user-uploaded photo attachments inside a federated
//! social-network pod: validated storage of the original bytes, named
//! derivative renditions, ownership fields guarded against external field
//! maps, profile back-reference cleanup on destroy, and the XML wire format
//! photos travel between pods in.
//!
//! # Features
//!
//! - **Whitelist validation**: declared type and byte signature must agree
//!   before storage
//! - **Random storage keys**: URLs never derive from uploaded filenames
//! - **Mass-assignment protection**: identity fields are recognized by
//!   semantic role and dropped from external updates
//! - **Destroy cascade**: blobs and stale profile links go before destroy
//!   returns
//! - **Fail-closed federation**: inbound documents are rejected whole on any
//!   missing or malformed field, and ingestion is idempotent per sender and
//!   remote id
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fresco::{
//!     AttachmentStore, FileSystemBlobStore, PhotoManager, StorageConfig,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     fresco::init_observability()?;
//!
//!     let blobs = Arc::new(FileSystemBlobStore::new("/var/fresco/media")?);
//!     let store = Arc::new(AttachmentStore::new(blobs, renderer, StorageConfig::load()?));
//!     let manager = PhotoManager::new(store, albums, profiles);
//!
//!     let png = std::fs::read("button.png")?;
//!     let photo = manager
//!         .create_from_upload(owner, album, None, &png, "image/png", "button.png")
//!         .await?;
//!     println!("stored as {}", photo.id());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Fresco is organized as a workspace with focused crates:
//!
//! - `fresco_core` - Ids, handles, content types, variants
//! - `fresco_error` - Error types
//! - `fresco_storage` - Whitelist validation and attachment storage
//! - `fresco_photos` - Photo records, lifecycle, ownership protection
//! - `fresco_federation` - XML wire format and inbound ingestion
//!
//! This crate (`fresco`) re-exports everything for convenience.

// Re-export member crates
pub use fresco_core::*;
pub use fresco_error::*;
pub use fresco_federation::*;
pub use fresco_photos::*;
pub use fresco_storage::*;

mod observability;

pub use observability::{
    ObservabilityConfig, init_observability, init_observability_with_config,
};
