//! Attachment storage for Fresco.
//!
//! This crate owns the path an upload takes from raw bytes to a stored,
//! derivative-rendered attachment: whitelist validation, random storage keys,
//! a pluggable blob backend, and the renderer boundary for derivative sizes.
//!
//! # Features
//!
//! - **Whitelist validation**: declared content type AND byte signature must
//!   agree before anything touches durable storage
//! - **Random storage keys**: paths and URLs are built from a fresh token,
//!   never from the uploaded filename
//! - **Pluggable backends**: trait-based abstraction supports filesystem, S3, etc.
//! - **All-or-nothing store**: a failure while rendering or persisting
//!   derivatives unwinds every blob written so far
//!
//! # Example
//!
//! ```no_run
//! use fresco_storage::{AttachmentStore, FileSystemBlobStore, StorageConfig};
//! use std::sync::Arc;
//!
//! # async fn example(renderer: Arc<dyn fresco_storage::DerivativeRenderer>) -> fresco_error::FrescoResult<()> {
//! let config = StorageConfig::load()?;
//! let blobs = Arc::new(FileSystemBlobStore::new("/var/fresco/media")?);
//! let store = AttachmentStore::new(blobs, renderer, config);
//!
//! let png = std::fs::read("button.png").unwrap();
//! let stored = store.store(&png, "image/png", "button.png").await?;
//! let original = store.read(stored.key()).await?;
//! assert_eq!(original, png);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attachment;
mod blob;
mod config;
mod filesystem;
mod renderer;
mod validator;

pub use attachment::{AttachmentStore, StoredAttachment};
pub use blob::BlobStore;
pub use config::{StorageConfig, VariantConfig};
pub use filesystem::FileSystemBlobStore;
pub use renderer::{DerivativeRenderer, VariantSpec};
pub use validator::WhitelistValidator;

pub use fresco_error::{StorageError, StorageErrorKind, ValidationError, ValidationErrorKind};
