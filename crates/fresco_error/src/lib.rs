//! Error types for the Fresco photo pod core.
//!
//! This crate provides the foundation error types used throughout the Fresco ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fresco_error::{FrescoResult, StorageError, StorageErrorKind};
//!
//! fn read_blob() -> FrescoResult<Vec<u8>> {
//!     Err(StorageError::new(StorageErrorKind::NotFound("abc123".to_string())))?
//! }
//!
//! match read_blob() {
//!     Ok(data) => println!("Got {} bytes", data.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod federation;
mod photo;
mod storage;
mod validation;

pub use config::ConfigError;
pub use error::{FrescoError, FrescoErrorKind, FrescoResult};
pub use federation::{FederationError, FederationErrorKind};
pub use photo::{PhotoError, PhotoErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
