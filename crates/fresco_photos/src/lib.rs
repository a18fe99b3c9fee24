//! Photo record lifecycle for Fresco.
//!
//! This crate owns the photo entity from creation through destruction: the
//! record itself, the mass-assignment guard that keeps ownership fields out
//! of reach of external field maps, per-record update serialization, and the
//! destroy cascade that cleans up stored bytes and stale profile links.
//!
//! # Example
//!
//! ```no_run
//! use fresco_photos::{PhotoManager, PhotoUpdate};
//! # async fn example(manager: PhotoManager, owner: fresco_core::PersonRef, album: fresco_core::AlbumId) -> fresco_error::FrescoResult<()> {
//! let png = std::fs::read("button.png").unwrap();
//! let photo = manager
//!     .create_from_upload(owner, album, None, &png, "image/png", "button.png")
//!     .await?;
//!
//! let update = PhotoUpdate::new().with_field("caption", "cool story, bro");
//! manager.apply_update(*photo.id(), update).await?;
//! manager.destroy(*photo.id()).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod album;
mod cleaner;
mod manager;
mod profile;
mod record;
mod repository;
mod update;

pub use album::AlbumDirectory;
pub use cleaner::ProfileImageLinkCleaner;
pub use manager::PhotoManager;
pub use profile::ProfileStore;
pub use record::{PhotoRecord, PhotoState};
pub use repository::PhotoRepository;
pub use update::PhotoUpdate;

pub use fresco_error::{PhotoError, PhotoErrorKind};
