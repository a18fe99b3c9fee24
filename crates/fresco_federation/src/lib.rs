//! Federation wire format and inbound ingestion for Fresco.
//!
//! A photo leaves its home pod as an XML document and arrives on another pod
//! as untrusted input. This crate owns both directions: deterministic
//! serialization of a local record, and fail-closed parsing plus idempotent
//! ingestion of inbound documents.
//!
//! Trust rules on the receiving side:
//! - every document field is untrusted input
//! - the stored owner is the identity the pod's own resolver produced for
//!   the claimed sender, never text copied from the document
//! - origin storage keys never cross the wire; the receiving pod mints its
//!   own on fetch

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ingestion;
mod resolver;
mod xml;

pub use ingestion::IngestionPipeline;
pub use resolver::SenderResolver;
pub use xml::{from_xml, to_xml, RemotePhoto};

pub use fresco_error::{FederationError, FederationErrorKind};
