//! Sender resolution boundary.

use fresco_core::{FederationHandle, PersonRef};
use fresco_error::FrescoResult;

/// Trait for the receiving pod's trust layer.
///
/// Resolves a claimed sender handle to an identity the pod already knows
/// and trusts. Returning `None` rejects the message: this crate fails
/// closed rather than guessing a lenient policy for unverifiable senders.
#[async_trait::async_trait]
pub trait SenderResolver: Send + Sync {
    /// Resolve a sender handle to a known person, if the pod trusts it.
    async fn resolve(&self, handle: &FederationHandle) -> FrescoResult<Option<PersonRef>>;
}
