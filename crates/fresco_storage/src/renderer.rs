//! Derivative renderer boundary.

use fresco_core::Variant;
use fresco_error::FrescoResult;

/// Size specification for one rendered variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantSpec {
    /// Which variant this spec renders
    pub variant: Variant,
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels; `None` preserves aspect ratio
    pub height: Option<u32>,
}

impl VariantSpec {
    /// Create a spec from its parts.
    pub fn new(variant: Variant, width: u32, height: Option<u32>) -> Self {
        Self {
            variant,
            width,
            height,
        }
    }
}

/// Trait for the external image-rendering capability.
///
/// Rendering is stateless: the same bytes and spec always produce the same
/// output, and the renderer holds no knowledge of storage keys or records.
/// The codec internals behind this trait are out of scope for this crate.
#[async_trait::async_trait]
pub trait DerivativeRenderer: Send + Sync {
    /// Produce the bytes of one variant from the original bytes.
    async fn render(&self, data: &[u8], spec: &VariantSpec) -> FrescoResult<Vec<u8>>;
}
