//! Derivative variant names.

use serde::{Deserialize, Serialize};

/// Named renditions of a stored photo.
///
/// `Full` is the untouched original; the rest are rendered at store time and
/// persisted once, never regenerated on read.
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
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Small square thumbnail
    #[display("thumb_small")]
    ThumbSmall,
    /// Medium square thumbnail
    #[display("thumb_medium")]
    ThumbMedium,
    /// Large thumbnail
    #[display("thumb_large")]
    ThumbLarge,
    /// Width-constrained rendition for inline display
    #[display("scaled_full")]
    ScaledFull,
    /// The original bytes, stored untouched
    #[display("full")]
    Full,
}

impl Variant {
    /// Canonical name used in storage keys, URLs, and the wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::ThumbSmall => "thumb_small",
            Variant::ThumbMedium => "thumb_medium",
            Variant::ThumbLarge => "thumb_large",
            Variant::ScaledFull => "scaled_full",
            Variant::Full => "full",
        }
    }

    /// Whether this variant is produced by the renderer.
    ///
    /// The original is stored as-is and never passes through the renderer.
    pub fn is_rendered(&self) -> bool {
        !matches!(self, Variant::Full)
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thumb_small" => Ok(Variant::ThumbSmall),
            "thumb_medium" => Ok(Variant::ThumbMedium),
            "thumb_large" => Ok(Variant::ThumbLarge),
            "scaled_full" => Ok(Variant::ScaledFull),
            "full" => Ok(Variant::Full),
            _ => Err(format!("Unknown variant: {}", s)),
        }
    }
}
