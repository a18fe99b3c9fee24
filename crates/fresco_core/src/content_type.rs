//! Accepted content types and their byte signatures.

use serde::{Deserialize, Serialize};

/// Content types accepted for storage.
///
/// This enum IS the whitelist: a type that cannot be represented here cannot
/// enter storage. Each variant knows its MIME name and magic-byte signature
/// so a spoofed declaration can be caught against the actual bytes.
///
/// # Examples
///
/// ```
/// use fresco_core::ContentType;
///
/// let png = ContentType::from_mime("image/png").unwrap();
/// assert!(png.matches_signature(b"\x89PNG\r\n\x1a\nrest"));
/// assert!(ContentType::from_mime("application/xml").is_none());
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
    strum::EnumIter,
    derive_more::Display,
)]
pub enum ContentType {
    /// PNG image
    #[display("image/png")]
    Png,
    /// JPEG image
    #[display("image/jpeg")]
    Jpeg,
    /// GIF image
    #[display("image/gif")]
    Gif,
}

impl ContentType {
    /// MIME name for this content type.
    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Png => "image/png",
            ContentType::Jpeg => "image/jpeg",
            ContentType::Gif => "image/gif",
        }
    }

    /// Look up a whitelisted type by MIME name.
    ///
    /// Returns `None` for anything off the whitelist. `image/jpg` is accepted
    /// as a common alias for `image/jpeg`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(ContentType::Png),
            "image/jpeg" | "image/jpg" => Some(ContentType::Jpeg),
            "image/gif" => Some(ContentType::Gif),
            _ => None,
        }
    }

    /// Check whether a byte sample starts with this type's magic signature.
    pub fn matches_signature(&self, bytes: &[u8]) -> bool {
        match self {
            ContentType::Png => bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
            ContentType::Jpeg => bytes.starts_with(b"\xff\xd8\xff"),
            ContentType::Gif => bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a"),
        }
    }

    /// Canonical file extension (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ContentType::Png => "png",
            ContentType::Jpeg => "jpg",
            ContentType::Gif => "gif",
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mime(s).ok_or_else(|| format!("Unknown content type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn mime_round_trips_for_every_variant() {
        for content_type in ContentType::iter() {
            assert_eq!(ContentType::from_mime(content_type.mime()), Some(content_type));
        }
    }

    #[test]
    fn signatures_do_not_cross_match() {
        let png = b"\x89PNG\r\n\x1a\n....";
        assert!(ContentType::Png.matches_signature(png));
        assert!(!ContentType::Jpeg.matches_signature(png));
        assert!(!ContentType::Gif.matches_signature(png));
    }

    #[test]
    fn xml_matches_nothing() {
        let xml = b"<?xml version=\"1.0\"?><photo/>";
        for content_type in ContentType::iter() {
            assert!(!content_type.matches_signature(xml));
        }
    }
}
