//! External field maps and the mass-assignment guard.

use crate::PhotoRecord;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// A field map arriving from outside the trust boundary.
///
/// Carries whatever keys the caller supplied; which of them are writable is
/// decided by [`guard_update`], never by the shape of this struct.
///
/// # Examples
///
/// ```
/// use fresco_photos::PhotoUpdate;
///
/// let update = PhotoUpdate::new()
///     .with_field("caption", "cool story, bro")
///     .with_field("person_id", "attacker-uuid");
/// assert_eq!(update.fields().len(), 2);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PhotoUpdate {
    fields: BTreeMap<String, JsonValue>,
}

impl PhotoUpdate {
    /// An empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one field (builder style).
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The raw field map.
    pub fn fields(&self) -> &BTreeMap<String, JsonValue> {
        &self.fields
    }
}

/// Normalize a key for semantic-role matching: lowercase, separators gone.
///
/// `ownerPersonRef`, `owner_person_ref`, and `owner-person-ref` all collapse
/// to the same token, so the guard recognizes the role however it is spelled.
fn normalize(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Whether a key names the record identity or ownership, under any spelling.
fn is_identity_role(key: &str) -> bool {
    matches!(
        normalize(key).as_str(),
        "id" | "photoid"
            | "owner"
            | "ownerid"
            | "ownerpersonref"
            | "ownerpersonid"
            | "ownerhandle"
            | "person"
            | "personid"
            | "personref"
            | "personhandle"
    )
}

/// Whether a key names the album relation, writable at creation only.
fn is_album_role(key: &str) -> bool {
    matches!(normalize(key).as_str(), "album" | "albumid" | "albumref")
}

/// Apply an external field map to a record.
///
/// Identity and ownership fields are recognized by semantic role and
/// silently dropped: the update proceeds, the record keeps its pre-update
/// identity, and the attempt is logged. This is deliberately not an error,
/// since an otherwise-legitimate owner update may carry extra noise.
pub(crate) fn guard_update(record: &mut PhotoRecord, update: &PhotoUpdate) {
    for (key, value) in update.fields() {
        if is_identity_role(key) {
            tracing::warn!(
                photo_id = %record.id(),
                field = key.as_str(),
                "Dropped protected identity field from external update"
            );
            continue;
        }
        if is_album_role(key) {
            tracing::debug!(
                photo_id = %record.id(),
                field = key.as_str(),
                "Album is writable at creation only; field ignored"
            );
            continue;
        }

        match normalize(key).as_str() {
            "caption" => {
                let caption = match value {
                    JsonValue::Null => None,
                    JsonValue::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                };
                record.set_caption(caption);
            }
            _ => {
                tracing::debug!(
                    photo_id = %record.id(),
                    field = key.as_str(),
                    "Ignored unknown field in external update"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_roles_match_any_spelling() {
        for key in [
            "person",
            "person_id",
            "personId",
            "owner",
            "owner_person_ref",
            "ownerPersonRef",
            "id",
        ] {
            assert!(is_identity_role(key), "missed {:?}", key);
        }
    }

    #[test]
    fn caption_is_not_an_identity_role() {
        assert!(!is_identity_role("caption"));
        assert!(!is_album_role("caption"));
    }
}
