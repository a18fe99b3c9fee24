//! Tests for mass-assignment protection of identity fields.
//!
//! A field map from outside the trust boundary can never move a photo to a
//! different owner, no matter how the field is spelled.

mod support;

use fresco_photos::PhotoUpdate;
use support::{TestPod, BUTTON_PNG};

#[tokio::test]
async fn test_update_cannot_reassign_person() {
    let pod = TestPod::new();
    let photo = pod.upload(BUTTON_PNG, "image/png", "button.png").await.unwrap();

    let updated = pod
        .manager
        .apply_update(
            *photo.id(),
            PhotoUpdate::new().with_field("person", "mallory@evil.example"),
        )
        .await
        .unwrap();

    assert_eq!(updated.owner(), &pod.owner);
}

#[tokio::test]
async fn test_update_cannot_reassign_person_id() {
    let pod = TestPod::new();
    let photo = pod.upload(BUTTON_PNG, "image/png", "button.png").await.unwrap();

    let updated = pod
        .manager
        .apply_update(
            *photo.id(),
            PhotoUpdate::new().with_field("person_id", "4dc7a0dc-0000-0000-0000-000000000000"),
        )
        .await
        .unwrap();

    assert_eq!(updated.owner(), &pod.owner);
}

#[tokio::test]
async fn test_identity_aliases_are_all_dropped() {
    let pod = TestPod::new();
    let photo = pod.upload(BUTTON_PNG, "image/png", "button.png").await.unwrap();

    for alias in ["owner", "ownerId", "owner_person_ref", "personRef", "id"] {
        let updated = pod
            .manager
            .apply_update(
                *photo.id(),
                PhotoUpdate::new().with_field(alias, "forged-value"),
            )
            .await
            .unwrap();
        assert_eq!(updated.owner(), &pod.owner, "alias {:?} leaked through", alias);
        assert_eq!(updated.id(), photo.id(), "alias {:?} changed the id", alias);
    }
}

#[tokio::test]
async fn test_noisy_update_still_applies_writable_fields() {
    let pod = TestPod::new();
    let photo = pod.upload(BUTTON_PNG, "image/png", "button.png").await.unwrap();

    // A legitimate owner update carrying identity noise is not an error
    let updated = pod
        .manager
        .apply_update(
            *photo.id(),
            PhotoUpdate::new()
                .with_field("caption", "vacation")
                .with_field("person_id", "forged")
                .with_field("unknown_field", 42),
        )
        .await
        .unwrap();

    assert_eq!(updated.caption().as_deref(), Some("vacation"));
    assert_eq!(updated.owner(), &pod.owner);
}

#[tokio::test]
async fn test_album_not_writable_after_creation() {
    let pod = TestPod::new();
    let photo = pod.upload(BUTTON_PNG, "image/png", "button.png").await.unwrap();

    let updated = pod
        .manager
        .apply_update(
            *photo.id(),
            PhotoUpdate::new().with_field("album_id", pod.foreign_album.to_string()),
        )
        .await
        .unwrap();

    assert_eq!(updated.album(), &pod.album);
}

#[tokio::test]
async fn test_caption_can_be_cleared_with_null() {
    let pod = TestPod::new();
    let photo = pod.upload(BUTTON_PNG, "image/png", "button.png").await.unwrap();

    pod.manager
        .apply_update(
            *photo.id(),
            PhotoUpdate::new().with_field("caption", "temporary"),
        )
        .await
        .unwrap();

    let cleared = pod
        .manager
        .apply_update(
            *photo.id(),
            PhotoUpdate::new().with_field("caption", serde_json::Value::Null),
        )
        .await
        .unwrap();

    assert!(cleared.caption().is_none());
}
