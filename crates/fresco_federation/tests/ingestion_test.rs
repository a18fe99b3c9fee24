//! Tests for idempotent inbound ingestion.

mod support;

use fresco_core::Variant;
use fresco_error::FrescoErrorKind;
use fresco_photos::PhotoState;
use support::{ReceivingPod, BUTTON_PNG};

fn photo_message(remote_id: &str, sender: &str) -> String {
    format!(
        "<photo>\
        <id>{remote_id}</id>\
        <sender_handle>{sender}</sender_handle>\
        <album_id>4dc7a0dc-2dd4-45a9-a629-a18e81a3b9ab</album_id>\
        <caption>from afar</caption>\
        <created_at>2026-08-06T10:00:00+00:00</created_at>\
        <url>http://origin.example/uploads/images/abc123</url>\
        <width>800</width>\
        <height>600</height>\
        <thumb_medium>http://origin.example/uploads/images/abc123_thumb_medium</thumb_medium>\
        </photo>"
    )
}

#[tokio::test]
async fn test_ingest_creates_pending_record() {
    let pod = ReceivingPod::trusting(&["alice@origin.example"]);

    let id = pod
        .pipeline
        .ingest(&photo_message("remote-1", "alice@origin.example"))
        .await
        .unwrap();

    let record = pod.manager.get(&id).await.unwrap();
    assert_eq!(*record.state(), PhotoState::PendingRemote);
    assert!(record.pending_remote());
    assert!(record.storage_key().is_none());
    assert_eq!(record.caption().as_deref(), Some("from afar"));
    assert_eq!(*record.width(), Some(800));
    assert_eq!(
        record.url(Variant::Full),
        Some("http://origin.example/uploads/images/abc123")
    );
    assert_eq!(
        record.url(Variant::ThumbMedium),
        Some("http://origin.example/uploads/images/abc123_thumb_medium")
    );
}

#[tokio::test]
async fn test_owner_comes_from_resolver_not_document() {
    let pod = ReceivingPod::trusting(&["alice@origin.example"]);

    let id = pod
        .pipeline
        .ingest(&photo_message("remote-1", "alice@origin.example"))
        .await
        .unwrap();

    let record = pod.manager.get(&id).await.unwrap();
    let resolved = pod.resolver.person_for("alice@origin.example").unwrap();
    assert_eq!(record.owner(), resolved);
}

#[tokio::test]
async fn test_ingest_is_idempotent_per_sender_and_remote_id() {
    let pod = ReceivingPod::trusting(&["alice@origin.example"]);
    let message = photo_message("remote-1", "alice@origin.example");

    let first = pod.pipeline.ingest(&message).await.unwrap();
    let second = pod.pipeline.ingest(&message).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(pod.manager.repository().len().await, 1);
}

#[tokio::test]
async fn test_distinct_remote_ids_create_distinct_records() {
    let pod = ReceivingPod::trusting(&["alice@origin.example"]);

    let first = pod
        .pipeline
        .ingest(&photo_message("remote-1", "alice@origin.example"))
        .await
        .unwrap();
    let second = pod
        .pipeline
        .ingest(&photo_message("remote-2", "alice@origin.example"))
        .await
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(pod.manager.repository().len().await, 2);
}

#[tokio::test]
async fn test_unresolvable_sender_rejected() {
    let pod = ReceivingPod::trusting(&["alice@origin.example"]);

    let result = pod
        .pipeline
        .ingest(&photo_message("remote-1", "mallory@evil.example"))
        .await;

    assert!(matches!(
        result.unwrap_err().kind(),
        FrescoErrorKind::Federation(_)
    ));
    assert!(pod.manager.repository().is_empty().await);
}

#[tokio::test]
async fn test_bad_message_does_not_block_later_messages() {
    let pod = ReceivingPod::trusting(&["alice@origin.example"]);

    let bad = pod.pipeline.ingest("<photo><id>x</id></photo>").await;
    assert!(bad.is_err());

    let good = pod
        .pipeline
        .ingest(&photo_message("remote-1", "alice@origin.example"))
        .await;
    assert!(good.is_ok());
}

#[tokio::test]
async fn test_remote_fetch_resolves_record() {
    let pod = ReceivingPod::trusting(&["alice@origin.example"]);

    let id = pod
        .pipeline
        .ingest(&photo_message("remote-1", "alice@origin.example"))
        .await
        .unwrap();

    let resolved = pod
        .manager
        .complete_remote_fetch(id, BUTTON_PNG, "image/png")
        .await
        .unwrap();

    assert_eq!(*resolved.state(), PhotoState::Resolved);
    assert!(!resolved.pending_remote());
    assert!(resolved.storage_key().is_some());
    // Derivative URLs now point at this pod, not the origin
    assert!(
        resolved
            .url(Variant::Full)
            .unwrap()
            .starts_with("http://localhost/uploads/images/")
    );

    let key = resolved.storage_key().as_ref().unwrap();
    let bytes = pod.manager.attachments().read(key).await.unwrap();
    assert_eq!(bytes, BUTTON_PNG);
}

#[tokio::test]
async fn test_fetch_completion_on_local_record_rejected() {
    let pod = ReceivingPod::trusting(&["alice@origin.example"]);

    let id = pod
        .pipeline
        .ingest(&photo_message("remote-1", "alice@origin.example"))
        .await
        .unwrap();
    pod.manager
        .complete_remote_fetch(id, BUTTON_PNG, "image/png")
        .await
        .unwrap();

    // A second fetch completion finds the record no longer pending
    let again = pod
        .manager
        .complete_remote_fetch(id, BUTTON_PNG, "image/png")
        .await;
    assert!(matches!(
        again.unwrap_err().kind(),
        FrescoErrorKind::Photo(_)
    ));
}
